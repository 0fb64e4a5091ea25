// Component render tests
// These render components to HTML on the server inside a reactive Owner
// and check the text an admin would see. The last few drive the catalog
// flows on the same signal the management page owns.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use common::{image, png, previews, totebag, tshirt, Call, FakeApi};
use moro_admin::web_app::components::{ErrorDisplay, Loading, PriceDisplay, ProductCard, ProductForm, ProductGrid};
use moro_admin::web_app::model::{AuthToken, ImageColor};
use moro_admin::web_app::pages::products::product_list;
use moro_admin::web_app::pages::{LoginPage, ProductsPage};
use moro_admin::web_app::state::{
    confirm_and_delete, refresh_products, save_draft, CatalogState, Session, DELETE_CONFIRMATION,
};

fn render<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

#[test]
fn test_loading_message() {
    let html = render(|| view! { <Loading message="Loading products..." /> });
    assert!(html.contains("Loading products..."));
}

#[test]
fn test_error_display_with_dismiss() {
    let html = render(|| {
        view! {
            <ErrorDisplay
                error="Network error or server unavailable.".to_string()
                on_dismiss=Callback::new(|()| {})
            />
        }
    });
    assert!(html.contains("Network error or server unavailable."));
    assert!(html.contains("Dismiss"));
}

#[test]
fn test_price_display_two_decimals() {
    let html = render(|| view! { <PriceDisplay price=common::price("12.5") /> });
    assert!(html.contains("$12.50"));
}

#[test]
fn test_product_card_shows_sizes_for_tshirts() {
    let mut product = tshirt(1, "Logo Tee", "S,M");
    product.images = vec![image(10, Some(ImageColor::Red))];

    let html = render(move || {
        view! {
            <ProductCard
                product=product
                on_edit=Callback::new(|_| {})
                on_delete=Callback::new(|_| {})
                busy=Signal::stored(false)
            />
        }
    });
    assert!(html.contains("Logo Tee"));
    assert!(html.contains("$19.99"));
    assert!(html.contains("Sizes: "));
    assert!(html.contains("S, M"));
    assert!(html.contains("http://api.test/media/products/10.png"));
    assert!(html.contains("Edit"));
    assert!(html.contains("Delete"));
}

#[test]
fn test_product_card_hides_sizes_for_totebags() {
    let mut product = totebag(2, "Market Tote");
    product.available_sizes = Some("S,M".to_string());

    let html = render(move || {
        view! {
            <ProductCard
                product=product
                on_edit=Callback::new(|_| {})
                on_delete=Callback::new(|_| {})
                busy=Signal::stored(false)
            />
        }
    });
    assert!(html.contains("Market Tote"));
    assert!(!html.contains("Sizes: "));
}

#[test]
fn test_empty_grid() {
    let html = render(|| {
        view! {
            <ProductGrid
                products=Signal::stored(Vec::new())
                on_edit=Callback::new(|_| {})
                on_delete=Callback::new(|_| {})
                busy=Signal::stored(false)
            />
        }
    });
    assert!(html.contains("No products yet"));
}

#[test]
fn test_form_labels_follow_mode() {
    let (_memory, source) = previews();

    let new_html = {
        let source = Arc::clone(&source);
        render(move || {
            let state = RwSignal::new(CatalogState::new());
            view! {
                <ProductForm
                    state=state
                    previews=source
                    on_submit=Callback::new(|()| {})
                    on_cancel=Callback::new(|()| {})
                />
            }
        })
    };
    assert!(new_html.contains("Add Product"));
    assert!(!new_html.contains("Cancel Edit"));

    let edit_html = render(move || {
        let mut state = CatalogState::new();
        state.begin_edit(&tshirt(4, "Band Tee", "M,L"));
        let state = RwSignal::new(state);
        view! {
            <ProductForm
                state=state
                previews=source
                on_submit=Callback::new(|()| {})
                on_cancel=Callback::new(|()| {})
            />
        }
    });
    assert!(edit_html.contains("Update Product"));
    assert!(edit_html.contains("Cancel Edit"));
    assert!(edit_html.contains("Available sizes"));
}

#[test]
fn test_login_page() {
    let html = render(|| view! { <LoginPage on_login=Callback::new(|_| {}) /> });
    assert!(html.contains("Moro Admin"));
    assert!(html.contains("Username"));
    assert!(html.contains("Password"));
    assert!(html.contains("Sign in"));
}

#[test]
fn test_products_page_shell() {
    let session = Session {
        token: AuthToken::new("abc"),
        user_id: Some(1),
        email: Some("admin@moro.test".to_string()),
    };
    let html = render(move || {
        view! { <ProductsPage session=session on_logout=Callback::new(|()| {}) /> }
    });
    assert!(html.contains("admin@moro.test"));
    assert!(html.contains("Logout"));
    assert!(html.contains("Add Product"));
}

#[test]
fn test_edit_form_selects_product_type() {
    let (_memory, source) = previews();
    let html = render(move || {
        let mut state = CatalogState::new();
        state.begin_edit(&tshirt(4, "Band Tee", "M,L"));
        let state = RwSignal::new(state);
        view! {
            <ProductForm
                state=state
                previews=source
                on_submit=Callback::new(|()| {})
                on_cancel=Callback::new(|()| {})
            />
        }
    });
    let tshirt_option = html
        .split("<option")
        .find(|option| option.contains("value=\"TSHIRT\""))
        .and_then(|option| option.split('>').next())
        .unwrap();
    assert!(tshirt_option.contains("selected"));
}

#[test]
fn test_draft_edits_leave_product_list_alone() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(CatalogState::new());
        let products = product_list(state);

        let renders = Arc::new(AtomicUsize::new(0));
        let grid = Memo::new({
            let renders = Arc::clone(&renders);
            move |_| {
                renders.fetch_add(1, Ordering::SeqCst);
                products.with(Vec::len)
            }
        });
        assert_eq!(grid.get_untracked(), 0);

        for title in ["C", "Ca", "Cap"] {
            state.update(|s| s.draft_mut().set_title(title));
        }
        state.update(|s| s.draft_mut().set_price("20"));
        assert_eq!(grid.get_untracked(), 0);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        state.update(|s| {
            s.begin_request().unwrap();
            s.finish_list(Ok(vec![totebag(1, "Tote")])).unwrap();
        });
        assert_eq!(grid.get_untracked(), 1);
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    });
}

#[tokio::test]
async fn test_page_state_save_then_refresh() -> anyhow::Result<()> {
    let owner = Owner::new();
    let (memory, source) = previews();
    let state = owner.with(|| RwSignal::new(CatalogState::new()));
    state.update(|s| {
        let draft = s.draft_mut();
        draft.set_title("Mug");
        draft.set_description("Ceramic mug");
        draft.set_price("9.5");
        s.add_images([png("mug.png")], &source);
    });

    let api = FakeApi::default();
    let mut cell = state;
    let saved = save_draft(&mut cell, &api).await?;

    assert_eq!(saved.title, "Mug");
    assert_eq!(api.calls(), vec![Call::Create, Call::List]);
    state.with_untracked(|s| {
        assert!(s.draft().is_empty());
        assert!(!s.is_loading());
        assert_eq!(s.products().len(), 1);
    });
    assert_eq!(memory.live_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_page_state_delete_and_refresh() -> anyhow::Result<()> {
    let owner = Owner::new();
    let state = owner.with(|| RwSignal::new(CatalogState::new()));
    let api = FakeApi::with_products(vec![totebag(1, "Tote"), totebag(2, "Other")]);

    let mut cell = state;
    refresh_products(&mut cell, &api).await?;
    assert_eq!(state.with_untracked(|s| s.products().len()), 2);

    let confirm = |message: &str| message == DELETE_CONFIRMATION;
    assert!(confirm_and_delete(&mut cell, &api, &confirm, 1).await?);

    assert_eq!(api.calls(), vec![Call::List, Call::Delete(1), Call::List]);
    assert_eq!(
        state.with_untracked(|s| s.products().iter().map(|p| p.id).collect::<Vec<_>>()),
        vec![2]
    );
    Ok(())
}
