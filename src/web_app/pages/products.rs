// web_app/pages/products.rs - Catalog management view
//
// Owns the `CatalogState` signal for the logged-in admin and runs the
// catalog flows on it from local tasks. Only one request is in flight at a
// time; the state refuses a second one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ApiConfig;
use crate::web_app::api::ApiClient;
use crate::web_app::browser::{BlobPreviews, WindowConfirm};
use crate::web_app::components::*;
use crate::web_app::model::Product;
use crate::web_app::state::{confirm_and_delete, refresh_products, save_draft, CatalogState, Session};

/// The cached product list, cut off from draft edits
pub fn product_list(state: RwSignal<CatalogState>) -> Memo<Vec<Product>> {
    Memo::new(move |_| state.with(|s| s.products().to_vec()))
}

#[component]
pub fn ProductsPage(session: Session, on_logout: Callback<()>) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let client = StoredValue::new(ApiClient::new(config).with_token(session.token.clone()));
    let state = RwSignal::new(CatalogState::new());
    let previews = BlobPreviews::shared();

    // Fetch once the view is mounted in the browser
    Effect::new(move |_| {
        let client = client.get_value();
        spawn_local(async move {
            let mut state = state;
            if let Err(e) = refresh_products(&mut state, &client).await {
                tracing::debug!("Product list not refreshed: {}", e);
            }
        });
    });

    let on_submit = Callback::new(move |()| {
        let client = client.get_value();
        spawn_local(async move {
            let mut state = state;
            match save_draft(&mut state, &client).await {
                Ok(product) => tracing::info!("Saved product {} ({})", product.id, product.title),
                Err(e) => tracing::debug!("Product not saved: {}", e),
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        let client = client.get_value();
        spawn_local(async move {
            let mut state = state;
            if let Err(e) = confirm_and_delete(&mut state, &client, &WindowConfirm, id).await {
                tracing::debug!("Product {} not deleted: {}", id, e);
            }
        });
    });

    let on_edit = Callback::new(move |product: Product| {
        state.update(|s| s.begin_edit(&product));
    });
    let on_cancel = Callback::new(move |()| state.update(CatalogState::cancel_edit));
    let on_dismiss = Callback::new(move |()| state.update(CatalogState::clear_error));

    let products = product_list(state);
    let busy = Memo::new(move |_| state.with(CatalogState::is_loading));
    let first_load = Memo::new(move |_| busy.get() && products.with(Vec::is_empty));
    let admin_label = session
        .email
        .clone()
        .unwrap_or_else(|| "Administrator".to_string());

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <h1 class="text-xl font-bold text-gray-900">"Moro Admin"</h1>
                    <div class="flex items-center gap-4 text-sm">
                        <span class="text-gray-500">{admin_label}</span>
                        <SecondaryButton on_click=on_logout>"Logout"</SecondaryButton>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
                {move || state.with(|s| s.error().map(str::to_string)).map(|message| view! {
                    <ErrorDisplay error=message on_dismiss=on_dismiss />
                })}

                <div class="flex flex-col lg:flex-row gap-8 items-start">
                    <section class="w-full lg:w-96 flex-shrink-0">
                        <ProductForm
                            state=state
                            previews=previews
                            on_submit=on_submit
                            on_cancel=on_cancel
                        />
                    </section>

                    <section class="flex-1 w-full min-w-0">
                        <Show
                            when=move || !first_load.get()
                            fallback=|| view! { <Loading message="Loading products..." /> }
                        >
                            <ProductGrid
                                products=products
                                on_edit=on_edit
                                on_delete=on_delete
                                busy=busy
                            />
                        </Show>
                    </section>
                </div>
            </main>
        </div>
    }
}
