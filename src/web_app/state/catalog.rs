// web_app/state/catalog.rs - Catalog manager
//
// `CatalogState` is the single state container behind the management view:
// the cached product list, the draft, the busy flag, and the last error.
// Its transitions are synchronous (begin_* / finish_*). The async flows
// below string them together around a `ProductApi` call and work against
// any `CatalogCell`: the management page runs them on its reactive signal,
// `CatalogManager` on a state it owns.

use std::sync::Arc;

use crate::web_app::api::{ProductApi, ProductSubmission};
use crate::web_app::error::{AdminError, Result};
use crate::web_app::model::{ImageColor, LocalFile, Product};
use crate::web_app::state::draft::Draft;
use crate::web_app::state::preview::PreviewSource;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";

/// Asks the admin to confirm a destructive action
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    draft: Draft,
    is_loading: bool,
    error: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Direct access for scalar field edits
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn ensure_idle(&self) -> Result<()> {
        if self.is_loading {
            Err(AdminError::Busy)
        } else {
            Ok(())
        }
    }

    /// Mark a request as in flight; refused while another one is
    pub fn begin_request(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.is_loading = true;
        self.error = None;
        Ok(())
    }

    fn record(&mut self, err: &AdminError) {
        self.is_loading = false;
        self.error = Some(err.user_message());
    }

    pub fn finish_list(&mut self, result: Result<Vec<Product>>) -> Result<()> {
        self.is_loading = false;
        match result {
            Ok(products) => {
                self.products = products;
                Ok(())
            }
            Err(err) => {
                self.record(&err);
                Err(err)
            }
        }
    }

    /// Start a save: validates the draft and snapshots the request
    pub fn begin_submit(&mut self) -> Result<ProductSubmission> {
        self.begin_request()?;
        self.draft.to_submission().map_err(|err| {
            self.record(&err);
            err
        })
    }

    /// On success the draft is reset; on failure it is left untouched
    pub fn finish_submit(&mut self, result: Result<Product>) -> Result<Product> {
        self.is_loading = false;
        match result {
            Ok(product) => {
                self.draft = Draft::new();
                Ok(product)
            }
            Err(err) => {
                self.record(&err);
                Err(err)
            }
        }
    }

    /// Returns whether a delete request should go out at all
    pub fn begin_delete(&mut self, confirmed: bool) -> Result<bool> {
        self.ensure_idle()?;
        if !confirmed {
            return Ok(false);
        }
        self.begin_request()?;
        Ok(true)
    }

    pub fn finish_delete(&mut self, result: Result<()>) -> Result<()> {
        self.is_loading = false;
        result.map_err(|err| {
            self.record(&err);
            err
        })
    }

    /// Replace the draft with one seeded from `product`
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = Draft::from_product(product);
        self.error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.draft = Draft::new();
        self.error = None;
    }

    pub fn add_images<I>(&mut self, files: I, previews: &Arc<dyn PreviewSource>)
    where
        I: IntoIterator<Item = LocalFile>,
    {
        self.draft.add_images(files, previews);
    }

    pub fn remove_image_at(&mut self, index: usize) -> bool {
        self.draft.remove_image_at(index)
    }

    pub fn set_image_color(&mut self, index: usize, color: Option<ImageColor>) -> bool {
        self.draft.set_image_color(index, color)
    }
}

/// Somewhere a [`CatalogState`] lives while an operation awaits the API
pub trait CatalogCell {
    /// Run `f` on the state, or `None` if it no longer exists
    fn apply<R>(&mut self, f: impl FnOnce(&mut CatalogState) -> R) -> Option<R>;
}

impl CatalogCell for CatalogState {
    fn apply<R>(&mut self, f: impl FnOnce(&mut CatalogState) -> R) -> Option<R> {
        Some(f(self))
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl CatalogCell for leptos::prelude::RwSignal<CatalogState> {
    fn apply<R>(&mut self, f: impl FnOnce(&mut CatalogState) -> R) -> Option<R> {
        leptos::prelude::Update::try_update(self, f)
    }
}

fn with_state<S, R>(state: &mut S, f: impl FnOnce(&mut CatalogState) -> Result<R>) -> Result<R>
where
    S: CatalogCell,
{
    state.apply(f).unwrap_or(Err(AdminError::StateGone))
}

/// Fetch the full catalog and replace the cached list
pub async fn refresh_products<S, A>(state: &mut S, api: &A) -> Result<()>
where
    S: CatalogCell,
    A: ProductApi,
{
    with_state(state, CatalogState::begin_request)?;
    let result = api.list_products().await;
    with_state(state, |s| s.finish_list(result))
}

/// Save the draft (create or update), then refresh the list.
///
/// A failed refresh does not undo the save; its error is left in
/// [`CatalogState::error`] for the view.
pub async fn save_draft<S, A>(state: &mut S, api: &A) -> Result<Product>
where
    S: CatalogCell,
    A: ProductApi,
{
    let submission = with_state(state, CatalogState::begin_submit)?;
    let result = api.save_product(submission).await;
    let product = with_state(state, |s| s.finish_submit(result))?;

    if let Err(err) = refresh_products(state, api).await {
        tracing::warn!("Product {} saved but refresh failed: {}", product.id, err);
    }
    Ok(product)
}

/// Delete after confirmation, then refresh the list.
/// Returns false if the admin declined.
pub async fn confirm_and_delete<S, A, C>(state: &mut S, api: &A, confirm: &C, id: i64) -> Result<bool>
where
    S: CatalogCell,
    A: ProductApi,
    C: Confirm,
{
    with_state(state, |s| s.ensure_idle())?;
    let confirmed = confirm.confirm(DELETE_CONFIRMATION);
    if !with_state(state, |s| s.begin_delete(confirmed))? {
        tracing::debug!("Delete of product {} cancelled", id);
        return Ok(false);
    }

    let result = api.delete_product(id).await;
    with_state(state, |s| s.finish_delete(result))?;

    if let Err(err) = refresh_products(state, api).await {
        tracing::warn!("Product {} deleted but refresh failed: {}", id, err);
    }
    Ok(true)
}

/// Catalog state owned together with its API and confirmation prompt
pub struct CatalogManager<A, C> {
    api: A,
    confirm: C,
    previews: Arc<dyn PreviewSource>,
    state: CatalogState,
}

impl<A, C> CatalogManager<A, C>
where
    A: ProductApi,
    C: Confirm,
{
    pub fn new(api: A, confirm: C, previews: Arc<dyn PreviewSource>) -> Self {
        Self {
            api,
            confirm,
            previews,
            state: CatalogState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        self.state.products()
    }

    pub fn draft(&self) -> &Draft {
        self.state.draft()
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        self.state.draft_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub async fn list_products(&mut self) -> Result<&[Product]> {
        refresh_products(&mut self.state, &self.api).await?;
        Ok(self.state.products())
    }

    pub async fn submit(&mut self) -> Result<Product> {
        save_draft(&mut self.state, &self.api).await
    }

    pub async fn delete_product(&mut self, id: i64) -> Result<bool> {
        confirm_and_delete(&mut self.state, &self.api, &self.confirm, id).await
    }

    pub fn begin_edit(&mut self, product: &Product) {
        self.state.begin_edit(product);
    }

    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    pub fn add_images<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = LocalFile>,
    {
        self.state.add_images(files, &self.previews);
    }

    pub fn remove_image_at(&mut self, index: usize) -> bool {
        self.state.remove_image_at(index)
    }

    pub fn set_image_color(&mut self, index: usize, color: Option<ImageColor>) -> bool {
        self.state.set_image_color(index, color)
    }
}
