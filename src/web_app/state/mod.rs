// web_app/state/mod.rs - View state for the admin UI
//
// Plain Rust state containers with no rendering or I/O of their own:
// - preview.rs: scoped preview URLs for images not uploaded yet
// - draft.rs: the product form being edited
// - session.rs: login gate and token
// - catalog.rs: product list + draft + busy flag, and the async flows over it

pub mod catalog;
pub mod draft;
pub mod preview;
pub mod session;

pub use catalog::{
    confirm_and_delete, refresh_products, save_draft, CatalogCell, CatalogManager, CatalogState, Confirm,
    DELETE_CONFIRMATION,
};
pub use draft::{Draft, DraftImage, DraftImageSource, DraftMode};
pub use preview::{MemoryPreviews, PreviewHandle, PreviewSource};
pub use session::{GateView, Session, SessionGate};
