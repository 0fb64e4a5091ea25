// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the admin UI.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Loading, ErrorDisplay, etc.)
// - product.rs: Catalog display components (ProductCard, ProductGrid)
// - form.rs: The product create/edit form

pub mod common;
pub mod form;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use form::*;
pub use product::*;
