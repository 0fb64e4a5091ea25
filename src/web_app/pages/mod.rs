// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - LoginPage: credential form shown while logged out
// - ProductsPage: catalog listing plus the create/edit form

pub mod login;
pub mod products;

// Re-export page components
pub use login::LoginPage;
pub use products::ProductsPage;
