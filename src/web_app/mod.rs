// web_app/mod.rs - Root module for the admin web application
//
// Architecture:
// - model/: wire types shared with the remote product API
// - error.rs: error kinds and how API error bodies are worded
// - api/: REST client and multipart form assembly
// - state/: session gate, draft, catalog store (no rendering, no I/O)
// - browser.rs: blob previews, file reading and confirm() (browser only)
// - components/, pages/, app.rs: Leptos views (both SSR and hydrate)

pub mod api;
pub mod error;
pub mod model;
pub mod state;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
