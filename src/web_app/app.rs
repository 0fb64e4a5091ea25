// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the API configuration context, and the session gate
// that switches between the login and management views.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::{AdminConfig, ApiConfig};
use crate::web_app::pages::{LoginPage, ProductsPage};
use crate::web_app::state::{GateView, SessionGate};

fn load_api_config() -> ApiConfig {
    match AdminConfig::load() {
        Ok(config) => config.api,
        Err(e) => {
            tracing::error!("{}; falling back to {}", e, ApiConfig::default().base_url);
            ApiConfig::default()
        }
    }
}

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - API configuration for every page
/// - Router with the admin route
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_context(load_api_config());

    view! {
        <Title text="Moro Admin" />
        <Meta name="description" content="Product catalog administration" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/moro_admin.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=AdminGate />
                </Routes>
            </main>
        </Router>
    }
}

/// Login view until a session exists, management view afterwards
#[component]
fn AdminGate() -> impl IntoView {
    let gate = RwSignal::new(SessionGate::new());

    let on_login = Callback::new(move |logged_in: SessionGate| gate.set(logged_in));
    let on_logout = Callback::new(move |()| gate.update(SessionGate::logout));

    move || match gate.with(|g| (g.view(), g.session().cloned())) {
        (GateView::Management, Some(session)) => view! {
            <ProductsPage session=session on_logout=on_logout />
        }
        .into_any(),
        _ => view! { <LoginPage on_login=on_login /> }.into_any(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Admin"
                </a>
            </div>
        </div>
    }
}
