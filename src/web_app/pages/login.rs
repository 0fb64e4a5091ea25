// web_app/pages/login.rs - Login view
//
// Shown while the session gate has no credential. A successful login hands
// the authenticated gate up to the app; a failure stays here with the message.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ApiConfig;
use crate::web_app::api::ApiClient;
use crate::web_app::components::*;
use crate::web_app::model::LoginCredentials;
use crate::web_app::state::SessionGate;

#[component]
pub fn LoginPage(
    /// Called once the API accepted the credentials
    on_login: Callback<SessionGate>,
) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let credentials = LoginCredentials::new(username.get_untracked(), password.get_untracked());
        let client = ApiClient::new(config.clone());
        pending.set(true);
        error.set(None);

        spawn_local(async move {
            let mut gate = SessionGate::new();
            let outcome = gate.login(&client, &credentials).await.map(|_| ());
            pending.try_set(false);
            match outcome {
                Ok(()) => on_login.run(gate),
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center p-4">
            <form
                class="w-full max-w-sm bg-white rounded-2xl shadow-sm border border-gray-100 p-8 space-y-5"
                on:submit=submit
            >
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-gray-900">"Moro Admin"</h1>
                    <p class="text-sm text-gray-500 mt-1">"Sign in to manage the catalog"</p>
                </div>

                {move || error.get().map(|message| view! {
                    <ErrorDisplay error=message />
                })}

                <TextInput value=username label="Username" required=true />
                <TextInput value=password label="Password" input_type="password" required=true />

                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || pending.get())
                    class="w-full"
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </Button>
            </form>
        </div>
    }
}
