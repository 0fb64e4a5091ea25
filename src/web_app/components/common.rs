// web_app/components/common.rs - Reusable UI components
//
// Small building blocks shared by the login and management views.
// They are stateless and receive everything through props.

use leptos::prelude::*;
use rust_decimal::Decimal;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error banner
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
    /// Dismiss handler; the close button is hidden without one
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="flex-1 text-red-700 text-sm self-center">{error}</p>
            {on_dismiss.map(|handler| view! {
                <button
                    type="button"
                    class="text-red-400 hover:text-red-600 px-2"
                    title="Dismiss"
                    on:click=move |_| handler.run(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        "yellow" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-yellow-100 text-yellow-800 border border-yellow-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

/// Labelled text input bound to a signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Label shown above the input
    label: &'static str,
    /// Input type (text, password, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none transition-shadow shadow-sm";

    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 mb-1">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                required=required
                class=class
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            />
        </label>
    }
}

/// Price display component
///
/// Formats and displays a price value.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-lg font-bold text-blue-600 bg-blue-50 px-2 py-1 rounded-lg"
    } else {
        "text-gray-900 font-medium"
    };

    view! {
        <span class=class>
            {format!("${:.2}", price)}
        </span>
    }
}
