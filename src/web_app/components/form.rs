// web_app/components/form.rs - Product create/edit form
//
// Renders the draft held in `CatalogState` and writes every keystroke back
// into it. Saving and cancelling are left to the page through callbacks.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use super::common::{Button, SecondaryButton};
use crate::web_app::browser::read_selected_files;
use crate::web_app::model::{ImageColor, ProductType};
use crate::web_app::state::{CatalogState, PreviewSource};

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                           focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                           outline-none transition-shadow shadow-sm";

/// Label for the submit button given the current mode and busy flag
fn submit_label(is_loading: bool, is_editing: bool) -> &'static str {
    if is_loading {
        "Saving..."
    } else if is_editing {
        "Update Product"
    } else {
        "Add Product"
    }
}

/// One entry of the preview strip
#[derive(Clone, PartialEq)]
struct PreviewRow {
    index: usize,
    url: String,
    color: Option<ImageColor>,
    pending: bool,
}

/// The draft's image strip; unchanged rows do not re-render
fn preview_rows(state: RwSignal<CatalogState>) -> Memo<Vec<PreviewRow>> {
    Memo::new(move |_| {
        state.with(|s| {
            s.draft()
                .images()
                .iter()
                .enumerate()
                .map(|(index, image)| PreviewRow {
                    index,
                    url: image.preview_url().to_string(),
                    color: image.color,
                    pending: image.is_pending(),
                })
                .collect::<Vec<_>>()
        })
    })
}

#[component]
pub fn ProductForm(
    state: RwSignal<CatalogState>,
    /// Mints preview URLs for picked files
    previews: Arc<dyn PreviewSource>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_loading = Memo::new(move |_| state.with(CatalogState::is_loading));
    let is_editing = Memo::new(move |_| state.with(|s| s.draft().is_editing()));
    let shows_sizes = Memo::new(move |_| state.with(|s| s.draft().product_type().has_sizes()));
    let rows = preview_rows(state);

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let previews = previews.clone();
        spawn_local(async move {
            match read_selected_files(&input).await {
                Ok(files) if files.is_empty() => {}
                Ok(files) => {
                    tracing::debug!("Adding {} picked images to draft", files.len());
                    state.update(|s| s.add_images(files, &previews));
                }
                Err(e) => {
                    tracing::warn!("Could not read picked files: {}", e);
                }
            }
        });
    };

    view! {
        <form
            class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100 space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="text-xl font-bold text-gray-800">
                {move || if is_editing.get() { "Edit Product" } else { "New Product" }}
            </h2>

            <label class="block">
                <span class="block text-sm font-medium text-gray-700 mb-1">"Title"</span>
                <input
                    type="text"
                    required=true
                    class=INPUT_CLASS
                    prop:value=move || state.with(|s| s.draft().title().to_string())
                    on:input=move |ev| state.update(|s| s.draft_mut().set_title(event_target_value(&ev)))
                />
            </label>

            <label class="block">
                <span class="block text-sm font-medium text-gray-700 mb-1">"Description"</span>
                <textarea
                    required=true
                    rows=4
                    class=INPUT_CLASS
                    prop:value=move || state.with(|s| s.draft().description().to_string())
                    on:input=move |ev| state.update(|s| s.draft_mut().set_description(event_target_value(&ev)))
                ></textarea>
            </label>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <label class="block">
                    <span class="block text-sm font-medium text-gray-700 mb-1">"Price"</span>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        required=true
                        class=INPUT_CLASS
                        prop:value=move || state.with(|s| s.draft().price().to_string())
                        on:input=move |ev| state.update(|s| s.draft_mut().set_price(event_target_value(&ev)))
                    />
                </label>

                <label class="block">
                    <span class="block text-sm font-medium text-gray-700 mb-1">"Type"</span>
                    <select
                        class=INPUT_CLASS
                        prop:value=move || state.with(|s| s.draft().product_type().as_str().to_string())
                        on:change=move |ev| {
                            if let Ok(kind) = event_target_value(&ev).parse::<ProductType>() {
                                state.update(|s| s.draft_mut().set_product_type(kind));
                            }
                        }
                    >
                        {ProductType::ALL.into_iter().map(|kind| view! {
                            <option
                                value=kind.as_str()
                                selected=move || state.with(|s| s.draft().product_type() == kind)
                            >
                                {kind.to_string()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <Show when=move || shows_sizes.get()>
                <label class="block">
                    <span class="block text-sm font-medium text-gray-700 mb-1">"Available sizes"</span>
                    <input
                        type="text"
                        placeholder="S, M, L, XL"
                        class=INPUT_CLASS
                        prop:value=move || state.with(|s| s.draft().available_sizes().to_string())
                        on:input=move |ev| state.update(|s| s.draft_mut().set_available_sizes(event_target_value(&ev)))
                    />
                </label>
            </Show>

            <label class="block">
                <span class="block text-sm font-medium text-gray-700 mb-1">"Images"</span>
                <input
                    type="file"
                    accept="image/*"
                    multiple=true
                    class="block w-full text-sm text-gray-600"
                    on:change=on_files
                />
            </label>

            <div class="flex flex-wrap gap-3">
                {move || rows.get().into_iter().map(|row| view! {
                    <ImagePreview row=row state=state />
                }).collect_view()}
            </div>

            <div class="flex gap-3 pt-2">
                <Button button_type="submit" disabled=is_loading>
                    {move || submit_label(is_loading.get(), is_editing.get())}
                </Button>
                <Show when=move || is_editing.get()>
                    <SecondaryButton on_click=on_cancel>"Cancel Edit"</SecondaryButton>
                </Show>
            </div>
        </form>
    }
}

#[component]
fn ImagePreview(row: PreviewRow, state: RwSignal<CatalogState>) -> impl IntoView {
    let PreviewRow {
        index,
        url,
        color,
        pending,
    } = row;
    let selected = color.map(ImageColor::as_str).unwrap_or_default();

    view! {
        <div class="relative w-28 space-y-1">
            <img
                src=url
                alt=format!("Image {}", index + 1)
                class=if pending {
                    "h-28 w-28 object-cover rounded-lg border-2 border-dashed border-blue-300"
                } else {
                    "h-28 w-28 object-cover rounded-lg border border-gray-200"
                }
            />
            <button
                type="button"
                title="Remove image"
                class="absolute top-1 right-1 bg-white/90 text-red-600 rounded-full w-6 h-6 text-xs font-bold shadow"
                on:click=move |_| {
                    state.update(|s| {
                        s.remove_image_at(index);
                    });
                }
            >
                "X"
            </button>
            <select
                class="w-full text-xs border border-gray-300 rounded px-1 py-0.5"
                on:change=move |ev| {
                    match ImageColor::parse_optional(&event_target_value(&ev)) {
                        Ok(color) => state.update(|s| {
                            s.set_image_color(index, color);
                        }),
                        Err(e) => tracing::warn!("Ignoring color choice: {}", e),
                    }
                }
            >
                <option value="" selected=selected.is_empty()>"No color"</option>
                {ImageColor::ALL.into_iter().map(|option| view! {
                    <option value=option.as_str() selected=option.as_str() == selected>
                        {option.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
