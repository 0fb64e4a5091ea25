// web_app/components/product.rs - Product display components
//
// Components for the management view's catalog listing:
// - ProductCard: one product with its images and Edit/Delete actions
// - ProductGrid: grid layout for the whole catalog

use leptos::prelude::*;

use super::common::{Badge, PriceDisplay};
use crate::web_app::model::{ImageColor, Product, ProductImage};

fn color_badge_variant(color: ImageColor) -> &'static str {
    match color {
        ImageColor::Red => "red",
        ImageColor::Blue => "blue",
        ImageColor::Green => "green",
        ImageColor::Yellow => "yellow",
        _ => "gray",
    }
}

/// Product card in the catalog grid
#[component]
pub fn ProductCard(
    product: Product,
    /// Load this product into the form
    on_edit: Callback<Product>,
    /// Ask to delete this product by id
    on_delete: Callback<i64>,
    /// Disables both actions while a request is in flight
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let product_id = product.id;
    let sizes = product.sizes().join(", ");
    let has_sizes = product.product_type.has_sizes() && !sizes.is_empty();
    let images = product.images.clone();
    let edit_target = product.clone();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 flex flex-col h-full overflow-hidden">
            // Image strip
            {if images.is_empty() {
                view! {
                    <div class="h-40 bg-gray-100 flex items-center justify-center text-gray-300">
                        <span class="text-4xl">"📦"</span>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="flex gap-2 overflow-x-auto p-3 bg-gray-50">
                        {images.into_iter().map(|image| view! { <ProductThumbnail image=image /> }).collect_view()}
                    </div>
                }.into_any()
            }}

            <div class="p-5 flex flex-col flex-1 gap-3">
                <div class="flex justify-between items-start gap-2">
                    <h3 class="font-bold text-gray-900 text-lg line-clamp-2">{product.title.clone()}</h3>
                    <PriceDisplay price=product.price highlight=true />
                </div>

                <p class="text-gray-600 text-sm line-clamp-3 flex-1">{product.description.clone()}</p>

                <div class="flex items-center gap-2 flex-wrap text-xs">
                    <Badge variant="blue">{product.product_type.to_string()}</Badge>
                    <Show when=move || has_sizes>
                        <span class="text-gray-500">"Sizes: " {sizes.clone()}</span>
                    </Show>
                </div>

                <div class="flex gap-2 pt-3 border-t border-gray-100">
                    <button
                        type="button"
                        class="flex-1 px-3 py-1.5 text-sm bg-white border border-gray-300 rounded-lg hover:bg-gray-50 disabled:opacity-50"
                        disabled=move || busy.get()
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "Edit"
                    </button>
                    <button
                        type="button"
                        class="flex-1 px-3 py-1.5 text-sm bg-red-600 text-white rounded-lg hover:bg-red-700 disabled:bg-gray-400"
                        disabled=move || busy.get()
                        on:click=move |_| on_delete.run(product_id)
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProductThumbnail(image: ProductImage) -> impl IntoView {
    view! {
        <div class="relative flex-shrink-0">
            <img
                src=image.image.clone()
                alt=format!("Product image {}", image.id)
                class="h-24 w-24 object-cover rounded-lg border border-gray-200"
            />
            {image.color.map(|color| view! {
                <div class="absolute bottom-1 left-1">
                    <Badge variant=color_badge_variant(color)>{color.to_string()}</Badge>
                </div>
            })}
        </div>
    }
}

/// Catalog grid with empty state
#[component]
pub fn ProductGrid(
    #[prop(into)]
    products: Signal<Vec<Product>>,
    on_edit: Callback<Product>,
    on_delete: Callback<i64>,
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <div class="flex justify-between items-center mb-6">
                <span class="text-gray-500 font-medium">
                    {move || {
                        let count = products.with(Vec::len);
                        if count == 1 {
                            "1 product".to_string()
                        } else {
                            format!("{} products", count)
                        }
                    }}
                </span>
            </div>

            <Show
                when=move || products.with(|list| !list.is_empty())
                fallback=|| view! {
                    <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                        <div class="text-gray-300 text-6xl mb-4">"📦"</div>
                        <h3 class="text-xl font-bold text-gray-900 mb-2">"No products yet"</h3>
                        <p class="text-gray-500">"Use the form to add the first one."</p>
                    </div>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                    {move || products.get().into_iter().map(|product| view! {
                        <ProductCard
                            product=product
                            on_edit=on_edit
                            on_delete=on_delete
                            busy=busy
                        />
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
