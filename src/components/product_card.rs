//! Product Card Component
//!
//! Grid card for a single product in the listing.

use leptos::*;
use leptos_router::*;

use crate::state::Product;

/// Single product card
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let detail_href = format!("/product/{}", product.sku);
    let alt_name = product.name.clone();

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 hover:border-gray-600 transition-colors overflow-hidden">
            // Name links to the product detail route
            <A href=detail_href class="block px-4 py-3 font-semibold hover:text-white">
                {product.name.clone()}
            </A>

            <img
                src=product.image_url.clone()
                alt=alt_name
                class="w-full aspect-[4/3] object-cover bg-gray-700"
            />

            <div class="flex items-center justify-between px-4 py-3 text-sm">
                <span class="font-semibold">{format!("${:.2}", product.price)}</span>
                <span class="text-gray-400">{format!("{} in stock", product.quantity)}</span>
            </div>
        </div>
    }
}
