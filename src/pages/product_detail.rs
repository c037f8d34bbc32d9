//! Product Detail Page
//!
//! Placeholder view for a single product, keyed by the `:sku` route param.

use leptos::*;
use leptos_router::*;

/// Product detail page component
#[component]
pub fn ProductDetail() -> impl IntoView {
    let params = use_params_map();
    let sku = move || params.with(|p| p.get("sku").cloned().unwrap_or_default());

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{sku}</h1>
                <p class="text-gray-400 mt-1">"Product details are not available yet."</p>
            </div>

            <A
                href="/products"
                class="inline-block px-6 py-3 bg-gray-800 hover:bg-gray-700 rounded-lg font-medium transition-colors"
            >
                "Back to Products"
            </A>
        </div>
    }
}
