//! Products Page
//!
//! Paginated product listing: fetches the product list once on mount and
//! lays it out as a grid of five-wide rows.

use leptos::*;

use crate::api;
use crate::components::{Loading, ProductCard};
use crate::state::ProductsState;

/// Product listing page component
#[component]
pub fn Products() -> impl IntoView {
    let state = ProductsState::new();

    // Fetch once on mount. `state` is Copy over signals, so the async block
    // settles the same instance the view reads from, on both paths.
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_products().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch products: {}", e).into());
            }
            state.resolve(result);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Manage Products"</h1>
            </div>

            // Product grid, one row of columns per chunk
            {move || {
                if state.loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    state.products.get().into_iter().map(|row| {
                        view! {
                            <div class="grid grid-cols-5 gap-4 mb-4">
                                {row.into_iter().map(|product| {
                                    view! { <ProductCard product=product /> }
                                }).collect_view()}
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}
