//! Dashboard Page
//!
//! Static dashboard view with placeholder reporting panels. The chart areas
//! stay empty until the reporting endpoints exist server-side.

use leptos::*;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dairycart Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Welcome!"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <DashboardPanel title="Total Orders">
                    <div class="flex items-center space-x-1 text-sm mb-4">
                        <PanelTab label="Past Week" active=true />
                        <PanelTab label="Past Month" active=false />
                        <PanelTab label="Past Quarter" active=false />
                        <PanelTab label="Past Year" active=false />
                        <PanelTab label="All Time" active=false />
                    </div>
                    <div id="orders-chart" class="h-64 bg-gray-700 rounded" />
                </DashboardPanel>

                <DashboardPanel title="Popular Products">
                    <div id="popular-products-chart" class="h-64 bg-gray-700 rounded" />
                </DashboardPanel>
            </div>
        </div>
    }
}

/// Reporting panel with a heading and a "View Data" footer
#[component]
fn DashboardPanel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            {children()}
            <button class="w-full mt-4 px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors">
                "View Data"
            </button>
        </section>
    }
}

/// Time-range tab inside a reporting panel
#[component]
fn PanelTab(label: &'static str, active: bool) -> impl IntoView {
    let class = if active {
        "px-3 py-1 rounded-lg bg-gray-700 text-white"
    } else {
        "px-3 py-1 rounded-lg text-gray-400 hover:text-white"
    };

    view! {
        <a href="#" class=class>{label}</a>
    }
}
