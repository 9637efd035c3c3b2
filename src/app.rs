//! Submissions Dashboard App
//!
//! Builds the orchestrator over the seeded provider and lays out the
//! filter bar above whichever view is active.

use leptos::prelude::*;
use reactive_stores::Store;

use dashboard_core::{DashboardConfig, Orchestrator, ViewMode};
use rolling_logger::RingBuffer;

use crate::bindings::LeafletSurface;
use crate::components::{ExportButton, FilterBar, ListView, LogPanel, MapView, Notice, ReloadButton, ViewToggle};
use crate::context::DashboardContext;
use crate::provider::BrowserProvider;
use crate::store::{DashboardState, DashboardStateStoreFields};

#[component]
pub fn App(config: DashboardConfig, logs: RingBuffer) -> impl IntoView {
    let store = Store::new(DashboardState {
        view: config.default_view,
        ..Default::default()
    });
    provide_context(store);

    let dashboard = Orchestrator::new(BrowserProvider::seeded(&config), LeafletSurface::new(), &config);
    let ctx = DashboardContext::new(dashboard, store, config.search_debounce_ms, config.map.init_delay_ms);
    provide_context(ctx);
    provide_context(config);
    provide_context(logs);

    ctx.load();

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Submissions"</h1>
                <ViewToggle />
                <ReloadButton />
                <ExportButton />
                <LogPanel />
            </header>

            <FilterBar />
            <Notice />

            <main class="dashboard-content">
                <Show
                    when=move || store.view().get() == ViewMode::Map
                    fallback=|| view! { <ListView /> }
                >
                    <MapView />
                </Show>
            </main>
        </div>
    }
}
