//! Map View Component
//!
//! Hosts the Leaflet container. The surface is attached on mount and
//! disposed when the view goes away.

use leptos::prelude::*;

use dashboard_core::DashboardConfig;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn MapView() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();
    let container_id = expect_context::<DashboardConfig>().map.container_id;

    // initialization waits on a timer, so the container is in the DOM by then
    ctx.mount_map();
    on_cleanup(move || ctx.unmount_map());

    view! {
        <div class="map-view">
            <div id=container_id class="map-container"></div>
            <Show when=move || store.map_unavailable().get()>
                <p class="map-fallback">"The map is unavailable. Switch to the list to browse submissions."</p>
            </Show>
            <p class="map-count">
                {move || format!(
                    "{} of {} submissions on the map",
                    store.marker_count().get(),
                    store.result_count().get(),
                )}
            </p>
        </div>
    }
}
