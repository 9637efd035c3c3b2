//! Export Button Component

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Downloads every submission as JSON
#[component]
pub fn ExportButton() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();

    view! {
        <button
            class="export-btn"
            title=move || format!("{} submissions match the current filters", store.result_count().get())
            on:click=move |_| ctx.export()
        >
            "Export"
        </button>
    }
}
