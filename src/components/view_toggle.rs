//! View Toggle Component
//!
//! Map / list switch buttons.

use leptos::prelude::*;

use dashboard_core::ViewMode;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

const VIEWS: &[(ViewMode, &str)] = &[(ViewMode::Map, "Map"), (ViewMode::List, "List")];

#[component]
pub fn ViewToggle() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();

    view! {
        <div class="view-toggle">
            {VIEWS.iter().map(|(mode, label)| {
                let mode = *mode;
                let is_active = move || store.view().get() == mode;
                view! {
                    <button
                        class=move || if is_active() { "view-btn active" } else { "view-btn" }
                        on:click=move |_| ctx.set_view(mode)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
