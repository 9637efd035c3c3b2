//! Status Badge Component

use leptos::prelude::*;

use dashboard_core::Status;

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-{}", status.slug())>{status.label()}</span>
    }
}
