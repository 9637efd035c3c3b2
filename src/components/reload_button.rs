//! Reload Button Component

use leptos::prelude::*;

use crate::context::use_dashboard;

/// Replaces the collection with a freshly seeded one
#[component]
pub fn ReloadButton() -> impl IntoView {
    let ctx = use_dashboard();

    view! {
        <button class="reload-btn" title="Load a new set of submissions" on:click=move |_| ctx.reload()>
            "Reload"
        </button>
    }
}
