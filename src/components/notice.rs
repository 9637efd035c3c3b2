//! Notice Component
//!
//! Dismissable line for the last user-facing message.

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn Notice() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();

    move || {
        store.status_message().get().map(|message| {
            view! {
                <div class="notice">
                    <span>{message}</span>
                    <button class="notice-dismiss" on:click=move |_| ctx.dismiss_message()>"×"</button>
                </div>
            }
        })
    }
}
