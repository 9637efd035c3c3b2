//! Pager Component
//!
//! Range label, previous/next and the compact page list under the table.

use leptos::prelude::*;

use dashboard_core::{DashboardConfig, PagerItem};

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn Pager() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();
    let page_size_options = expect_context::<DashboardConfig>().page_size_options;

    let current_page = move || store.page().read().page_index;

    view! {
        <div class="pager">
            <span class="pager-range">{move || store.page().read().range_label()}</span>

            <button
                class="pager-btn"
                disabled=move || !store.page().read().has_previous()
                on:click=move |_| ctx.previous_page()
            >
                "‹"
            </button>

            {move || store.pager().get().into_iter().map(|item| match item {
                PagerItem::Page(number) => {
                    let index = number - 1;
                    view! {
                        <button
                            class=move || if current_page() == index { "pager-btn active" } else { "pager-btn" }
                            on:click=move |_| ctx.go_to_page(index)
                        >
                            {number}
                        </button>
                    }.into_any()
                }
                PagerItem::Ellipsis => view! { <span class="pager-ellipsis">"…"</span> }.into_any(),
            }).collect_view()}

            <button
                class="pager-btn"
                disabled=move || !store.page().read().has_next()
                on:click=move |_| ctx.next_page()
            >
                "›"
            </button>

            <select
                class="pager-size"
                prop:value=move || store.page().read().page_size.to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        ctx.set_page_size(size);
                    }
                }
            >
                {page_size_options.into_iter().map(|size| {
                    view! { <option value=size.to_string()>{format!("{} / page", size)}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
