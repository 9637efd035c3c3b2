//! List View Component
//!
//! Paged submissions table with row checkboxes and select-all over the
//! visible page. Clicking a row focuses it on the map.

use leptos::prelude::*;

use dashboard_core::{CellRenderer, Column, DisplayValue, Record};

use crate::components::{Pager, StatusBadge};
use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

fn render_cell(value: DisplayValue) -> AnyView {
    match value {
        DisplayValue::Status(status) => view! { <StatusBadge status=status /> }.into_any(),
        DisplayValue::Text(text) => view! { <span>{text}</span> }.into_any(),
    }
}

/// One submission row
#[component]
fn SubmissionRow(record: Record) -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();

    let id = record.id.clone();
    let is_checked = {
        let id = id.clone();
        move || store.selected_ids().read().contains(&id)
    };
    let is_focused = move || store.focused().read().as_deref() == Some(id.as_str());

    let on_check = {
        let record = record.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.toggle_selection(record.clone());
        }
    };
    let on_focus = {
        let record = record.clone();
        move |_| ctx.focus(record.clone())
    };

    view! {
        <tr
            class=move || if is_focused() { "submission-row focused" } else { "submission-row" }
            on:click=on_focus
        >
            <td class="select-cell">
                <input type="checkbox" prop:checked=is_checked on:click=on_check />
            </td>
            {Column::ALL.iter().map(|column| {
                view! { <td class=format!("cell-{}", column.name())>{render_cell(column.render(&record))}</td> }
            }).collect_view()}
        </tr>
    }
}

#[component]
pub fn ListView() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();

    view! {
        <div class="list-view">
            <p class="selection-summary">
                {move || {
                    let count = store.selected_ids().read().len();
                    if count > 0 { format!("{} selected", count) } else { String::new() }
                }}
            </p>

            <table class="submissions-table">
                <thead>
                    <tr>
                        <th class="select-cell">
                            <input
                                type="checkbox"
                                title="Select page"
                                prop:checked=move || store.page_all_selected().get()
                                prop:indeterminate=move || store.page_partly_selected().get()
                                on:change=move |_| ctx.toggle_all_visible()
                            />
                        </th>
                        {Column::ALL.iter().map(|column| {
                            let style = column.width().map(|width| format!("width: {};", width));
                            view! { <th style=style>{column.header()}</th> }
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.page().get().items
                        key=|record| record.id.clone()
                        children=move |record| view! { <SubmissionRow record=record /> }
                    />
                </tbody>
            </table>

            <Show when=move || store.result_count().get() == 0>
                <p class="empty-state">"No submissions match the current filters."</p>
            </Show>

            <Pager />
        </div>
    }
}
