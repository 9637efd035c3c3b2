//! Filter Bar Component
//!
//! Task, status, due-date and free-text criteria plus a clear button. Each
//! control sends a single `FilterUpdate`.

use chrono::NaiveDate;
use leptos::prelude::*;

use dashboard_core::FilterUpdate;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Value of an `<input type="date">`; blank or malformed means no threshold
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Select value to criterion; the "All" option carries an empty value
fn selected(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();

    let (category, set_category) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (due_after, set_due_after) = signal(String::new());
    let (search, set_search) = signal(String::new());

    let on_clear = move |_| {
        set_category.set(String::new());
        set_status.set(String::new());
        set_due_after.set(String::new());
        set_search.set(String::new());
        ctx.apply_filter(FilterUpdate::Clear);
    };

    view! {
        <div class="filter-bar">
            <select
                class="filter-category"
                prop:value=move || category.get()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_category.set(value.clone());
                    ctx.apply_filter(FilterUpdate::Category(selected(value)));
                }
            >
                <option value="">"All tasks"</option>
                <For
                    each=move || store.category_options().get()
                    key=|task| task.clone()
                    children=move |task| {
                        let value = task.clone();
                        view! { <option value=value>{task}</option> }
                    }
                />
            </select>

            <select
                class="filter-status"
                prop:value=move || status.get()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_status.set(value.clone());
                    ctx.apply_filter(FilterUpdate::Status(selected(value)));
                }
            >
                <option value="">"All statuses"</option>
                <For
                    each=move || store.status_options().get()
                    key=|status| *status
                    children=move |status| {
                        view! { <option value=status.label()>{status.label()}</option> }
                    }
                />
            </select>

            <label class="filter-date">
                "Due from "
                <input
                    type="date"
                    prop:value=move || due_after.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let threshold = parse_date_input(&value);
                        set_due_after.set(value);
                        ctx.apply_filter(FilterUpdate::DateThreshold(threshold));
                    }
                />
            </label>

            <input
                type="search"
                class="filter-search"
                placeholder="Search submissions..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_search.set(value.clone());
                    ctx.apply_filter(FilterUpdate::SearchText(value));
                }
            />

            <button class="filter-clear" on:click=on_clear>"Clear"</button>
        </div>
    }
}
