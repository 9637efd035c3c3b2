//! Global Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The orchestrator
//! owns the real state; this is the by-value snapshot the views render.

use leptos::prelude::*;
use reactive_stores::Store;

use dashboard_core::{
    MapPhase, MapSurface, Orchestrator, PageView, PagerItem, RecordId, RecordProvider, Status, ViewMode,
};

/// Render-facing state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Active presentation
    pub view: ViewMode,
    /// Rows of the current list page
    pub page: PageView,
    /// Compact pager entries for the list footer
    pub pager: Vec<PagerItem>,
    /// Checked record ids, in check order
    pub selected_ids: Vec<RecordId>,
    /// Header checkbox state for the visible page
    pub page_all_selected: bool,
    pub page_partly_selected: bool,
    /// Size of the current filtered result
    pub result_count: usize,
    pub marker_count: usize,
    pub map_unavailable: bool,
    /// Row clicked in the list, waiting for the map to show it
    pub focused: Option<RecordId>,
    /// Distinct tasks for the category filter
    pub category_options: Vec<String>,
    pub status_options: Vec<Status>,
    /// Last user-facing notice (export result, query failure...)
    pub status_message: Option<String>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the orchestrator's derived state into the store
pub fn store_sync<P: RecordProvider, S: MapSurface>(store: &DashboardStore, dashboard: &Orchestrator<P, S>) {
    *store.view().write() = dashboard.view();
    let page = dashboard.list().current_page();
    let selection = dashboard.selection();
    *store.page_all_selected().write() = selection.is_all_selected(&page.items);
    *store.page_partly_selected().write() = selection.is_partially_selected(&page.items);
    *store.page().write() = page;
    *store.pager().write() = dashboard.pager();
    *store.selected_ids().write() = dashboard
        .selection()
        .selected()
        .into_iter()
        .map(|record| record.id)
        .collect();
    *store.result_count().write() = dashboard.current().len();
    *store.marker_count().write() = dashboard.map().marker_count();
    *store.map_unavailable().write() = dashboard.map().phase() == MapPhase::Unavailable;
    *store.focused().write() = dashboard.pending_focus().cloned();
}

pub fn store_set_message(store: &DashboardStore, message: impl Into<String>) {
    *store.status_message().write() = Some(message.into());
}

pub fn store_clear_message(store: &DashboardStore) {
    *store.status_message().write() = None;
}
