//! Dashboard Context
//!
//! The orchestrator handle plus the actions components call, provided via
//! the Leptos Context API.

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};

use dashboard_core::{
    FilterUpdate, InitOutcome, Orchestrator, QueryRequest, Record, RecordProvider, Resolution, ViewMode,
};

use crate::bindings::LeafletSurface;
use crate::provider::BrowserProvider;
use crate::store::{store_clear_message, store_set_message, store_sync, DashboardStateStoreFields, DashboardStore};

pub type Dashboard = Orchestrator<BrowserProvider, LeafletSurface>;

/// Dashboard actions shared by every component
#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// Orchestrator, owned by the UI thread
    dashboard: StoredValue<RefCell<Dashboard>, LocalStorage>,
    store: DashboardStore,
    search_debounce_ms: u32,
    map_init_delay_ms: u32,
}

impl DashboardContext {
    pub fn new(dashboard: Dashboard, store: DashboardStore, search_debounce_ms: u32, map_init_delay_ms: u32) -> Self {
        Self {
            dashboard: StoredValue::new_local(RefCell::new(dashboard)),
            store,
            search_debounce_ms,
            map_init_delay_ms,
        }
    }

    /// Run `f` against the orchestrator; `None` once the owner is gone or
    /// while another action still holds it
    fn with<U>(&self, f: impl FnOnce(&mut Dashboard) -> U) -> Option<U> {
        self.dashboard
            .try_with_value(|cell| match cell.try_borrow_mut() {
                Ok(mut dashboard) => Some(f(&mut dashboard)),
                Err(_) => {
                    warn!("Dashboard busy, dropping action");
                    None
                }
            })
            .flatten()
    }

    /// Copy the orchestrator's state into the store
    pub fn sync(&self) {
        let store = self.store;
        self.with(|d| store_sync(&store, d));
    }

    /// Initial load: filter options plus the unfiltered result
    pub fn load(&self) {
        let store = self.store;
        let request = self.with(|d| {
            *store.category_options().write() = d.provider().category_options();
            *store.status_options().write() = d.provider().status_options();
            d.begin_query()
        });
        if let Some(request) = request {
            self.run(request, 0);
        }
    }

    /// Swap the whole collection for a freshly seeded one
    pub fn reload(&self) {
        let seed = js_sys::Date::now() as u64;
        let store = self.store;
        let request = self.with(|d| {
            let count = d.provider_mut().reseed(seed);
            info!("Reloaded {} submissions (seed {})", count, seed);
            *store.category_options().write() = d.provider().category_options();
            d.begin_query()
        });
        if let Some(request) = request {
            self.run(request, 0);
        }
    }

    pub fn apply_filter(&self, update: FilterUpdate) {
        let delay = match update {
            FilterUpdate::SearchText(_) => self.search_debounce_ms,
            _ => 0,
        };
        if let Some(request) = self.with(|d| d.apply_filter(update)) {
            self.run(request, delay);
        }
    }

    /// Resolve `request` after `delay_ms`, unless a newer one was issued
    fn run(&self, request: QueryRequest, delay_ms: u32) {
        let ctx = *self;
        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            let outcome = ctx.with(|d| {
                if !d.is_latest(request.ticket) {
                    return Resolution::Stale;
                }
                let result = d.provider().query(&request.criteria);
                d.resolve(request.ticket, result)
            });
            match outcome {
                Some(Resolution::Failed(reason)) => {
                    store_set_message(&ctx.store, format!("Could not load submissions: {}", reason));
                }
                Some(Resolution::Stale) => {
                    debug!("Request #{} superseded", request.ticket);
                    return;
                }
                Some(_) => {}
                None => return,
            }
            ctx.sync();
        });
    }

    pub fn set_view(&self, mode: ViewMode) {
        if let Some(Some(switch)) = self.with(|d| d.set_view(mode)) {
            self.sync();
            self.run(switch.request, 0);
        }
    }

    pub fn go_to_page(&self, index: usize) {
        if let Some(Some(turn)) = self.with(|d| d.go_to_page(index)) {
            debug!("Page {} -> {}", turn.changed.previous, turn.changed.current);
            self.sync();
        }
    }

    pub fn next_page(&self) {
        if let Some(Some(_)) = self.with(|d| d.next_page()) {
            self.sync();
        }
    }

    pub fn previous_page(&self) {
        if let Some(Some(_)) = self.with(|d| d.previous_page()) {
            self.sync();
        }
    }

    pub fn set_page_size(&self, page_size: usize) {
        match self.with(|d| d.set_page_size(page_size)) {
            Some(Ok(_)) => self.sync(),
            Some(Err(err)) => warn!("Ignoring page size {}: {}", page_size, err),
            None => {}
        }
    }

    pub fn toggle_selection(&self, record: Record) {
        if self.with(|d| d.toggle_selection(&record)).is_some() {
            self.sync();
        }
    }

    pub fn toggle_all_visible(&self) {
        if self.with(|d| d.toggle_all_visible()).is_some() {
            self.sync();
        }
    }

    /// Focus a record on the map (now, or when the map is next shown)
    pub fn focus(&self, record: Record) {
        if self.with(|d| d.focus(&record)).is_some() {
            self.sync();
        }
    }

    pub fn export(&self) {
        if let Some(status) = self.with(|d| d.export()) {
            store_set_message(&self.store, status.message());
        }
    }

    pub fn dismiss_message(&self) {
        store_clear_message(&self.store);
    }

    /// Attach a fresh Leaflet surface and bring it up once the container
    /// has had a chance to lay out.
    pub fn mount_map(&self) {
        self.with(|d| d.attach_map(LeafletSurface::new()));
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctx.map_init_delay_ms).await;
            let mut outcome = ctx.with(|d| d.initialize_map());
            if outcome == Some(InitOutcome::RetryScheduled) {
                TimeoutFuture::new(ctx.map_init_delay_ms).await;
                outcome = ctx.with(|d| d.initialize_map());
            }
            if outcome == Some(InitOutcome::Unavailable) {
                store_set_message(&ctx.store, "The map could not be displayed");
            }
            ctx.sync();
        });
    }

    pub fn unmount_map(&self) {
        self.with(|d| d.dispose_map());
    }
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}
