//! View Orchestrator
//!
//! Routes filter and view changes through the provider and into whichever
//! presentation is active. Responses are ticketed; only the latest request
//! issued may be applied.

use log::{debug, error, info};

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::filter::{FilterCriteria, FilterState, FilterUpdate, ViewMode};
use crate::map::{InitOutcome, MapPhase, MapSurface, MarkerManager, RenderSummary};
use crate::pagination::{ListProjection, PageTurn, PageView, PagerItem};
use crate::record::{Record, RecordId};
use crate::selection::SelectionTracker;
use crate::store::RecordProvider;

/// A query the caller must run against the provider and hand back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub ticket: u64,
    pub criteria: FilterCriteria,
}

/// What the active presentation now shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    List { page: PageView, pager: Vec<PagerItem> },
    Map(RenderSummary),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Applied(ViewUpdate),
    /// Same records as already shown
    Unchanged,
    /// A newer request has been issued since
    Stale,
    Failed(String),
}

/// Outcome of a view toggle: the current result pushed right away, plus a
/// refresh request for the caller to run.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSwitch {
    pub update: ViewUpdate,
    pub request: QueryRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Done(usize),
    Failed(String),
}

impl ExportStatus {
    pub fn message(&self) -> String {
        match self {
            ExportStatus::Done(count) => format!("Exported {} submissions", count),
            ExportStatus::Failed(reason) => format!("Export failed: {}", reason),
        }
    }
}

pub struct Orchestrator<P: RecordProvider, S: MapSurface> {
    provider: P,
    filter: FilterState,
    current: Vec<Record>,
    issued: u64,
    list: ListProjection,
    selection: SelectionTracker,
    map: MarkerManager<S>,
    pending_focus: Option<RecordId>,
}

impl<P: RecordProvider, S: MapSurface> Orchestrator<P, S> {
    pub fn new(provider: P, surface: S, config: &DashboardConfig) -> Self {
        Self {
            provider,
            filter: FilterState::new(config.default_view),
            current: Vec::new(),
            issued: 0,
            list: ListProjection::new(config.page_size),
            selection: SelectionTracker::new(),
            map: MarkerManager::new(surface, config.map.clone()),
            pending_focus: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn view(&self) -> ViewMode {
        self.filter.view()
    }

    pub fn current(&self) -> &[Record] {
        &self.current
    }

    pub fn list(&self) -> &ListProjection {
        &self.list
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn map(&self) -> &MarkerManager<S> {
        &self.map
    }

    /// Record queued for the map, if it has not been shown yet
    pub fn pending_focus(&self) -> Option<&RecordId> {
        self.pending_focus.as_ref()
    }

    /// Issue a new request for the current criteria
    pub fn begin_query(&mut self) -> QueryRequest {
        self.issued += 1;
        QueryRequest {
            ticket: self.issued,
            criteria: self.filter.criteria().clone(),
        }
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.issued
    }

    pub fn apply_filter(&mut self, update: FilterUpdate) -> QueryRequest {
        self.filter.apply(update);
        self.begin_query()
    }

    /// Apply a provider response. Anything but the latest ticket is dropped.
    pub fn resolve(&mut self, ticket: u64, result: Result<Vec<Record>>) -> Resolution {
        if !self.is_latest(ticket) {
            debug!("Discarding stale response #{} (latest #{})", ticket, self.issued);
            return Resolution::Stale;
        }
        let records = match result {
            Ok(records) => records,
            Err(err) => {
                error!("Query #{} failed: {}", ticket, err);
                return Resolution::Failed(err.to_string());
            }
        };
        // records are immutable, so identity order decides sameness
        if records.iter().map(|r| &r.id).eq(self.current.iter().map(|r| &r.id)) {
            return Resolution::Unchanged;
        }
        debug!("Query #{} returned {} records", ticket, records.len());
        self.current = records;
        self.selection.clear();
        if let Some(id) = &self.pending_focus {
            if !self.current.iter().any(|r| &r.id == id) {
                debug!("Focused record {} left the result", id);
                self.pending_focus = None;
            }
        }
        Resolution::Applied(self.push_to_active())
    }

    /// Query the provider synchronously and apply the result
    pub fn refresh(&mut self) -> Resolution {
        let request = self.begin_query();
        let result = self.provider.query(&request.criteria);
        self.resolve(request.ticket, result)
    }

    /// Switch presentation. `None` when `mode` is already active.
    pub fn set_view(&mut self, mode: ViewMode) -> Option<ViewSwitch> {
        if !self.filter.set_view(mode) {
            return None;
        }
        let update = self.push_to_active();
        Some(ViewSwitch {
            update,
            request: self.begin_query(),
        })
    }

    fn push_to_active(&mut self) -> ViewUpdate {
        match self.filter.view() {
            ViewMode::List => {
                let page = self.list.set_records(self.current.clone());
                ViewUpdate::List {
                    page,
                    pager: self.list.pager(),
                }
            }
            ViewMode::Map => {
                let summary = self.map.set_records(self.current.clone());
                self.apply_pending_focus();
                ViewUpdate::Map(summary)
            }
        }
    }

    pub fn go_to_page(&mut self, index: usize) -> Option<PageTurn> {
        self.list.go_to_page(index)
    }

    pub fn next_page(&mut self) -> Option<PageTurn> {
        self.list.next()
    }

    pub fn previous_page(&mut self) -> Option<PageTurn> {
        self.list.previous()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<PageView> {
        self.list.set_page_size(page_size)
    }

    pub fn pager(&self) -> Vec<PagerItem> {
        self.list.pager()
    }

    pub fn toggle_selection(&mut self, record: &Record) -> Vec<Record> {
        self.selection.toggle(record)
    }

    /// Select-all over the rows of the current page
    pub fn toggle_all_visible(&mut self) -> Vec<Record> {
        let visible = self.list.current_page().items;
        self.selection.toggle_all(&visible)
    }

    /// Focus a record on the map now, or once the map view is next shown.
    /// Returns whether the map focused it immediately.
    pub fn focus(&mut self, record: &Record) -> bool {
        match self.filter.view() {
            ViewMode::Map => self.map.select(record),
            ViewMode::List => {
                self.pending_focus = Some(record.id.clone());
                false
            }
        }
    }

    fn apply_pending_focus(&mut self) {
        let Some(id) = self.pending_focus.take() else {
            return;
        };
        if self.map.phase() != MapPhase::Ready {
            // kept for when the surface comes up
            self.pending_focus = Some(id);
            return;
        }
        if let Some(record) = self.current.iter().find(|r| r.id == id).cloned() {
            self.map.select(&record);
        }
    }

    /// Deferred map bring-up, see `MarkerManager::initialize`
    pub fn initialize_map(&mut self) -> InitOutcome {
        let outcome = self.map.initialize();
        if outcome == InitOutcome::Ready {
            self.apply_pending_focus();
        }
        outcome
    }

    /// Swap in a fresh surface, e.g. when the map view is mounted again.
    /// The previous one is disposed; the current result is held for it.
    pub fn attach_map(&mut self, surface: S) {
        let config = self.map.config().clone();
        self.map.dispose();
        self.map = MarkerManager::new(surface, config);
        if self.filter.view() == ViewMode::Map {
            self.map.set_records(self.current.clone());
        }
    }

    pub fn dispose_map(&mut self) {
        self.map.dispose();
    }

    pub fn export(&self) -> ExportStatus {
        match self.provider.export_all() {
            Ok(count) => {
                info!("Export finished: {} submissions", count);
                ExportStatus::Done(count)
            }
            Err(err) => {
                error!("Export failed: {}", err);
                ExportStatus::Failed(err.to_string())
            }
        }
    }
}
