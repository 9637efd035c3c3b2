//! Dashboard Scenario Tests
//!
//! Seeded store driven through the orchestrator end to end.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::config::DashboardConfig;
    use crate::filter::{FilterUpdate, ViewMode};
    use crate::orchestrator::{Orchestrator, Resolution, ViewUpdate};
    use crate::record::Status;
    use crate::seed;
    use crate::store::{RecordProvider, RecordStore};
    use crate::testing::FakeSurface;

    fn seeded() -> Orchestrator<RecordStore, FakeSurface> {
        let config = DashboardConfig::default();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let store = RecordStore::new(seed::generate(100, config.seed, now));
        let mut orchestrator = Orchestrator::new(store, FakeSurface::with_height(480.0), &config);
        orchestrator.initialize_map();
        orchestrator.refresh();
        orchestrator
    }

    fn run(o: &mut Orchestrator<RecordStore, FakeSurface>, update: FilterUpdate) -> Resolution {
        let request = o.apply_filter(update);
        let result = RecordProvider::query(o.provider(), &request.criteria);
        o.resolve(request.ticket, result)
    }

    #[test]
    fn test_complete_in_london_scenario() {
        let mut o = seeded();
        assert_eq!(o.map().marker_count(), 100);

        run(&mut o, FilterUpdate::Status(Some("Complete".into())));
        run(&mut o, FilterUpdate::SearchText("london".into()));

        let result = o.current().to_vec();
        let expected = o
            .provider()
            .all()
            .iter()
            .filter(|r| r.status == Status::Complete && r.search_haystack().contains("london"))
            .count();
        assert_eq!(result.len(), expected);
        assert!(result.iter().all(|r| r.status == Status::Complete));

        let valid = result.iter().filter(|r| r.has_valid_location()).count();
        assert_eq!(o.map().marker_count(), valid);

        let switch = o.set_view(ViewMode::List).unwrap();
        let ViewUpdate::List { page, .. } = switch.update else {
            panic!("expected list update");
        };
        assert_eq!(page.total_pages, result.len().div_ceil(10));
        assert_eq!(page.total_items, result.len());
    }

    #[test]
    fn test_selection_survives_paging_but_not_refilter() {
        let mut o = seeded();
        o.set_view(ViewMode::List).unwrap();

        o.toggle_all_visible();
        o.next_page().unwrap();
        o.toggle_all_visible();
        assert_eq!(o.selection().len(), 20);
        assert!(o.selection().is_selected("1"));

        run(&mut o, FilterUpdate::SearchText("oxford".into()));
        assert!(o.selection().is_empty());
        assert_eq!(o.list().page_index(), 0);
    }

    #[test]
    fn test_inactive_view_is_not_rebuilt() {
        let mut o = seeded();
        o.set_view(ViewMode::List).unwrap();
        let markers_before = o.map().marker_count();

        run(&mut o, FilterUpdate::Status(Some("Unassigned".into())));
        assert_eq!(o.map().marker_count(), markers_before);

        let switch = o.set_view(ViewMode::Map).unwrap();
        let ViewUpdate::Map(summary) = switch.update else {
            panic!("expected map update");
        };
        assert_eq!(summary.rendered, o.current().len());
    }

    #[test]
    fn test_clear_restores_full_set() {
        let mut o = seeded();
        run(&mut o, FilterUpdate::Category(Some("Work Flow:Site Inspection".into())));
        assert!(o.current().len() < 100);

        run(&mut o, FilterUpdate::Clear);
        assert_eq!(o.current(), o.provider().all());
    }
}
