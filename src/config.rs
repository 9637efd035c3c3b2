//! Page Configuration
//!
//! Reads `DashboardConfig` overrides from the JSON script block in
//! index.html. Falls back to defaults when the block is absent or broken.

use dashboard_core::DashboardConfig;

pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Config plus the reason defaults were used instead, if any. The logger is
/// not up yet when this runs, so the caller reports the problem.
pub fn load() -> (DashboardConfig, Option<String>) {
    resolve(read_config_text().as_deref())
}

fn read_config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

pub fn resolve(text: Option<&str>) -> (DashboardConfig, Option<String>) {
    match text.map(str::trim) {
        None | Some("") => (DashboardConfig::default(), None),
        Some(json) => match DashboardConfig::from_json(json) {
            Ok(config) => (config, None),
            Err(err) => (
                DashboardConfig::default(),
                Some(format!("Invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, err)),
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::ViewMode;

    #[test]
    fn test_missing_block_uses_defaults() {
        let (config, problem) = resolve(None);
        assert_eq!(config, DashboardConfig::default());
        assert!(problem.is_none());

        let (_, problem) = resolve(Some("  \n "));
        assert!(problem.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let (config, problem) = resolve(Some(r#"{ "default_view": "list", "page_size": 20 }"#));
        assert!(problem.is_none());
        assert_eq!(config.default_view, ViewMode::List);
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_invalid_block_reports_problem() {
        let (config, problem) = resolve(Some(r#"{ "page_size": 0 }"#));
        assert_eq!(config, DashboardConfig::default());
        assert!(problem.unwrap().contains("dashboard-config"));

        let (_, problem) = resolve(Some("{ not json"));
        assert!(problem.is_some());
    }
}
