//! UI Components
//!
//! Leptos components of the dashboard shell.

mod export_button;
mod filter_bar;
mod list_view;
mod log_panel;
mod map_view;
mod notice;
mod pager;
mod reload_button;
mod status_badge;
mod view_toggle;

pub use export_button::ExportButton;
pub use filter_bar::FilterBar;
pub use list_view::ListView;
pub use log_panel::LogPanel;
pub use map_view::MapView;
pub use notice::Notice;
pub use pager::Pager;
pub use reload_button::ReloadButton;
pub use status_badge::StatusBadge;
pub use view_toggle::ViewToggle;
