//! Column and Popup Renderers
//!
//! Named renderers resolved through `CellRenderer` instead of getter
//! closures over untyped payloads.

use crate::record::{Record, Status};

/// Rendered cell content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    Text(String),
    /// Rendered as a badge carrying `status-<slug>`
    Status(Status),
}

pub trait CellRenderer {
    fn render(&self, record: &Record) -> DisplayValue;
}

/// Columns of the submissions table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Task,
    Status,
    From,
    To,
    Address,
    DueDate,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Task,
        Column::Status,
        Column::From,
        Column::To,
        Column::Address,
        Column::DueDate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::Task => "workflow",
            Column::Status => "status",
            Column::From => "from",
            Column::To => "to",
            Column::Address => "location",
            Column::DueDate => "dueDate",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Task => "Task",
            Column::Status => "Status",
            Column::From => "From",
            Column::To => "To",
            Column::Address => "Customer Address",
            Column::DueDate => "Due Date",
        }
    }

    pub fn width(self) -> Option<&'static str> {
        match self {
            Column::Status => Some("170px"),
            _ => None,
        }
    }
}

impl CellRenderer for Column {
    fn render(&self, record: &Record) -> DisplayValue {
        match self {
            Column::Task => DisplayValue::Text(record.task.clone()),
            Column::Status => DisplayValue::Status(record.status),
            Column::From => DisplayValue::Text(record.from.clone()),
            Column::To => DisplayValue::Text(record.to.clone()),
            Column::Address => DisplayValue::Text(record.address.clone()),
            Column::DueDate => DisplayValue::Text(record.due_date_display()),
        }
    }
}

/// Marker icon CSS class for a record
pub fn marker_icon_class(record: &Record) -> String {
    format!("marker-icon status-{}", record.status.slug())
}

/// Popup markup for a record's marker
pub fn popup_html(record: &Record) -> String {
    format!(
        concat!(
            "<div class=\"popup-content\">",
            "<h3>{}</h3>",
            "<p><strong>Status:</strong> {}</p>",
            "<p><strong>From:</strong> {}</p>",
            "<p><strong>To:</strong> {}</p>",
            "<p><strong>Address:</strong> {}</p>",
            "<p><strong>Due Date:</strong> {}</p>",
            "</div>"
        ),
        escape_html(&record.task),
        record.status.label(),
        escape_html(&record.from),
        escape_html(&record.to),
        escape_html(&record.address),
        record.due_date_display(),
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
