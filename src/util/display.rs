//! Formatting helpers for backend enum tokens and dates.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::config;
use crate::net::http::join_url;

/// Statuses a worker may move a ticket to, as `(token, label)`.
pub const WORKER_STATUS_OPTIONS: [(&str, &str); 3] =
    [("ASSIGNED", "Assigned"), ("IN_PROGRESS", "In Progress"), ("RESOLVED", "Resolved")];

/// Ticket priorities offered when creating a ticket, as `(token, label)`.
pub const PRIORITY_OPTIONS: [(&str, &str); 4] =
    [("LOW", "Low"), ("MEDIUM", "Medium"), ("HIGH", "High"), ("URGENT", "Urgent")];

pub const DEFAULT_PRIORITY: &str = "MEDIUM";

/// CSS class for a complaint or ticket status badge.
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "PENDING" => "badge-pending",
        "ASSIGNED" => "badge-assigned",
        "IN_PROGRESS" => "badge-progress",
        "RESOLVED" => "badge-resolved",
        "CLOSED" => "badge-closed",
        _ => "",
    }
}

/// `IN_PROGRESS` -> `IN PROGRESS`.
pub fn status_label(status: &str) -> String {
    status.replace('_', " ")
}

/// `HUMAN_RESOURCES` -> `HUMAN-RESOURCES`.
pub fn department_label(department: &str) -> String {
    department.replace('_', "-")
}

/// `HIGH` -> `priority-high`.
pub fn priority_class(priority: &str) -> String {
    format!("priority-{}", priority.to_ascii_lowercase())
}

/// Calendar date portion of an ISO-8601 timestamp; other input is echoed.
pub fn format_date(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, _)) if date.len() == 10 => date.to_owned(),
        _ => timestamp.to_owned(),
    }
}

/// `N/A` for missing or blank optional text.
pub fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "N/A".to_owned(),
    }
}

/// Absolute link for a complaint image path returned by the backend.
pub fn image_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_owned()
    } else {
        join_url(config::asset_origin(), path)
    }
}
