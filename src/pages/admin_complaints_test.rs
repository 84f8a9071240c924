use super::*;
use crate::net::types::ComplaintList;

fn complaints() -> Vec<Complaint> {
    let list: ComplaintList = crate::net::http::decode_envelope(
        r#"{
            "status": "success",
            "data": {
                "complaints": [
                    { "id": "c1", "staffName": "Ama", "department": "IT", "title": "Printer", "status": "PENDING" },
                    { "id": "c2", "staffName": "Kofi", "department": "FINANCE", "title": "Network", "status": "RESOLVED" },
                    { "id": "c3", "staffName": "Esi", "department": "IT", "title": "Monitor", "status": "PENDING" }
                ]
            }
        }"#,
    )
    .unwrap();
    list.complaints
}

#[test]
fn empty_filter_keeps_all_complaints() {
    assert_eq!(filter_by_status(&complaints(), "").len(), 3);
}

#[test]
fn status_filter_selects_matching_complaints() {
    let pending = filter_by_status(&complaints(), "PENDING");
    assert_eq!(pending.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["c1", "c3"]);
    assert!(filter_by_status(&complaints(), "CLOSED").is_empty());
}

#[test]
fn new_ticket_leaves_blank_worker_unassigned() {
    let ticket = new_ticket("c1", "  ", "HIGH", " check cabling ");
    assert_eq!(ticket.worker_id, None);
    assert_eq!(ticket.priority, "HIGH");
    assert_eq!(ticket.notes, "check cabling");
}

#[test]
fn new_ticket_defaults_priority() {
    let ticket = new_ticket("c1", "w9", "", "");
    assert_eq!(ticket.worker_id.as_deref(), Some("w9"));
    assert_eq!(ticket.priority, DEFAULT_PRIORITY);
}

#[test]
fn reassignment_needs_a_choice() {
    assert_eq!(reassignment_patch("", " "), None);
}

#[test]
fn reassignment_sends_only_chosen_fields() {
    let patch = reassignment_patch("w2", "").unwrap();
    assert_eq!(patch.worker_id.as_deref(), Some("w2"));
    assert!(patch.priority.is_none());
    assert!(patch.status.is_none());

    let patch = reassignment_patch("", "URGENT").unwrap();
    assert!(patch.worker_id.is_none());
    assert_eq!(patch.priority.as_deref(), Some("URGENT"));
}
