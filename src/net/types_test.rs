use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_to_uppercase_token() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(serde_json::to_string(&Role::Worker).unwrap(), "\"WORKER\"");
}

#[test]
fn role_parse_rejects_unknown_tokens() {
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("WORKER"), Some(Role::Worker));
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_paths_use_lowercased_token() {
    assert_eq!(Role::Admin.login_path(), "/admin/login");
    assert_eq!(Role::Worker.login_path(), "/worker/login");
    assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    assert_eq!(Role::Worker.area_prefix(), "/worker/");
}

// =============================================================
// Login payloads
// =============================================================

#[test]
fn admin_login_payload_maps_admin_to_identity() {
    let raw = serde_json::json!({
        "status": "success",
        "data": {
            "admin": { "id": "a-1", "email": "root@cmc.test", "firstName": "Ada", "lastName": "Ok" },
            "token": "tok-1",
            "role": "ADMIN"
        }
    });
    let parsed: Envelope<LoginData> = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.data.identity.id, "a-1");
    assert_eq!(parsed.data.identity.display_name(), "Ada Ok");
    assert_eq!(parsed.data.token, "tok-1");
    assert_eq!(parsed.data.role, Role::Admin);
}

#[test]
fn worker_login_payload_maps_worker_to_identity() {
    let raw = serde_json::json!({
        "worker": { "id": 7, "email": "w@cmc.test", "firstName": "Kofi", "phoneNumber": "0244" },
        "token": "tok-2",
        "role": "WORKER"
    });
    let parsed: LoginData = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.identity.id, "7");
    assert_eq!(parsed.identity.phone_number.as_deref(), Some("0244"));
    assert_eq!(parsed.identity.display_name(), "Kofi");
    assert_eq!(parsed.role, Role::Worker);
}

#[test]
fn identity_keeps_unknown_fields_through_serialization() {
    let raw = serde_json::json!({
        "id": "w-1",
        "email": "w@cmc.test",
        "firstName": "A",
        "lastName": "B",
        "isActive": true
    });
    let identity: Identity = serde_json::from_value(raw).unwrap();
    assert_eq!(identity.extra.get("isActive"), Some(&serde_json::Value::Bool(true)));

    let again: Identity = serde_json::from_str(&serde_json::to_string(&identity).unwrap()).unwrap();
    assert_eq!(again, identity);
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.message.is_none());
}

// =============================================================
// Dashboard payloads
// =============================================================

#[test]
fn dashboard_stats_tolerate_missing_and_stringly_counts() {
    let raw = serde_json::json!({
        "stats": {
            "complaints": { "total": 12, "pending": "3", "inProgress": null },
            "workers": { "total": 4.0 }
        },
        "complaintsByDepartment": [{ "department": "HUMAN_RESOURCES", "_count": 5 }]
    });
    let stats: DashboardStats = serde_json::from_value(raw).unwrap();
    assert_eq!(stats.stats.complaints.total, 12);
    assert_eq!(stats.stats.complaints.pending, 3);
    assert_eq!(stats.stats.complaints.in_progress, 0);
    assert_eq!(stats.stats.complaints.resolved, 0);
    assert_eq!(stats.stats.workers.total, 4);
    assert_eq!(stats.complaints_by_department[0].count, 5);
}

#[test]
fn negative_count_is_rejected() {
    let raw = serde_json::json!({ "total": -1 });
    assert!(serde_json::from_value::<ComplaintCounts>(raw).is_err());
}

#[test]
fn worker_row_reads_snake_case_ticket_count() {
    let raw = serde_json::json!({
        "id": "w-9",
        "email": "w9@cmc.test",
        "firstName": "Ama",
        "lastName": "Mensah",
        "isActive": true,
        "ticket_count": 2
    });
    let worker: Worker = serde_json::from_value(raw).unwrap();
    assert!(worker.is_active);
    assert_eq!(worker.ticket_count, 2);
    assert!(worker.phone_number.is_none());
}

#[test]
fn ticket_embeds_complaint_with_defaults() {
    let raw = serde_json::json!({
        "id": "t-1",
        "ticketNumber": "TKT-0001",
        "status": "IN_PROGRESS",
        "priority": "HIGH",
        "complaint": {
            "id": "c-1",
            "staffName": "Yaw",
            "department": "FINANCE",
            "title": "Printer jammed",
            "status": "ASSIGNED"
        }
    });
    let ticket: Ticket = serde_json::from_value(raw).unwrap();
    assert_eq!(ticket.ticket_number, "TKT-0001");
    assert!(ticket.notes.is_none());
    assert!(ticket.complaint.images.is_empty());
    assert!(ticket.complaint.ticket.is_none());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn complaint_form_fields_skip_blank_values() {
    let form = ComplaintForm {
        staff_name: "Esi".to_owned(),
        department: "IT".to_owned(),
        title: "No network".to_owned(),
        description: "   ".to_owned(),
        location: String::new(),
    };
    assert_eq!(
        form.fields(),
        vec![("staffName", "Esi"), ("department", "IT"), ("title", "No network")]
    );
}

#[test]
fn new_ticket_omits_unassigned_worker() {
    let body = NewTicket {
        complaint_id: "c-1".to_owned(),
        worker_id: None,
        priority: "MEDIUM".to_owned(),
        notes: String::new(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "complaintId": "c-1", "priority": "MEDIUM", "notes": "" }));
}

#[test]
fn password_update_uses_camel_case_keys() {
    let body = PasswordUpdate { current_password: "old".to_owned(), new_password: "newer1".to_owned() };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "currentPassword": "old", "newPassword": "newer1" }));
}
