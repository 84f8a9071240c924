use super::*;

#[test]
fn heading_names_the_portal() {
    assert_eq!(heading(Role::Admin), "Admin Login");
    assert_eq!(heading(Role::Worker), "IT Worker Login");
}

#[test]
fn failure_message_prefers_backend_text() {
    let err = ApiError::from_response(401, r#"{"status":"error","message":"Invalid email or password"}"#);
    assert_eq!(failure_message(&err), "Invalid email or password");
}

#[test]
fn failure_message_falls_back_without_backend_text() {
    assert_eq!(failure_message(&ApiError::Network("offline".to_owned())), LOGIN_FAILED);
    assert_eq!(failure_message(&ApiError::from_response(500, "<html>")), LOGIN_FAILED);
}
