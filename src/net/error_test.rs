use super::*;

#[test]
fn from_response_401_is_unauthorized_with_backend_message() {
    let err = ApiError::from_response(401, r#"{"status":"fail","message":"Invalid email or password"}"#);
    assert_eq!(err, ApiError::Unauthorized { message: Some("Invalid email or password".to_owned()) });
    assert!(err.is_unauthorized());
}

#[test]
fn from_response_other_status_keeps_status() {
    let err = ApiError::from_response(422, r#"{"message":"Email already exists"}"#);
    assert_eq!(err, ApiError::Status { status: 422, message: Some("Email already exists".to_owned()) });
    assert!(!err.is_unauthorized());
}

#[test]
fn from_response_tolerates_non_json_and_blank_messages() {
    assert_eq!(ApiError::from_response(500, "<html>oops</html>"), ApiError::Status { status: 500, message: None });
    assert_eq!(ApiError::from_response(401, r#"{"message":"  "}"#), ApiError::Unauthorized { message: None });
}

#[test]
fn user_message_prefers_backend_text() {
    let err = ApiError::Unauthorized { message: Some("Account disabled".to_owned()) };
    assert_eq!(err.user_message("Login failed. Please try again."), "Account disabled");
}

#[test]
fn user_message_falls_back_without_backend_text() {
    let fallback = "Login failed. Please try again.";
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(fallback), fallback);
    assert_eq!(ApiError::Unauthorized { message: None }.user_message(fallback), fallback);
    assert_eq!(ApiError::Unavailable.user_message(fallback), fallback);
}

#[test]
fn display_formats_status() {
    assert_eq!(ApiError::Status { status: 503, message: None }.to_string(), "request failed with status 503");
}
