use super::*;

#[test]
fn resolve_base_url_falls_back_when_unset_or_blank() {
    assert_eq!(resolve_base_url(None), DEFAULT_API_BASE_URL);
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_base_url_trims_trailing_slashes() {
    assert_eq!(resolve_base_url(Some("https://desk.example.org/api/v1/")), "https://desk.example.org/api/v1");
    assert_eq!(resolve_base_url(Some(" https://desk.example.org/api/v1 ")), "https://desk.example.org/api/v1");
}

#[test]
fn strip_api_suffix_yields_origin() {
    assert_eq!(strip_api_suffix("http://localhost:5000/api/v1"), "http://localhost:5000");
    assert_eq!(strip_api_suffix("https://desk.example.org"), "https://desk.example.org");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
    assert!(api_base_url().starts_with("http"));
}
