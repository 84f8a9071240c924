use super::*;

fn decode_marker(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == FROM_PARAM)
        .map(|(_, value)| value.into_owned())
}

// =============================================================
// GuardDecision
// =============================================================

#[test]
fn loading_always_bootstraps() {
    for authenticated in [false, true] {
        for role in [None, Some(Role::Admin), Some(Role::Worker)] {
            assert_eq!(
                GuardDecision::decide(true, authenticated, role, Role::Admin),
                GuardDecision::Bootstrapping
            );
        }
    }
}

#[test]
fn unauthenticated_worker_route_redirects_to_worker_login_with_marker() {
    let decision = GuardDecision::decide(false, false, None, Role::Worker);
    assert_eq!(decision, GuardDecision::Unauthenticated);

    let target = decision.redirect(Role::Worker, "/worker/dashboard").unwrap();
    assert!(target.starts_with("/worker/login?"));
    assert_eq!(decode_marker(&target).as_deref(), Some("/worker/dashboard"));
}

#[test]
fn admin_on_worker_route_goes_home_without_marker() {
    let decision = GuardDecision::decide(false, true, Some(Role::Admin), Role::Worker);
    assert_eq!(decision, GuardDecision::WrongRole);

    let target = decision.redirect(Role::Worker, "/worker/dashboard").unwrap();
    assert_eq!(target, "/");
    assert!(decode_marker(&target).is_none());
}

#[test]
fn matching_role_is_authorized_without_redirect() {
    let decision = GuardDecision::decide(false, true, Some(Role::Admin), Role::Admin);
    assert_eq!(decision, GuardDecision::Authorized);
    assert!(decision.redirect(Role::Admin, "/admin/workers").is_none());
    assert!(GuardDecision::Bootstrapping.redirect(Role::Admin, "/admin/workers").is_none());
}

#[test]
fn from_state_matches_default_bootstrapping_state() {
    let state = AuthState::default();
    assert_eq!(GuardDecision::from_state(&state, Role::Admin), GuardDecision::Bootstrapping);
}

// =============================================================
// Intended destination
// =============================================================

#[test]
fn login_redirect_encodes_marker() {
    assert_eq!(
        login_redirect(Role::Admin, "/admin/complaints"),
        "/admin/login?from=%2Fadmin%2Fcomplaints"
    );
}

#[test]
fn post_login_uses_recorded_destination() {
    assert_eq!(post_login_destination(Role::Admin, Some("/admin/complaints")), "/admin/complaints");
}

#[test]
fn post_login_defaults_to_dashboard_without_marker() {
    assert_eq!(post_login_destination(Role::Admin, None), "/admin/dashboard");
    assert_eq!(post_login_destination(Role::Worker, None), "/worker/dashboard");
    assert_eq!(post_login_destination(Role::Worker, Some("  ")), "/worker/dashboard");
}

#[test]
fn post_login_rejects_foreign_or_unsafe_destinations() {
    for bad in [
        "https://evil.example/admin/",
        "//evil.example/admin/x",
        "/admin//evil.example",
        "/worker/dashboard",
        "/admin/login",
        "/",
        "admin/complaints",
    ] {
        assert_eq!(post_login_destination(Role::Admin, Some(bad)), "/admin/dashboard", "{bad}");
    }
}

// =============================================================
// 401 handling
// =============================================================

#[test]
fn is_login_path_recognizes_login_screens() {
    assert!(is_login_path("/admin/login"));
    assert!(is_login_path("/worker/login/"));
    assert!(is_login_path("/admin/login?from=%2Fadmin%2Fworkers"));
    assert!(!is_login_path("/admin/dashboard"));
    assert!(!is_login_path("/"));
    assert!(!is_login_path("/admin/login-help"));
}

#[test]
fn unauthorized_on_login_screen_is_suppressed() {
    assert_eq!(unauthorized_action("/admin/login"), UnauthorizedAction::Suppress);
    assert_eq!(unauthorized_action("/worker/login"), UnauthorizedAction::Suppress);
}

#[test]
fn unauthorized_elsewhere_forces_logout() {
    assert_eq!(unauthorized_action("/admin/dashboard"), UnauthorizedAction::ForceLogout);
    assert_eq!(unauthorized_action("/worker/dashboard"), UnauthorizedAction::ForceLogout);
    assert_eq!(unauthorized_action("/submit-complaint"), UnauthorizedAction::ForceLogout);
}

#[cfg(not(feature = "hydrate"))]
fn signed_in_admin() -> AuthController {
    let auth = AuthController::new();
    auth.hydrate();
    let identity: crate::net::types::Identity =
        serde_json::from_value(serde_json::json!({ "id": "a-1", "email": "admin@cmc.test" })).unwrap();
    auth.login(identity, Role::Admin, "tok-a".to_owned());
    auth
}

#[cfg(not(feature = "hydrate"))]
fn recording_navigate() -> (std::rc::Rc<std::cell::RefCell<Vec<(String, bool)>>>, impl Fn(&str, NavigateOptions)) {
    let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = log.clone();
    (log, move |to: &str, options: NavigateOptions| sink.borrow_mut().push((to.to_owned(), options.replace)))
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unauthorized_on_protected_page_logs_out_and_replaces_with_home() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = signed_in_admin();
        let (navigations, navigate) = recording_navigate();

        let action = handle_unauthorized(auth, "/admin/dashboard", &navigate);

        assert_eq!(action, UnauthorizedAction::ForceLogout);
        assert!(!auth.is_authenticated());
        assert!(auth.token_untracked().is_none());
        assert_eq!(*navigations.borrow(), vec![(HOME_PATH.to_owned(), true)]);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unauthorized_on_login_screen_keeps_session_and_location() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = signed_in_admin();
        let (navigations, navigate) = recording_navigate();

        let action = handle_unauthorized(auth, "/admin/login", &navigate);

        assert_eq!(action, UnauthorizedAction::Suppress);
        assert!(auth.is_authenticated());
        assert_eq!(auth.token_untracked().as_deref(), Some("tok-a"));
        assert!(navigations.borrow().is_empty());
    });
}

#[test]
fn area_membership_follows_role_prefix() {
    assert!(is_within_area(Role::Admin, "/admin/workers"));
    assert!(!is_within_area(Role::Admin, "/administrator"));
    assert!(!is_within_area(Role::Worker, "/admin/dashboard"));
    assert!(!is_within_area(Role::Worker, "/"));
}
