use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(state.session().is_none());
    assert!(state.role().is_none());
    assert!(state.identity().is_none());
    assert!(state.token().is_none());
}

#[test]
fn auth_state_default_is_bootstrapping() {
    let state = AuthState::default();
    assert!(state.loading());
}

// =============================================================
// Session conversion
// =============================================================

#[test]
fn login_data_converts_into_session() {
    let data: LoginData = serde_json::from_value(serde_json::json!({
        "admin": { "id": "a-1", "email": "a@cmc.test" },
        "token": "tok",
        "role": "ADMIN"
    }))
    .unwrap();
    let session = Session::from(data);
    assert_eq!(session.token, "tok");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.identity.id, "a-1");
}

// =============================================================
// AuthController (storage is inert outside the browser)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn controller_hydrates_once_then_logs_in_and_out() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthController::new();
        assert!(auth.loading());

        auth.hydrate();
        assert!(!auth.loading());
        assert!(!auth.is_authenticated());

        let identity: Identity =
            serde_json::from_value(serde_json::json!({ "id": "w-1", "email": "w@cmc.test" })).unwrap();
        auth.login(identity.clone(), Role::Worker, "tok-w".to_owned());
        assert!(auth.is_authenticated());
        assert_eq!(auth.role(), Some(Role::Worker));
        assert_eq!(auth.identity(), Some(identity));
        assert_eq!(auth.token_untracked().as_deref(), Some("tok-w"));

        // A second hydrate must not wipe a live session.
        auth.hydrate();
        assert!(auth.is_authenticated());

        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.token_untracked().is_none());
        assert!(!auth.loading());
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn update_identity_keeps_token_and_role() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthController::new();
        auth.hydrate();

        let renamed: Identity =
            serde_json::from_value(serde_json::json!({ "id": "a-1", "email": "new@cmc.test", "firstName": "Yaw" }))
                .unwrap();
        auth.update_identity(renamed.clone());
        assert!(!auth.is_authenticated());

        let original: Identity =
            serde_json::from_value(serde_json::json!({ "id": "a-1", "email": "old@cmc.test" })).unwrap();
        auth.login(original, Role::Admin, "tok-a".to_owned());
        auth.update_identity(renamed.clone());
        assert_eq!(auth.identity(), Some(renamed));
        assert_eq!(auth.role(), Some(Role::Admin));
        assert_eq!(auth.token_untracked().as_deref(), Some("tok-a"));
    });
}

#[test]
#[should_panic(expected = "AuthProvider")]
fn use_auth_outside_provider_panics() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = use_auth();
    });
}
