use super::*;
use crate::util::session_storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn make_identity(id: &str) -> Identity {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "email": format!("{id}@cmc.test"),
        "firstName": "Abena",
        "lastName": "Owusu"
    }))
    .unwrap()
}

fn make_session(role: Role, token: &str) -> Session {
    Session { token: token.to_owned(), identity: make_identity("u-1"), role }
}

fn store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (SessionStore::new(storage.clone()), storage)
}

fn triple_presence(state: &AuthState) -> (bool, bool, bool) {
    (state.token().is_some(), state.identity().is_some(), state.role().is_some())
}

fn stored_presence(storage: &MemoryStorage) -> (bool, bool, bool) {
    (
        storage.get(TOKEN_KEY).is_some(),
        storage.get(IDENTITY_KEY).is_some(),
        storage.get(ROLE_KEY).is_some(),
    )
}

// =============================================================
// hydrate
// =============================================================

#[test]
fn hydrate_without_persisted_data_twice_stays_anonymous() {
    let (store, _) = store();
    let mut state = AuthState::default();

    store.hydrate(&mut state);
    assert!(!state.is_authenticated());
    assert!(!state.loading());

    store.hydrate(&mut state);
    assert!(!state.is_authenticated());
    assert!(!state.loading());
}

#[test]
fn hydrate_restores_complete_triple() {
    let (store, storage) = store();
    let mut first = AuthState::default();
    store.commit(&mut first, make_session(Role::Worker, "tok-w"));

    let reloaded = SessionStore::new(storage);
    let mut state = AuthState::default();
    reloaded.hydrate(&mut state);

    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Worker));
    assert_eq!(state.token(), Some("tok-w"));
    assert_eq!(state.identity(), Some(&make_identity("u-1")));
}

#[test]
fn hydrate_ignores_partial_triples() {
    let cases: [&[(&str, &str)]; 3] = [
        &[(TOKEN_KEY, "t"), (ROLE_KEY, "ADMIN")],
        &[(TOKEN_KEY, "t"), (IDENTITY_KEY, r#"{"id":"1","email":"a@b"}"#)],
        &[(IDENTITY_KEY, r#"{"id":"1","email":"a@b"}"#), (ROLE_KEY, "ADMIN")],
    ];
    for entries in cases {
        let (store, storage) = store();
        for (key, value) in entries {
            storage.set(key, value);
        }
        let mut state = AuthState::default();
        store.hydrate(&mut state);
        assert_eq!(triple_presence(&state), (false, false, false), "entries: {entries:?}");
        assert!(!state.loading());
    }
}

#[test]
fn hydrate_ignores_corrupt_identity_and_unknown_role() {
    let (store, storage) = store();
    storage.set(TOKEN_KEY, "t");
    storage.set(IDENTITY_KEY, "{not json");
    storage.set(ROLE_KEY, "ADMIN");
    let mut state = AuthState::default();
    store.hydrate(&mut state);
    assert!(!state.is_authenticated());

    storage.set(IDENTITY_KEY, r#"{"id":"1","email":"a@b"}"#);
    storage.set(ROLE_KEY, "SUPERUSER");
    let mut state = AuthState::default();
    store.hydrate(&mut state);
    assert!(!state.is_authenticated());
}

#[test]
fn hydrate_treats_empty_token_as_absent() {
    let (store, storage) = store();
    storage.set(TOKEN_KEY, "");
    storage.set(IDENTITY_KEY, r#"{"id":"1","email":"a@b"}"#);
    storage.set(ROLE_KEY, "WORKER");
    let mut state = AuthState::default();
    store.hydrate(&mut state);
    assert!(!state.is_authenticated());
}

// =============================================================
// commit / clear
// =============================================================

#[test]
fn commit_then_read_round_trips_exact_triple() {
    let (store, storage) = store();
    let mut state = AuthState::default();
    store.hydrate(&mut state);
    let empty = state.clone();

    store.commit(&mut state, make_session(Role::Admin, "tok-a"));
    assert_eq!(state.identity(), Some(&make_identity("u-1")));
    assert_eq!(state.role(), Some(Role::Admin));
    assert_eq!(state.token(), Some("tok-a"));
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("ADMIN"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-a"));

    store.clear(&mut state);
    assert_eq!(state, empty);
    assert!(storage.is_empty());
}

#[test]
fn commit_overwrites_previous_session() {
    let (store, storage) = store();
    let mut state = AuthState::default();
    store.commit(&mut state, make_session(Role::Admin, "tok-a"));
    store.commit(&mut state, make_session(Role::Worker, "tok-w"));
    assert_eq!(state.role(), Some(Role::Worker));
    assert_eq!(state.token(), Some("tok-w"));
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("WORKER"));
}

#[test]
fn clear_is_idempotent() {
    let (store, storage) = store();
    let mut state = AuthState::default();
    store.clear(&mut state);
    store.clear(&mut state);
    assert!(!state.is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn triple_is_never_partial_across_commit_clear_sequences() {
    let (store, storage) = store();
    let mut state = AuthState::default();
    store.hydrate(&mut state);

    let ops = ["commit", "clear", "clear", "commit", "commit", "clear", "commit"];
    for (i, op) in ops.iter().enumerate() {
        if *op == "commit" {
            let role = if i % 2 == 0 { Role::Admin } else { Role::Worker };
            store.commit(&mut state, make_session(role, &format!("tok-{i}")));
        } else {
            store.clear(&mut state);
        }
        let mem = triple_presence(&state);
        assert!(mem == (true, true, true) || mem == (false, false, false), "memory after {op}: {mem:?}");
        let disk = stored_presence(&storage);
        assert_eq!(disk, mem, "storage after {op}");
    }
}
