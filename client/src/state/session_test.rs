use super::*;
use crate::net::types::Role;

fn admin_user() -> User {
    User {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "A".to_owned(),
        role: Role::Admin,
    }
}

// =============================================================
// Defaults and transitions
// =============================================================

#[test]
fn default_is_anonymous_and_idle() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn begin_loading_only_raises_loading() {
    let mut state = SessionState::default();
    state.begin_loading();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn resolve_user_is_terminal_and_clears_error() {
    let mut state = SessionState::default();
    state.begin_loading();
    state.resolve_error(SessionError::Server { status: 503 });
    state.resolve_user(admin_user());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.user.as_ref().map(|u| u.role), Some(Role::Admin));
}

#[test]
fn clear_user_drops_user_and_error() {
    let mut state = SessionState::default();
    state.resolve_user(admin_user());
    state.clear_user();
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert!(!state.loading);
}

// =============================================================
// apply_fetch — terminal states for each fetch outcome
// =============================================================

#[test]
fn ok_fetch_resolves_user() {
    let mut state = SessionState::default();
    state.begin_loading();
    state.apply_fetch(CurrentUser::Authenticated(admin_user()));
    assert_eq!(state, SessionState { user: Some(admin_user()), loading: false, error: None });
}

#[test]
fn unauthorized_fetch_resolves_anonymous_without_error() {
    let mut state = SessionState::default();
    state.begin_loading();
    state.apply_fetch(CurrentUser::Anonymous);
    assert_eq!(state, SessionState { user: None, loading: false, error: None });
}

#[test]
fn server_error_fetch_records_status() {
    let mut state = SessionState::default();
    state.begin_loading();
    state.apply_fetch(CurrentUser::ServerError { status: 500 });
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.error, Some(SessionError::Server { status: 500 }));
    assert_eq!(state.error.unwrap().message(), "Error 500");
}

#[test]
fn network_error_fetch_is_distinguishable_from_server_error() {
    let mut state = SessionState::default();
    state.begin_loading();
    state.apply_fetch(CurrentUser::NetworkError("connection refused".to_owned()));
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.error, Some(SessionError::Network("connection refused".to_owned())));
    assert_ne!(state.error, Some(SessionError::Server { status: 0 }));
}

// =============================================================
// BootstrapGate — the fetch runs exactly once per app load
// =============================================================

#[test]
fn bootstrap_gate_claims_exactly_once() {
    let gate = BootstrapGate::default();
    assert!(gate.try_claim());
    assert!(!gate.try_claim());
    assert!(!gate.try_claim());
}

#[test]
fn every_fetch_outcome_terminates_loading() {
    for fetched in [
        CurrentUser::Authenticated(admin_user()),
        CurrentUser::Anonymous,
        CurrentUser::ServerError { status: 418 },
        CurrentUser::NetworkError("timeout".to_owned()),
    ] {
        let mut state = SessionState::default();
        state.begin_loading();
        state.apply_fetch(fetched);
        assert!(!state.loading);
    }
}
