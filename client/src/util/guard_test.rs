use super::*;
use crate::net::types::User;
use crate::state::session::SessionError;

fn user_with_role(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "u1@example.com".to_owned(),
        name: "U One".to_owned(),
        role,
    }
}

fn terminal(user: Option<User>) -> SessionState {
    SessionState { user, loading: false, error: None }
}

// =============================================================
// Checking: loading wins over everything
// =============================================================

#[test]
fn loading_always_checks_regardless_of_user_and_roles() {
    let cases = [None, Some(user_with_role(Role::Admin))];
    for user in cases {
        let state = SessionState { user, loading: true, error: None };
        assert_eq!(evaluate(&state, &[]), GuardOutcome::Checking);
        assert_eq!(evaluate(&state, &[Role::Admin]), GuardOutcome::Checking);
        assert_eq!(evaluate(&state, &[Role::Client]), GuardOutcome::Checking);
    }
}

// =============================================================
// Unauthenticated: anonymous terminal states go to login
// =============================================================

#[test]
fn anonymous_terminal_state_redirects_to_login() {
    assert_eq!(
        evaluate(&terminal(None), &[]),
        GuardOutcome::Redirect(NavigationIntent::ToLogin)
    );
    assert_eq!(
        evaluate(&terminal(None), &[Role::Admin]),
        GuardOutcome::Redirect(NavigationIntent::ToLogin)
    );
}

#[test]
fn bootstrap_error_still_redirects_to_login() {
    // The error is informational; an anonymous session routes to login
    // whether the identity endpoint failed or answered 401.
    let state = SessionState {
        user: None,
        loading: false,
        error: Some(SessionError::Server { status: 500 }),
    };
    assert_eq!(evaluate(&state, &[]), GuardOutcome::Redirect(NavigationIntent::ToLogin));
}

// =============================================================
// Forbidden vs authorized
// =============================================================

#[test]
fn role_outside_nonempty_allow_list_is_forbidden() {
    let state = terminal(Some(user_with_role(Role::Client)));
    assert_eq!(
        evaluate(&state, &[Role::Admin, Role::Admindev]),
        GuardOutcome::Redirect(NavigationIntent::ToUnauthorized)
    );
}

#[test]
fn role_inside_allow_list_renders() {
    let state = terminal(Some(user_with_role(Role::Admin)));
    assert_eq!(evaluate(&state, &[Role::Admin]), GuardOutcome::Render);
    assert_eq!(evaluate(&state, &[Role::Admin, Role::Employee]), GuardOutcome::Render);
}

#[test]
fn empty_allow_list_renders_any_authenticated_role() {
    for role in [Role::Client, Role::Employee, Role::Admin, Role::Admindev] {
        let state = terminal(Some(user_with_role(role)));
        assert_eq!(evaluate(&state, &[]), GuardOutcome::Render);
    }
}

// =============================================================
// Re-evaluation on state change
// =============================================================

#[test]
fn session_expiry_flips_render_to_login_redirect() {
    let mut state = terminal(Some(user_with_role(Role::Employee)));
    assert_eq!(evaluate(&state, &[Role::Employee]), GuardOutcome::Render);

    state.clear_user();
    assert_eq!(
        evaluate(&state, &[Role::Employee]),
        GuardOutcome::Redirect(NavigationIntent::ToLogin)
    );
}

#[test]
fn intent_paths_point_at_the_expected_routes() {
    assert_eq!(NavigationIntent::ToLogin.path(), "/login");
    assert_eq!(NavigationIntent::ToUnauthorized.path(), "/unauthorized");
}
