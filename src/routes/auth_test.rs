use super::*;
use uuid::Uuid;

fn auth_user(role: Role) -> AuthUser {
    AuthUser {
        user: session::SessionUser {
            id: Uuid::new_v4(),
            email: "t@example.com".to_owned(),
            name: "Tester".to_owned(),
            role,
        },
        token: "deadbeef".to_owned(),
    }
}

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive() {
    for (i, val) in ["TRUE", "True", "YES", "On"].iter().enumerate() {
        let key = format!("__TEST_EB_CI_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_5511__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_77__"), None);
}

// =============================================================================
// cookie_secure — exercised via env_bool and the https inference rule to
// avoid races on the shared COOKIE_SECURE / IDP_REDIRECT_URI globals.
// =============================================================================

#[test]
fn cookie_secure_https_inference_logic() {
    assert!("https://claimdesk.example/auth/callback".starts_with("https://"));
    assert!(!"http://localhost:3000/auth/callback".starts_with("https://"));
}

// =============================================================================
// AuthUser::require — role allow-lists
// =============================================================================

#[test]
fn empty_allow_list_admits_any_authenticated_role() {
    for role in [Role::Client, Role::Employee, Role::Admin, Role::Admindev] {
        assert!(auth_user(role).require(&[]).is_ok());
    }
}

#[test]
fn staff_list_rejects_clients() {
    assert_eq!(auth_user(Role::Client).require(STAFF), Err(StatusCode::FORBIDDEN));
    assert!(auth_user(Role::Employee).require(STAFF).is_ok());
    assert!(auth_user(Role::Admin).require(STAFF).is_ok());
    assert!(auth_user(Role::Admindev).require(STAFF).is_ok());
}

#[test]
fn finance_list_admits_only_admins() {
    assert_eq!(auth_user(Role::Client).require(FINANCE), Err(StatusCode::FORBIDDEN));
    assert_eq!(auth_user(Role::Employee).require(FINANCE), Err(StatusCode::FORBIDDEN));
    assert!(auth_user(Role::Admin).require(FINANCE).is_ok());
    assert!(auth_user(Role::Admindev).require(FINANCE).is_ok());
}

#[test]
fn single_role_list_matches_exactly() {
    assert!(auth_user(Role::Admin).require(&[Role::Admin]).is_ok());
    assert_eq!(auth_user(Role::Admindev).require(&[Role::Admin]), Err(StatusCode::FORBIDDEN));
}
