use super::*;

// =============================================================================
// bytes_to_hex / generate_token
// =============================================================================

#[test]
fn bytes_to_hex_known_values() {
    assert_eq!(bytes_to_hex(&[0x00, 0xff, 0x0a]), "00ff0a");
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_not_constant() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// Role parsing
// =============================================================================

#[test]
fn role_round_trips_through_tags() {
    for role in [Role::Client, Role::Employee, Role::Admin, Role::Admindev] {
        assert_eq!(Role::from_str(role.as_str()), Some(role));
    }
}

#[test]
fn role_rejects_unknown_tags() {
    assert_eq!(Role::from_str("superadmin"), None);
    assert_eq!(Role::from_str("Admin"), None);
    assert_eq!(Role::from_str(""), None);
}

#[test]
fn role_serializes_as_lowercase_tag() {
    let json = serde_json::to_string(&Role::Admindev).unwrap();
    assert_eq!(json, "\"admindev\"");
}

#[test]
fn session_user_serializes_role_as_string() {
    let user = SessionUser {
        id: Uuid::nil(),
        email: "a@b.com".to_owned(),
        name: "Alice".to_owned(),
        role: Role::Employee,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["role"], "employee");
    assert_eq!(value["email"], "a@b.com");
}
