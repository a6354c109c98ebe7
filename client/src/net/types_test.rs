use super::*;

#[test]
fn role_tags_round_trip_through_serde() {
    for (role, tag) in [
        (Role::Client, "\"client\""),
        (Role::Employee, "\"employee\""),
        (Role::Admin, "\"admin\""),
        (Role::Admindev, "\"admindev\""),
    ] {
        assert_eq!(serde_json::to_string(&role).unwrap(), tag);
        assert_eq!(serde_json::from_str::<Role>(tag).unwrap(), role);
    }
}

#[test]
fn unknown_role_tag_fails_deserialization() {
    assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
    assert!(serde_json::from_str::<Role>("\"ADMIN\"").is_err());
}

#[test]
fn user_parses_from_identity_endpoint_shape() {
    let json = r#"{"id":"1","email":"a@b.com","name":"A","role":"admin"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn staff_and_admin_partitions() {
    assert!(!Role::Client.is_staff());
    assert!(Role::Employee.is_staff());
    assert!(!Role::Employee.is_admin());
    assert!(Role::Admin.is_admin());
    assert!(Role::Admindev.is_admin());
}

#[test]
fn invoice_round_trips() {
    let invoice = Invoice {
        id: "i1".to_owned(),
        customer_id: "c1".to_owned(),
        description: "oil change".to_owned(),
        amount_cents: 4_500,
        status: "issued".to_owned(),
        issued_at: Some("2026-03-02 10:00".to_owned()),
    };
    let json = serde_json::to_string(&invoice).unwrap();
    assert_eq!(serde_json::from_str::<Invoice>(&json).unwrap(), invoice);
}
