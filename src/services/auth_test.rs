use super::*;

#[test]
fn authorize_url_carries_state_and_client() {
    let config = IdpConfig::for_tests();
    let url = config.build_authorize_url("abc123");

    assert!(url.starts_with("https://idp.test/authorize?"));
    assert!(url.contains("client_id=test-client"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("state=abc123"));
}

#[test]
fn display_name_prefers_provider_name() {
    let profile = IdpProfile {
        sub: "sub-1".to_owned(),
        email: "maria@example.com".to_owned(),
        name: Some("  Maria Lopez  ".to_owned()),
    };
    assert_eq!(display_name(&profile), "Maria Lopez");
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    let profile = IdpProfile {
        sub: "sub-2".to_owned(),
        email: "jsmith@example.com".to_owned(),
        name: None,
    };
    assert_eq!(display_name(&profile), "jsmith");
}

#[test]
fn display_name_ignores_blank_provider_name() {
    let profile = IdpProfile {
        sub: "sub-3".to_owned(),
        email: "pat@example.com".to_owned(),
        name: Some("   ".to_owned()),
    };
    assert_eq!(display_name(&profile), "pat");
}
