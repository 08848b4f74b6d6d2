use crate::{Credentials, LoginResponse};

#[test]
fn test_credentials_debug_redacts_password() {
    let credentials = Credentials::new("admin", "admin123");

    let debug = format!("{credentials:?}");

    assert!(debug.contains("admin"));
    assert!(!debug.contains("admin123"));
}

#[test]
fn test_credentials_wire_format() {
    let json = serde_json::to_value(Credentials::new("admin", "secret")).unwrap();

    assert_eq!(json["username"], "admin");
    assert_eq!(json["password"], "secret");
}

#[test]
fn test_login_response_parses_success_flag() {
    let ok: LoginResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    let denied: LoginResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();

    assert!(ok.success);
    assert!(!denied.success);
}

#[test]
fn test_credentials_missing_fields_default_to_empty() {
    let credentials: Credentials = serde_json::from_str(r#"{"username":"admin"}"#).unwrap();

    assert_eq!(credentials.username, "admin");
    assert!(credentials.password.is_empty());
}
