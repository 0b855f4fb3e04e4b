use crate::{LoginRequest, SendSmsRequest, SignupRequest};

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn test_signup_fields_present() {
    let request = SignupRequest {
        name: some("Ada"),
        email: some("ada@example.com"),
        password: some("pw"),
    };

    let fields = request.into_fields().unwrap();

    assert_eq!(fields.name, "Ada");
    assert_eq!(fields.email, "ada@example.com");
    assert_eq!(fields.password, "pw");
}

#[test]
fn test_signup_empty_string_counts_as_missing() {
    let request = SignupRequest {
        name: some(""),
        email: some("ada@example.com"),
        password: some("pw"),
    };

    assert!(request.into_fields().is_none());
}

#[test]
fn test_login_requires_both_fields() {
    let request = LoginRequest {
        email: some("ada@example.com"),
        password: None,
    };

    assert!(request.into_credentials().is_none());
}

#[test]
fn test_contact_message_body_format() {
    let request = SendSmsRequest {
        name: some("Ada"),
        email: some("ada@example.com"),
        message: some("Hello"),
        phone: some("+15551234567"),
    };

    let contact = request.into_message().unwrap();

    assert_eq!(contact.body(), "Contact from Ada (ada@example.com): Hello");
    assert_eq!(contact.phone, "+15551234567");
}

#[test]
fn test_send_sms_missing_phone() {
    let request = SendSmsRequest {
        name: some("Ada"),
        email: some("ada@example.com"),
        message: some("Hello"),
        phone: None,
    };

    assert!(request.into_message().is_none());
}
