use crate::{CoreError, Identity, LoginRequest, Role};

fn request(role: &str) -> LoginRequest {
    LoginRequest::new("1", "John Patient", "j@x.com", role)
}

#[test]
fn given_valid_request_when_converted_then_identity_carries_fields() {
    let identity = Identity::try_from(request("patient")).unwrap();

    assert_eq!(identity.id(), "1");
    assert_eq!(identity.name(), "John Patient");
    assert_eq!(identity.email(), "j@x.com");
    assert_eq!(identity.role(), Role::Patient);
}

#[test]
fn given_role_outside_closed_set_when_converted_then_validation_error_on_role() {
    let result = Identity::try_from(request("superuser"));

    let err = result.unwrap_err();
    assert!(matches!(err, CoreError::Validation { field: "role", .. }));
    assert!(err.to_string().contains("superuser"));
}

#[test]
fn given_empty_fields_when_converted_then_validation_error_names_field() {
    let cases = [
        (LoginRequest::new("", "A", "a@a.com", "admin"), "id"),
        (LoginRequest::new("1", "", "a@a.com", "admin"), "name"),
        (LoginRequest::new("1", "A", "", "admin"), "email"),
        (LoginRequest::new("1", "A", "a@a.com", ""), "role"),
    ];

    for (request, expected) in cases {
        let err = Identity::try_from(request).unwrap_err();
        assert_eq!(err.field(), Some(expected));
    }
}

#[test]
fn given_whitespace_only_name_when_converted_then_rejected() {
    let result = Identity::try_from(LoginRequest::new("1", "   ", "a@a.com", "doctor"));

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "name", .. })
    ));
}

#[test]
fn given_unvalidated_email_when_converted_then_accepted_as_is() {
    // No format check: any non-empty string is an address
    let identity =
        Identity::try_from(LoginRequest::new("1", "A", "not-an-email", "admin")).unwrap();

    assert_eq!(identity.email(), "not-an-email");
}

#[test]
fn given_json_with_invalid_role_when_deserialized_then_fails() {
    let json = r#"{"id":"1","name":"A","email":"a@a.com","role":"superuser"}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_identity_when_serialized_then_deserializes_to_equal_value() {
    let identity = Identity::try_from(request("doctor")).unwrap();

    let json = serde_json::to_string(&identity).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert!(json.contains("\"role\":\"doctor\""));
    assert_eq!(restored, identity);
}
