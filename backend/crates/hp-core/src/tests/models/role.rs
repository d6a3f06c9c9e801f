use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Patient.as_str(), "patient");
    assert_eq!(Role::Doctor.as_str(), "doctor");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn given_unknown_role_when_parsed_then_returns_unknown_role_error() {
    let result = Role::from_str("superuser");

    assert!(matches!(
        result,
        Err(CoreError::UnknownRole { ref value, .. }) if value == "superuser"
    ));
}

#[test]
fn given_uppercase_role_when_parsed_then_rejected() {
    assert!(Role::from_str("Patient").is_err());
    assert!(Role::from_str("ADMIN").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_label() {
    assert_eq!(Role::Patient.label(), "Patient");
    assert_eq!(Role::Doctor.label(), "Doctor");
    assert_eq!(Role::Admin.label(), "Admin");
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
}
