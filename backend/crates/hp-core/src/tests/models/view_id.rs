use crate::{CoreError, ViewId};

use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn test_view_id_from_str_accepts_every_name() {
    for view in ViewId::ALL {
        assert_eq!(ViewId::from_str(view.as_str()).unwrap(), view);
    }
}

#[test]
fn test_view_id_names_are_unique() {
    let names: HashSet<_> = ViewId::ALL.iter().map(ViewId::as_str).collect();
    assert_eq!(names.len(), ViewId::ALL.len());
}

#[test]
fn given_unknown_view_name_when_parsed_then_unknown_view_error() {
    assert!(matches!(
        ViewId::from_str("settings"),
        Err(CoreError::UnknownView { .. })
    ));
}

#[test]
fn test_only_role_homes_are_dashboards() {
    let dashboards: Vec<_> = ViewId::ALL.into_iter().filter(ViewId::is_dashboard).collect();

    assert_eq!(
        dashboards,
        vec![
            ViewId::PatientDashboard,
            ViewId::DoctorDashboard,
            ViewId::AdminDashboard
        ]
    );
}

#[test]
fn test_view_id_serde_matches_as_str() {
    assert_eq!(
        serde_json::to_string(&ViewId::BookAppointment).unwrap(),
        "\"book-appointment\""
    );
}
