use crate::{RouteTable, RouterError};

use hp_config::{RouteEntryConfig, RoutesConfig};
use hp_core::ViewId;

#[test]
fn test_standard_table_routes() {
    let table = RouteTable::standard();

    assert_eq!(table.len(), 7);
    assert_eq!(table.lookup("/profile"), Some(ViewId::Profile));
    assert_eq!(table.lookup("/doctors"), Some(ViewId::DoctorDirectory));
    assert_eq!(table.lookup("/chat"), Some(ViewId::Chat));
    assert_eq!(table.lookup("/video-call"), Some(ViewId::VideoCall));
    assert_eq!(table.lookup("/blog"), Some(ViewId::Blog));
    assert_eq!(table.lookup("/pharmacy"), Some(ViewId::Pharmacy));
    assert_eq!(table.lookup("/book-appointment"), Some(ViewId::BookAppointment));
    assert_eq!(table.lookup("/reports"), None);
    assert_eq!(table.lookup("/"), None);
}

#[test]
fn test_extended_table_adds_reports_and_payment() {
    let table = RouteTable::extended();

    assert_eq!(table.len(), 9);
    assert_eq!(table.lookup("/reports"), Some(ViewId::Reports));
    assert_eq!(table.lookup("/payment"), Some(ViewId::Payment));
}

#[test]
fn given_builtin_tables_when_rebuilt_through_new_then_valid() {
    for table in [RouteTable::standard(), RouteTable::extended()] {
        let rebuilt = RouteTable::new(table.routes()).unwrap();
        assert_eq!(rebuilt.routes(), table.routes());
    }
}

#[test]
fn test_routes_sorted_by_path() {
    let table = RouteTable::standard();
    let paths: Vec<_> = table.routes().into_iter().map(|(path, _)| path).collect();

    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}

#[test]
fn given_root_path_when_new_then_invalid_route() {
    let result = RouteTable::new([("/", ViewId::Blog)]);

    assert!(matches!(result, Err(RouterError::InvalidRoute { .. })));
}

#[test]
fn given_relative_path_when_new_then_invalid_route() {
    let result = RouteTable::new([("blog", ViewId::Blog)]);

    assert!(matches!(result, Err(RouterError::InvalidRoute { .. })));
}

#[test]
fn given_unnormalized_path_when_new_then_invalid_route() {
    assert!(RouteTable::new([("/blog/", ViewId::Blog)]).is_err());
    assert!(RouteTable::new([("/blog?x=1", ViewId::Blog)]).is_err());
}

#[test]
fn given_dashboard_view_when_new_then_invalid_route() {
    let result = RouteTable::new([("/admin", ViewId::AdminDashboard)]);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("only reachable through '/'"));
}

#[test]
fn given_duplicate_path_when_new_then_duplicate_route() {
    let result = RouteTable::new([("/blog", ViewId::Blog), ("/blog", ViewId::Pharmacy)]);

    assert!(matches!(
        result,
        Err(RouterError::DuplicateRoute { ref path, .. }) if path == "/blog"
    ));
}

#[test]
fn given_default_config_when_from_config_then_standard_table() {
    let table = RouteTable::from_config(&RoutesConfig::default()).unwrap();

    assert_eq!(table.routes(), RouteTable::standard().routes());
}

#[test]
fn given_optional_and_disabled_when_from_config_then_composed() {
    let config = RoutesConfig {
        include_optional: true,
        disabled: vec!["/blog".to_string(), "/payment".to_string()],
        extra: vec![RouteEntryConfig {
            path: "/health-tips".to_string(),
            view: "blog".to_string(),
        }],
    };

    let table = RouteTable::from_config(&config).unwrap();

    assert_eq!(table.lookup("/blog"), None);
    assert_eq!(table.lookup("/payment"), None);
    assert_eq!(table.lookup("/reports"), Some(ViewId::Reports));
    assert_eq!(table.lookup("/health-tips"), Some(ViewId::Blog));
}

#[test]
fn given_extra_with_unknown_view_when_from_config_then_unknown_view() {
    let config = RoutesConfig {
        extra: vec![RouteEntryConfig {
            path: "/settings".to_string(),
            view: "settings".to_string(),
        }],
        ..RoutesConfig::default()
    };

    let result = RouteTable::from_config(&config);

    assert!(matches!(result, Err(RouterError::UnknownView { .. })));
}

#[test]
fn given_extra_colliding_with_standard_when_from_config_then_duplicate_route() {
    let config = RoutesConfig {
        extra: vec![RouteEntryConfig {
            path: "/chat".to_string(),
            view: "video-call".to_string(),
        }],
        ..RoutesConfig::default()
    };

    let result = RouteTable::from_config(&config);

    assert!(matches!(result, Err(RouterError::DuplicateRoute { .. })));
}

#[test]
fn given_unknown_disabled_path_when_from_config_then_invalid_route() {
    let config = RoutesConfig {
        disabled: vec!["/doctor".to_string()],
        ..RoutesConfig::default()
    };

    let result = RouteTable::from_config(&config);

    assert!(matches!(
        result,
        Err(RouterError::InvalidRoute { ref path, .. }) if path == "/doctor"
    ));
}

#[test]
fn given_optional_route_disabled_without_optional_when_from_config_then_accepted() {
    let config = RoutesConfig {
        disabled: vec!["/payment".to_string()],
        ..RoutesConfig::default()
    };

    let table = RouteTable::from_config(&config).unwrap();

    assert_eq!(table.routes(), RouteTable::standard().routes());
}

#[test]
fn given_duplicate_path_when_new_then_error_records_calling_file() {
    let result = RouteTable::new([("/chat", ViewId::Chat), ("/chat", ViewId::Chat)]);

    let Err(RouterError::DuplicateRoute { location, .. }) = result else {
        panic!("expected DuplicateRoute");
    };
    assert!(location.file.contains("tests"), "{}", location.file);
}

#[test]
fn given_unknown_extra_view_when_from_config_then_error_records_calling_file() {
    let config = RoutesConfig {
        extra: vec![RouteEntryConfig {
            path: "/settings".to_string(),
            view: "settings".to_string(),
        }],
        ..RoutesConfig::default()
    };

    let Err(RouterError::UnknownView { location, .. }) = RouteTable::from_config(&config) else {
        panic!("expected UnknownView");
    };
    assert!(location.file.contains("tests"), "{}", location.file);
}
