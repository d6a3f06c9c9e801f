use crate::{Result as RouterErrorResult, RouterError, normalize};

use hp_config::RoutesConfig;
use hp_core::{ROOT_PATH, ViewId};

use std::collections::HashMap;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::debug;

/// Routes every deployment mounts
const STANDARD_ROUTES: [(&str, ViewId); 7] = [
    ("/profile", ViewId::Profile),
    ("/doctors", ViewId::DoctorDirectory),
    ("/chat", ViewId::Chat),
    ("/video-call", ViewId::VideoCall),
    ("/blog", ViewId::Blog),
    ("/pharmacy", ViewId::Pharmacy),
    ("/book-appointment", ViewId::BookAppointment),
];

/// Routes only some deployments mount
const OPTIONAL_ROUTES: [(&str, ViewId); 2] =
    [("/reports", ViewId::Reports), ("/payment", ViewId::Payment)];

/// Static path → view mapping, fixed once built.
///
/// The root path is never an entry: its view depends on the role and is
/// picked by [`crate::RoleResolver`]. Dashboards are likewise only reachable
/// through root.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: HashMap<String, ViewId>,
}

impl RouteTable {
    /// Build a table from `(path, view)` pairs.
    ///
    /// # Errors
    /// - `InvalidRoute` if a path does not start with `/`, is root, is not in
    ///   normalized form, or maps to a dashboard
    /// - `DuplicateRoute` if a path appears twice
    #[track_caller]
    pub fn new<I, P>(routes: I) -> RouterErrorResult<Self>
    where
        I: IntoIterator<Item = (P, ViewId)>,
        P: Into<String>,
    {
        let mut entries = HashMap::new();

        for (path, view) in routes {
            let path = path.into();
            Self::validate_entry(&path, view)?;

            if entries.contains_key(&path) {
                return Err(RouterError::DuplicateRoute {
                    path,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            entries.insert(path, view);
        }

        Ok(Self { entries })
    }

    /// The routes mounted by the standard portal.
    pub fn standard() -> Self {
        Self::from_static(&STANDARD_ROUTES)
    }

    /// Standard routes plus reports and payment.
    pub fn extended() -> Self {
        let mut table = Self::standard();
        table.entries.extend(
            OPTIONAL_ROUTES
                .iter()
                .map(|(path, view)| (path.to_string(), *view)),
        );
        table
    }

    /// Compose the table a deployment configured.
    ///
    /// # Errors
    /// - `InvalidRoute` if a disabled path is neither a standard nor an
    ///   optional route
    /// - `UnknownView` if an extra entry names a view that does not exist
    /// - anything [`RouteTable::new`] rejects
    #[track_caller]
    pub fn from_config(config: &RoutesConfig) -> RouterErrorResult<Self> {
        let location = Location::caller();

        for path in &config.disabled {
            let known = STANDARD_ROUTES
                .iter()
                .chain(OPTIONAL_ROUTES.iter())
                .any(|(route, _)| *route == path.as_str());
            if !known {
                return Err(RouterError::invalid_route(
                    path.as_str(),
                    "disabled path is not a built-in route",
                ));
            }
        }

        let optional: &[(&str, ViewId)] = if config.include_optional {
            &OPTIONAL_ROUTES
        } else {
            &[]
        };

        let mut routes: Vec<(String, ViewId)> = STANDARD_ROUTES
            .iter()
            .chain(optional)
            .map(|(path, view)| (path.to_string(), *view))
            .filter(|(path, _)| !config.disabled.contains(path))
            .collect();

        for extra in &config.extra {
            let view = ViewId::from_str(&extra.view).map_err(|_| RouterError::UnknownView {
                path: extra.path.clone(),
                view: extra.view.clone(),
                location: ErrorLocation::from(location),
            })?;
            routes.push((extra.path.clone(), view));
        }

        let table = Self::new(routes)?;
        debug!("Route table built with {} entries", table.len());
        Ok(table)
    }

    /// View for an already normalized path.
    pub fn lookup(&self, path: &str) -> Option<ViewId> {
        self.entries.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by path.
    pub fn routes(&self) -> Vec<(&str, ViewId)> {
        let mut routes: Vec<_> = self
            .entries
            .iter()
            .map(|(path, view)| (path.as_str(), *view))
            .collect();
        routes.sort_by_key(|(path, _)| *path);
        routes
    }

    fn from_static(routes: &[(&str, ViewId)]) -> Self {
        Self {
            entries: routes
                .iter()
                .map(|(path, view)| (path.to_string(), *view))
                .collect(),
        }
    }

    #[track_caller]
    fn validate_entry(path: &str, view: ViewId) -> RouterErrorResult<()> {
        if !path.starts_with('/') {
            return Err(RouterError::invalid_route(path, "path must start with '/'"));
        }
        if path == ROOT_PATH {
            return Err(RouterError::invalid_route(
                path,
                "root is resolved by role and cannot be mapped",
            ));
        }
        if normalize(path) != path {
            return Err(RouterError::invalid_route(
                path,
                "path must not end with '/' or carry a query or fragment",
            ));
        }
        if view.is_dashboard() {
            return Err(RouterError::invalid_route(
                path,
                format!("{view} is only reachable through '/'"),
            ));
        }
        Ok(())
    }
}
