use crate::{Result as RouterErrorResult, RouterError};

use hp_core::{Role, ViewId};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Picks the home view shown at `/` for each role
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleResolver;

impl RoleResolver {
    pub fn resolve(role: Role) -> ViewId {
        match role {
            Role::Patient => ViewId::PatientDashboard,
            Role::Doctor => ViewId::DoctorDashboard,
            Role::Admin => ViewId::AdminDashboard,
        }
    }

    /// Resolve a role given by name.
    ///
    /// Fails with `UnknownRole` instead of defaulting; a role that reaches
    /// here unparsed means an identity was built without validation.
    #[track_caller]
    pub fn resolve_name(role: &str) -> RouterErrorResult<ViewId> {
        Role::from_str(role)
            .map(Self::resolve)
            .map_err(|_| RouterError::UnknownRole {
                value: role.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
