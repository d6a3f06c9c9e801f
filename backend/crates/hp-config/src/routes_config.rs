use crate::{ConfigError, ConfigErrorResult, DEFAULT_INCLUDE_OPTIONAL_ROUTES};

use hp_core::{ROOT_PATH, ViewId};

use std::str::FromStr;

use serde::Deserialize;

/// Which static routes the portal mounts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Also mount `/reports` and `/payment`
    pub include_optional: bool,
    /// Paths to leave out of the table
    pub disabled: Vec<String>,
    /// Additional `path → view` entries
    pub extra: Vec<RouteEntryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntryConfig {
    pub path: String,
    pub view: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            include_optional: DEFAULT_INCLUDE_OPTIONAL_ROUTES,
            disabled: Vec::new(),
            extra: Vec::new(),
        }
    }
}

impl RoutesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for path in &self.disabled {
            Self::validate_path("routes.disabled", path)?;
        }

        for entry in &self.extra {
            Self::validate_path("routes.extra.path", &entry.path)?;

            let view = ViewId::from_str(&entry.view).map_err(|_| {
                ConfigError::routes(format!(
                    "routes.extra.view '{}' is not a known view",
                    entry.view
                ))
            })?;
            if view.is_dashboard() {
                return Err(ConfigError::routes(format!(
                    "routes.extra.view '{view}' is only reachable through '/'"
                )));
            }
        }

        Ok(())
    }

    fn validate_path(key: &str, path: &str) -> ConfigErrorResult<()> {
        if !path.starts_with('/') {
            return Err(ConfigError::routes(format!(
                "{key} '{path}' must start with '/'"
            )));
        }
        if path == ROOT_PATH {
            return Err(ConfigError::routes(format!(
                "{key} cannot be '/', root is resolved by role"
            )));
        }
        if path.ends_with('/') || path.contains(['?', '#']) {
            return Err(ConfigError::routes(format!(
                "{key} '{path}' must not end with '/' or carry a query"
            )));
        }
        Ok(())
    }
}
