use crate::{CoreError, Result as CoreErrorResult, Role};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raw login submission, not yet validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl LoginRequest {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// The signed-in principal.
///
/// Only obtainable through [`Identity::try_from`] on a [`LoginRequest`], so a
/// constructed value always carries non-empty fields and a role from the
/// closed set. Fields are private; an identity never changes after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LoginRequest")]
pub struct Identity {
    id: String,
    name: String,
    email: String,
    role: Role,
}

impl Identity {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    #[track_caller]
    fn required(field: &'static str, value: String) -> CoreErrorResult<String> {
        if value.trim().is_empty() {
            return Err(CoreError::validation(
                field,
                format!("{field} cannot be empty"),
            ));
        }
        Ok(value)
    }
}

impl TryFrom<LoginRequest> for Identity {
    type Error = CoreError;

    #[track_caller]
    fn try_from(request: LoginRequest) -> CoreErrorResult<Self> {
        let id = Self::required("id", request.id)?;
        let name = Self::required("name", request.name)?;
        let email = Self::required("email", request.email)?;

        let role = Role::from_str(&request.role).map_err(|_| {
            CoreError::validation(
                "role",
                format!(
                    "'{}' is not one of patient, doctor, admin",
                    request.role
                ),
            )
        })?;

        Ok(Self {
            id,
            name,
            email,
            role,
        })
    }
}
