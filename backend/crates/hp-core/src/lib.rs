pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::doctor::Doctor;
pub use models::identity::{Identity, LoginRequest};
pub use models::role::Role;
pub use models::view_decision::ViewDecision;
pub use models::view_id::ViewId;

/// Path of the role-dependent home view.
pub const ROOT_PATH: &str = "/";

#[cfg(test)]
mod tests;
