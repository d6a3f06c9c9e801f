//! Mock sign-in.
//!
//! There is no credential check: the login form fabricates a principal from
//! the submitted email and the selected role tab, and any well-formed
//! submission succeeds.

use crate::{Result as AuthErrorResult, SessionStore};

use hp_core::{Identity, LoginRequest, Role};

use std::str::FromStr;
use std::sync::Arc;

/// Every demo principal shares this id
pub const DEMO_USER_ID: &str = "1";

/// Display name the demo assigns to each role.
pub fn demo_display_name(role: Role) -> &'static str {
    match role {
        Role::Patient => "John Patient",
        Role::Doctor => "Dr. Smith",
        Role::Admin => "Admin User",
    }
}

/// Build the submission the login form would send for `(email, role)`.
///
/// The role text is passed through untouched so validation in
/// [`SessionStore::login`] rejects anything outside the closed set; the
/// name for such a role falls through to the admin name.
pub fn login_request(email: &str, role: &str) -> LoginRequest {
    let name = demo_display_name(Role::from_str(role).unwrap_or(Role::Admin));
    LoginRequest::new(DEMO_USER_ID, name, email, role)
}

/// Submit the login form against `store`.
pub fn submit_login(
    store: &SessionStore,
    email: &str,
    role: &str,
) -> AuthErrorResult<Arc<Identity>> {
    store.login(login_request(email, role))
}
