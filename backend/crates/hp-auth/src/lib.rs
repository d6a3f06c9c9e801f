pub mod active_session;
pub mod error;
pub mod login_form;
pub mod session_store;

pub use active_session::ActiveSession;
pub use error::{AuthError, Result};
pub use login_form::{demo_display_name, login_request, submit_login, DEMO_USER_ID};
pub use session_store::SessionStore;
