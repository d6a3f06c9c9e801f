pub mod console;
pub mod directory;
pub mod error;
pub mod logger;
pub mod portal;


pub use console::{Command, Console, TakeTarget};
pub use directory::{demo_directory, find_doctor};
pub use error::{PortalError, Result as PortalResult};
pub use portal::Portal;
