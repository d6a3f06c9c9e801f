pub mod error;
pub mod nav;
pub mod role_resolver;
pub mod route_gate;
pub mod route_path;
pub mod route_table;

pub use error::{Result, RouterError};
pub use nav::{NavItem, NavMenu};
pub use role_resolver::RoleResolver;
pub use route_gate::RouteGate;
pub use route_path::normalize;
pub use route_table::RouteTable;

#[cfg(test)]
mod tests;
