use crate::{RoleResolver, RouteTable, normalize};

use hp_auth::SessionStore;
use hp_core::{Identity, ROOT_PATH, ViewDecision};

use std::sync::Arc;

use log::debug;

/// Decides what to mount for a requested path.
///
/// Resolution order:
/// 1. No session → `ShowLogin`; the requested path is dropped, not remembered
/// 2. Static route match → `Render(view, identity)`
/// 3. Root → `Render(home view for the role, identity)`
/// 4. Anything else → `Redirect("/")`
///
/// Never fails and never mutates the session or the table.
#[derive(Debug, Clone)]
pub struct RouteGate {
    table: RouteTable,
}

impl RouteGate {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn resolve(&self, requested: &str, session: Option<&Arc<Identity>>) -> ViewDecision {
        let Some(identity) = session else {
            debug!("No session, showing login");
            return ViewDecision::ShowLogin;
        };

        let path = normalize(requested);

        let decision = if let Some(view) = self.table.lookup(path) {
            ViewDecision::Render(view, identity.clone())
        } else if path == ROOT_PATH {
            ViewDecision::Render(RoleResolver::resolve(identity.role()), identity.clone())
        } else {
            ViewDecision::Redirect(ROOT_PATH.to_string())
        };

        debug!("Resolved '{requested}' for {}: {decision}", identity.role());
        decision
    }

    /// Resolve against a live store, taking one snapshot for the whole call.
    pub fn resolve_for(&self, requested: &str, store: &SessionStore) -> ViewDecision {
        let session = store.current();
        self.resolve(requested, session.as_ref())
    }
}
