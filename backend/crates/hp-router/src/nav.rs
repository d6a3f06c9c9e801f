//! Top navigation bar entries.

use crate::{RouteTable, normalize};

use hp_core::ROOT_PATH;

/// A link in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavItem {
    /// Highlighted when the current location is exactly this path.
    pub fn is_active(&self, location: &str) -> bool {
        normalize(location) == self.path
    }
}

const MAIN_ITEMS: [NavItem; 5] = [
    NavItem { path: ROOT_PATH, label: "Dashboard" },
    NavItem { path: "/doctors", label: "Doctors" },
    NavItem { path: "/chat", label: "Consultation" },
    NavItem { path: "/blog", label: "Health Tips" },
    NavItem { path: "/pharmacy", label: "Pharmacy" },
];

const PROFILE_ITEM: NavItem = NavItem {
    path: "/profile",
    label: "Profile",
};

/// The links a signed-in user sees, restricted to routes that exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    pub items: Vec<NavItem>,
    pub profile: Option<NavItem>,
}

impl NavMenu {
    pub fn for_table(table: &RouteTable) -> Self {
        let reachable = |item: &NavItem| item.path == ROOT_PATH || table.contains(item.path);

        Self {
            items: MAIN_ITEMS.into_iter().filter(|i| reachable(i)).collect(),
            profile: Some(PROFILE_ITEM).filter(|i| reachable(i)),
        }
    }

    /// The entry matching `location`, if any.
    pub fn active(&self, location: &str) -> Option<&NavItem> {
        self.items
            .iter()
            .chain(self.profile.iter())
            .find(|item| item.is_active(location))
    }
}
