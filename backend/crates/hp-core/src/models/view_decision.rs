use crate::{Identity, ViewId};

use std::sync::Arc;

/// What the presentation layer should mount for a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewDecision {
    /// No session: the login form, whatever path was requested
    ShowLogin,
    /// Mount the view for the signed-in identity
    Render(ViewId, Arc<Identity>),
    /// Replace the current location with this path
    Redirect(String),
}

impl ViewDecision {
    pub fn view(&self) -> Option<ViewId> {
        match self {
            Self::Render(view, _) => Some(*view),
            _ => None,
        }
    }

    pub fn identity(&self) -> Option<&Arc<Identity>> {
        match self {
            Self::Render(_, identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, Self::ShowLogin)
    }
}

impl std::fmt::Display for ViewDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowLogin => write!(f, "login"),
            Self::Render(view, identity) => {
                write!(f, "render {view} as {} ({})", identity.name(), identity.role())
            }
            Self::Redirect(path) => write!(f, "redirect {path}"),
        }
    }
}
