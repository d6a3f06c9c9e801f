use crate::PortalResult;

use hp_auth::SessionStore;
use hp_config::Config;
use hp_core::{Doctor, Identity, ROOT_PATH, ViewDecision};
use hp_handoff::{CHAT_DOCTOR, HandoffChannels, HandoffStorage, MemoryStorage, SELECTED_DOCTOR};
use hp_router::{NavMenu, RouteGate, RouteTable, normalize};

use std::sync::Arc;

use log::{debug, info};

const BOOK_APPOINTMENT_PATH: &str = "/book-appointment";
const CHAT_PATH: &str = "/chat";

/// The surface the presentation layer talks to.
///
/// Owns the session, the gate and the handoff channels, and remembers the
/// location the presentation layer is showing. The presentation layer
/// never reads the session or the route table directly: it acts on the
/// [`ViewDecision`]s returned here.
#[derive(Debug)]
pub struct Portal<S: HandoffStorage = MemoryStorage> {
    sessions: SessionStore,
    gate: RouteGate,
    handoff: HandoffChannels<S>,
    location: String,
}

impl Portal<MemoryStorage> {
    pub fn new(table: RouteTable) -> Self {
        Self::with_storage(table, MemoryStorage::new())
    }

    /// Build the portal a configuration describes.
    pub fn from_config(config: &Config) -> PortalResult<Self> {
        let table = RouteTable::from_config(&config.routes)?;
        info!("Portal routes: {}", table.len());
        Ok(Self::new(table))
    }
}

impl<S: HandoffStorage> Portal<S> {
    pub fn with_storage(table: RouteTable, storage: S) -> Self {
        Self {
            sessions: SessionStore::new(),
            gate: RouteGate::new(table),
            handoff: HandoffChannels::new(storage),
            location: ROOT_PATH.to_string(),
        }
    }

    /// Sign in through the login form.
    pub fn submit_login(&mut self, email: &str, role: &str) -> PortalResult<Arc<Identity>> {
        Ok(hp_auth::submit_login(&self.sessions, email, role)?)
    }

    /// Sign out; the next screen is the login form.
    pub fn submit_logout(&mut self) {
        self.sessions.logout();
        self.handoff.clear(SELECTED_DOCTOR);
        self.handoff.clear(CHAT_DOCTOR);
        self.location = ROOT_PATH.to_string();
    }

    /// Resolve `path` and track where the presentation layer ends up.
    pub fn navigate(&mut self, path: &str) -> ViewDecision {
        let decision = self.gate.resolve_for(path, &self.sessions);

        match &decision {
            ViewDecision::Render(..) => self.location = normalize(path).to_string(),
            ViewDecision::Redirect(target) => self.location = target.clone(),
            ViewDecision::ShowLogin => {}
        }

        debug!("navigate '{path}' -> {decision} (location {})", self.location);
        decision
    }

    /// Re-resolve the current location.
    pub fn current_view(&self) -> ViewDecision {
        self.gate.resolve_for(&self.location, &self.sessions)
    }

    /// "Book Now" in the directory: open the form with `doctor` preselected.
    ///
    /// The doctor is handed over only when the form actually renders.
    pub fn book_with(&mut self, doctor: &Doctor) -> PortalResult<ViewDecision> {
        let decision = self.navigate(BOOK_APPOINTMENT_PATH);
        if matches!(decision, ViewDecision::Render(..)) {
            self.handoff.set(SELECTED_DOCTOR, doctor)?;
            info!("Selected {} for booking", doctor.name);
        }
        Ok(decision)
    }

    /// "Chat" in the directory: open the chat with `doctor`.
    ///
    /// The doctor is handed over only when the chat actually renders.
    pub fn chat_with(&mut self, doctor: &Doctor) -> PortalResult<ViewDecision> {
        let decision = self.navigate(CHAT_PATH);
        if matches!(decision, ViewDecision::Render(..)) {
            self.handoff.set(CHAT_DOCTOR, doctor)?;
            info!("Opening chat with {}", doctor.name);
        }
        Ok(decision)
    }

    /// Consumed by the booking form when it mounts.
    pub fn take_booking_doctor(&self) -> PortalResult<Option<Doctor>> {
        Ok(self.handoff.take_if_present(SELECTED_DOCTOR)?)
    }

    /// Consumed by the chat view when it mounts.
    pub fn take_chat_doctor(&self) -> PortalResult<Option<Doctor>> {
        Ok(self.handoff.take_if_present(CHAT_DOCTOR)?)
    }

    pub fn nav_menu(&self) -> NavMenu {
        NavMenu::for_table(self.gate.table())
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn current_identity(&self) -> Option<Arc<Identity>> {
        self.sessions.current()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}
