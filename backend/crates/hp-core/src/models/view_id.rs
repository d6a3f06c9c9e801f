use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A screen the presentation layer can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    PatientDashboard,
    DoctorDashboard,
    AdminDashboard,
    Profile,
    DoctorDirectory,
    Chat,
    VideoCall,
    Blog,
    Pharmacy,
    BookAppointment,
    Reports,
    Payment,
}

impl ViewId {
    pub const ALL: [ViewId; 12] = [
        ViewId::PatientDashboard,
        ViewId::DoctorDashboard,
        ViewId::AdminDashboard,
        ViewId::Profile,
        ViewId::DoctorDirectory,
        ViewId::Chat,
        ViewId::VideoCall,
        ViewId::Blog,
        ViewId::Pharmacy,
        ViewId::BookAppointment,
        ViewId::Reports,
        ViewId::Payment,
    ];

    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PatientDashboard => "patient-dashboard",
            Self::DoctorDashboard => "doctor-dashboard",
            Self::AdminDashboard => "admin-dashboard",
            Self::Profile => "profile",
            Self::DoctorDirectory => "doctor-directory",
            Self::Chat => "chat",
            Self::VideoCall => "video-call",
            Self::Blog => "blog",
            Self::Pharmacy => "pharmacy",
            Self::BookAppointment => "book-appointment",
            Self::Reports => "reports",
            Self::Payment => "payment",
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(
            self,
            Self::PatientDashboard | Self::DoctorDashboard | Self::AdminDashboard
        )
    }
}

impl FromStr for ViewId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| CoreError::UnknownView {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
