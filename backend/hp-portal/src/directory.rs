use crate::{PortalError, PortalResult};

use hp_core::Doctor;

use std::panic::Location;

use error_location::ErrorLocation;

/// Doctors the booking form offers
pub fn demo_directory() -> Vec<Doctor> {
    vec![
        Doctor::new(1, "Dr. Sarah Johnson", "Cardiology"),
        Doctor::new(2, "Dr. Michael Chen", "General Medicine"),
        Doctor::new(3, "Dr. Emily Rodriguez", "Dermatology"),
        Doctor::new(4, "Dr. James Wilson", "Orthopedics"),
    ]
}

#[track_caller]
pub fn find_doctor(id: u32) -> PortalResult<Doctor> {
    demo_directory()
        .into_iter()
        .find(|d| d.id == id)
        .ok_or(PortalError::UnknownDoctor {
            id,
            location: ErrorLocation::from(Location::caller()),
        })
}
