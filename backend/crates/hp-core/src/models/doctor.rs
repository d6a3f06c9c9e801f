use serde::{Deserialize, Serialize};

/// Doctor record handed from the directory to the booking and chat views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_available: Option<String>,
    #[serde(default)]
    pub video_consultation: bool,
    #[serde(default)]
    pub in_person_consultation: bool,
}

impl Doctor {
    pub fn new(id: u32, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
            consultation_fee: None,
            next_available: None,
            video_consultation: false,
            in_person_consultation: false,
        }
    }
}
