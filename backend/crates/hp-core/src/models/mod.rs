pub mod doctor;
pub mod identity;
pub mod role;
pub mod view_decision;
pub mod view_id;
