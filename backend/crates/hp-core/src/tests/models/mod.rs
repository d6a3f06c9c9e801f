mod doctor;
mod identity;
mod role;
mod view_decision;
mod view_id;
