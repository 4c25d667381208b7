pub mod analysis;
pub mod auth_event;
pub mod diagnosis;
pub mod doctor_note;
pub mod imaging_type;
pub mod profile;
pub mod record;
pub mod session;
pub mod user;
