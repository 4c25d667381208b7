mod doctor_note;
mod imaging_type;
mod record;
mod user;
