pub mod collection;
pub(crate) mod json_order;
pub mod order;
pub mod query;
#[allow(clippy::module_inception)]
pub mod record_store;

pub const DIAGNOSES: &str = "diagnoses";
pub const DOCTOR_NOTES: &str = "doctor_notes";
pub const PROFILES: &str = "profiles";

pub(crate) const ID_FIELD: &str = "id";
pub(crate) const CREATED_AT_FIELD: &str = "created_at";
