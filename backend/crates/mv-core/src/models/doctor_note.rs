use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Free-text note attached to a diagnosis. `diagnosis_id` is not checked
/// against the diagnoses collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorNote {
    pub diagnosis_id: String,
    pub user_id: String,
    pub note: String,
}

impl DoctorNote {
    #[track_caller]
    pub fn new(diagnosis_id: &str, user_id: &str, note: &str) -> CoreErrorResult<Self> {
        let note = note.trim();
        if note.is_empty() {
            return Err(CoreError::validation("Note cannot be empty"));
        }

        Ok(Self {
            diagnosis_id: diagnosis_id.to_string(),
            user_id: user_id.to_string(),
            note: note.to_string(),
        })
    }
}
