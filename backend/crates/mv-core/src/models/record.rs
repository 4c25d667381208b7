use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored row: generated identity and insert timestamp plus the caller's
/// payload flattened alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
