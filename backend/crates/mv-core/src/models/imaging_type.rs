use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Imaging modality of an uploaded scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagingType {
    Xray,
    Ct,
    Mri,
    /// Dermatological photograph
    Skin,
}

impl ImagingType {
    pub const ALL: [ImagingType; 4] = [Self::Xray, Self::Ct, Self::Mri, Self::Skin];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xray => "xray",
            Self::Ct => "ct",
            Self::Mri => "mri",
            Self::Skin => "skin",
        }
    }

    /// Long label, used in prompts and reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Xray => "X-Ray",
            Self::Ct => "CT Scan",
            Self::Mri => "MRI",
            Self::Skin => "Skin Photo",
        }
    }

    /// Short label, used for analytics breakdowns
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Xray => "X-Ray",
            Self::Ct => "CT",
            Self::Mri => "MRI",
            Self::Skin => "Skin",
        }
    }
}

impl FromStr for ImagingType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "xray" => Ok(Self::Xray),
            "ct" => Ok(Self::Ct),
            "mri" => Ok(Self::Mri),
            "skin" => Ok(Self::Skin),
            _ => Err(CoreError::InvalidImagingType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ImagingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
