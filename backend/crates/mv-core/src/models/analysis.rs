use crate::ImagingType;

use serde::{Deserialize, Serialize};

/// Request body of the `analyze-image` function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Image encoded as a `data:` URL
    pub image: String,
    pub imaging_type: ImagingType,
    #[serde(default)]
    pub body_region: String,
    pub patient_name: String,
}

/// Narrative sections of an analysis. Missing sections decode as empty text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSections {
    pub summary: String,
    pub findings: String,
    pub description: String,
    pub symptoms: String,
    pub recommendations: String,
}

/// Structured result of an image analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    pub disease_found: bool,
    pub disease_name: Option<String>,
    pub disease_stage: Option<String>,
    pub analysis: AnalysisSections,
}
