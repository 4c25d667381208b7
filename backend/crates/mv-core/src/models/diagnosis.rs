use crate::{AnalysisReport, AnalysisSections, ImagingType};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub user_id: String,
    pub patient_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub imaging_type: ImagingType,
    #[serde(default)]
    pub body_region: Option<String>,
    #[serde(default)]
    pub diagnosis_result: Option<AnalysisSections>,
    #[serde(default)]
    pub disease_found: Option<bool>,
    #[serde(default)]
    pub disease_name: Option<String>,
    #[serde(default)]
    pub disease_stage: Option<String>,
}

impl Diagnosis {
    /// Build a diagnosis row from a finished analysis.
    pub fn from_report(
        user_id: &str,
        patient_name: &str,
        image_url: &str,
        imaging_type: ImagingType,
        body_region: &str,
        report: AnalysisReport,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            patient_name: patient_name.to_string(),
            image_url: Some(image_url.to_string()),
            imaging_type,
            body_region: Some(body_region.to_string()).filter(|r| !r.is_empty()),
            diagnosis_result: Some(report.analysis),
            disease_found: Some(report.disease_found),
            disease_name: report.disease_name,
            disease_stage: report.disease_stage,
        }
    }
}
