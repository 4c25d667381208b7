use crate::{ANALYZE_IMAGE, MEDICAL_IMAGES_BUCKET, ObjectStorage, RemoteFunction};

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use log::{info, warn};
use mv_core::{AnalyzeRequest, Diagnosis, Envelope, ImagingType, Record, User};
use mv_db::Collection;

const PATIENT_REQUIRED_MESSAGE: &str = "Patient name is required";
const IMAGE_REQUIRED_MESSAGE: &str = "Please select an image to analyze";
const NO_ANALYSIS_MESSAGE: &str = "No analysis returned";

/// Input of one new analysis
#[derive(Debug, Clone)]
pub struct NewAnalysis {
    pub patient_name: String,
    pub imaging_type: ImagingType,
    pub body_region: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Upload, analyze and record a scan.
#[derive(Clone)]
pub struct AnalysisWorkflow {
    storage: ObjectStorage,
    remote: Arc<dyn RemoteFunction>,
    diagnoses: Collection<Diagnosis>,
}

impl AnalysisWorkflow {
    pub fn new(
        storage: ObjectStorage,
        remote: Arc<dyn RemoteFunction>,
        diagnoses: Collection<Diagnosis>,
    ) -> Self {
        Self {
            storage,
            remote,
            diagnoses,
        }
    }

    /// Run the whole flow for `user`. The first failing step's error is
    /// returned and later steps are skipped.
    pub async fn run(&self, user: &User, input: &NewAnalysis) -> Envelope<Record<Diagnosis>> {
        let patient_name = input.patient_name.trim();
        if patient_name.is_empty() {
            return Envelope::err(PATIENT_REQUIRED_MESSAGE);
        }
        if input.bytes.is_empty() {
            return Envelope::err(IMAGE_REQUIRED_MESSAGE);
        }

        let path = object_path(&user.id, &input.file_name, Utc::now().timestamp_millis());
        let uploaded = match self
            .storage
            .upload(MEDICAL_IMAGES_BUCKET, &path, &input.bytes)
            .await
            .into_result()
        {
            Ok(Some(uploaded)) => uploaded,
            Ok(None) => return Envelope::err("Upload returned no object"),
            Err(e) => return Envelope::err(e.message),
        };

        let public_url = self
            .storage
            .get_public_url(MEDICAL_IMAGES_BUCKET, &uploaded.path)
            .public_url;

        let request = AnalyzeRequest {
            image: data_url(&input.file_name, &input.bytes),
            imaging_type: input.imaging_type,
            body_region: input.body_region.trim().to_string(),
            patient_name: patient_name.to_string(),
        };

        let report = match self.remote.invoke(ANALYZE_IMAGE, &request).await.into_result() {
            Ok(Some(report)) => report,
            Ok(None) => return Envelope::err(NO_ANALYSIS_MESSAGE),
            Err(e) => {
                warn!("Analysis for '{}' failed: {}", patient_name, e);
                return Envelope::err(e.message);
            }
        };

        let diagnosis = Diagnosis::from_report(
            &user.id,
            patient_name,
            &public_url,
            input.imaging_type,
            &request.body_region,
            report,
        );

        info!(
            "Recorded {} analysis for '{}' (disease found: {})",
            input.imaging_type.label(),
            patient_name,
            diagnosis.disease_found.unwrap_or(false)
        );
        self.diagnoses.insert(&diagnosis).await
    }
}

/// `<user_id>/<unix_millis>.<ext>` where `ext` is the text after the last
/// dot of the file name, or the whole name when it has none.
pub fn object_path(user_id: &str, file_name: &str, unix_millis: i64) -> String {
    let ext = file_name.rsplit('.').next().unwrap_or(file_name);
    format!("{user_id}/{unix_millis}.{ext}")
}

/// Inline the image as a base64 `data:` URL.
pub fn data_url(file_name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type(file_name), STANDARD.encode(bytes))
}

fn mime_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "dcm" => "application/dicom",
        _ => "application/octet-stream",
    }
}
