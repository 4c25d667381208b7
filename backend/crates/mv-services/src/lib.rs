//! Emulated backend services layered over the record store: object
//! storage, the `analyze-image` remote function (local mock or AI gateway),
//! the new-analysis workflow, diagnosis history and doctor notes.

pub mod analysis_workflow;
pub mod diagnosis_history;
pub mod doctor_notes;
pub mod error;
pub mod object_storage;
pub mod remote;

pub use analysis_workflow::{AnalysisWorkflow, NewAnalysis};
pub use diagnosis_history::DiagnosisHistory;
pub use doctor_notes::DoctorNotes;
pub use error::{GatewayError, Result};
pub use object_storage::{
    MEDICAL_IMAGES_BUCKET, ObjectStorage, PLACEHOLDER_IMAGE_URL, PublicUrl, UploadedObject,
};
pub use remote::analyze_image::{HttpResponse, analyze_image};
pub use remote::gateway_analyzer::GatewayAnalyzer;
pub use remote::mock_analyzer::MockAnalyzer;
pub use remote::{ANALYZE_IMAGE, RemoteFunction};

#[cfg(test)]
mod tests;
