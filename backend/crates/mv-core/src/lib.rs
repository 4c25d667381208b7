pub mod analytics;
pub mod envelope;
pub mod error;
pub mod history;
pub mod models;

pub use analytics::{AnalyticsSummary, Bucket, RecentScan, summarize};
pub use envelope::{Envelope, EnvelopeError};
pub use error::{CoreError, Result};
pub use history::{HistoryFilter, filter_history};
pub use models::analysis::{AnalysisReport, AnalysisSections, AnalyzeRequest};
pub use models::auth_event::AuthEvent;
pub use models::diagnosis::Diagnosis;
pub use models::doctor_note::DoctorNote;
pub use models::imaging_type::ImagingType;
pub use models::profile::Profile;
pub use models::record::Record;
pub use models::session::{AuthResponse, Session};
pub use models::user::User;

#[cfg(test)]
mod tests;
