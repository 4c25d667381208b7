use crate::RemoteFunction;

use async_trait::async_trait;
use log::debug;
use mv_config::LatencyConfig;
use mv_core::{AnalysisReport, AnalysisSections, AnalyzeRequest, Envelope};

pub const MOCK_DISEASE_NAME: &str = "Pneumonia (Mock)";
pub const MOCK_DISEASE_STAGE: &str = "Stage II";

/// Local analyzer returning a canned report. The request payload is ignored
/// and `disease_found` is a coin flip.
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    latency: LatencyConfig,
}

impl MockAnalyzer {
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }

    pub fn canned_report(disease_found: bool) -> AnalysisReport {
        AnalysisReport {
            disease_found,
            disease_name: Some(MOCK_DISEASE_NAME.to_string()),
            disease_stage: Some(MOCK_DISEASE_STAGE.to_string()),
            analysis: AnalysisSections {
                summary: "Local mock analysis summary of the uploaded image.".to_string(),
                findings: "Opacity observed in the lower left lobe. Suggestive of consolidation."
                    .to_string(),
                description: "This is a mock implementation running locally without the remote analysis service."
                    .to_string(),
                symptoms: "Cough, fever, difficulty breathing.".to_string(),
                recommendations: "Antibiotics and rest. Follow up in 7 days.".to_string(),
            },
        }
    }
}

#[async_trait]
impl RemoteFunction for MockAnalyzer {
    async fn invoke(&self, name: &str, _request: &AnalyzeRequest) -> Envelope<AnalysisReport> {
        tokio::time::sleep(self.latency.invoke()).await;
        debug!("Mock analyzer answered '{}'", name);

        Envelope::ok(Self::canned_report(rand::random::<bool>()))
    }
}
