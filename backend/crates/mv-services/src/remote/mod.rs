pub mod analyze_image;
pub mod gateway_analyzer;
pub mod mock_analyzer;
pub mod prompt;
pub mod report_parser;

use async_trait::async_trait;
use mv_core::{AnalysisReport, AnalyzeRequest, Envelope};

/// Name of the image analysis function
pub const ANALYZE_IMAGE: &str = "analyze-image";

/// A named server-side function reachable through `invoke`.
#[async_trait]
pub trait RemoteFunction: Send + Sync {
    async fn invoke(&self, name: &str, request: &AnalyzeRequest) -> Envelope<AnalysisReport>;
}
