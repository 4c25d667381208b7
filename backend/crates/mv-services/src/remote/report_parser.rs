use log::warn;
use mv_core::{AnalysisReport, AnalysisSections};

pub const FALLBACK_RECOMMENDATIONS: &str =
    "Please consult with a specialist for detailed assessment.";

const FALLBACK_SUMMARY_CHARS: usize = 200;

/// Remove markdown code fences the model may wrap around its JSON.
pub fn strip_code_fences(content: &str) -> String {
    content
        .replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Decode the model's answer, falling back to a free-text report when it
/// is not valid JSON.
pub fn parse_report(content: &str) -> AnalysisReport {
    match serde_json::from_str::<AnalysisReport>(&strip_code_fences(content)) {
        Ok(report) => report,
        Err(e) => {
            warn!("Model answer is not a JSON report, using raw text: {}", e);
            fallback_report(content)
        }
    }
}

pub fn fallback_report(content: &str) -> AnalysisReport {
    AnalysisReport {
        disease_found: false,
        disease_name: None,
        disease_stage: None,
        analysis: AnalysisSections {
            summary: content.chars().take(FALLBACK_SUMMARY_CHARS).collect(),
            findings: content.to_string(),
            description: String::new(),
            symptoms: String::new(),
            recommendations: FALLBACK_RECOMMENDATIONS.to_string(),
        },
    }
}
