use crate::{GatewayAnalyzer, GatewayError};

use log::error;
use mv_core::AnalyzeRequest;
use serde::Serialize;
use serde_json::{Value, json};

/// Status and JSON body of a function response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

impl HttpResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP face of `analyze-image`: takes the raw request body and always
/// answers, mapping failures onto a status and an `{error}` body.
pub async fn analyze_image(analyzer: &GatewayAnalyzer, body: &str) -> HttpResponse {
    let result = match serde_json::from_str::<AnalyzeRequest>(body) {
        Ok(request) => analyzer.analyze(&request).await,
        Err(e) => Err(GatewayError::invalid_request(e.to_string())),
    };

    match result.and_then(|report| serde_json::to_value(report).map_err(GatewayError::from)) {
        Ok(report) => HttpResponse::ok(report),
        Err(e) => {
            error!("analyze-image error: {}", e);
            HttpResponse::error(e.status(), &e.user_message())
        }
    }
}
