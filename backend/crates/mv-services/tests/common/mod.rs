#![allow(dead_code)]

use mv_config::{GatewayConfig, LatencyConfig, StorageConfig};
use mv_core::{AnalyzeRequest, ImagingType, User};
use mv_db::{MemoryKvStore, RecordStore};
use mv_services::GatewayAnalyzer;

use std::sync::Arc;

use serde_json::{Map, Value, json};

pub const TEST_API_KEY: &str = "test-key";

/// Record store over an in-memory store, with no latency
pub fn create_test_store() -> RecordStore {
    RecordStore::new(
        Arc::new(MemoryKvStore::new()),
        StorageConfig::default(),
        LatencyConfig::none(),
    )
}

pub fn create_test_user(email: &str) -> User {
    User::new(format!("user-{email}"), email, "secret", Map::new())
}

pub fn create_test_request() -> AnalyzeRequest {
    AnalyzeRequest {
        image: String::from("data:image/png;base64,iVBORw0KGgo="),
        imaging_type: ImagingType::Xray,
        body_region: String::from("Chest"),
        patient_name: String::from("Jane"),
    }
}

/// Analyzer pointed at a mock gateway
pub fn create_gateway_analyzer(base_url: &str, api_key: Option<&str>) -> GatewayAnalyzer {
    let config = GatewayConfig {
        enabled: true,
        base_url: base_url.to_string(),
        ..GatewayConfig::default()
    };
    GatewayAnalyzer::new(&config, api_key.map(String::from)).unwrap()
}

/// Chat completion body whose first choice carries `content`
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}

pub fn report_json() -> Value {
    json!({
        "disease_found": true,
        "disease_name": "Pneumonia",
        "disease_stage": "II",
        "analysis": {
            "summary": "Consolidation in the left lower lobe.",
            "findings": "Patchy opacity with air bronchograms.",
            "description": "Community acquired pneumonia.",
            "symptoms": "Cough, fever.",
            "recommendations": "Start antibiotics and follow up in 7 days."
        }
    })
}
