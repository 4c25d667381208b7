#![allow(dead_code)]

use mv_config::{LatencyConfig, StorageConfig};
use mv_core::{AnalysisSections, Diagnosis, ImagingType};
use mv_db::{MemoryKvStore, RecordStore};

use std::sync::Arc;

/// Record store over a fresh in-memory store, with no artificial latency
pub fn create_test_store() -> (Arc<MemoryKvStore>, RecordStore) {
    let kv = Arc::new(MemoryKvStore::new());
    let store = RecordStore::new(kv.clone(), StorageConfig::default(), LatencyConfig::none());
    (kv, store)
}

/// Creates a test Diagnosis with sensible defaults
pub fn create_test_diagnosis(user_id: &str, patient_name: &str) -> Diagnosis {
    Diagnosis {
        user_id: user_id.to_string(),
        patient_name: patient_name.to_string(),
        image_url: Some(String::from("https://example.com/scan.png")),
        imaging_type: ImagingType::Xray,
        body_region: Some(String::from("Chest")),
        diagnosis_result: Some(AnalysisSections {
            summary: String::from("Opacity in the lower left lobe."),
            ..AnalysisSections::default()
        }),
        disease_found: Some(true),
        disease_name: Some(String::from("Pneumonia")),
        disease_stage: Some(String::from("II")),
    }
}
