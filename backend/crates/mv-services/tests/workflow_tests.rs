//! New-analysis workflow, history and doctor notes over the in-memory store

mod common;

use common::{create_test_store, create_test_user};

use mv_config::LatencyConfig;
use mv_core::{AnalysisReport, AnalyzeRequest, Envelope, HistoryFilter, ImagingType};
use mv_db::RecordStore;
use mv_services::{
    AnalysisWorkflow, DiagnosisHistory, DoctorNotes, MockAnalyzer, NewAnalysis, ObjectStorage,
    PLACEHOLDER_IMAGE_URL, RemoteFunction,
};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use googletest::prelude::*;

/// Remote function answering with a fixed envelope and recording requests
struct FixedAnalyzer {
    answer: Envelope<AnalysisReport>,
    requests: Mutex<Vec<(String, AnalyzeRequest)>>,
}

impl FixedAnalyzer {
    fn new(answer: Envelope<AnalysisReport>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl RemoteFunction for FixedAnalyzer {
    async fn invoke(&self, name: &str, request: &AnalyzeRequest) -> Envelope<AnalysisReport> {
        self.requests
            .lock()
            .unwrap()
            .push((name.to_string(), request.clone()));
        self.answer.clone()
    }
}

fn workflow(store: &RecordStore, remote: Arc<dyn RemoteFunction>) -> AnalysisWorkflow {
    AnalysisWorkflow::new(
        ObjectStorage::new(LatencyConfig::none()),
        remote,
        store.diagnoses(),
    )
}

fn new_analysis(patient_name: &str) -> NewAnalysis {
    NewAnalysis {
        patient_name: patient_name.to_string(),
        imaging_type: ImagingType::Xray,
        body_region: String::from("Chest"),
        file_name: String::from("chest.png"),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

fn pneumonia() -> AnalysisReport {
    AnalysisReport {
        disease_found: true,
        disease_name: Some(String::from("Pneumonia")),
        disease_stage: Some(String::from("II")),
        ..AnalysisReport::default()
    }
}

#[tokio::test]
async fn given_mock_analyzer_when_run_then_diagnosis_persisted() {
    let store = create_test_store();
    let user = create_test_user("a@x.com");
    let remote = Arc::new(MockAnalyzer::new(LatencyConfig::none()));

    let result = workflow(&store, remote).run(&user, &new_analysis("Jane")).await;

    assert_that!(result.error, none());
    let record = result.data.unwrap();
    assert_that!(record.patient_name.as_str(), eq("Jane"));
    assert_eq!(record.disease_name.as_deref(), Some("Pneumonia (Mock)"));
    assert_eq!(record.image_url.as_deref(), Some(PLACEHOLDER_IMAGE_URL));
    assert_eq!(record.body_region.as_deref(), Some("Chest"));

    let stored = store
        .diagnoses()
        .select()
        .eq("id", record.id.as_str())
        .single()
        .await;
    assert_that!(stored.data, some(anything()));
}

#[tokio::test]
async fn given_request_when_run_then_image_sent_as_data_url() {
    let store = create_test_store();
    let user = create_test_user("a@x.com");
    let remote = FixedAnalyzer::new(Envelope::ok(pneumonia()));

    let _ = workflow(&store, remote.clone()).run(&user, &new_analysis("Jane")).await;

    let requests = remote.requests.lock().unwrap();
    assert_that!(requests.len(), eq(1usize));
    let (name, request) = &requests[0];
    assert_that!(name.as_str(), eq("analyze-image"));
    assert_that!(request.image.as_str(), starts_with("data:image/png;base64,"));
    assert_that!(request.patient_name.as_str(), eq("Jane"));
    assert_that!(request.body_region.as_str(), eq("Chest"));
}

#[tokio::test]
async fn given_analysis_error_when_run_then_nothing_inserted() {
    let store = create_test_store();
    let user = create_test_user("a@x.com");
    let remote = FixedAnalyzer::new(Envelope::err("AI gateway error: 500"));

    let result = workflow(&store, remote).run(&user, &new_analysis("Jane")).await;

    assert_that!(result.error.unwrap().message, eq("AI gateway error: 500"));
    let rows = store.diagnoses().select().fetch().await;
    assert_that!(rows.data.unwrap(), is_empty());
}

#[tokio::test]
async fn given_blank_patient_when_run_then_remote_not_called() {
    let store = create_test_store();
    let user = create_test_user("a@x.com");
    let remote = FixedAnalyzer::new(Envelope::ok(pneumonia()));

    let result = workflow(&store, remote.clone()).run(&user, &new_analysis("  ")).await;

    assert_that!(result.error.unwrap().message, eq("Patient name is required"));
    assert!(remote.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_diagnoses_when_history_searched_then_only_users_matches() {
    let store = create_test_store();
    let jane_owner = create_test_user("a@x.com");
    let other = create_test_user("b@x.com");
    let flow = workflow(&store, FixedAnalyzer::new(Envelope::ok(pneumonia())));
    flow.run(&jane_owner, &new_analysis("Jane")).await;
    flow.run(&jane_owner, &new_analysis("Bob")).await;
    flow.run(&other, &new_analysis("Jane")).await;

    let history = DiagnosisHistory::new(store.diagnoses());
    let filter = HistoryFilter {
        search: String::from("jane"),
        imaging_type: None,
    };
    let result = history.history(&jane_owner.id, &filter).await;

    let records = result.data.unwrap();
    assert_that!(records, len(eq(1)));
    assert_eq!(records[0].user_id, jane_owner.id);
}

#[tokio::test]
async fn given_diagnoses_when_analytics_then_counts_match() {
    let store = create_test_store();
    let user = create_test_user("a@x.com");
    workflow(&store, FixedAnalyzer::new(Envelope::ok(pneumonia())))
        .run(&user, &new_analysis("Jane"))
        .await;
    workflow(&store, FixedAnalyzer::new(Envelope::ok(AnalysisReport::default())))
        .run(&user, &new_analysis("Bob"))
        .await;

    let summary = DiagnosisHistory::new(store.diagnoses())
        .analytics(&user.id)
        .await
        .data
        .unwrap();

    assert_that!(summary.total_scans, eq(2usize));
    assert_that!(summary.diseases_detected, eq(1usize));
    assert_that!(summary.healthy_scans, eq(1usize));
}

#[tokio::test]
async fn given_other_users_diagnosis_when_found_then_no_data() {
    let store = create_test_store();
    let owner = create_test_user("a@x.com");
    let record = workflow(&store, FixedAnalyzer::new(Envelope::ok(pneumonia())))
        .run(&owner, &new_analysis("Jane"))
        .await
        .data
        .unwrap();
    let history = DiagnosisHistory::new(store.diagnoses());

    let own = history.find(&owner.id, &record.id).await;
    let foreign = history.find("someone-else", &record.id).await;

    assert_that!(own.data, some(anything()));
    assert_that!(foreign.data, none());
    assert_that!(foreign.error, none());
}

#[tokio::test]
async fn given_notes_when_listed_then_oldest_first_and_trimmed() {
    let store = create_test_store();
    let notes = DoctorNotes::new(store.doctor_notes());

    notes.add("diag-1", "user-1", "  First look  ").await;
    notes.add("diag-1", "user-1", "Follow-up booked").await;
    notes.add("diag-2", "user-1", "Unrelated").await;

    let listed = notes.list("diag-1").await.data.unwrap();
    let texts: Vec<&str> = listed.iter().map(|n| n.note.as_str()).collect();
    assert_eq!(texts, vec!["First look", "Follow-up booked"]);
}

#[tokio::test]
async fn given_blank_note_when_added_then_rejected() {
    let store = create_test_store();
    let notes = DoctorNotes::new(store.doctor_notes());

    let result = notes.add("diag-1", "user-1", "   ").await;

    assert_that!(result.error.unwrap().message, eq("Note cannot be empty"));
    assert_that!(notes.list("diag-1").await.data.unwrap(), is_empty());
}
