mod common;

use common::create_test_harness;

use mv_core::{Diagnosis, ImagingType};

use googletest::prelude::*;
use serde_json::Map;

#[tokio::test]
async fn given_new_user_when_diagnosis_inserted_then_user_query_returns_it() {
    // Given
    let harness = create_test_harness();
    let user = harness
        .auth
        .sign_up("a@x.com", "pw", Map::new())
        .await
        .data
        .unwrap()
        .user;

    // When
    let inserted = harness
        .store
        .diagnoses()
        .insert(&Diagnosis {
            user_id: user.id.clone(),
            patient_name: String::from("Jane"),
            image_url: None,
            imaging_type: ImagingType::Xray,
            body_region: None,
            diagnosis_result: None,
            disease_found: Some(true),
            disease_name: Some(String::from("Pneumonia")),
            disease_stage: None,
        })
        .await;
    let result = harness
        .store
        .diagnoses()
        .select()
        .eq("user_id", user.id.as_str())
        .await;

    // Then
    assert_that!(inserted.error, none());
    let rows = result.data.unwrap();
    assert_that!(rows, len(eq(1)));
    assert_that!(rows[0].patient_name.as_str(), eq("Jane"));
    assert_that!(rows[0].disease_found, eq(Some(true)));
}
