use crate::{Diagnosis, Record};

use serde::Serialize;

const RECENT_SCAN_COUNT: usize = 5;

/// Label and count, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentScan {
    pub id: String,
    pub patient_name: String,
    pub disease_found: Option<bool>,
    pub disease_name: Option<String>,
    pub imaging_type: String,
    pub created_at: String,
}

/// Aggregates shown on the dashboard and analytics pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub total_scans: usize,
    pub diseases_detected: usize,
    pub healthy_scans: usize,
    pub disease_distribution: Vec<Bucket>,
    pub imaging_types: Vec<Bucket>,
    pub scans_by_month: Vec<Bucket>,
    pub stages: Vec<Bucket>,
    pub recent: Vec<RecentScan>,
}

impl AnalyticsSummary {
    pub fn is_empty(&self) -> bool {
        self.total_scans == 0
    }
}

/// Summarise a user's diagnoses. Buckets keep the order in which each label
/// first appears in `diagnoses`; `recent` is newest first.
pub fn summarize(diagnoses: &[Record<Diagnosis>]) -> AnalyticsSummary {
    let mut disease_distribution = Vec::new();
    let mut imaging_types = Vec::new();
    let mut scans_by_month = Vec::new();
    let mut stages = Vec::new();

    for record in diagnoses {
        if let Some(name) = record.disease_name.as_deref() {
            increment(&mut disease_distribution, name);
        }
        increment(&mut imaging_types, record.imaging_type.short_label());
        increment(
            &mut scans_by_month,
            &record.created_at.format("%b %Y").to_string(),
        );
        if let Some(stage) = record.disease_stage.as_deref() {
            increment(&mut stages, &format!("Stage {stage}"));
        }
    }

    let mut newest_first: Vec<&Record<Diagnosis>> = diagnoses.iter().collect();
    newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    AnalyticsSummary {
        total_scans: diagnoses.len(),
        diseases_detected: diagnoses
            .iter()
            .filter(|d| d.disease_found == Some(true))
            .count(),
        healthy_scans: diagnoses
            .iter()
            .filter(|d| d.disease_found == Some(false))
            .count(),
        disease_distribution,
        imaging_types,
        scans_by_month,
        stages,
        recent: newest_first
            .into_iter()
            .take(RECENT_SCAN_COUNT)
            .map(|record| RecentScan {
                id: record.id.clone(),
                patient_name: record.patient_name.clone(),
                disease_found: record.disease_found,
                disease_name: record.disease_name.clone(),
                imaging_type: record.imaging_type.label().to_string(),
                created_at: record.created_at.to_rfc3339(),
            })
            .collect(),
    }
}

fn increment(buckets: &mut Vec<Bucket>, name: &str) {
    match buckets.iter_mut().find(|bucket| bucket.name == name) {
        Some(bucket) => bucket.count += 1,
        None => buckets.push(Bucket {
            name: name.to_string(),
            count: 1,
        }),
    }
}
