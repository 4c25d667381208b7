mod models;

use crate::{Diagnosis, ImagingType, Record};

use chrono::{TimeZone, Utc};

pub(crate) fn diagnosis_record(
    id: &str,
    patient_name: &str,
    imaging_type: ImagingType,
    disease: Option<(&str, &str)>,
    created_at: (i32, u32, u32),
) -> Record<Diagnosis> {
    let (year, month, day) = created_at;
    Record {
        id: id.to_string(),
        created_at: Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .unwrap(),
        data: Diagnosis {
            user_id: String::from("user-1"),
            patient_name: patient_name.to_string(),
            image_url: None,
            imaging_type,
            body_region: None,
            diagnosis_result: None,
            disease_found: Some(disease.is_some()),
            disease_name: disease.map(|(name, _)| name.to_string()),
            disease_stage: disease.map(|(_, stage)| stage.to_string()),
        },
    }
}
