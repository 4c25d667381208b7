use crate::{Diagnosis, ImagingType, Record};

/// Search criteria for the diagnosis history view.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Case-insensitive substring of patient or disease name; empty matches all
    pub search: String,
    /// `None` matches every modality
    pub imaging_type: Option<ImagingType>,
}

impl HistoryFilter {
    pub fn matches(&self, diagnosis: &Diagnosis) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = diagnosis.patient_name.to_lowercase().contains(&needle)
            || diagnosis
                .disease_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
        let matches_type = self
            .imaging_type
            .is_none_or(|imaging_type| imaging_type == diagnosis.imaging_type);

        matches_search && matches_type
    }
}

/// Keep the diagnoses matching `filter`, preserving their order.
pub fn filter_history<'a>(
    diagnoses: &'a [Record<Diagnosis>],
    filter: &HistoryFilter,
) -> Vec<&'a Record<Diagnosis>> {
    diagnoses
        .iter()
        .filter(|record| filter.matches(record))
        .collect()
}
