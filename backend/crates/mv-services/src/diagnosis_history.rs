use log::debug;
use mv_core::{
    AnalyticsSummary, Diagnosis, Envelope, HistoryFilter, Record, filter_history, summarize,
};
use mv_db::{Collection, Order};

/// Per-user reads over the diagnoses collection.
#[derive(Clone)]
pub struct DiagnosisHistory {
    diagnoses: Collection<Diagnosis>,
}

impl DiagnosisHistory {
    pub fn new(diagnoses: Collection<Diagnosis>) -> Self {
        Self { diagnoses }
    }

    /// The user's diagnoses, newest first, narrowed by `filter`.
    pub async fn history(
        &self,
        user_id: &str,
        filter: &HistoryFilter,
    ) -> Envelope<Vec<Record<Diagnosis>>> {
        let records = match self.owned_by(user_id, Order::Descending).await.into_result() {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => return Envelope::err(e.message),
        };

        let matching: Vec<Record<Diagnosis>> =
            filter_history(&records, filter).into_iter().cloned().collect();

        debug!(
            "History for {}: {} of {} diagnoses match",
            user_id,
            matching.len(),
            records.len()
        );
        Envelope::ok(matching)
    }

    /// One diagnosis by id, if it belongs to `user_id`.
    pub async fn find(&self, user_id: &str, diagnosis_id: &str) -> Envelope<Record<Diagnosis>> {
        self.diagnoses
            .select()
            .eq("id", diagnosis_id)
            .eq("user_id", user_id)
            .single()
            .await
    }

    pub async fn analytics(&self, user_id: &str) -> Envelope<AnalyticsSummary> {
        self.owned_by(user_id, Order::Ascending)
            .await
            .map(|records| summarize(&records))
    }

    async fn owned_by(&self, user_id: &str, order: Order) -> Envelope<Vec<Record<Diagnosis>>> {
        self.diagnoses
            .select()
            .eq("user_id", user_id)
            .order("created_at", order)
            .fetch()
            .await
    }
}
