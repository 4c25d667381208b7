use log::info;
use mv_core::{DoctorNote, Envelope, Record};
use mv_db::{Collection, Order};

#[derive(Clone)]
pub struct DoctorNotes {
    notes: Collection<DoctorNote>,
}

impl DoctorNotes {
    pub fn new(notes: Collection<DoctorNote>) -> Self {
        Self { notes }
    }

    /// Attach a note to a diagnosis. Blank notes are rejected.
    pub async fn add(
        &self,
        diagnosis_id: &str,
        user_id: &str,
        text: &str,
    ) -> Envelope<Record<DoctorNote>> {
        let note = match DoctorNote::new(diagnosis_id, user_id, text) {
            Ok(note) => note,
            Err(e) => return Envelope::err(e.user_message()),
        };

        info!("Adding note to diagnosis {}", diagnosis_id);
        self.notes.insert(&note).await
    }

    /// Notes on a diagnosis, oldest first.
    pub async fn list(&self, diagnosis_id: &str) -> Envelope<Vec<Record<DoctorNote>>> {
        self.notes
            .select()
            .eq("diagnosis_id", diagnosis_id)
            .order("created_at", Order::Ascending)
            .fetch()
            .await
    }
}
