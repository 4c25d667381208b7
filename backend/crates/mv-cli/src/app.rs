use crate::{
    AuthCommands, CliError, Commands, DiagnosisCommands, NoteCommands, Result as CliErrorResult,
};

use std::path::Path;
use std::sync::Arc;

use log::info;
use mv_auth::AuthEmulator;
use mv_config::{Config, StorageConfig};
use mv_core::{Envelope, HistoryFilter, ImagingType, User};
use mv_db::{FileKvStore, RecordStore};
use mv_services::{
    AnalysisWorkflow, DiagnosisHistory, DoctorNotes, GatewayAnalyzer, MockAnalyzer, NewAnalysis,
    ObjectStorage, RemoteFunction,
};
use serde::Serialize;
use serde_json::{Map, Value, json};

const NOT_SIGNED_IN_MESSAGE: &str = "Not signed in. Run `mv auth sign-in` first.";

/// Services behind the CLI, wired over one record store.
pub struct App {
    auth: AuthEmulator,
    workflow: AnalysisWorkflow,
    history: DiagnosisHistory,
    notes: DoctorNotes,
}

impl App {
    /// File-backed store under the config dir; gateway analyzer when
    /// enabled, canned analyzer otherwise.
    pub fn from_config(config: &Config) -> CliErrorResult<Self> {
        let kv = FileKvStore::open(config.storage_path()?)?;
        let store = RecordStore::new(Arc::new(kv), config.storage.clone(), config.latency);

        let remote: Arc<dyn RemoteFunction> = if config.gateway.enabled {
            info!("Using AI gateway at {}", config.gateway.base_url);
            Arc::new(GatewayAnalyzer::from_config(&config.gateway)?)
        } else {
            Arc::new(MockAnalyzer::new(config.latency))
        };

        Ok(Self::new(&store, &config.storage, remote))
    }

    pub fn new(
        store: &RecordStore,
        storage: &StorageConfig,
        remote: Arc<dyn RemoteFunction>,
    ) -> Self {
        Self {
            auth: AuthEmulator::new(store, storage),
            workflow: AnalysisWorkflow::new(
                ObjectStorage::new(store.latency()),
                remote,
                store.diagnoses(),
            ),
            history: DiagnosisHistory::new(store.diagnoses()),
            notes: DoctorNotes::new(store.doctor_notes()),
        }
    }

    /// Run one command. Failures the user can act on come back in the
    /// envelope; only local IO problems are `Err`.
    pub async fn execute(&self, command: Commands) -> CliErrorResult<Envelope<Value>> {
        let envelope = match command {
            Commands::Auth { action } => self.execute_auth(action).await,

            Commands::Analyze {
                patient,
                imaging_type,
                region,
                image,
            } => {
                let Some(user) = self.signed_in_user() else {
                    return Ok(Envelope::err(NOT_SIGNED_IN_MESSAGE));
                };
                let input = read_analysis(&image, patient, imaging_type, region)?;
                to_json(self.workflow.run(&user, &input).await)
            }

            Commands::History {
                search,
                imaging_type,
            } => match self.signed_in_user() {
                Some(user) => {
                    let filter = HistoryFilter {
                        search,
                        imaging_type,
                    };
                    to_json(self.history.history(&user.id, &filter).await)
                }
                None => Envelope::err(NOT_SIGNED_IN_MESSAGE),
            },

            Commands::Diagnosis {
                action: DiagnosisCommands::Show { id },
            } => match self.signed_in_user() {
                Some(user) => self.show_diagnosis(&user, &id).await,
                None => Envelope::err(NOT_SIGNED_IN_MESSAGE),
            },

            Commands::Note { action } => match self.signed_in_user() {
                Some(user) => match action {
                    NoteCommands::Add { diagnosis_id, text } => {
                        to_json(self.notes.add(&diagnosis_id, &user.id, &text).await)
                    }
                    NoteCommands::List { diagnosis_id } => {
                        to_json(self.notes.list(&diagnosis_id).await)
                    }
                },
                None => Envelope::err(NOT_SIGNED_IN_MESSAGE),
            },

            Commands::Analytics => match self.signed_in_user() {
                Some(user) => to_json(self.history.analytics(&user.id).await),
                None => Envelope::err(NOT_SIGNED_IN_MESSAGE),
            },
        };

        Ok(envelope)
    }

    async fn execute_auth(&self, action: AuthCommands) -> Envelope<Value> {
        match action {
            AuthCommands::SignUp {
                email,
                password,
                display_name,
            } => {
                let mut metadata = Map::new();
                if let Some(name) = display_name {
                    metadata.insert(String::from("display_name"), Value::String(name));
                }
                self.auth
                    .sign_up(&email, &password, metadata)
                    .await
                    .map(|response| user_json(&response.user))
            }
            AuthCommands::SignIn { email, password } => self
                .auth
                .sign_in(&email, &password)
                .await
                .map(|response| user_json(&response.user)),
            AuthCommands::SignOut => self
                .auth
                .sign_out()
                .await
                .map(|()| json!({ "signed_out": true })),
            AuthCommands::Whoami => self
                .auth
                .get_session()
                .map(|session| user_json(&session.user)),
        }
    }

    async fn show_diagnosis(&self, user: &User, id: &str) -> Envelope<Value> {
        let diagnosis = match self.history.find(&user.id, id).await.into_result() {
            Ok(Some(diagnosis)) => diagnosis,
            Ok(None) => return Envelope::err(format!("Diagnosis {id} not found")),
            Err(e) => return Envelope::err(e.message),
        };

        let notes = match self.notes.list(id).await.into_result() {
            Ok(notes) => notes.unwrap_or_default(),
            Err(e) => return Envelope::err(e.message),
        };

        Envelope::ok(json!({
            "diagnosis": diagnosis,
            "notes": notes,
        }))
    }

    fn signed_in_user(&self) -> Option<User> {
        self.auth.get_session().data.map(|session| session.user)
    }
}

/// Read the image from disk into a workflow input.
fn read_analysis(
    image: &Path,
    patient_name: String,
    imaging_type: ImagingType,
    body_region: String,
) -> CliErrorResult<NewAnalysis> {
    let bytes = std::fs::read(image).map_err(|e| CliError::read_file(image, e))?;
    let file_name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(NewAnalysis {
        patient_name,
        imaging_type,
        body_region,
        file_name,
        bytes,
    })
}

/// Public view of a user; the stored password never leaves the store.
fn user_json(user: &User) -> Value {
    json!({
        "id": user.id,
        "email": user.email,
        "display_name": user.display_name(),
        "user_metadata": user.user_metadata,
    })
}

fn to_json<T: Serialize>(envelope: Envelope<T>) -> Envelope<Value> {
    match envelope.into_result() {
        Ok(data) => match data.map(serde_json::to_value).transpose() {
            Ok(value) => Envelope::maybe(value),
            Err(e) => Envelope::from_error(&e),
        },
        Err(error) => Envelope {
            data: None,
            error: Some(error),
        },
    }
}
