use crate::{AuthError, AuthState, SessionContext, SessionEvents, Subscription};

use log::{info, warn};
use mv_config::{LatencyConfig, StorageConfig};
use mv_core::{AuthEvent, AuthResponse, Envelope, Profile, Session, User};
use mv_db::{Collection, RecordStore};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Sign-up, sign-in and sign-out against the persisted user list.
///
/// Credentials are compared in plaintext and the token is a placeholder.
/// Mutating calls wait a fixed latency before doing any work, then report
/// expected failures through the envelope.
pub struct AuthEmulator {
    context: SessionContext,
    events: SessionEvents,
    profiles: Collection<Profile>,
    latency: LatencyConfig,
}

impl AuthEmulator {
    pub fn new(store: &RecordStore, storage: &StorageConfig) -> Self {
        Self {
            context: SessionContext::init(store.kv(), storage),
            events: SessionEvents::new(),
            profiles: store.profiles(),
            latency: store.latency(),
        }
    }

    /// Register a new user, sign them in and create their profile.
    ///
    /// `metadata.display_name`, when present, names the profile; otherwise the
    /// email's local part is used.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Map<String, Value>,
    ) -> Envelope<AuthResponse> {
        tokio::time::sleep(self.latency.auth()).await;

        let user = User::new(Uuid::new_v4().to_string(), email, password, metadata);
        match self.register_and_sign_in(user) {
            Ok(session) => {
                info!("Signed up {}", email);
                self.events.emit(AuthEvent::SignedIn, Some(&session));
                Envelope::ok(AuthResponse::from(session))
            }
            Err(e) => failed("Sign-up", e),
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Envelope<AuthResponse> {
        tokio::time::sleep(self.latency.auth()).await;

        let result = self
            .context
            .find_user(email, password)
            .and_then(|user| user.ok_or_else(|| AuthError::invalid_credentials(email)))
            .and_then(|user| {
                let session = Session::new(user);
                self.context.establish(&session)?;
                Ok(session)
            });

        match result {
            Ok(session) => {
                info!("Signed in {}", email);
                self.events.emit(AuthEvent::SignedIn, Some(&session));
                Envelope::ok(AuthResponse::from(session))
            }
            Err(e) => failed("Sign-in", e),
        }
    }

    pub async fn sign_out(&self) -> Envelope<()> {
        tokio::time::sleep(self.latency.sign_out()).await;

        if let Err(e) = self.context.clear() {
            return failed("Sign-out", e);
        }
        info!("Signed out");
        self.events.emit(AuthEvent::SignedOut, None);
        Envelope::ok(())
    }

    /// Currently persisted session; `data` is `None` when signed out.
    pub fn get_session(&self) -> Envelope<Session> {
        Envelope::maybe(self.context.current())
    }

    /// Register `listener` for session changes. It is called once right away
    /// with [`AuthEvent::InitialSession`] and whatever `get_session` returns.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(AuthEvent, Option<&Session>) + Send + Sync + 'static,
    {
        let current = self.context.current();
        self.events.subscribe(current.as_ref(), listener)
    }

    pub fn state(&self) -> AuthState {
        self.context.state()
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Nothing stays persisted if any step fails; the user and session
    /// written so far are removed again.
    fn register_and_sign_in(&self, user: User) -> crate::Result<Session> {
        self.context.register(&user)?;

        let session = Session::new(user);
        if let Err(e) = self.context.establish(&session) {
            self.roll_back_sign_up(&session, false);
            return Err(e);
        }

        let profile = Profile {
            user_id: session.user.id.clone(),
            display_name: session.user.display_name(),
        };
        if let Err(e) = self.profiles.insert_immediate(&profile) {
            self.roll_back_sign_up(&session, true);
            return Err(e.into());
        }

        Ok(session)
    }

    fn roll_back_sign_up(&self, session: &Session, established: bool) {
        if established {
            if let Err(e) = self.context.clear() {
                warn!("Failed to clear session for {}: {}", session.user.email, e);
            }
        }
        if let Err(e) = self.context.unregister(&session.user.id) {
            warn!("Failed to unregister {}: {}", session.user.email, e);
        }
    }
}

fn failed<T>(operation: &str, e: AuthError) -> Envelope<T> {
    warn!("{} failed: {}", operation, e);
    Envelope::err(e.user_message())
}
