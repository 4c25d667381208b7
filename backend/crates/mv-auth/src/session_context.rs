use crate::{AuthError, AuthState, Result as AuthErrorResult};

use std::sync::Arc;

use log::{debug, info, warn};
use mv_config::StorageConfig;
use mv_core::{Session, User};
use mv_db::KvStore;
use serde_json::Value;

/// The process-wide session slot and the registered user list, both backed
/// by persistence. Reads always go to the store, so a session written by
/// another process sharing the same store is visible.
pub struct SessionContext {
    kv: Arc<dyn KvStore>,
    session_key: String,
    users_key: String,
}

impl SessionContext {
    /// Bind to the store and report what is already persisted.
    pub fn init(kv: Arc<dyn KvStore>, storage: &StorageConfig) -> Self {
        let context = Self {
            kv,
            session_key: storage.session_key.clone(),
            users_key: storage.users_key.clone(),
        };

        match context.load_session() {
            Ok(Some(session)) => info!("Restored session for {}", session.user.email),
            Ok(None) => debug!("No persisted session"),
            Err(e) => warn!("Ignoring unreadable persisted session: {}", e),
        }

        context
    }

    /// Persisted session, or `None` if absent or unreadable.
    pub fn current(&self) -> Option<Session> {
        self.load_session().unwrap_or_else(|e| {
            warn!("Ignoring unreadable persisted session: {}", e);
            None
        })
    }

    pub fn state(&self) -> AuthState {
        match self.current() {
            Some(_) => AuthState::SignedIn,
            None => AuthState::SignedOut,
        }
    }

    pub fn users(&self) -> AuthErrorResult<Vec<User>> {
        users_from(self.kv.read(&self.users_key)?)
    }

    pub(crate) fn find_user(&self, email: &str, password: &str) -> AuthErrorResult<Option<User>> {
        Ok(self
            .users()?
            .into_iter()
            .find(|user| user.matches(email, password)))
    }

    /// Append `user` unless its email is taken. The check and the write are
    /// one atomic update, and a rejected user leaves the list untouched.
    pub(crate) fn register(&self, user: &User) -> AuthErrorResult<()> {
        let mut duplicate = false;
        let mut decode_error = None;

        self.kv.update(&self.users_key, &mut |current| {
            let original = current.clone().unwrap_or_else(|| Value::Array(Vec::new()));
            let mut users = match users_from(current) {
                Ok(users) => users,
                Err(e) => {
                    decode_error = Some(e);
                    return Ok(original);
                }
            };

            if users.iter().any(|existing| existing.email == user.email) {
                duplicate = true;
                return Ok(original);
            }

            users.push(user.clone());
            serde_json::to_value(&users).map_err(|e| mv_db::DbError::json(&self.users_key, e))
        })?;

        if let Some(e) = decode_error {
            return Err(e);
        }
        if duplicate {
            return Err(AuthError::duplicate_email(&user.email));
        }

        Ok(())
    }

    /// Drop the user with `user_id` from the list, if present.
    pub(crate) fn unregister(&self, user_id: &str) -> AuthErrorResult<()> {
        let mut decode_error = None;

        self.kv.update(&self.users_key, &mut |current| {
            let original = current.clone().unwrap_or_else(|| Value::Array(Vec::new()));
            let mut users = match users_from(current) {
                Ok(users) => users,
                Err(e) => {
                    decode_error = Some(e);
                    return Ok(original);
                }
            };

            users.retain(|user| user.id != user_id);
            serde_json::to_value(&users).map_err(|e| mv_db::DbError::json(&self.users_key, e))
        })?;

        match decode_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub(crate) fn establish(&self, session: &Session) -> AuthErrorResult<()> {
        let value = serde_json::to_value(session)?;
        self.kv.write(&self.session_key, &value)?;
        Ok(())
    }

    pub(crate) fn clear(&self) -> AuthErrorResult<()> {
        self.kv.remove(&self.session_key)?;
        Ok(())
    }

    fn load_session(&self) -> AuthErrorResult<Option<Session>> {
        match self.kv.read(&self.session_key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}

fn users_from(value: Option<Value>) -> AuthErrorResult<Vec<User>> {
    match value {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}
