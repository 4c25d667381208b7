use crate::User;

use serde::{Deserialize, Serialize};

/// Placeholder bearer token handed out with every session.
pub const SESSION_TOKEN: &str = "mock_token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            access_token: String::from(SESSION_TOKEN),
            user,
        }
    }
}

/// Payload of a successful sign-up or sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub session: Session,
}

impl From<Session> for AuthResponse {
    fn from(session: Session) -> Self {
        Self {
            user: session.user.clone(),
            session,
        }
    }
}
