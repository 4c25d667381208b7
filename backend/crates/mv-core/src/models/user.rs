use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registered account. The password is kept in plaintext; this layer does not
/// attempt any credential security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
}

impl User {
    pub fn new(id: String, email: &str, password: &str, user_metadata: Map<String, Value>) -> Self {
        Self {
            id,
            email: email.to_string(),
            password: password.to_string(),
            user_metadata,
        }
    }

    /// Display name from metadata, falling back to the email's local part.
    pub fn display_name(&self) -> String {
        self.user_metadata
            .get("display_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .unwrap_or_else(|| email_local_part(&self.email).to_string())
    }

    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
