use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// Client-side session written by the login flow: a bearer token and the user record.
///
/// The dashboard only ever reads it. On disk it is a flat JSON object with
/// the keys `token` and `user`; `user` may be an object or a JSON-encoded
/// string, the way browser storage keeps it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, rename = "token")]
    token: Option<String>,

    #[serde(default, rename = "user")]
    user: Option<serde_json::Value>,
}

impl Session {
    /// A session holding just a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user: None,
        }
    }

    pub fn with_user(mut self, user: serde_json::Value) -> Self {
        self.user = Some(user);
        self
    }

    /// Parse a session from the raw JSON of the session file.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DashboardError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
            .map_err(|e| DashboardError::Session(format!("Malformed session data: {e}")))
    }

    /// Load the session file. A missing file is an empty (signed-out) session.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no session file, starting signed out");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The bearer token, ignoring blank values.
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The user record, decoding it first when it was stored as a JSON string.
    pub fn user(&self) -> Option<serde_json::Value> {
        match self.user.as_ref()? {
            serde_json::Value::String(raw) => serde_json::from_str(raw).ok(),
            serde_json::Value::Null => None,
            other => Some(other.clone()),
        }
    }

    /// Best human-readable name for the greeting: `name`, then `email`.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user()?;
        ["name", "email"]
            .iter()
            .filter_map(|key| user.get(*key).and_then(|v| v.as_str()))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}
