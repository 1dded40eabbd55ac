//! Static request-signing credentials.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// An access key pair with an optional session token.
///
/// `Debug` output never includes the secret:
///
/// ```
/// use stratus_lib::Credentials;
///
/// let creds = Credentials::new("akid", "secret");
/// let debug = format!("{creds:?}");
/// assert!(debug.contains("akid"));
/// assert!(!debug.contains("secret\""));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The access key id.
    pub access_key_id: String,
    /// The secret access key.
    pub secret_access_key: String,
    /// A session token for temporary credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl Credentials {
    /// Creates long-lived credentials.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Adds a session token.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Returns `true` when both key parts are non-empty.
    pub fn is_set(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }

    /// Reads credentials from a configuration value.
    pub(crate) fn from_value(value: &Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value.clone()).map_err(|e| {
            ConfigError::invalid_value(
                "credentials",
                format!("expected access_key_id and secret_access_key: {e}"),
            )
        })
    }

    /// The configuration value form of these credentials.
    pub(crate) fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("access_key_id".to_string(), Value::from(self.access_key_id.as_str()));
        map.insert(
            "secret_access_key".to_string(),
            Value::from(self.secret_access_key.as_str()),
        );
        if let Some(token) = &self.session_token {
            map.insert("session_token".to_string(), Value::from(token.as_str()));
        }
        Value::Object(map)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
