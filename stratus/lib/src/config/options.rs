//! Per-instance client options.

use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::Credentials;

/// Configuration keys the gate understands.
///
/// Any other key is passed through to the transport unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ConfigKey {
    /// The target region.
    Region,
    /// Signing credentials.
    Credentials,
    /// An explicit endpoint URL overriding the regional default.
    Endpoint,
}

/// Instance-level overrides applied on top of the process-wide defaults.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use stratus_lib::{ClientOptions, Credentials};
///
/// let options = ClientOptions::new()
///     .region("us-east-1")
///     .credentials(Credentials::new("akid", "secret"))
///     .option("retry_limit", json!(3));
///
/// assert_eq!(options.get("region"), Some(&json!("us-east-1")));
/// assert_eq!(options.get("retry_limit"), Some(&json!(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientOptions {
    values: Map<String, Value>,
}

impl ClientOptions {
    /// Creates empty options (defaults only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the region.
    pub fn region(self, region: impl Into<String>) -> Self {
        self.option(ConfigKey::Region.as_ref(), Value::String(region.into()))
    }

    /// Sets the credentials.
    pub fn credentials(self, credentials: Credentials) -> Self {
        self.option(ConfigKey::Credentials.as_ref(), credentials.to_value())
    }

    /// Sets an explicit endpoint.
    pub fn endpoint(self, endpoint: impl Into<String>) -> Self {
        self.option(ConfigKey::Endpoint.as_ref(), Value::String(endpoint.into()))
    }

    /// Sets any key, recognized or not.
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Reads back a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Every override, keyed by name.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Returns `true` if no overrides were given.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for ClientOptions {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn config_keys_are_snake_case() {
        let keys: Vec<String> = ConfigKey::iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["region", "credentials", "endpoint"]);
        assert_eq!(ConfigKey::from_str("endpoint").unwrap(), ConfigKey::Endpoint);
        assert!(ConfigKey::from_str("retry_limit").is_err());
    }

    #[test]
    fn later_setters_win() {
        let options = ClientOptions::new().region("a").region("b");
        assert_eq!(options.get("region"), Some(&Value::from("b")));
    }

    #[test]
    fn credentials_stored_as_object() {
        let options = ClientOptions::new().credentials(Credentials::new("akid", "secret"));
        let value = options.get("credentials").unwrap();
        assert_eq!(value["access_key_id"], "akid");
    }

    #[test]
    fn from_map() {
        let mut map = Map::new();
        map.insert("endpoint".to_string(), Value::from("http://localhost:4566"));
        let options = ClientOptions::from(map);
        assert!(!options.is_empty());
        assert_eq!(options.values().len(), 1);
    }
}
