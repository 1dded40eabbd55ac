//! The process-wide default configuration store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};

use super::{ConfigKey, Credentials};
use crate::error::{json_kind, ArgumentError};

/// Environment variable seeding the default region.
pub const ENV_REGION: &str = "STRATUS_REGION";
/// Environment variable seeding the default access key id.
pub const ENV_ACCESS_KEY_ID: &str = "STRATUS_ACCESS_KEY_ID";
/// Environment variable seeding the default secret access key.
pub const ENV_SECRET_ACCESS_KEY: &str = "STRATUS_SECRET_ACCESS_KEY";
/// Environment variable seeding the default session token.
pub const ENV_SESSION_TOKEN: &str = "STRATUS_SESSION_TOKEN";

/// Default settings shared by every client built from one context.
///
/// Starts empty. Clients read a snapshot when they are constructed and never
/// write back.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use stratus_lib::ConfigStore;
///
/// let store = ConfigStore::new();
/// assert!(store.snapshot().is_empty());
///
/// store.set(json!({ "region": "eu-west-1" })).unwrap();
/// assert_eq!(store.get("region"), Some(json!("eu-west-1")));
///
/// assert!(store.set(json!([1, 2, 3])).is_err());
/// ```
#[derive(Debug, Default)]
pub struct ConfigStore {
    values: RwLock<Map<String, Value>>,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded from `STRATUS_*` environment variables.
    ///
    /// Credentials are only seeded when both key parts are present.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates a store seeded through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut values = Map::new();

        if let Some(region) = lookup(ENV_REGION).filter(|r| !r.is_empty()) {
            values.insert(ConfigKey::Region.to_string(), Value::String(region));
        }

        if let (Some(akid), Some(secret)) =
            (lookup(ENV_ACCESS_KEY_ID), lookup(ENV_SECRET_ACCESS_KEY))
        {
            let mut credentials = Credentials::new(akid, secret);
            if let Some(token) = lookup(ENV_SESSION_TOKEN) {
                credentials = credentials.with_session_token(token);
            }
            if credentials.is_set() {
                values.insert(ConfigKey::Credentials.to_string(), credentials.to_value());
            }
        }

        Self {
            values: RwLock::new(values),
        }
    }

    /// Replaces every default.
    ///
    /// ## Errors
    ///
    /// Returns [`ArgumentError::NonMappingConfig`] unless `value` is an object.
    pub fn set(&self, value: Value) -> Result<(), ArgumentError> {
        match value {
            Value::Object(map) => {
                *self.write() = map;
                Ok(())
            }
            other => Err(ArgumentError::NonMappingConfig {
                kind: json_kind(&other),
            }),
        }
    }

    /// Sets one default.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.write().insert(key.into(), value)
    }

    /// Removes one default.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.write().remove(key)
    }

    /// Removes every default.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Reads one default.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// A copy of every default.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.read().clone()
    }

    // The map is replaced wholesale or edited key by key, so a panic while a
    // guard is held cannot leave it half-written.
    fn read(&self) -> RwLockReadGuard<'_, Map<String, Value>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Map<String, Value>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn defaults_to_empty() {
        assert!(ConfigStore::new().snapshot().is_empty());
    }

    #[test]
    fn rejects_non_mappings() {
        let store = ConfigStore::new();
        store.insert("region", json!("keep-me"));

        for value in [json!([1, 2, 3]), json!("x"), json!(1), json!(null)] {
            assert!(matches!(
                store.set(value),
                Err(ArgumentError::NonMappingConfig { .. })
            ));
        }
        assert_eq!(store.get("region"), Some(json!("keep-me")));
    }

    #[test]
    fn empty_mapping_clears() {
        let store = ConfigStore::new();
        store.insert("region", json!("r"));
        store.set(json!({})).unwrap();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn insert_remove_clear() {
        let store = ConfigStore::new();
        assert_eq!(store.insert("a", json!(1)), None);
        assert_eq!(store.insert("a", json!(2)), Some(json!(1)));
        assert_eq!(store.remove("a"), Some(json!(2)));
        store.insert("b", json!(true));
        store.clear();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn seeds_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_REGION, "ap-south-1"),
            (ENV_ACCESS_KEY_ID, "akid"),
            (ENV_SECRET_ACCESS_KEY, "secret"),
        ]);
        let store = ConfigStore::from_lookup(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(store.get("region"), Some(json!("ap-south-1")));
        assert_eq!(store.get("credentials").unwrap()["access_key_id"], "akid");
    }

    #[test]
    fn partial_credentials_are_not_seeded() {
        let store = ConfigStore::from_lookup(|name| {
            (name == ENV_ACCESS_KEY_ID).then(|| "akid".to_string())
        });
        assert!(store.snapshot().is_empty());
    }
}
