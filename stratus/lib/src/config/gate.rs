//! The configuration gate run at client construction.

use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::debug;

use super::{ClientOptions, ConfigKey, ConfigStore, Credentials};
use crate::error::{json_kind, ConfigError};
use crate::model::ApiModel;

/// The merged configuration a client was constructed with.
///
/// Recomputed for every client; never written back to the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveConfig {
    region: Option<String>,
    credentials: Option<Credentials>,
    endpoint: Option<String>,
    extra: Map<String, Value>,
}

impl EffectiveConfig {
    /// The region, if one was configured.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The signing credentials, if configured.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// The endpoint override, if configured.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Keys the gate does not recognize, passed through to the transport.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Merges defaults with instance options and checks required settings.
///
/// Options override defaults key by key. A `null` value for a recognized key
/// clears it. Required settings are checked in a fixed order: region first,
/// then credentials.
///
/// ## Errors
///
/// - [`ConfigError::InvalidValue`] if a recognized key has the wrong shape
/// - [`ConfigError::MissingRegion`] if the model has operations and no region is set
/// - [`ConfigError::MissingCredentials`] if the model signs requests and no
///   credentials are set
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use stratus_lib::{resolve, ApiModel, ClientOptions, ConfigError, ConfigStore};
///
/// let model = ApiModel::try_from(json!({
///     "operations": { "Ping": { "authtype": "none" } }
/// })).unwrap();
/// let defaults = ConfigStore::new();
///
/// let err = resolve("Dummy", &model, &defaults, &ClientOptions::new()).unwrap_err();
/// assert!(matches!(err, ConfigError::MissingRegion { .. }));
///
/// defaults.insert("region", json!("us-west-2"));
/// let config = resolve("Dummy", &model, &defaults, &ClientOptions::new()).unwrap();
/// assert_eq!(config.region(), Some("us-west-2"));
/// ```
pub fn resolve(
    service: &str,
    model: &ApiModel,
    defaults: &ConfigStore,
    options: &ClientOptions,
) -> Result<EffectiveConfig, ConfigError> {
    let mut merged = defaults.snapshot();
    for (key, value) in options.values() {
        merged.insert(key.clone(), value.clone());
    }

    let mut config = EffectiveConfig::default();
    for (key, value) in merged {
        match ConfigKey::from_str(&key) {
            Ok(_) if value.is_null() => {}
            Ok(ConfigKey::Region) => config.region = Some(non_empty_string(&key, &value)?),
            Ok(ConfigKey::Endpoint) => config.endpoint = Some(non_empty_string(&key, &value)?),
            Ok(ConfigKey::Credentials) => {
                config.credentials = Some(Credentials::from_value(&value)?)
            }
            Err(_) => {
                config.extra.insert(key, value);
            }
        }
    }

    if model.requires_region() && config.region.is_none() {
        return Err(ConfigError::MissingRegion {
            service: service.to_string(),
        });
    }

    let has_credentials = config.credentials.as_ref().is_some_and(Credentials::is_set);
    if model.requires_credentials() && !has_credentials {
        return Err(ConfigError::MissingCredentials {
            service: service.to_string(),
        });
    }

    debug!(
        service,
        region = config.region.as_deref().unwrap_or("-"),
        extra_keys = config.extra.len(),
        "resolved client configuration"
    );

    Ok(config)
}

fn non_empty_string(key: &str, value: &Value) -> Result<String, ConfigError> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        Value::String(_) => Err(ConfigError::invalid_value(key, "must not be empty")),
        other => Err(ConfigError::invalid_value(
            key,
            format!("expected a string, got {}", json_kind(other)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signed_model() -> ApiModel {
        ApiModel::try_from(json!({ "operations": { "DoThing": {} } })).unwrap()
    }

    #[test]
    fn empty_model_needs_nothing() {
        let config = resolve(
            "Empty",
            &ApiModel::empty(),
            &ConfigStore::new(),
            &ClientOptions::new(),
        )
        .unwrap();
        assert_eq!(config, EffectiveConfig::default());
    }

    #[test]
    fn missing_region_is_reported_before_credentials() {
        let err = resolve("Dummy", &signed_model(), &ConfigStore::new(), &ClientOptions::new())
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingRegion {
                service: "Dummy".to_string()
            }
        );
    }

    #[test]
    fn missing_credentials_after_region() {
        let options = ClientOptions::new().region("us-east-1");
        let err = resolve("Dummy", &signed_model(), &ConfigStore::new(), &options).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingCredentials {
                service: "Dummy".to_string()
            }
        );
    }

    #[test]
    fn options_override_defaults() {
        let defaults = ConfigStore::new();
        defaults.insert("region", json!("default-region"));
        defaults.insert("retry_limit", json!(3));
        let options = ClientOptions::new()
            .region("override-region")
            .credentials(Credentials::new("akid", "secret"));

        let config = resolve("Dummy", &signed_model(), &defaults, &options).unwrap();
        assert_eq!(config.region(), Some("override-region"));
        assert_eq!(config.credentials().unwrap().access_key_id, "akid");
        assert_eq!(config.extra().get("retry_limit"), Some(&json!(3)));
    }

    #[test]
    fn null_option_clears_default() {
        let defaults = ConfigStore::new();
        defaults.insert("region", json!("default-region"));
        let options = ClientOptions::new().option("region", Value::Null);

        let err = resolve("Dummy", &signed_model(), &defaults, &options).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRegion { .. }));
    }

    #[test]
    fn resolve_does_not_touch_defaults() {
        let defaults = ConfigStore::new();
        defaults.insert("region", json!("r"));
        let options = ClientOptions::new()
            .endpoint("http://localhost:4566")
            .credentials(Credentials::new("a", "b"));

        let config = resolve("Dummy", &signed_model(), &defaults, &options).unwrap();
        assert_eq!(config.endpoint(), Some("http://localhost:4566"));
        assert_eq!(defaults.snapshot().len(), 1);
    }

    #[test]
    fn wrong_shape_is_invalid_value() {
        let options = ClientOptions::new().option("region", json!(42));
        let err = resolve("Dummy", &signed_model(), &ConfigStore::new(), &options).unwrap_err();
        assert_eq!(
            err,
            ConfigError::invalid_value("region", "expected a string, got number")
        );

        let options = ClientOptions::new().region("");
        let err = resolve("Dummy", &signed_model(), &ConfigStore::new(), &options).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn empty_credentials_count_as_missing() {
        let options = ClientOptions::new()
            .region("r")
            .credentials(Credentials::new("", ""));
        let err = resolve("Dummy", &signed_model(), &ConfigStore::new(), &options).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredentials { .. }));
    }
}
