//! Top-level error type.

use thiserror::Error;

use super::{
    ArgumentError, ConfigError, RegistryError, SchemaLoadError, TaxonomyError, TransportError,
    ValidationError,
};
use crate::taxonomy::ServiceError;

/// Top-level error type for every stratus operation.
///
/// ## Examples
///
/// ```
/// use stratus_lib::{ClientOptions, ConfigError, Stratus, StratusError};
///
/// let stratus = Stratus::new();
/// let service = stratus
///     .add_service("Dummy", serde_json::json!({ "operations": { "Ping": {} } }))
///     .unwrap();
///
/// match service.new_client(ClientOptions::new()) {
///     Err(StratusError::Config(ConfigError::MissingRegion { service })) => {
///         assert_eq!(service, "Dummy");
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum StratusError {
    /// An API description file could not be loaded.
    #[error(transparent)]
    Load(#[from] SchemaLoadError),

    /// A value of the wrong kind was passed in.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// Client construction was refused by the configuration gate.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A registry lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The model's error codes could not be turned into error classes.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    /// Call parameters do not fit the operation's input shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport failed without a service response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The remote service reported an error code.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The client type has no operation with this name.
    #[error("{service} has no operation named {operation}")]
    UnknownOperation {
        /// The service name.
        service: String,
        /// The requested operation.
        operation: String,
    },
}

impl StratusError {
    /// Returns the service error if this failure came from the remote service.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_error() {
        let err: StratusError = ConfigError::MissingRegion {
            service: "S".to_string(),
        }
        .into();
        assert!(matches!(err, StratusError::Config(_)));
        assert!(err.as_service_error().is_none());
    }

    #[test]
    fn transparent_display() {
        let err: StratusError = RegistryError::unknown("Gone").into();
        assert_eq!(err.to_string(), "uninitialized service: Gone");
    }
}
