//! Client construction errors raised by the configuration gate.

use thiserror::Error;

/// Errors raised when a client instance is constructed.
///
/// Registration never produces these; they are deferred until a client is
/// actually requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No region was found in the defaults or the instance options.
    #[error(
        "missing region for service {service}: set `region` in the defaults or the client options"
    )]
    MissingRegion {
        /// The service whose client could not be built.
        service: String,
    },

    /// The service signs requests but no credentials were configured.
    #[error("missing credentials for service {service}")]
    MissingCredentials {
        /// The service whose client could not be built.
        service: String,
    },

    /// A recognized key held a value of the wrong shape.
    #[error("invalid value for `{key}`: {message}")]
    InvalidValue {
        /// The configuration key.
        key: String,
        /// What was wrong with the value.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid value error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if a required setting was absent (as opposed to malformed).
    pub fn is_missing_setting(&self) -> bool {
        matches!(self, Self::MissingRegion { .. } | Self::MissingCredentials { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_region_names_service() {
        let err = ConfigError::MissingRegion {
            service: "Dummy".to_string(),
        };
        assert!(err.to_string().contains("Dummy"));
        assert!(err.is_missing_setting());
    }

    #[test]
    fn invalid_value_is_not_missing() {
        let err = ConfigError::invalid_value("region", "expected a string");
        assert_eq!(err.to_string(), "invalid value for `region`: expected a string");
        assert!(!err.is_missing_setting());
    }
}
