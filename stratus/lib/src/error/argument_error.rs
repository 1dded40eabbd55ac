//! Caller programming errors.

use thiserror::Error;

/// Errors caused by passing a value of the wrong kind.
///
/// These are never retried; they indicate a bug in the calling code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// An API description was given in a form the normalizer does not accept.
    #[error("unsupported API description: expected a path, an object or a model, got {kind}")]
    UnsupportedDescription {
        /// The JSON kind that was supplied (e.g. "array").
        kind: &'static str,
    },

    /// The process-wide defaults were assigned something other than an object.
    #[error("configuration defaults must be an object, got {kind}")]
    NonMappingConfig {
        /// The JSON kind that was supplied.
        kind: &'static str,
    },

    /// A service name is not a valid identifier.
    #[error("invalid service name '{name}': {reason}")]
    InvalidServiceName {
        /// The rejected name.
        name: String,
        /// Which rule the name broke.
        reason: &'static str,
    },
}
