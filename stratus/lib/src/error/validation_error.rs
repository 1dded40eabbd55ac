//! Request parameter validation errors.

use thiserror::Error;

/// Errors found while checking call parameters against an input shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Parameters must be a JSON object.
    #[error("parameters for {operation} must be an object, got {kind}")]
    NotAnObject {
        /// The operation being called.
        operation: String,
        /// The JSON kind that was supplied.
        kind: &'static str,
    },

    /// A member listed as required by the input shape is absent.
    #[error("missing required parameter `{member}` for {operation}")]
    MissingRequired {
        /// The operation being called.
        operation: String,
        /// The missing member name.
        member: String,
    },

    /// The operation has no input shape but parameters were given.
    #[error("{operation} does not accept parameters")]
    UnexpectedParams {
        /// The operation being called.
        operation: String,
    },
}
