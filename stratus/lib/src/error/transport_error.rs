//! Errors reported by the transport collaborator.

use thiserror::Error;

/// Failures returned by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The remote service answered with an error code.
    ///
    /// The client converts this into a [`ServiceError`](crate::ServiceError)
    /// of the matching error class.
    #[error("service error {code}: {message}")]
    Service {
        /// The error code reported by the service.
        code: String,
        /// The human-readable message reported by the service.
        message: String,
    },

    /// The request never produced a service response (network, timeout).
    #[error("transport failure: {0}")]
    Network(String),

    /// No transport was installed in the context.
    #[error("no transport configured for operation {operation}")]
    NotConfigured {
        /// The operation that was attempted.
        operation: String,
    },
}

impl TransportError {
    /// Creates a service error response.
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }
}
