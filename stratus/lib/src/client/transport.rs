//! The seam to the network layer.

use serde_json::Value;

use crate::config::EffectiveConfig;
use crate::error::TransportError;
use crate::model::OperationDescriptor;

/// Everything a transport needs to execute one operation call.
#[derive(Debug, Clone, Copy)]
pub struct OperationRequest<'a> {
    /// The calling service.
    pub service: &'a str,
    /// The operation being called.
    pub operation: &'a OperationDescriptor,
    /// Validated call parameters.
    pub params: &'a Value,
    /// The client's effective configuration (region, credentials, pass-through keys).
    pub config: &'a EffectiveConfig,
}

/// Executes operation calls on behalf of generated clients.
///
/// Implementations own serialization, signing, retries and the network.
/// Calls are synchronous; a transport that needs an async runtime is
/// expected to block on it internally.
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Sends one request and returns the decoded response body.
    ///
    /// ## Errors
    ///
    /// Return [`TransportError::Service`] when the remote service reports an
    /// error code; the client converts it into the matching error class.
    fn send(&self, request: &OperationRequest<'_>) -> Result<Value, TransportError>;
}

/// The transport installed when none is provided: every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredTransport;

impl Transport for UnconfiguredTransport {
    fn send(&self, request: &OperationRequest<'_>) -> Result<Value, TransportError> {
        Err(TransportError::NotConfigured {
            operation: request.operation.name.clone(),
        })
    }
}
