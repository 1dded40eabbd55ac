//! Errors raised on behalf of a remote service.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use super::error_class::ErrorClass;

/// Where a service error originated.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// The service that was called.
    pub service: String,
    /// The operation that failed.
    pub operation: String,
    /// The parameters the operation was called with.
    pub params: Value,
}

impl ErrorContext {
    /// Creates a context for an operation call.
    pub fn new(service: impl Into<String>, operation: impl Into<String>, params: Value) -> Self {
        Self {
            service: service.into(),
            operation: operation.into(),
            params,
        }
    }
}

/// An error reported by a remote service.
///
/// Every instance belongs to an [`ErrorClass`] of its service's namespace.
/// Match on a specific class with [`ServiceError::is_a`], or on the
/// namespace base to handle every error from the service.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use stratus_lib::{build_errors, ApiModel, ErrorContext};
///
/// let model = ApiModel::try_from(json!({
///     "shapes": { "NotFound": { "exception": true } }
/// })).unwrap();
/// let errors = build_errors("Things", &model).unwrap();
///
/// let err = errors.error(
///     "NotFound",
///     "no such thing",
///     ErrorContext::new("Things", "GetThing", json!({ "Id": "t-1" })),
/// );
///
/// assert!(err.is_a(errors.class("NotFound").unwrap()));
/// assert!(err.is_a(errors.base()));
/// assert_eq!(err.code(), "NotFound");
/// assert_eq!(err.to_string(), "Things::Errors::NotFound (GetThing): no such thing");
/// ```
#[derive(Debug, Clone, Error)]
#[error("{class} ({operation}): {message}", operation = .context.operation)]
pub struct ServiceError {
    class: Arc<ErrorClass>,
    code: String,
    message: String,
    context: ErrorContext,
}

impl ServiceError {
    /// Creates an error of the given class.
    pub fn new(
        class: Arc<ErrorClass>,
        code: impl Into<String>,
        message: impl Into<String>,
        context: ErrorContext,
    ) -> Self {
        Self {
            class,
            code: code.into(),
            message: message.into(),
            context,
        }
    }

    /// The class this error was raised as.
    pub fn class(&self) -> &ErrorClass {
        &self.class
    }

    /// The error code reported by the service.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable message reported by the service.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The originating call.
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Returns `true` if this error's class is `class` or derives from it.
    pub fn is_a(&self, class: &ErrorClass) -> bool {
        self.class.descends_from(class)
    }
}
