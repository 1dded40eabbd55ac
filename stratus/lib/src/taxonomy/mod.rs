//! Per-service error taxonomies.
//!
//! Every service gets an [`ErrorNamespace`] holding a base `ServiceError`
//! class plus one [`ErrorClass`] per declared error code. Raised errors are
//! [`ServiceError`] values that carry their class, so callers can handle a
//! specific code or anything from the service through the base class.

mod error_class;
mod namespace;
mod service_error;

pub use error_class::{class_name_for_code, ErrorClass, ERROR_CAPABILITY, SERVICE_ERROR_CAPABILITY};
pub use namespace::{build_errors, ErrorNamespace, BASE_CLASS_NAME};
pub use service_error::{ErrorContext, ServiceError};
