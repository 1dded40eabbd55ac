//! Runtime service client materialization.
//!
//! `stratus-lib` turns a declarative API description (operations, shapes and
//! error codes) into a usable client at run time. Nothing is generated at
//! compile time: a single generic [`ClientType`] carries the canonical model
//! and a dispatch table, and each declared error code becomes an
//! [`ErrorClass`] inside the service's [`ErrorNamespace`].
//!
//! ## Pipeline
//!
//! 1. [`normalize`] accepts any [`ApiDescription`] form and yields an [`ApiModel`]
//! 2. [`build_errors`] and [`build_client`] each read the model independently
//! 3. [`Stratus::add_service`] binds both under a [`ServiceName`]
//! 4. [`ServiceModule::new_client`] runs the configuration gate ([`resolve`])
//!    before handing out a [`Client`]
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use stratus_lib::{ClientOptions, Credentials, Stratus};
//!
//! let stratus = Stratus::new();
//! let api = json!({
//!     "operations": { "ListThings": { "output": { "shape": "ListThingsResult" } } },
//!     "shapes": { "NotFound": { "type": "structure", "exception": true } }
//! });
//!
//! let service = stratus.add_service("Things", api).unwrap();
//! assert_eq!(service.client_type().operation_names(), vec!["ListThings"]);
//! assert!(service.errors().class("NotFound").is_some());
//!
//! // No region configured yet: construction is refused.
//! assert!(service.new_client(ClientOptions::new()).is_err());
//!
//! let client = service
//!     .new_client(
//!         ClientOptions::new()
//!             .region("eu-west-1")
//!             .credentials(Credentials::new("akid", "secret")),
//!     )
//!     .unwrap();
//! assert_eq!(client.config().region(), Some("eu-west-1"));
//! ```

pub mod client;
pub mod config;
mod context;
pub mod error;
pub mod model;
pub mod registry;
pub mod taxonomy;

pub use client::{
    build_client, Client, ClientType, OperationRequest, Transport, UnconfiguredTransport,
};
pub use config::{resolve, ClientOptions, ConfigKey, ConfigStore, Credentials, EffectiveConfig};
pub use context::Stratus;
pub use error::{
    ArgumentError, ConfigError, RegistryError, SchemaLoadError, StratusError, TaxonomyError,
    TransportError, ValidationError,
};
pub use model::{normalize, ApiDescription, ApiModel, HttpBinding, HttpMethod, OperationDescriptor};
pub use registry::{ServiceModule, ServiceName, ServiceRegistry};
pub use taxonomy::{build_errors, ErrorClass, ErrorContext, ErrorNamespace, ServiceError};

/// The crate version, as a semver string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_semver_compatible() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 3, "expected MAJOR.MINOR.PATCH, got {VERSION}");
        for part in &parts[..2] {
            assert!(part.parse::<u64>().is_ok(), "non-numeric component in {VERSION}");
        }
        let patch: String = parts[2].chars().take_while(char::is_ascii_digit).collect();
        assert!(!patch.is_empty());
    }
}
