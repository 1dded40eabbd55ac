//! Layered error types for the stratus runtime.
//!
//! Each failure category lives in its own enum; [`StratusError`] aggregates
//! them so callers can use a single `Result` type while still matching on the
//! specific category when needed.

mod argument_error;
mod config_error;
mod load_error;
mod registry_error;
mod stratus_error;
mod taxonomy_error;
mod transport_error;
mod validation_error;

pub use argument_error::ArgumentError;
pub use config_error::ConfigError;
pub use load_error::SchemaLoadError;
pub use registry_error::RegistryError;
pub use stratus_error::StratusError;
pub use taxonomy_error::TaxonomyError;
pub use transport_error::TransportError;
pub use validation_error::ValidationError;

/// Returns a short name for the JSON kind of `value`, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
