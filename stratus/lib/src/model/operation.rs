//! Operation descriptors extracted from a canonical model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumIter, EnumString};

/// HTTP methods an operation can be bound to.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use stratus_lib::HttpMethod;
///
/// assert_eq!(HttpMethod::from_str("GET").unwrap(), HttpMethod::Get);
/// assert_eq!(HttpMethod::Post.to_string(), "POST");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HttpMethod {
    /// HTTP GET
    Get,
    /// HTTP POST
    #[default]
    Post,
    /// HTTP PUT
    Put,
    /// HTTP PATCH
    Patch,
    /// HTTP DELETE
    Delete,
    /// HTTP HEAD
    Head,
}

/// Where an operation is sent over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpBinding {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The request URI template (e.g. `/things/{ThingId}`).
    pub request_uri: String,
}

impl Default for HttpBinding {
    fn default() -> Self {
        Self {
            method: HttpMethod::default(),
            request_uri: "/".to_string(),
        }
    }
}

/// A single operation declared by a model.
///
/// Descriptors are extracted once when the client type is built and are not
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    /// The operation name: the entry's key in the `operations` object.
    pub name: String,
    /// HTTP binding; defaults to `POST /`.
    pub http: HttpBinding,
    /// Name of the input shape, if the operation takes parameters.
    pub input: Option<String>,
    /// Name of the output shape, if the operation returns data.
    pub output: Option<String>,
    /// Error codes this operation declares, in declaration order.
    pub errors: Vec<String>,
    /// The `authtype` override, if any (`"none"` marks unsigned operations).
    pub auth_type: Option<String>,
}

impl OperationDescriptor {
    /// Builds a descriptor from one entry of the model's `operations` object.
    ///
    /// The entry key names the operation; a `name` member inside the
    /// definition is not consulted, so every entry stays distinct.
    /// `resolve_error` maps an error shape reference to its error code.
    pub(crate) fn from_definition(
        key: &str,
        definition: &Map<String, Value>,
        resolve_error: impl Fn(&str) -> String,
    ) -> Self {
        let name = key.to_string();

        let http = definition
            .get("http")
            .and_then(Value::as_object)
            .map(|http| HttpBinding {
                method: http
                    .get("method")
                    .and_then(Value::as_str)
                    .and_then(|m| m.parse().ok())
                    .unwrap_or_default(),
                request_uri: http
                    .get("requestUri")
                    .and_then(Value::as_str)
                    .unwrap_or("/")
                    .to_string(),
            })
            .unwrap_or_default();

        let errors = definition
            .get("errors")
            .and_then(Value::as_array)
            .map(|refs| {
                refs.iter()
                    .filter_map(shape_name)
                    .map(|shape| resolve_error(shape))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name,
            http,
            input: definition.get("input").and_then(shape_name).map(str::to_string),
            output: definition.get("output").and_then(shape_name).map(str::to_string),
            errors,
            auth_type: definition
                .get("authtype")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Returns `true` if the operation is sent without a signature.
    pub fn is_unsigned(&self) -> bool {
        self.auth_type.as_deref() == Some("none")
    }
}

/// Reads `{ "shape": "Name" }`.
pub(crate) fn shape_name(reference: &Value) -> Option<&str> {
    reference.get("shape").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    fn definition(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn defaults_for_bare_operation() {
        let op = OperationDescriptor::from_definition("Ping", &Map::new(), str::to_string);
        assert_eq!(op.name, "Ping");
        assert_eq!(op.http, HttpBinding::default());
        assert_eq!(op.http.method, HttpMethod::Post);
        assert!(op.input.is_none());
        assert!(op.errors.is_empty());
        assert!(!op.is_unsigned());
    }

    #[test]
    fn reads_full_definition() {
        let def = definition(json!({
            "http": { "method": "get", "requestUri": "/things/{ThingId}" },
            "input": { "shape": "GetThingRequest" },
            "output": { "shape": "GetThingResult" },
            "errors": [{ "shape": "NotFoundException" }],
            "authtype": "none"
        }));
        let op = OperationDescriptor::from_definition("GetThing", &def, |s| {
            s.trim_end_matches("Exception").to_string()
        });

        assert_eq!(op.name, "GetThing");
        assert_eq!(op.http.method, HttpMethod::Get);
        assert_eq!(op.http.request_uri, "/things/{ThingId}");
        assert_eq!(op.input.as_deref(), Some("GetThingRequest"));
        assert_eq!(op.output.as_deref(), Some("GetThingResult"));
        assert_eq!(op.errors, vec!["NotFound"]);
        assert!(op.is_unsigned());
    }

    #[test]
    fn entry_key_wins_over_inner_name() {
        let def = definition(json!({ "name": "Get", "http": { "method": "DELETE" } }));
        let op = OperationDescriptor::from_definition("DeleteThing", &def, str::to_string);
        assert_eq!(op.name, "DeleteThing");
    }

    #[test]
    fn unknown_http_method_falls_back_to_post() {
        let def = definition(json!({ "http": { "method": "TRACE" } }));
        let op = OperationDescriptor::from_definition("Trace", &def, str::to_string);
        assert_eq!(op.http.method, HttpMethod::Post);
        assert_eq!(op.http.request_uri, "/");
    }

    #[test]
    fn http_method_iterates_all_variants() {
        assert_eq!(HttpMethod::iter().count(), 6);
    }

    #[test]
    fn serializes_camel_case() {
        let op = OperationDescriptor::from_definition("Ping", &Map::new(), str::to_string);
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(value["http"]["requestUri"], "/");
        assert_eq!(value["authType"], Value::Null);
    }
}
