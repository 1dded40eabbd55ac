//! Client type generation from a canonical model.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{ApiModel, OperationDescriptor};

/// The capability every generated client type provides.
pub const CLIENT_CAPABILITY: &str = "stratus::client::Client";

/// A client "class" bound to one API model.
///
/// Holds the exact [`ApiModel`] it was built from (same instance, not a
/// copy) and a dispatch table from operation name to descriptor.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use stratus_lib::{build_client, ApiModel};
///
/// let model = ApiModel::try_from(json!({
///     "operations": { "GetThing": {}, "ListThings": {} }
/// })).unwrap();
///
/// let client_type = build_client("Things", model.clone());
/// assert!(client_type.api().is_same_instance(&model));
/// assert_eq!(client_type.operation_names(), vec!["GetThing", "ListThings"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientType {
    service: String,
    api: ApiModel,
    operations: BTreeMap<String, OperationDescriptor>,
}

impl ClientType {
    /// The service name this type was built for.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The model this type was built from.
    pub fn api(&self) -> &ApiModel {
        &self.api
    }

    /// Looks up an operation by name.
    pub fn operation(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.get(name)
    }

    /// Returns `true` if the type exposes `name`.
    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Operation names in sorted order.
    pub fn operation_names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    /// Every operation descriptor, sorted by name.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.values()
    }

    /// `<Service>::Client`.
    pub fn qualified_name(&self) -> String {
        format!("{}::Client", self.service)
    }

    /// The type followed by the capabilities it provides, most specific first.
    pub fn ancestors(&self) -> Vec<String> {
        vec![self.qualified_name(), CLIENT_CAPABILITY.to_string()]
    }
}

/// Builds the client type for a service.
///
/// A model with no operations yields a valid type with an empty operation set.
pub fn build_client(service: &str, api: ApiModel) -> ClientType {
    let operations: BTreeMap<String, OperationDescriptor> = api
        .operations()
        .into_iter()
        .map(|op| (op.name.clone(), op))
        .collect();

    debug!(service, operations = operations.len(), "built client type");

    ClientType {
        service: service.to_string(),
        api,
        operations,
    }
}
