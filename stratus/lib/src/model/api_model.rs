//! The canonical, shareable form of an API description.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde_json::{Map, Value};

use super::operation::{shape_name, OperationDescriptor};

/// An immutable, normalized API description.
///
/// The definition is held behind an [`Arc`], so cloning an `ApiModel` hands
/// out another reference to the same instance. Equality is structural (deep
/// comparison of the definitions); use [`ApiModel::is_same_instance`] when
/// referential identity matters.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use stratus_lib::ApiModel;
///
/// let a = ApiModel::try_from(json!({ "operations": {} })).unwrap();
/// let b = ApiModel::try_from(json!({ "operations": {} })).unwrap();
/// let c = a.clone();
///
/// assert_eq!(a, b);
/// assert!(!a.is_same_instance(&b));
/// assert!(a.is_same_instance(&c));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApiModel {
    definition: Arc<Map<String, Value>>,
}

impl ApiModel {
    /// Wraps an already-parsed definition.
    pub fn new(definition: Map<String, Value>) -> Self {
        Self {
            definition: Arc::new(definition),
        }
    }

    /// The zero-operation model produced from an absent description.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The underlying definition mapping.
    pub fn definition(&self) -> &Map<String, Value> {
        &self.definition
    }

    /// Returns `true` when both values refer to the same instance.
    pub fn is_same_instance(&self, other: &ApiModel) -> bool {
        Arc::ptr_eq(&self.definition, &other.definition)
    }

    /// Returns `true` if the definition has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.definition.is_empty()
    }

    /// The `metadata` object, if present.
    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.definition.get("metadata").and_then(Value::as_object)
    }

    /// A string entry of `metadata` (e.g. `serviceId`, `signatureVersion`).
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata()?.get(key).and_then(Value::as_str)
    }

    /// A shape definition by name.
    pub fn shape(&self, name: &str) -> Option<&Map<String, Value>> {
        self.definition
            .get("shapes")
            .and_then(Value::as_object)?
            .get(name)
            .and_then(Value::as_object)
    }

    /// Every operation declared by the model, sorted by name.
    pub fn operations(&self) -> Vec<OperationDescriptor> {
        let Some(operations) = self.definition.get("operations").and_then(Value::as_object)
        else {
            return Vec::new();
        };

        let mut descriptors: Vec<OperationDescriptor> = operations
            .iter()
            .filter_map(|(key, def)| {
                def.as_object().map(|def| {
                    OperationDescriptor::from_definition(key, def, |shape| {
                        self.error_code_for(shape)
                    })
                })
            })
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    /// Number of declared operations.
    pub fn operation_count(&self) -> usize {
        self.definition
            .get("operations")
            .and_then(Value::as_object)
            .map_or(0, |ops| ops.values().filter(|op| op.is_object()).count())
    }

    /// Every error code the model declares, sorted and de-duplicated.
    ///
    /// Codes come from shapes flagged `"exception": true` and from the error
    /// references of each operation. A reference to an undefined shape
    /// contributes the shape name itself.
    pub fn error_codes(&self) -> Vec<String> {
        let mut codes: BTreeSet<String> = self
            .exception_shapes()
            .into_values()
            .collect();

        if let Some(operations) = self.definition.get("operations").and_then(Value::as_object) {
            for op in operations.values() {
                let refs = op.get("errors").and_then(Value::as_array);
                for shape in refs.into_iter().flatten().filter_map(shape_name) {
                    codes.insert(self.error_code_for(shape));
                }
            }
        }

        codes.into_iter().collect()
    }

    /// Returns `true` if constructing a client requires a region.
    ///
    /// Any model with at least one operation is region-dependent; the empty
    /// model is not.
    pub fn requires_region(&self) -> bool {
        self.operation_count() > 0
    }

    /// Returns `true` if constructing a client requires credentials.
    ///
    /// Credentials are needed unless the service disables signing
    /// (`metadata.signatureVersion == "none"`) or every operation is marked
    /// `"authtype": "none"`.
    pub fn requires_credentials(&self) -> bool {
        if self.metadata_str("signatureVersion") == Some("none") {
            return false;
        }
        self.operations().iter().any(|op| !op.is_unsigned())
    }

    /// Exception shape name to error code.
    fn exception_shapes(&self) -> BTreeMap<String, String> {
        let Some(shapes) = self.definition.get("shapes").and_then(Value::as_object) else {
            return BTreeMap::new();
        };

        shapes
            .iter()
            .filter_map(|(name, shape)| {
                let shape = shape.as_object()?;
                let is_exception = shape.get("exception").and_then(Value::as_bool) == Some(true);
                is_exception.then(|| (name.clone(), exception_code(name, shape)))
            })
            .collect()
    }

    /// Resolves an error shape reference to its code.
    fn error_code_for(&self, shape: &str) -> String {
        self.shape(shape)
            .map_or_else(|| shape.to_string(), |def| exception_code(shape, def))
    }
}

/// `error.code` when declared, otherwise the shape name.
fn exception_code(name: &str, shape: &Map<String, Value>) -> String {
    shape
        .get("error")
        .and_then(|e| e.get("code"))
        .and_then(Value::as_str)
        .unwrap_or(name)
        .to_string()
}

impl PartialEq for ApiModel {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_instance(other) || self.definition == other.definition
    }
}

impl Eq for ApiModel {}

impl PartialEq<Map<String, Value>> for ApiModel {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        *self.definition == *other
    }
}

impl PartialEq<Value> for ApiModel {
    fn eq(&self, other: &Value) -> bool {
        other.as_object().is_some_and(|map| *self == *map)
    }
}

impl From<Map<String, Value>> for ApiModel {
    fn from(definition: Map<String, Value>) -> Self {
        Self::new(definition)
    }
}

impl TryFrom<Value> for ApiModel {
    type Error = crate::error::ArgumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::empty()),
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(crate::error::ArgumentError::UnsupportedDescription {
                kind: crate::error::json_kind(&other),
            }),
        }
    }
}
