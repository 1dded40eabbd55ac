//! Normalization of API descriptions into canonical models.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use super::ApiModel;
use crate::error::{json_kind, ArgumentError, SchemaLoadError, StratusError};

/// Every form an API description may be supplied in.
///
/// Conversions exist from the common input types, so callers rarely build
/// this enum by hand:
///
/// ```
/// use std::path::PathBuf;
/// use serde_json::json;
/// use stratus_lib::{ApiDescription, ApiModel};
///
/// assert!(matches!(ApiDescription::from(None::<ApiModel>), ApiDescription::Absent));
/// assert!(matches!(ApiDescription::from("api.json"), ApiDescription::Path(_)));
/// assert!(matches!(ApiDescription::from(PathBuf::from("api.json")), ApiDescription::Path(_)));
/// assert!(matches!(ApiDescription::from(json!({})), ApiDescription::Document(_)));
/// assert!(matches!(ApiDescription::from(ApiModel::empty()), ApiDescription::Model(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub enum ApiDescription {
    /// No description: yields the empty model.
    #[default]
    Absent,
    /// A JSON document on disk.
    Path(PathBuf),
    /// An already-parsed JSON document.
    Document(Value),
    /// An already-canonical model; passed through untouched.
    Model(ApiModel),
}

impl ApiDescription {
    fn form(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Path(_) => "path",
            Self::Document(_) => "document",
            Self::Model(_) => "model",
        }
    }
}

impl<T: Into<ApiDescription>> From<Option<T>> for ApiDescription {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<&str> for ApiDescription {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<String> for ApiDescription {
    fn from(path: String) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<&Path> for ApiDescription {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ApiDescription {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Value> for ApiDescription {
    fn from(document: Value) -> Self {
        Self::Document(document)
    }
}

impl From<Map<String, Value>> for ApiDescription {
    fn from(document: Map<String, Value>) -> Self {
        Self::Document(Value::Object(document))
    }
}

impl From<ApiModel> for ApiDescription {
    fn from(model: ApiModel) -> Self {
        Self::Model(model)
    }
}

impl From<&ApiModel> for ApiDescription {
    fn from(model: &ApiModel) -> Self {
        Self::Model(model.clone())
    }
}

/// Produces the canonical model for any description form.
///
/// - absent, an empty path or a JSON `null` yield the empty model
/// - a path is read and parsed as a JSON object
/// - a JSON object is wrapped without copying
/// - a model is returned as the same instance
///
/// ## Errors
///
/// - [`SchemaLoadError`] if a path cannot be read, is not JSON, or is not an object
/// - [`ArgumentError::UnsupportedDescription`] for a document that is not an object
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use stratus_lib::{normalize, ApiModel};
///
/// let model = ApiModel::try_from(json!({ "operations": {} })).unwrap();
/// let same = normalize(&model).unwrap();
/// assert!(same.is_same_instance(&model));
///
/// assert!(normalize(None::<ApiModel>).unwrap().is_empty());
/// assert!(normalize(json!([1, 2, 3])).is_err());
/// ```
pub fn normalize(description: impl Into<ApiDescription>) -> Result<ApiModel, StratusError> {
    let description = description.into();
    debug!(form = description.form(), "normalizing API description");

    match description {
        ApiDescription::Absent => Ok(ApiModel::empty()),
        ApiDescription::Path(path) if path.as_os_str().is_empty() => Ok(ApiModel::empty()),
        ApiDescription::Path(path) => Ok(load_json(&path)?),
        ApiDescription::Document(Value::Null) => Ok(ApiModel::empty()),
        ApiDescription::Document(Value::Object(map)) => Ok(ApiModel::new(map)),
        ApiDescription::Document(other) => Err(ArgumentError::UnsupportedDescription {
            kind: json_kind(&other),
        }
        .into()),
        ApiDescription::Model(model) => Ok(model),
    }
}

/// Reads a JSON object from disk.
fn load_json(path: &Path) -> Result<ApiModel, SchemaLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| SchemaLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| SchemaLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => {
            debug!(path = %path.display(), keys = map.len(), "loaded API description");
            Ok(ApiModel::new(map))
        }
        other => Err(SchemaLoadError::NotAnObject {
            path: path.to_path_buf(),
            kind: json_kind(&other),
        }),
    }
}
