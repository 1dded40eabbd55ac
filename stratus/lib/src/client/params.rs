//! Top-level parameter checks against an operation's input shape.

use serde_json::Value;

use crate::error::{json_kind, ValidationError};
use crate::model::{ApiModel, OperationDescriptor};

/// Checks `params` against the operation's input shape.
///
/// `null` is treated as an empty object. Only the top level is checked:
/// the value must be an object and every `required` member must be present.
pub(crate) fn validate_params(
    model: &ApiModel,
    operation: &OperationDescriptor,
    params: &Value,
) -> Result<(), ValidationError> {
    let members = match params {
        Value::Null => None,
        Value::Object(map) => Some(map),
        other => {
            return Err(ValidationError::NotAnObject {
                operation: operation.name.clone(),
                kind: json_kind(other),
            });
        }
    };

    let Some(input) = operation.input.as_deref() else {
        if members.is_some_and(|m| !m.is_empty()) {
            return Err(ValidationError::UnexpectedParams {
                operation: operation.name.clone(),
            });
        }
        return Ok(());
    };

    let required = model
        .shape(input)
        .and_then(|shape| shape.get("required"))
        .and_then(Value::as_array);

    for member in required.into_iter().flatten().filter_map(Value::as_str) {
        if !members.is_some_and(|m| m.contains_key(member)) {
            return Err(ValidationError::MissingRequired {
                operation: operation.name.clone(),
                member: member.to_string(),
            });
        }
    }

    Ok(())
}
