//! GraphQL literal encoding.
//!
//! A model instance is serialized through serde into an intermediate JSON
//! value (struct field order is kept) and then re-emitted with GraphQL
//! syntax: object keys are bare names, strings are quoted, numbers and
//! booleans are bare. A key that is not a GraphQL name can't be written
//! bare and fails with [`BuildError::Encode`]; such values go through a
//! variable instead.
//!
//! ```ignore
//! encode_model(&User { name: "abcd".into(), age: 10 })?
//! // {name: "abcd", age: 10}
//! ```

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::BuildError;
use crate::model::{FieldValue, ModelField};
use crate::variables::Variables;

/// Appends `value` as a GraphQL literal.
///
/// Object keys are written bare, so each must be a GraphQL name. `field`
/// names the value in the error when one is not.
pub(crate) fn write_json(
    out: &mut String,
    value: &JsonValue,
    field: &str,
) -> Result<(), BuildError> {
    match value {
        JsonValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_json(out, item, field)?;
            }
            out.push(']');
        }
        JsonValue::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if !is_graphql_name(key) {
                    return Err(BuildError::Encode {
                        field: field.to_string(),
                        message: format!(
                            "object key `{key}` is not a GraphQL name; bind the value as a variable with `_var::<Jsonb>` instead"
                        ),
                    });
                }
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                write_json(out, item, field)?;
            }
            out.push('}');
        }
        // JSON and GraphQL agree on null, booleans, numbers and string escapes
        scalar => out.push_str(&scalar.to_string()),
    }
    Ok(())
}

/// `/[_A-Za-z][_0-9A-Za-z]*/`
fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// Renders a JSON value as a GraphQL literal.
///
/// Fails when an object key is not a valid GraphQL name.
pub fn encode_value(value: &JsonValue) -> Result<String, BuildError> {
    let mut out = String::new();
    write_json(&mut out, value, "value")?;
    Ok(out)
}

/// Renders a model instance as a GraphQL object literal.
pub fn encode_model<M: Serialize>(model: &M) -> Result<String, BuildError> {
    let mut out = String::new();
    write_model(&mut out, model)?;
    Ok(out)
}

pub(crate) fn write_model<M: Serialize>(out: &mut String, model: &M) -> Result<(), BuildError> {
    let type_name = core::any::type_name::<M>();
    let value = serde_json::to_value(model).map_err(|err| BuildError::Encode {
        field: type_name.to_string(),
        message: err.to_string(),
    })?;
    write_json(out, &value, type_name)
}

/// Appends a field value: the literal, or `$name` after registering the variable.
pub(crate) fn write_field_value(
    out: &mut String,
    field: &str,
    value: &FieldValue,
    vars: &mut Variables,
) -> Result<(), BuildError> {
    match value {
        FieldValue::Literal(json) => write_json(out, json, field)?,
        FieldValue::Var(var) => {
            vars.register(var)?;
            out.push('$');
            out.push_str(var.name());
        }
        FieldValue::Unencodable(message) => {
            return Err(BuildError::Encode {
                field: field.to_string(),
                message: message.clone(),
            });
        }
    }
    Ok(())
}

/// Appends `{a: 1, b: $Var}` for a list of fields, in the given order.
pub(crate) fn write_fields<M>(
    out: &mut String,
    fields: &[ModelField<M>],
    vars: &mut Variables,
) -> Result<(), BuildError> {
    out.push('{');
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(field.name());
        out.push_str(": ");
        write_field_value(out, field.name(), field.value(), vars)?;
    }
    out.push('}');
    Ok(())
}
