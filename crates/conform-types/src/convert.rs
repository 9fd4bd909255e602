//! Conversion from JSON and TOML documents.
//!
//! Lists become collections keyed `0..n`. Maps become collections keyed by
//! member name, in document order, with canonical integer names turned into
//! integer keys (see [`Key::normalized`]). A map carrying a string
//! [`CLASS_MARKER`] member becomes an [`ObjectValue`] of that class; the
//! marker itself is not kept as a property.

use crate::array::KeyedArray;
use crate::error::{TypeError, TypeResult};
use crate::key::Key;
use crate::value::{ObjectValue, Value};

/// Member name that tags a document map as an object.
pub const CLASS_MARKER: &str = "__class__";

impl Value {
    /// Build a value from a JSON document.
    pub fn from_json(json: &serde_json::Value) -> TypeResult<Self> {
        Ok(match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n
                    .as_f64()
                    .map(Self::Float)
                    .ok_or_else(|| TypeError::UnsupportedNumber(n.to_string()))?,
            },
            serde_json::Value::String(s) => Self::Str(s.clone()),
            serde_json::Value::Array(items) => Self::Array(
                items
                    .iter()
                    .map(Self::from_json)
                    .collect::<TypeResult<Vec<_>>>()
                    .map(KeyedArray::from_values)?,
            ),
            serde_json::Value::Object(members) => {
                let class = match members.get(CLASS_MARKER) {
                    Some(serde_json::Value::String(class)) if !class.is_empty() => {
                        Some(class.clone())
                    }
                    Some(other) => return Err(TypeError::InvalidClassMarker(other.to_string())),
                    None => None,
                };
                let properties = members
                    .iter()
                    .filter(|(name, _)| name.as_str() != CLASS_MARKER)
                    .map(|(name, v)| -> TypeResult<(Key, Value)> {
                        Ok((Key::normalized(name.as_str()), Self::from_json(v)?))
                    })
                    .collect::<TypeResult<KeyedArray>>()?;
                tag(class, properties)
            }
        })
    }

    /// Build a value from a TOML document.
    ///
    /// Datetimes have no counterpart in the value model and become strings.
    pub fn from_toml(doc: &toml::Value) -> TypeResult<Self> {
        Ok(match doc {
            toml::Value::String(s) => Self::Str(s.clone()),
            toml::Value::Integer(i) => Self::Int(*i),
            toml::Value::Float(f) => Self::Float(*f),
            toml::Value::Boolean(b) => Self::Bool(*b),
            toml::Value::Datetime(dt) => Self::Str(dt.to_string()),
            toml::Value::Array(items) => Self::Array(
                items
                    .iter()
                    .map(Self::from_toml)
                    .collect::<TypeResult<Vec<_>>>()
                    .map(KeyedArray::from_values)?,
            ),
            toml::Value::Table(table) => {
                let class = match table.get(CLASS_MARKER) {
                    Some(toml::Value::String(class)) if !class.is_empty() => Some(class.clone()),
                    Some(other) => return Err(TypeError::InvalidClassMarker(other.to_string())),
                    None => None,
                };
                let properties = table
                    .iter()
                    .filter(|(name, _)| name.as_str() != CLASS_MARKER)
                    .map(|(name, v)| -> TypeResult<(Key, Value)> {
                        Ok((Key::normalized(name.as_str()), Self::from_toml(v)?))
                    })
                    .collect::<TypeResult<KeyedArray>>()?;
                tag(class, properties)
            }
        })
    }
}

fn tag(class: Option<String>, properties: KeyedArray) -> Value {
    match class {
        Some(class) => Value::Object(ObjectValue { class, properties }),
        None => Value::Array(properties),
    }
}
