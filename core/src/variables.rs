//! Query variables and the table that collects them while a document renders.

use core::fmt;
use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value as JsonValue;

use crate::error::BuildError;

/// GraphQL scalar a variable is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Boolean,
    Int,
    Float,
    String,
    Json,
    Jsonb,
}

impl Scalar {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Json => "json",
            Self::Jsonb => "jsonb",
        }
    }
}

/// Declared type of a variable: a scalar plus nullability.
///
/// Renders as `Int!` when required and `Int` when nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarType {
    scalar: Scalar,
    nullable: bool,
}

impl VarType {
    pub const BOOLEAN: Self = Self::required(Scalar::Boolean);
    pub const INT: Self = Self::required(Scalar::Int);
    pub const FLOAT: Self = Self::required(Scalar::Float);
    pub const STRING: Self = Self::required(Scalar::String);
    pub const NULLABLE_BOOLEAN: Self = Self::nullable(Scalar::Boolean);
    pub const NULLABLE_INT: Self = Self::nullable(Scalar::Int);
    pub const NULLABLE_FLOAT: Self = Self::nullable(Scalar::Float);
    pub const NULLABLE_STRING: Self = Self::nullable(Scalar::String);
    pub const JSON: Self = Self::nullable(Scalar::Json);
    pub const JSONB: Self = Self::nullable(Scalar::Jsonb);

    pub const fn required(scalar: Scalar) -> Self {
        Self {
            scalar,
            nullable: false,
        }
    }

    pub const fn nullable(scalar: Scalar) -> Self {
        Self {
            scalar,
            nullable: true,
        }
    }

    #[inline]
    pub const fn scalar(self) -> Scalar {
        self.scalar
    }

    #[inline]
    pub const fn is_nullable(self) -> bool {
        self.nullable
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scalar.as_str())?;
        if !self.nullable {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// Selects the declared type of a structured (JSON) variable.
///
/// ```ignore
/// User::settings_var::<Jsonb>(settings)
/// ```
pub trait JsonVarType {
    const VAR_TYPE: VarType;
}

/// Declares the variable as `json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

/// Declares the variable as `jsonb`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jsonb;

impl JsonVarType for Json {
    const VAR_TYPE: VarType = VarType::JSON;
}

impl JsonVarType for Jsonb {
    const VAR_TYPE: VarType = VarType::JSONB;
}

/// A value bound by name instead of being inlined.
///
/// The document gets `$name`, the operation signature gets `$name: <type>`
/// and the value lands in [`Variables`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVar {
    name: Cow<'static, str>,
    ty: VarType,
    value: Result<JsonValue, String>,
}

impl QueryVar {
    pub fn new<V: Serialize>(name: impl Into<Cow<'static, str>>, ty: VarType, value: V) -> Self {
        Self {
            name: name.into(),
            ty,
            value: serde_json::to_value(&value).map_err(|e| e.to_string()),
        }
    }

    /// Binds a structured value declared as `json` or `jsonb`.
    pub fn json<T: JsonVarType, V: Serialize>(name: impl Into<Cow<'static, str>>, value: V) -> Self {
        Self::new(name, T::VAR_TYPE, value)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn ty(&self) -> VarType {
        self.ty
    }

    /// The bound value, or `None` when it failed to serialize.
    pub fn value(&self) -> Option<&JsonValue> {
        self.value.as_ref().ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Binding {
    ty: VarType,
    value: JsonValue,
}

/// Name → value table filled while a document renders.
///
/// Entries keep first-registration order. Registering a name again with the
/// same type and value is a no-op; a different type or value is a
/// [`BuildError::VariableConflict`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    entries: IndexMap<String, Binding>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, var: &QueryVar) -> Result<(), BuildError> {
        let value = var.value.as_ref().map_err(|message| BuildError::Encode {
            field: var.name.to_string(),
            message: message.clone(),
        })?;

        match self.entries.get(var.name()) {
            Some(existing) if existing.ty == var.ty && &existing.value == value => Ok(()),
            Some(_) => Err(BuildError::VariableConflict {
                name: var.name.to_string(),
            }),
            None => {
                self.entries.insert(
                    var.name.to_string(),
                    Binding {
                        ty: var.ty,
                        value: value.clone(),
                    },
                );
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.entries.get(name).map(|b| &b.value)
    }

    pub fn var_type(&self, name: &str) -> Option<VarType> {
        self.entries.get(name).map(|b| b.ty)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, value)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(k, b)| (k.as_str(), &b.value))
    }

    /// Operation signature: `($a: Int!, $b: jsonb)`, or empty without variables.
    pub fn declarations(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let decls = self
            .entries
            .iter()
            .map(|(name, b)| format!("${name}: {}", b.ty))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({decls})")
    }

    /// Snapshot as a JSON object.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
