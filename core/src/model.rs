//! Model identity: the [`Model`] trait, typed field names and field values.
//!
//! Every name and value is tagged with the model it belongs to, so a filter
//! on one table can't be handed to a builder for another:
//!
//! ```ignore
//! let name: ModelFieldName<User> = User::NAME;
//! let field: ModelField<User> = User::name_field("abcd".to_string());
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value as JsonValue;

use crate::variables::QueryVar;

/// A backend-mapped entity type.
///
/// Implemented by `#[derive(Model)]` or by generated source.
pub trait Model: Serialize + DeserializeOwned {
    /// Backend table name, e.g. `test_table`.
    ///
    /// Generated field constants live on the type itself (`User::NAME` is
    /// the `name` column), so this one is spelled differently.
    const TABLE: &'static str;

    /// Rust type name. Prefix of generated variable names.
    const TYPE_NAME: &'static str;
}

/// A column or relationship name owned by model `M`.
pub struct ModelFieldName<M> {
    name: &'static str,
    _model: PhantomData<fn() -> M>,
}

impl<M> ModelFieldName<M> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _model: PhantomData,
        }
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.name
    }
}

impl<M> Clone for ModelFieldName<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for ModelFieldName<M> {}

impl<M> PartialEq for ModelFieldName<M> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<M> Eq for ModelFieldName<M> {}

impl<M> Hash for ModelFieldName<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<M> fmt::Debug for ModelFieldName<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelFieldName").field(&self.name).finish()
    }
}

impl<M> fmt::Display for ModelFieldName<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The value side of a [`ModelField`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Inlined into the document as a GraphQL literal
    Literal(JsonValue),
    /// Rendered as `$name` and bound out of band
    Var(QueryVar),
    /// Serialization failed; reported when the document is built
    Unencodable(String),
}

/// A `(name, value)` pair owned by model `M`, used by filters and `_set`.
pub struct ModelField<M> {
    name: &'static str,
    value: FieldValue,
    _model: PhantomData<fn() -> M>,
}

impl<M> ModelField<M> {
    /// Binds a literal value. Never fails: a value serde can't represent
    /// turns into a build error later.
    pub fn new<V: Serialize>(name: ModelFieldName<M>, value: V) -> Self {
        let value = match serde_json::to_value(&value) {
            Ok(json) => FieldValue::Literal(json),
            Err(err) => FieldValue::Unencodable(err.to_string()),
        };
        Self::with_value(name, value)
    }

    /// Binds a query variable instead of a literal.
    pub fn var(name: ModelFieldName<M>, var: QueryVar) -> Self {
        Self::with_value(name, FieldValue::Var(var))
    }

    fn with_value(name: ModelFieldName<M>, value: FieldValue) -> Self {
        Self {
            name: name.as_str(),
            value,
            _model: PhantomData,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

impl<M> Clone for ModelField<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            value: self.value.clone(),
            _model: PhantomData,
        }
    }
}

impl<M> PartialEq for ModelField<M> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl<M> fmt::Debug for ModelField<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelField")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::VarType;
    use std::collections::HashMap;

    struct Table;

    const NAME: ModelFieldName<Table> = ModelFieldName::new("name");

    #[test]
    fn field_names_compare_by_string() {
        assert_eq!(NAME, ModelFieldName::<Table>::new("name"));
        assert_ne!(NAME, ModelFieldName::<Table>::new("age"));
        assert_eq!(NAME.to_string(), "name");
    }

    #[test]
    fn literal_field_keeps_json_value() {
        let field = ModelField::new(NAME, "abcd");
        assert_eq!(field.name(), "name");
        assert_eq!(field.value(), &FieldValue::Literal(JsonValue::from("abcd")));
    }

    #[test]
    fn var_field_is_not_a_literal() {
        let field = ModelField::new(NAME, 0).clone();
        assert!(matches!(field.value(), FieldValue::Literal(_)));

        let var = QueryVar::new("Table_Name", VarType::STRING, "abcd");
        let field = ModelField::var(NAME, var.clone());
        assert_eq!(field.value(), &FieldValue::Var(var));
    }

    #[test]
    fn unencodable_value_is_deferred() {
        // serde_json refuses non-string map keys
        let mut bad = HashMap::new();
        bad.insert(vec![1u8], 1);
        let field = ModelField::new(NAME, bad);
        assert!(matches!(field.value(), FieldValue::Unencodable(_)));
    }
}
