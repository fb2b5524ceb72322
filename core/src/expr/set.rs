//! Membership checks (`_in`, `_nin`).

use serde::Serialize;

use crate::model::{ModelField, ModelFieldName};

use super::{CompareOp, Predicate};

/// IN list check.
///
/// An empty list renders `_in: []`, which matches no rows.
pub fn is_in<M, I, V>(name: ModelFieldName<M>, values: I) -> Predicate<M>
where
    I: IntoIterator<Item = V>,
    V: Serialize,
{
    let values: Vec<V> = values.into_iter().collect();
    Predicate::compare(CompareOp::In, ModelField::new(name, values))
}

/// NOT IN list check.
pub fn not_in<M, I, V>(name: ModelFieldName<M>, values: I) -> Predicate<M>
where
    I: IntoIterator<Item = V>,
    V: Serialize,
{
    let values: Vec<V> = values.into_iter().collect();
    Predicate::compare(CompareOp::Nin, ModelField::new(name, values))
}
