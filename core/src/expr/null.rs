//! NULL checks.

use crate::model::{ModelField, ModelFieldName};

use super::{CompareOp, Predicate};

/// `_is_null` check. `is_null(User::EMAIL, false)` matches non-null rows.
pub fn is_null<M>(name: ModelFieldName<M>, is_null: bool) -> Predicate<M> {
    Predicate::compare(CompareOp::IsNull, ModelField::new(name, is_null))
}
