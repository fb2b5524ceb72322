//! Comparison leaves.
//!
//! Each function takes exactly one [`ModelField`]; the field's value (or
//! variable) is the right-hand side of the comparison.

use crate::model::ModelField;

use super::{CompareOp, Predicate};

// =============================================================================
// Equality Comparisons
// =============================================================================

/// Equality comparison (`_eq`).
///
/// ```ignore
/// eq(User::name_field("abcd".into()))
/// // {name: {_eq: "abcd"}}
/// ```
pub fn eq<M>(field: ModelField<M>) -> Predicate<M> {
    Predicate::compare(CompareOp::Eq, field)
}

/// Inequality comparison (`_neq`).
pub fn neq<M>(field: ModelField<M>) -> Predicate<M> {
    Predicate::compare(CompareOp::Neq, field)
}

// =============================================================================
// Ordering Comparisons
// =============================================================================

/// Greater-than comparison (`_gt`).
pub fn gt<M>(field: ModelField<M>) -> Predicate<M> {
    Predicate::compare(CompareOp::Gt, field)
}

/// Greater-than-or-equal comparison (`_gte`).
pub fn gte<M>(field: ModelField<M>) -> Predicate<M> {
    Predicate::compare(CompareOp::Gte, field)
}

/// Less-than comparison (`_lt`).
pub fn lt<M>(field: ModelField<M>) -> Predicate<M> {
    Predicate::compare(CompareOp::Lt, field)
}

/// Less-than-or-equal comparison (`_lte`).
pub fn lte<M>(field: ModelField<M>) -> Predicate<M> {
    Predicate::compare(CompareOp::Lte, field)
}

// =============================================================================
// Pattern Matching
// =============================================================================

/// Case-sensitive pattern match (`_like`).
pub fn like<M>(field: ModelField<M>) -> Predicate<M> {
    Predicate::compare(CompareOp::Like, field)
}

/// Case-insensitive pattern match (`_ilike`).
pub fn ilike<M>(field: ModelField<M>) -> Predicate<M> {
    Predicate::compare(CompareOp::Ilike, field)
}
