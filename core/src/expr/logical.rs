//! Logical operators (AND, OR, NOT).
//!
//! This module provides both function-based and operator-based logical operations:
//!
//! ```ignore
//! // Function style
//! and(condition1, [condition2, condition3])
//! or(condition1, [condition2])
//! not(condition)
//!
//! // Operator style (via std::ops traits)
//! condition1 & condition2   // BitAnd
//! condition1 | condition2   // BitOr
//! !condition                // Not
//! ```
//!
//! Operators always build a two-child node, so `a & b & c` nests as
//! `{_and: [{_and: [a, b]}, c]}`.

use core::ops::{BitAnd, BitOr, Not};

use super::Predicate;

// =============================================================================
// NOT
// =============================================================================

/// Logical NOT (`_not`).
pub fn not<M>(predicate: Predicate<M>) -> Predicate<M> {
    Predicate::Not(Box::new(predicate))
}

// =============================================================================
// AND / OR
// =============================================================================

/// Logical AND of one or more conditions (`_and`).
///
/// A single condition is still wrapped: `and(a, [])` renders `{_and: [a]}`.
pub fn and<M, I>(first: Predicate<M>, rest: I) -> Predicate<M>
where
    I: IntoIterator<Item = Predicate<M>>,
{
    Predicate::And {
        first: Box::new(first),
        rest: rest.into_iter().collect(),
    }
}

/// Logical OR of one or more conditions (`_or`).
pub fn or<M, I>(first: Predicate<M>, rest: I) -> Predicate<M>
where
    I: IntoIterator<Item = Predicate<M>>,
{
    Predicate::Or {
        first: Box::new(first),
        rest: rest.into_iter().collect(),
    }
}

// =============================================================================
// Operator Trait Implementations
// =============================================================================

/// Implements `!predicate`.
impl<M> Not for Predicate<M> {
    type Output = Predicate<M>;

    fn not(self) -> Self::Output {
        not(self)
    }
}

/// Implements `a & b` as `{_and: [a, b]}`.
impl<M> BitAnd for Predicate<M> {
    type Output = Predicate<M>;

    fn bitand(self, rhs: Self) -> Self::Output {
        and(self, [rhs])
    }
}

/// Implements `a | b` as `{_or: [a, b]}`.
impl<M> BitOr for Predicate<M> {
    type Output = Predicate<M>;

    fn bitor(self, rhs: Self) -> Self::Output {
        or(self, [rhs])
    }
}
