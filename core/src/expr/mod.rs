//! Boolean filter expressions for `where` arguments.
//!
//! A [`Predicate`] is an immutable tree. Leaves compare exactly one
//! [`ModelField`]; `_and`/`_or` nodes hold one or more children and `_not`
//! holds exactly one.
//!
//! ```ignore
//! or(eq(User::name_field("abcd".into())), [eq(User::age_field(10))])
//! // {_or: [{name: {_eq: "abcd"}}, {age: {_eq: 10}}]}
//! ```
//!
//! Children render in the order they were supplied. Nested nodes of the
//! same operator stay nested.

mod cmp;
mod logical;
mod null;
mod set;

pub use cmp::*;
pub use logical::*;
pub use null::*;
pub use set::*;

use core::fmt;

use crate::error::BuildError;
use crate::literal::write_field_value;
use crate::model::ModelField;
use crate::variables::Variables;

/// Comparison operators understood by the backend's boolean expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Nin,
    Like,
    Ilike,
    IsNull,
}

impl CompareOp {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "_eq",
            Self::Neq => "_neq",
            Self::Gt => "_gt",
            Self::Gte => "_gte",
            Self::Lt => "_lt",
            Self::Lte => "_lte",
            Self::In => "_in",
            Self::Nin => "_nin",
            Self::Like => "_like",
            Self::Ilike => "_ilike",
            Self::IsNull => "_is_null",
        }
    }
}

/// A node of a filter expression over model `M`.
pub enum Predicate<M> {
    /// `{field: {_op: value}}`
    Compare { op: CompareOp, field: ModelField<M> },
    /// `{_and: [first, rest...]}`
    And {
        first: Box<Predicate<M>>,
        rest: Vec<Predicate<M>>,
    },
    /// `{_or: [first, rest...]}`
    Or {
        first: Box<Predicate<M>>,
        rest: Vec<Predicate<M>>,
    },
    /// `{_not: inner}`
    Not(Box<Predicate<M>>),
}

impl<M> Predicate<M> {
    pub fn compare(op: CompareOp, field: ModelField<M>) -> Self {
        Self::Compare { op, field }
    }

    /// Renders the expression, registering any variables it binds.
    pub fn render(&self, vars: &mut Variables) -> Result<String, BuildError> {
        let mut out = String::new();
        self.write(&mut out, vars)?;
        Ok(out)
    }

    /// Renders the expression into a fresh variable table.
    pub fn to_graphql(&self) -> Result<String, BuildError> {
        self.render(&mut Variables::new())
    }

    pub(crate) fn write(&self, out: &mut String, vars: &mut Variables) -> Result<(), BuildError> {
        match self {
            Self::Compare { op, field } => {
                out.push('{');
                out.push_str(field.name());
                out.push_str(": {");
                out.push_str(op.as_str());
                out.push_str(": ");
                write_field_value(out, field.name(), field.value(), vars)?;
                out.push_str("}}");
            }
            Self::And { first, rest } => write_list(out, "_and", first, rest, vars)?,
            Self::Or { first, rest } => write_list(out, "_or", first, rest, vars)?,
            Self::Not(inner) => {
                out.push_str("{_not: ");
                inner.write(out, vars)?;
                out.push('}');
            }
        }
        Ok(())
    }
}

fn write_list<M>(
    out: &mut String,
    key: &str,
    first: &Predicate<M>,
    rest: &[Predicate<M>],
    vars: &mut Variables,
) -> Result<(), BuildError> {
    out.push('{');
    out.push_str(key);
    out.push_str(": [");
    first.write(out, vars)?;
    for child in rest {
        out.push_str(", ");
        child.write(out, vars)?;
    }
    out.push_str("]}");
    Ok(())
}

impl<M> Clone for Predicate<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Compare { op, field } => Self::Compare {
                op: *op,
                field: field.clone(),
            },
            Self::And { first, rest } => Self::And {
                first: first.clone(),
                rest: rest.clone(),
            },
            Self::Or { first, rest } => Self::Or {
                first: first.clone(),
                rest: rest.clone(),
            },
            Self::Not(inner) => Self::Not(inner.clone()),
        }
    }
}

impl<M> PartialEq for Predicate<M> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Compare { op: a, field: fa }, Self::Compare { op: b, field: fb }) => {
                a == b && fa == fb
            }
            (Self::And { first: fa, rest: ra }, Self::And { first: fb, rest: rb })
            | (Self::Or { first: fa, rest: ra }, Self::Or { first: fb, rest: rb }) => {
                fa == fb && ra == rb
            }
            (Self::Not(a), Self::Not(b)) => a == b,
            _ => false,
        }
    }
}

impl<M> fmt::Debug for Predicate<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare { op, field } => f
                .debug_struct("Compare")
                .field("op", op)
                .field("field", field)
                .finish(),
            Self::And { first, rest } => f
                .debug_struct("And")
                .field("first", first)
                .field("rest", rest)
                .finish(),
            Self::Or { first, rest } => f
                .debug_struct("Or")
                .field("first", first)
                .field("rest", rest)
                .finish(),
            Self::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
        }
    }
}
