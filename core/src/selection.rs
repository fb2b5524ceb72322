//! Selection sets and ordering keys.

use core::fmt;
use core::marker::PhantomData;

use crate::model::ModelFieldName;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectionNode {
    name: &'static str,
    children: Vec<SelectionNode>,
}

impl SelectionNode {
    fn write(&self, out: &mut String) {
        out.push_str(self.name);
        if self.children.is_empty() {
            return;
        }
        out.push_str(" {");
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            child.write(out);
        }
        out.push('}');
    }
}

/// One entry of a selection set on model `M`: a column, or a relationship
/// with its own sub-selection on the related model.
///
/// ```ignore
/// let owner = Selection::relation::<Owner, _>(Item::OWNER, Owner::ID, [Owner::EMAIL.into()]);
/// // owner {id
/// // email}
/// ```
pub struct Selection<M> {
    node: SelectionNode,
    _model: PhantomData<fn() -> M>,
}

impl<M> Selection<M> {
    /// A relationship `name` selecting one or more fields of `R`.
    pub fn relation<R, I>(name: ModelFieldName<M>, first: impl Into<Selection<R>>, rest: I) -> Self
    where
        I: IntoIterator<Item = Selection<R>>,
    {
        let mut children = vec![first.into().node];
        children.extend(rest.into_iter().map(|s| s.node));
        Self {
            node: SelectionNode {
                name: name.as_str(),
                children,
            },
            _model: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.node.name
    }

    pub fn is_relation(&self) -> bool {
        !self.node.children.is_empty()
    }

    pub(crate) fn write(&self, out: &mut String) {
        self.node.write(out);
    }
}

impl<M> From<ModelFieldName<M>> for Selection<M> {
    fn from(name: ModelFieldName<M>) -> Self {
        Self {
            node: SelectionNode {
                name: name.as_str(),
                children: Vec::new(),
            },
            _model: PhantomData,
        }
    }
}

impl<M> Clone for Selection<M> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            _model: PhantomData,
        }
    }
}

impl<M> PartialEq for Selection<M> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<M> fmt::Debug for Selection<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selection").field(&self.node).finish()
    }
}

impl<M> fmt::Display for Selection<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write(&mut out);
        f.write_str(&out)
    }
}

/// Appends selections one per line.
pub(crate) fn write_selections<M>(out: &mut String, selections: &[Selection<M>]) {
    for (i, selection) in selections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        selection.write(out);
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Sort direction, as named by the backend's `order_by` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
    AscNullsFirst,
    AscNullsLast,
    DescNullsFirst,
    DescNullsLast,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
            Self::AscNullsFirst => "asc_nulls_first",
            Self::AscNullsLast => "asc_nulls_last",
            Self::DescNullsFirst => "desc_nulls_first",
            Self::DescNullsLast => "desc_nulls_last",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `field: direction` ordering key on model `M`.
pub struct OrderBy<M> {
    field: ModelFieldName<M>,
    direction: Direction,
}

impl<M> OrderBy<M> {
    pub const fn new(field: ModelFieldName<M>, direction: Direction) -> Self {
        Self { field, direction }
    }

    pub const fn field(&self) -> ModelFieldName<M> {
        self.field
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn write(&self, out: &mut String) {
        out.push('{');
        out.push_str(self.field.as_str());
        out.push_str(": ");
        out.push_str(self.direction.as_str());
        out.push('}');
    }
}

impl<M> Clone for OrderBy<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for OrderBy<M> {}

impl<M> PartialEq for OrderBy<M> {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.direction == other.direction
    }
}

impl<M> fmt::Debug for OrderBy<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBy")
            .field("field", &self.field)
            .field("direction", &self.direction)
            .finish()
    }
}

/// Ascending order on `field`.
pub const fn asc<M>(field: ModelFieldName<M>) -> OrderBy<M> {
    OrderBy::new(field, Direction::Asc)
}

/// Descending order on `field`.
pub const fn desc<M>(field: ModelFieldName<M>) -> OrderBy<M> {
    OrderBy::new(field, Direction::Desc)
}
