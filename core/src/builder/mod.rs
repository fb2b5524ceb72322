//! Document builder.
//!
//! One builder per operation. Each kind (`Select`, `Insert`, `InsertOne`,
//! `Update`) is a type-state marker deciding how the accumulated clauses are
//! rendered and what a response decodes into.
//!
//! ```ignore
//! let op = graft::select::<TestTable>()
//!     .select([TestTable::NAME])
//!     .limit(2)
//!     .r#where(eq(TestTable::age_field(10)))
//!     .build()?;
//! ```
//!
//! Every clause method is available on every kind; a kind ignores what it
//! does not render (`order_by` on an insert is accepted and unused).

mod kind;

pub use kind::{Insert, InsertOne, OperationKind, Select, Update};

use core::fmt;
use core::marker::PhantomData;

use crate::error::{BuildError, Result};
use crate::expr::Predicate;
use crate::model::{Model, ModelField, ModelFieldName};
use crate::response::decode;
use crate::selection::{OrderBy, Selection};
use crate::transport::{GraphqlRequest, Transport};
use crate::variables::Variables;

//------------------------------------------------------------------------------
// Factories
//------------------------------------------------------------------------------

/// Starts a `query get_<model>` selecting rows of `M`.
///
/// At least one field must be selected before building.
pub fn select<M: Model>() -> QueryBuilder<M, Select> {
    QueryBuilder::new(Vec::new())
}

/// Starts a `mutation insert_<model>` for one or more objects.
///
/// Objects render in the order given, `first` first.
pub fn insert<M, I>(first: M, rest: I) -> QueryBuilder<M, Insert>
where
    M: Model,
    I: IntoIterator<Item = M>,
{
    let mut objects = vec![InsertObject::Model(first)];
    objects.extend(rest.into_iter().map(InsertObject::Model));
    QueryBuilder::new(objects)
}

/// Starts a `mutation insert_<model>` from field lists instead of instances.
///
/// Each row renders as `{a: 1, b: $Var}`, so values that can't be written
/// as literals (JSON with arbitrary keys) can be bound as variables.
pub fn insert_fields<M, I>(first: Vec<ModelField<M>>, rest: I) -> QueryBuilder<M, Insert>
where
    M: Model,
    I: IntoIterator<Item = Vec<ModelField<M>>>,
{
    let mut objects = vec![InsertObject::Fields(first)];
    objects.extend(rest.into_iter().map(InsertObject::Fields));
    QueryBuilder::new(objects)
}

/// Starts a `mutation insert_<model>_one` for a single object.
///
/// At least one field must be selected before building.
pub fn insert_one<M: Model>(object: M) -> QueryBuilder<M, InsertOne> {
    QueryBuilder::new(vec![InsertObject::Model(object)])
}

/// Starts a `mutation insert_<model>_one` from a field list.
pub fn insert_one_fields<M, I>(fields: I) -> QueryBuilder<M, InsertOne>
where
    M: Model,
    I: IntoIterator<Item = ModelField<M>>,
{
    QueryBuilder::new(vec![InsertObject::Fields(fields.into_iter().collect())])
}

/// Starts a `mutation update_<model>`.
pub fn update<M: Model>() -> QueryBuilder<M, Update> {
    QueryBuilder::new(Vec::new())
}

//------------------------------------------------------------------------------
// Rendered operation
//------------------------------------------------------------------------------

/// A rendered document together with the variables it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Operation name, e.g. `get_test_table`
    pub name: String,
    /// Full document text
    pub query: String,
    pub variables: Variables,
}

//------------------------------------------------------------------------------
// Insert rows
//------------------------------------------------------------------------------

/// One row of an insert: a serialized instance or an explicit field list.
enum InsertObject<M> {
    Model(M),
    Fields(Vec<ModelField<M>>),
}

impl<M: Clone> Clone for InsertObject<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Model(model) => Self::Model(model.clone()),
            Self::Fields(fields) => Self::Fields(fields.clone()),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for InsertObject<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(model) => f.debug_tuple("Model").field(model).finish(),
            Self::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
        }
    }
}

//------------------------------------------------------------------------------
// QueryBuilder
//------------------------------------------------------------------------------

/// Accumulates clauses for one operation on model `M`.
pub struct QueryBuilder<M, K> {
    selections: Vec<Selection<M>>,
    filter: Option<Predicate<M>>,
    order_by: Vec<OrderBy<M>>,
    limit: Option<u64>,
    offset: Option<u64>,
    distinct_on: Vec<ModelFieldName<M>>,
    objects: Vec<InsertObject<M>>,
    set: Vec<ModelField<M>>,
    affected_rows: bool,
    _kind: PhantomData<K>,
}

impl<M, K> QueryBuilder<M, K> {
    fn new(objects: Vec<InsertObject<M>>) -> Self {
        Self {
            selections: Vec::new(),
            filter: None,
            order_by: Vec::new(),
            limit: None,
            offset: None,
            distinct_on: Vec::new(),
            objects,
            set: Vec::new(),
            affected_rows: false,
            _kind: PhantomData,
        }
    }

    /// Sets the filter. A later call replaces an earlier one.
    pub fn r#where(mut self, predicate: Predicate<M>) -> Self {
        self.filter = Some(predicate);
        self
    }

    /// Appends fields (or relationship sub-selections) to the selection set.
    /// Duplicates are kept.
    pub fn select<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Selection<M>>,
    {
        self.selections.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Appends ordering keys.
    pub fn order_by<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = OrderBy<M>>,
    {
        self.order_by.extend(keys);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Appends `distinct_on` columns.
    pub fn distinct_on<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = ModelFieldName<M>>,
    {
        self.distinct_on.extend(fields);
        self
    }

    /// Appends `_set` fields for an update.
    pub fn set<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = ModelField<M>>,
    {
        self.set.extend(fields);
        self
    }

    /// Requests `affected_rows` even when fields are selected.
    pub fn affected_rows(mut self) -> Self {
        self.affected_rows = true;
        self
    }
}

impl<M: Model, K: OperationKind> QueryBuilder<M, K> {
    /// Operation name used in the document signature.
    pub fn operation_name(&self) -> String {
        K::operation_name(M::TABLE)
    }

    /// Key of the payload under `data` in the response.
    pub fn operation_key(&self) -> String {
        K::operation_key(M::TABLE)
    }

    /// Renders the document and collects its variables.
    ///
    /// Pure: calling it again yields the same result.
    pub fn build(&self) -> core::result::Result<Operation, BuildError> {
        let mut variables = Variables::new();
        let mut body = String::new();
        K::write_body(self, &mut body, &mut variables)?;

        let name = self.operation_name();
        let query = format!(
            "{} {}{} {{\n{}\n}}",
            K::KEYWORD,
            name,
            variables.declarations(),
            body
        );
        Ok(Operation {
            name,
            query,
            variables,
        })
    }

    /// Rendered document text.
    pub fn query(&self) -> core::result::Result<String, BuildError> {
        self.build().map(|op| op.query)
    }

    /// Variables bound by the document.
    pub fn variables(&self) -> core::result::Result<Variables, BuildError> {
        self.build().map(|op| op.variables)
    }

    /// Builds, sends one request through `transport` and decodes the payload.
    pub fn exec<T>(&self, transport: &T) -> Result<K::Response<M>>
    where
        T: Transport + ?Sized,
    {
        let operation = self.build()?;
        crate::graft_trace_query!(operation.name, operation.query, operation.variables.len());

        let request = GraphqlRequest::new(&operation.query, &operation.variables);
        let body = transport.send(&request)?;

        let key = self.operation_key();
        crate::graft_trace_response!(key, body.len());
        decode(&body, &key)
    }
}

impl<M: Clone, K> Clone for QueryBuilder<M, K> {
    fn clone(&self) -> Self {
        Self {
            selections: self.selections.clone(),
            filter: self.filter.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
            distinct_on: self.distinct_on.clone(),
            objects: self.objects.clone(),
            set: self.set.clone(),
            affected_rows: self.affected_rows,
            _kind: PhantomData,
        }
    }
}

impl<M: fmt::Debug, K> fmt::Debug for QueryBuilder<M, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("kind", &core::any::type_name::<K>())
            .field("selections", &self.selections)
            .field("filter", &self.filter)
            .field("order_by", &self.order_by)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("distinct_on", &self.distinct_on)
            .field("objects", &self.objects)
            .field("set", &self.set)
            .field("affected_rows", &self.affected_rows)
            .finish()
    }
}
