use serde::de::DeserializeOwned;

use crate::error::BuildError;
use crate::literal::{write_fields, write_model};
use crate::model::Model;
use crate::response::MutationResponse;
use crate::selection::write_selections;
use crate::variables::Variables;

use super::{InsertObject, QueryBuilder};

//------------------------------------------------------------------------------
// Sealed Trait Pattern
//------------------------------------------------------------------------------

mod private {
    pub trait Sealed {}
}

/// How a builder renders and what its response decodes into.
///
/// Sealed: implemented only by [`Select`], [`Insert`], [`InsertOne`] and
/// [`Update`].
pub trait OperationKind: private::Sealed + Sized {
    /// `query` or `mutation`
    const KEYWORD: &'static str;

    /// Payload type found under the operation key.
    type Response<M: Model>: DeserializeOwned;

    /// Key of the payload under `data`.
    fn operation_key(model: &str) -> String;

    /// Name in the operation signature. Defaults to the payload key.
    fn operation_name(model: &str) -> String {
        Self::operation_key(model)
    }

    #[doc(hidden)]
    fn write_body<M: Model>(
        builder: &QueryBuilder<M, Self>,
        out: &mut String,
        vars: &mut Variables,
    ) -> Result<(), BuildError>;
}

//------------------------------------------------------------------------------
// Type State Markers
//------------------------------------------------------------------------------

/// Marker for `query get_<model>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Select;

/// Marker for `mutation insert_<model>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insert;

/// Marker for `mutation insert_<model>_one`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOne;

/// Marker for `mutation update_<model>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Update;

impl private::Sealed for Select {}
impl private::Sealed for Insert {}
impl private::Sealed for InsertOne {}
impl private::Sealed for Update {}

//------------------------------------------------------------------------------
// Shared pieces
//------------------------------------------------------------------------------

/// `affected_rows` and/or `returning {...}`.
fn write_return_block<M, K>(out: &mut String, builder: &QueryBuilder<M, K>) {
    let returning = !builder.selections.is_empty();
    if builder.affected_rows || !returning {
        out.push_str("affected_rows");
        if returning {
            out.push('\n');
        }
    }
    if returning {
        out.push_str("returning {\n");
        write_selections(out, &builder.selections);
        out.push_str("\n}");
    }
}

/// One insert row as an object literal.
fn write_object<M: Model>(
    out: &mut String,
    object: &InsertObject<M>,
    vars: &mut Variables,
) -> Result<(), BuildError> {
    match object {
        InsertObject::Model(model) => write_model(out, model),
        InsertObject::Fields(fields) => write_fields(out, fields, vars),
    }
}

/// Fails when nothing is selected; an empty selection set is not valid GraphQL.
fn require_selections<M: Model, K: OperationKind>(
    builder: &QueryBuilder<M, K>,
) -> Result<(), BuildError> {
    if builder.selections.is_empty() {
        return Err(BuildError::EmptySelection {
            operation: K::operation_name(M::TABLE),
        });
    }
    Ok(())
}

/// `name` for one entry, `[a, b]` for several.
fn write_list<T>(out: &mut String, items: &[T], mut write: impl FnMut(&mut String, &T)) {
    match items {
        [single] => write(out, single),
        _ => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write(out, item);
            }
            out.push(']');
        }
    }
}

//------------------------------------------------------------------------------
// Select
//------------------------------------------------------------------------------

impl OperationKind for Select {
    const KEYWORD: &'static str = "query";

    type Response<M: Model> = Vec<M>;

    fn operation_key(model: &str) -> String {
        model.to_string()
    }

    fn operation_name(model: &str) -> String {
        format!("get_{model}")
    }

    fn write_body<M: Model>(
        builder: &QueryBuilder<M, Self>,
        out: &mut String,
        vars: &mut Variables,
    ) -> Result<(), BuildError> {
        require_selections(builder)?;

        // limit, offset, distinct_on, where, order_by; unset clauses are omitted
        let mut args = Vec::new();

        if let Some(limit) = builder.limit {
            args.push(format!("limit: {limit}"));
        }
        if let Some(offset) = builder.offset {
            args.push(format!("offset: {offset}"));
        }
        if !builder.distinct_on.is_empty() {
            let mut arg = String::from("distinct_on: ");
            write_list(&mut arg, &builder.distinct_on, |out, name| {
                out.push_str(name.as_str())
            });
            args.push(arg);
        }
        if let Some(filter) = &builder.filter {
            let mut arg = String::from("where: ");
            filter.write(&mut arg, vars)?;
            args.push(arg);
        }
        if !builder.order_by.is_empty() {
            let mut arg = String::from("order_by: ");
            write_list(&mut arg, &builder.order_by, |out, key| key.write(out));
            args.push(arg);
        }

        out.push_str(M::TABLE);
        if !args.is_empty() {
            out.push('(');
            out.push_str(&args.join(", "));
            out.push(')');
        }
        out.push_str(" {\n");
        write_selections(out, &builder.selections);
        out.push_str("\n}");
        Ok(())
    }
}

//------------------------------------------------------------------------------
// Insert
//------------------------------------------------------------------------------

impl OperationKind for Insert {
    const KEYWORD: &'static str = "mutation";

    type Response<M: Model> = MutationResponse<M>;

    fn operation_key(model: &str) -> String {
        format!("insert_{model}")
    }

    fn write_body<M: Model>(
        builder: &QueryBuilder<M, Self>,
        out: &mut String,
        vars: &mut Variables,
    ) -> Result<(), BuildError> {
        out.push_str(&Self::operation_key(M::TABLE));
        out.push_str("(objects: [");
        for (i, object) in builder.objects.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_object(out, object, vars)?;
        }
        out.push_str("]) {\n");
        write_return_block(out, builder);
        out.push_str("\n}");
        Ok(())
    }
}

//------------------------------------------------------------------------------
// InsertOne
//------------------------------------------------------------------------------

impl OperationKind for InsertOne {
    const KEYWORD: &'static str = "mutation";

    type Response<M: Model> = Option<M>;

    fn operation_key(model: &str) -> String {
        format!("insert_{model}_one")
    }

    fn write_body<M: Model>(
        builder: &QueryBuilder<M, Self>,
        out: &mut String,
        vars: &mut Variables,
    ) -> Result<(), BuildError> {
        require_selections(builder)?;

        out.push_str(&Self::operation_key(M::TABLE));
        out.push_str("(object: ");
        match builder.objects.first() {
            Some(object) => write_object(out, object, vars)?,
            None => out.push_str("{}"),
        }
        out.push_str(") {\n");
        write_selections(out, &builder.selections);
        out.push_str("\n}");
        Ok(())
    }
}

//------------------------------------------------------------------------------
// Update
//------------------------------------------------------------------------------

impl OperationKind for Update {
    const KEYWORD: &'static str = "mutation";

    type Response<M: Model> = MutationResponse<M>;

    fn operation_key(model: &str) -> String {
        format!("update_{model}")
    }

    fn write_body<M: Model>(
        builder: &QueryBuilder<M, Self>,
        out: &mut String,
        vars: &mut Variables,
    ) -> Result<(), BuildError> {
        out.push_str(&Self::operation_key(M::TABLE));
        out.push_str("(where: ");
        match &builder.filter {
            Some(filter) => filter.write(out, vars)?,
            None => out.push_str("{}"),
        }
        out.push_str(", _set: ");
        write_fields(out, &builder.set, vars)?;
        out.push_str(") {\n");
        write_return_block(out, builder);
        out.push_str("\n}");
        Ok(())
    }
}
