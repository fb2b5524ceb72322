//! Core of graft: typed GraphQL documents for a Hasura-style backend.
//!
//! Builders render select/insert/update documents from typed field names,
//! filter trees and model instances, collect bound variables alongside, and
//! decode the backend's response into model types.

pub mod builder;
pub mod error;
pub mod expr;
pub mod literal;
pub mod model;
pub mod response;
pub mod selection;
pub mod tracing;
pub mod transport;
pub mod variables;

pub use builder::{
    Insert, InsertOne, Operation, OperationKind, QueryBuilder, Select, Update, insert,
    insert_fields, insert_one, insert_one_fields, select, update,
};
pub use error::{BuildError, GraftError, Result, TransportError};
pub use expr::{CompareOp, Predicate};
pub use literal::{encode_model, encode_value};
pub use model::{FieldValue, Model, ModelField, ModelFieldName};
pub use response::{GraphqlError, MutationResponse, decode};
pub use selection::{Direction, OrderBy, Selection, asc, desc};
pub use transport::{GraphqlRequest, Transport};
#[cfg(feature = "client")]
pub use transport::{Client, ClientOptions};
pub use variables::{Json, JsonVarType, Jsonb, QueryVar, Scalar, VarType, Variables};
