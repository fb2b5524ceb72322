//! Model descriptions and accessor generation for graft.
//!
//! [`ModelDecl`] describes a model type and its serialized fields. It is
//! built either from `#[derive(Model)]` input ([`ModelDecl::from_derive`])
//! or from a schema file ([`FieldDecl::parse`]). [`generate_source`] turns a
//! validated [`Schema`] into Rust source implementing the accessors the
//! query builder consumes.

pub mod emit;
pub mod error;
pub mod model;
pub mod schema;
pub mod types;

pub use emit::{CodegenOptions, GeneratedSource, HEADER, generate_source, model_source};
pub use error::CodegenError;
pub use model::{FieldDecl, ModelDecl};
pub use schema::Schema;
pub use types::{FieldKind, ScalarKind, ScalarType};
