//! # Graft
//!
//! A typed GraphQL query builder for Hasura-style backends.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graft::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize, Model)]
//! #[model(name = "test_table")]
//! struct TestTable {
//!     id: i32,
//!     name: String,
//! }
//!
//! # fn main() -> graft::Result<()> {
//! let client = Client::new("http://localhost:8080/v1/graphql", ClientOptions::new());
//!
//! let rows: Vec<TestTable> = select::<TestTable>()
//!     .select([TestTable::ID, TestTable::NAME])
//!     .r#where(eq(TestTable::id_field(3)) | like(TestTable::name_field("a%".to_string())))
//!     .order_by([desc(TestTable::NAME)])
//!     .limit(10)
//!     .exec(&client)?;
//!
//! let updated = update::<TestTable>()
//!     .r#where(eq(TestTable::id_field(3)))
//!     .set([TestTable::name_var("renamed".to_string())])
//!     .select([TestTable::ID])
//!     .exec(&client)?;
//! # let _ = (rows, updated);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature   | Default | Description                                    |
//! |-----------|---------|------------------------------------------------|
//! | `client`  | ✅      | Blocking HTTP [`Client`] over `reqwest`         |
//! | `tracing` | ✅      | `debug` events for documents and responses      |

#![cfg_attr(docsrs, feature(doc_cfg))]

// =============================================================================
// Root-level exports
// =============================================================================

pub use graft_core::*;
pub use graft_macros::Model;

/// Everything needed to declare models and build operations.
pub mod prelude {
    pub use graft_core::expr::{
        and, eq, gt, gte, ilike, is_in, is_null, like, lt, lte, neq, not, not_in, or,
    };
    pub use graft_core::{
        Direction, GraftError, Json, Jsonb, Model, ModelField, ModelFieldName, MutationResponse,
        OrderBy, Predicate, QueryVar, Selection, Transport, VarType, asc, desc, insert,
        insert_fields, insert_one, insert_one_fields, select, update,
    };
    #[cfg(feature = "client")]
    pub use graft_core::{Client, ClientOptions};
    pub use graft_macros::Model;
}
