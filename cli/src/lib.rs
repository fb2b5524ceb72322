//! Graft CLI - generates typed model accessors from a `graft.toml` file
//!
//! The `#[derive(Model)]` macro covers models declared in the same crate.
//! This tool covers the other case: models whose accessors should live in a
//! checked-in source file, generated from a declarative description.
//!
//! # Quick Start
//!
//! 1. Run `graft init` to create a `graft.toml`
//! 2. Describe your models under `[[model]]`
//! 3. Run `graft generate` and `include!` the output next to the structs
//!
//! # Configuration
//!
//! ```toml
//! output = "src/generated.rs"
//! crate_path = "graft"
//!
//! [[model]]
//! type = "TestTable"
//! name = "test_table"
//!
//! [[model.field]]
//! ident = "id"
//! type = "i32"
//!
//! [[model.field]]
//! ident = "owner"
//! type = "Option<Owner>"
//! relation = true
//! ```
//!
//! # Commands
//!
//! - `graft init` - Create a new graft.toml configuration file
//! - `graft check` - Validate the configuration and list the models
//! - `graft generate [--types A,B] [--output PATH]` - Write the accessor file

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use config::{Config, Error as ConfigError, FieldConfig, ModelConfig};
pub use error::CliError;
