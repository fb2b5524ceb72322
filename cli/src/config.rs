//! Graft configuration (`graft.toml`)
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
//! ident = "jsonb_col"
//! type = "Option<Meta>"
//! json = true
//! ```
//!
//! Relative paths resolve against the directory holding the config file.

use std::path::{Path, PathBuf};

use graft_codegen::{CodegenError, CodegenOptions, FieldDecl, ModelDecl, Schema};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "graft.toml";

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Generated file, relative to the config file
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Path generated code uses to reach graft
    #[serde(default = "default_crate_path")]
    pub crate_path: String,

    #[serde(default, rename = "model")]
    pub models: Vec<ModelConfig>,

    #[serde(skip)]
    base_dir: PathBuf,

    #[serde(skip)]
    schema: Schema,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Rust type name
    #[serde(rename = "type")]
    pub type_name: String,

    /// Backend model name, defaults to the snake_case type name
    pub name: Option<String>,

    #[serde(default, rename = "field")]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Rust field name
    pub ident: String,

    /// Serialized name, defaults to `ident`
    pub column: Option<String>,

    /// Rust type, e.g. `Option<String>`
    #[serde(rename = "type")]
    pub type_text: String,

    #[serde(default)]
    pub relation: bool,

    #[serde(default)]
    pub json: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("src/generated.rs")
}

fn default_crate_path() -> String {
    "graft".to_string()
}

impl Config {
    /// Load from `graft.toml` in the current directory
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        let mut config = Self::parse(&content).map_err(|e| match e {
            Error::Parse(_, source) => Error::Parse(path.into(), source),
            other => other,
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse and validate config text
    pub fn parse(content: &str) -> Result<Self, Error> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| Error::Parse(PathBuf::from(CONFIG_FILE), e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&mut self) -> Result<(), Error> {
        if self.crate_path.trim().is_empty() {
            return Err(Error::Invalid("crate_path must not be empty".to_string()));
        }

        let mut decls = Vec::with_capacity(self.models.len());
        for model in &self.models {
            decls.push(model.to_decl()?);
        }
        self.schema = Schema::new(decls)?;
        Ok(())
    }

    /// Validated model declarations
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Output file resolved against the config location
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output)
    }

    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            crate_path: self.crate_path.clone(),
        }
    }
}

impl ModelConfig {
    fn to_decl(&self) -> Result<ModelDecl, Error> {
        let type_name = self.type_name.trim();
        if type_name.is_empty() {
            return Err(Error::Invalid("model with an empty `type`".to_string()));
        }

        let fields = self
            .fields
            .iter()
            .map(|f| {
                FieldDecl::parse(
                    &f.ident,
                    f.column.as_deref(),
                    &f.type_text,
                    f.relation,
                    f.json,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ModelDecl {
            type_name: type_name.to_string(),
            model_name: self
                .name
                .clone()
                .unwrap_or_else(|| ModelDecl::default_model_name(type_name)),
            fields,
        })
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        output = "gen/models.rs"

        [[model]]
        type = "TestTable"
        name = "test_table"

        [[model.field]]
        ident = "id"
        type = "i32"

        [[model.field]]
        ident = "owner"
        type = "Option<Owner>"
        relation = true

        [[model]]
        type = "Owner"

        [[model.field]]
        ident = "email"
        column = "mail"
        type = "Option<String>"
    "#;

    #[test]
    fn parses_models_and_fields() {
        let cfg = Config::parse(SAMPLE).unwrap();
        assert_eq!(cfg.crate_path, "graft");
        assert_eq!(cfg.models.len(), 2);

        let owner = cfg.schema().get("Owner").unwrap();
        assert_eq!(owner.model_name, "owner");
        assert_eq!(owner.fields[0].column, "mail");

        let table = cfg.schema().get("TestTable").unwrap();
        assert!(table.fields[1].kind.is_relation());
    }

    #[test]
    fn defaults() {
        let cfg = Config::parse("").unwrap();
        assert_eq!(cfg.output, PathBuf::from("src/generated.rs"));
        assert!(cfg.schema().is_empty());
    }

    #[test]
    fn unknown_relation_is_rejected() {
        let err = Config::parse(
            r#"
            [[model]]
            type = "Item"
            [[model.field]]
            ident = "owner"
            type = "Owner"
            relation = true
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Codegen(CodegenError::UnknownRelation { .. })));
    }

    #[test]
    fn bad_type_is_rejected() {
        let err = Config::parse(
            r#"
            [[model]]
            type = "Item"
            [[model.field]]
            ident = "id"
            type = "Vec<"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unparsable type `Vec<`"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Config::parse("dialect = \"sqlite\""),
            Err(Error::Parse(..))
        ));
    }

    #[test]
    fn output_resolves_against_config_dir() {
        let dir = std::env::temp_dir().join("graft-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        std::fs::write(&path, SAMPLE).unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.output_path(), dir.join("gen/models.rs"));
    }

    #[test]
    fn missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/graft.toml")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
