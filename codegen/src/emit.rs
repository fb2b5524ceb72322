//! Rust source generation for model accessors.
//!
//! The emitted file holds `impl Model` and an inherent impl per model and is
//! meant to be `include!`d next to the model declarations.

use std::collections::HashSet;

use crate::model::{FieldDecl, ModelDecl};
use crate::schema::Schema;
use crate::types::{FieldKind, type_name};

/// First line of every generated file.
pub const HEADER: &str = "// generated by graft. DO NOT EDIT.";

/// Result of code generation
#[derive(Debug, Clone, Default)]
pub struct GeneratedSource {
    /// The generated Rust source code
    pub code: String,
    /// Models that were generated, in emission order
    pub models: Vec<String>,
    /// Requested types that could not be generated
    pub warnings: Vec<String>,
}

/// Options for code generation
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Path generated code uses to reach graft (`graft`, `crate`, ...)
    pub crate_path: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            crate_path: "graft".to_string(),
        }
    }
}

/// Generates accessors for `types` and, transitively, every model they
/// relate to. Each model is emitted once.
pub fn generate_source<S: AsRef<str>>(
    schema: &Schema,
    types: &[S],
    options: &CodegenOptions,
) -> GeneratedSource {
    let mut result = GeneratedSource::default();
    let mut visited = HashSet::new();

    result.code.push_str(HEADER);
    result.code.push('\n');
    for type_name in types {
        emit_model(schema, type_name.as_ref(), options, &mut visited, &mut result);
    }
    result
}

fn emit_model(
    schema: &Schema,
    type_name: &str,
    options: &CodegenOptions,
    visited: &mut HashSet<String>,
    result: &mut GeneratedSource,
) {
    if !visited.insert(type_name.to_string()) {
        return;
    }
    let Some(model) = schema.get(type_name) else {
        result
            .warnings
            .push(format!("type `{type_name}` not found in schema, skipping"));
        return;
    };

    result.code.push('\n');
    result.code.push_str(&model_source(model, options));
    result.models.push(type_name.to_string());

    for target in model.relation_targets() {
        emit_model(schema, &target, options, visited, result);
    }
}

/// Source for one model: `impl Model` plus its accessors.
pub fn model_source(model: &ModelDecl, options: &CodegenOptions) -> String {
    let krate = options.crate_path.as_str();
    let mut code = String::new();

    code.push_str(&format!(
        "impl {krate}::Model for {ty} {{\n    const TABLE: &'static str = {name:?};\n    const TYPE_NAME: &'static str = {ty:?};\n}}\n\n",
        ty = model.type_name,
        name = model.model_name,
    ));

    code.push_str(&format!("impl {} {{\n", model.type_name));
    for (i, field) in model.fields.iter().enumerate() {
        if i > 0 {
            code.push('\n');
        }
        code.push_str(&field_source(model, field, krate));
    }
    code.push_str("}\n");
    code
}

fn field_source(model: &ModelDecl, field: &FieldDecl, krate: &str) -> String {
    let const_name = field.const_name();
    let mut code = format!(
        "    pub const {const_name}: {krate}::ModelFieldName<Self> = {krate}::ModelFieldName::new({:?});\n",
        field.column
    );

    match &field.kind {
        FieldKind::Relation { target } => {
            let target = type_name(target).unwrap_or_default();
            code.push_str(&format!(
                "\n    pub fn {ident}(\n        first: impl Into<{krate}::Selection<{target}>>,\n        rest: impl IntoIterator<Item = {krate}::Selection<{target}>>,\n    ) -> {krate}::Selection<Self> {{\n        {krate}::Selection::relation(Self::{const_name}, first, rest)\n    }}\n",
                ident = field.ident,
            ));
        }
        kind => {
            code.push_str(&format!(
                "\n    pub fn {fn_name}(val: {ty}) -> {krate}::ModelField<Self> {{\n        {krate}::ModelField::new(Self::{const_name}, val)\n    }}\n",
                fn_name = field.field_fn(),
                ty = field.type_text,
            ));
            match kind {
                FieldKind::Scalar(scalar) => code.push_str(&format!(
                    "\n    pub fn {fn_name}(val: {ty}) -> {krate}::ModelField<Self> {{\n        {krate}::ModelField::var(\n            Self::{const_name},\n            {krate}::QueryVar::new({var:?}, {krate}::VarType::{var_type}, val),\n        )\n    }}\n",
                    fn_name = field.var_fn(),
                    ty = field.type_text,
                    var = field.var_name(&model.type_name),
                    var_type = scalar.var_type_const(),
                )),
                FieldKind::Structured => code.push_str(&format!(
                    "\n    pub fn {fn_name}<T: {krate}::JsonVarType>(val: {ty}) -> {krate}::ModelField<Self> {{\n        {krate}::ModelField::var(\n            Self::{const_name},\n            {krate}::QueryVar::json::<T, _>({var:?}, val),\n        )\n    }}\n",
                    fn_name = field.var_fn(),
                    ty = field.type_text,
                    var = field.var_name(&model.type_name),
                )),
                _ => {}
            }
        }
    }
    code
}
