use std::collections::HashSet;

use crate::error::CodegenError;
use crate::model::ModelDecl;

/// A validated set of model declarations.
///
/// Type names are unique, field names are unique per model and every
/// relation points at a declared model.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    models: Vec<ModelDecl>,
}

impl Schema {
    pub fn new(models: Vec<ModelDecl>) -> Result<Self, CodegenError> {
        let mut types = HashSet::new();
        for model in &models {
            if !types.insert(model.type_name.as_str()) {
                return Err(CodegenError::DuplicateModel(model.type_name.clone()));
            }

            let mut idents = HashSet::new();
            for field in &model.fields {
                if !idents.insert(field.ident.as_str()) {
                    return Err(CodegenError::DuplicateField {
                        model: model.type_name.clone(),
                        field: field.ident.clone(),
                    });
                }
            }
        }

        for model in &models {
            for field in &model.fields {
                let crate::types::FieldKind::Relation { target } = &field.kind else {
                    continue;
                };
                let target = crate::types::type_name(target).unwrap_or_default();
                if !types.contains(target.as_str()) {
                    return Err(CodegenError::UnknownRelation {
                        model: model.type_name.clone(),
                        field: field.ident.clone(),
                        target,
                    });
                }
            }
        }

        Ok(Self { models })
    }

    pub fn get(&self, type_name: &str) -> Option<&ModelDecl> {
        self.models.iter().find(|m| m.type_name == type_name)
    }

    pub fn models(&self) -> &[ModelDecl] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
