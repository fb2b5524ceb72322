use thiserror::Error;

/// Errors raised while turning declarations into generated source.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("`{ident}` is not a valid Rust identifier: {source}")]
    InvalidIdent {
        ident: String,
        #[source]
        source: syn::Error,
    },

    #[error("field `{field}` has unparsable type `{type_text}`: {source}")]
    InvalidType {
        field: String,
        type_text: String,
        #[source]
        source: syn::Error,
    },

    #[error("model `{0}` is declared more than once")]
    DuplicateModel(String),

    #[error("model `{model}` declares field `{field}` more than once")]
    DuplicateField { model: String, field: String },

    #[error("relation `{model}.{field}` points at undeclared model `{target}`")]
    UnknownRelation {
        model: String,
        field: String,
        target: String,
    },
}
