use thiserror::Error;

use crate::response::GraphqlError;

#[derive(Debug, Error)]
pub enum GraftError {
    /// The document could not be rendered; nothing was sent
    #[error("couldn't build query: {0}")]
    Build(#[from] BuildError),

    /// Network or HTTP failure reported by the transport
    #[error("client query failed: {0}")]
    Transport(#[from] TransportError),

    /// Response body did not match the expected shape
    #[error("couldn't decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response carried no payload under the operation key
    #[error("response has no data for `{key}`")]
    MissingData { key: String },

    /// Backend answered with a non-empty `errors` array
    #[error("backend returned errors: {}", join_messages(.0))]
    Backend(Vec<GraphqlError>),
}

impl GraftError {
    /// Backend errors, when this is a [`GraftError::Backend`].
    pub fn backend_errors(&self) -> Option<&[GraphqlError]> {
        match self {
            Self::Backend(errors) => Some(errors),
            _ => None,
        }
    }
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while rendering a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A payload value could not be serialized
    #[error("couldn't encode `{field}`: {message}")]
    Encode { field: String, message: String },

    /// Two different values were bound to the same variable name
    #[error("variable `${name}` is bound to conflicting values")]
    VariableConflict { name: String },

    /// A query or `insert_one` with no selected fields
    #[error("`{operation}` selects no fields")]
    EmptySelection { operation: String },
}

/// Errors raised by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[cfg(feature = "client")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport
    #[error("{0}")]
    Other(String),
}

/// Result type for graft operations
pub type Result<T> = std::result::Result<T, GraftError>;
