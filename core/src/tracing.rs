//! Tracing utilities for query observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the rendered document and variable count.
///
/// ```ignore
/// graft_trace_query!("get_users", &query, variables.len());
/// ```
#[macro_export]
macro_rules! graft_trace_query {
    ($operation:expr, $query:expr, $var_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            operation = %$operation,
            query = %$query,
            variables = $var_count,
            "graft.query"
        );
    };
}

/// Emit a debug-level tracing event once a response body came back.
///
/// ```ignore
/// graft_trace_response!("insert_users", body.len());
/// ```
#[macro_export]
macro_rules! graft_trace_response {
    ($key:expr, $bytes:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(key = %$key, bytes = $bytes, "graft.response");
    };
}

/// Emit a warn-level tracing event when the backend reports errors.
#[macro_export]
macro_rules! graft_trace_backend_errors {
    ($key:expr, $count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(key = %$key, errors = $count, "graft.backend_errors");
    };
}
