//! Request payload and the transport seam.
//!
//! A [`Transport`] takes one [`GraphqlRequest`] and returns the raw response
//! body. [`Client`] (feature `client`) is the blocking HTTP implementation;
//! tests plug in their own.

use serde::Serialize;

use crate::error::TransportError;
use crate::variables::Variables;

/// JSON body of a GraphQL POST: `{"query": ..., "variables": {...}}`.
///
/// `variables` is left out when the document declares none.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "no_variables")]
    pub variables: &'a Variables,
}

fn no_variables(variables: &&Variables) -> bool {
    variables.is_empty()
}

impl<'a> GraphqlRequest<'a> {
    pub const fn new(query: &'a str, variables: &'a Variables) -> Self {
        Self { query, variables }
    }
}

/// Sends one request and returns the response body.
///
/// No retries and no timeouts are applied on top of the implementation.
pub trait Transport {
    fn send(&self, request: &GraphqlRequest<'_>) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &GraphqlRequest<'_>) -> Result<Vec<u8>, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &GraphqlRequest<'_>) -> Result<Vec<u8>, TransportError> {
        (**self).send(request)
    }
}

#[cfg(feature = "client")]
pub use http::{Client, ClientOptions};

#[cfg(feature = "client")]
mod http {
    use super::{GraphqlRequest, Transport};
    use crate::error::TransportError;

    /// Settings for [`Client`].
    ///
    /// ```ignore
    /// let options = ClientOptions::new().header("x-hasura-admin-secret", secret);
    /// let client = Client::new("http://localhost:8080/v1/graphql", options);
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct ClientOptions {
        headers: Vec<(String, String)>,
        http_client: Option<reqwest::blocking::Client>,
    }

    impl ClientOptions {
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a header sent with every request.
        pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.headers.push((name.into(), value.into()));
            self
        }

        /// Uses a preconfigured reqwest client (proxies, TLS roots, timeouts).
        pub fn http_client(mut self, client: reqwest::blocking::Client) -> Self {
            self.http_client = Some(client);
            self
        }

        pub fn headers(&self) -> &[(String, String)] {
            &self.headers
        }
    }

    /// Blocking HTTP transport. One POST per request.
    #[derive(Debug, Clone)]
    pub struct Client {
        endpoint: String,
        headers: Vec<(String, String)>,
        http: reqwest::blocking::Client,
    }

    impl Client {
        pub fn new(endpoint: impl Into<String>, options: ClientOptions) -> Self {
            Self {
                endpoint: endpoint.into(),
                headers: options.headers,
                http: options.http_client.unwrap_or_default(),
            }
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    impl Transport for Client {
        fn send(&self, request: &GraphqlRequest<'_>) -> Result<Vec<u8>, TransportError> {
            let mut builder = self.http.post(&self.endpoint).json(request);
            for (name, value) in &self.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            // Backend errors come back in the body, so the status is not checked here
            let response = builder.send()?;
            Ok(response.bytes()?.to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::{QueryVar, VarType};
    use serde_json::json;

    #[test]
    fn request_without_variables_omits_key() {
        let vars = Variables::new();
        let body = serde_json::to_value(GraphqlRequest::new("query q {\nt {\nid\n}\n}", &vars)).unwrap();
        assert_eq!(body, json!({"query": "query q {\nt {\nid\n}\n}"}));
    }

    #[test]
    fn request_carries_variables() {
        let mut vars = Variables::new();
        vars.register(&QueryVar::new("T_Id", VarType::INT, 3)).unwrap();
        let body = serde_json::to_value(GraphqlRequest::new("q", &vars)).unwrap();
        assert_eq!(body, json!({"query": "q", "variables": {"T_Id": 3}}));
    }

    #[cfg(feature = "client")]
    #[test]
    fn client_options_collect_headers() {
        let options = ClientOptions::new()
            .header("x-hasura-admin-secret", "s")
            .header("x-hasura-role", "user");
        assert_eq!(options.headers().len(), 2);
        let client = Client::new("http://localhost:8080/v1/graphql", options);
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/graphql");
    }
}
