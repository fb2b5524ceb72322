use std::cell::RefCell;

use common::TestTable;
use graft::prelude::*;
use graft::{GraphqlRequest, TransportError};
use serde_json::{Value, json};

mod common;

/// Replays a canned body and records every request payload.
struct MockTransport {
    body: Result<String, String>,
    requests: RefCell<Vec<Value>>,
}

impl MockTransport {
    fn new(body: Value) -> Self {
        Self {
            body: Ok(body.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            body: Err(message.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &GraphqlRequest<'_>) -> Result<Vec<u8>, TransportError> {
        self.requests
            .borrow_mut()
            .push(serde_json::to_value(request).unwrap());
        match &self.body {
            Ok(body) => Ok(body.clone().into_bytes()),
            Err(message) => Err(TransportError::Other(message.clone())),
        }
    }
}

#[test]
fn select_decodes_rows() {
    let transport = MockTransport::new(json!({
        "data": {"test_table": [{"id": 1, "name": "a", "age": 3}]}
    }));

    let rows = select::<TestTable>()
        .select([TestTable::ID, TestTable::NAME, TestTable::AGE])
        .limit(1)
        .exec(&transport)
        .unwrap();

    let mut expected = common::row(1, "a");
    expected.age = 3;
    assert_eq!(rows, vec![expected]);

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        json!({"query": "query get_test_table {\ntest_table(limit: 1) {\nid\nname\nage\n}\n}"})
    );
}

#[test]
fn variables_travel_in_request_body() {
    let transport = MockTransport::new(json!({
        "data": {"update_test_table": {"affected_rows": 2}}
    }));

    let response = update::<TestTable>()
        .r#where(eq(TestTable::age_var(10)))
        .set([TestTable::name_field("x".to_string())])
        .exec(&transport)
        .unwrap();

    assert_eq!(response.affected_rows, Some(2));
    assert!(response.returning.is_empty());

    let requests = transport.requests.borrow();
    assert_eq!(requests[0]["variables"], json!({"TestTable_Age": 10}));
}

#[test]
fn insert_one_decodes_option() {
    let transport = MockTransport::new(json!({"data": {"insert_test_table_one": null}}));

    let inserted = insert_one(common::row(1, "a"))
        .select([TestTable::ID])
        .exec(&transport)
        .unwrap();
    assert_eq!(inserted, None);
}

#[test]
fn backend_errors_are_surfaced() {
    let transport = MockTransport::new(json!({
        "data": null,
        "errors": [
            {"message": "field 'nope' not found", "extensions": {"code": "validation-failed"}},
            {"message": "second"}
        ]
    }));

    let err = select::<TestTable>()
        .select([TestTable::ID])
        .exec(&transport)
        .unwrap_err();

    let errors = err.backend_errors().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, "field 'nope' not found");
    assert_eq!(errors[0].extensions, Some(json!({"code": "validation-failed"})));
    assert_eq!(
        err.to_string(),
        "backend returned errors: field 'nope' not found; second"
    );
}

#[test]
fn missing_key_is_reported() {
    let transport = MockTransport::new(json!({"data": {"other": []}}));

    let err = select::<TestTable>()
        .select([TestTable::ID])
        .exec(&transport)
        .unwrap_err();

    assert!(matches!(err, GraftError::MissingData { ref key } if key == "test_table"));
}

#[test]
fn malformed_payload_is_a_decode_error() {
    let transport = MockTransport::new(json!({"data": {"test_table": {"id": "x"}}}));

    let err = select::<TestTable>()
        .select([TestTable::ID])
        .exec(&transport)
        .unwrap_err();

    assert!(matches!(err, GraftError::Decode(_)));
}

#[test]
fn build_failure_sends_nothing() {
    let transport = MockTransport::new(json!({"data": {}}));

    let err = update::<TestTable>()
        .r#where(eq(TestTable::age_var(1)))
        .set([TestTable::age_var(2)])
        .exec(&transport)
        .unwrap_err();

    assert!(matches!(err, GraftError::Build(_)));
    assert!(transport.requests.borrow().is_empty());
}

#[test]
fn transport_failure_is_propagated() {
    let transport = MockTransport::failing("connection refused");

    let err = select::<TestTable>()
        .select([TestTable::ID])
        .exec(&transport)
        .unwrap_err();

    assert!(matches!(err, GraftError::Transport(TransportError::Other(_))));
    assert_eq!(err.to_string(), "client query failed: connection refused");
}
