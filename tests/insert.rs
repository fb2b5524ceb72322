use common::{Meta, Owner, TestTable, row};
use graft::prelude::*;

mod common;

#[test]
fn insert_objects_in_order() {
    let query = insert(row(1, "a"), [row(2, "b")])
        .select([TestTable::ID])
        .query()
        .unwrap();

    assert_eq!(
        query,
        "mutation insert_test_table {\ninsert_test_table(objects: [{id: 1, name: \"a\", age: 10}, {id: 2, name: \"b\", age: 10}]) {\nreturning {\nid\n}\n}\n}"
    );
}

#[test]
fn insert_without_selection_requests_affected_rows() {
    let query = insert(row(1, "a"), []).query().unwrap();
    assert!(query.ends_with(") {\naffected_rows\n}\n}"));
}

#[test]
fn insert_nested_object() {
    let mut item = row(5, "with owner");
    item.owner = Some(Owner {
        id: 9,
        email: None,
        verified: true,
    });

    let query = insert(item, []).affected_rows().query().unwrap();
    assert!(query.contains(
        "objects: [{id: 5, name: \"with owner\", age: 10, owner: {id: 9, mail: null, verified: true}}]"
    ));
}

#[test]
fn insert_one() {
    let query = graft::prelude::insert_one(row(4, "single"))
        .select([TestTable::ID, TestTable::NAME])
        .query()
        .unwrap();

    assert_eq!(
        query,
        "mutation insert_test_table_one {\ninsert_test_table_one(object: {id: 4, name: \"single\", age: 10}) {\nid\nname\n}\n}"
    );
}

#[test]
fn string_escapes() {
    let query = graft::prelude::insert_one(row(1, "say \"hi\"\n"))
        .select([TestTable::ID])
        .query()
        .unwrap();
    assert!(query.contains(r#"name: "say \"hi\"\n""#));
}

#[test]
fn operation_keys() {
    assert_eq!(insert(row(1, "a"), []).operation_key(), "insert_test_table");
    assert_eq!(graft::prelude::insert_one(row(1, "a")).operation_key(), "insert_test_table_one");
    assert_eq!(update::<TestTable>().operation_key(), "update_test_table");
}

#[test]
fn insert_fields_bind_jsonb_variable() {
    let meta = Meta {
        tag: "content-type".to_string(),
        score: 0.5,
    };
    let op = insert_fields(
        vec![
            TestTable::id_field(1),
            TestTable::name_field("a".to_string()),
            TestTable::jsonb_col_var::<Jsonb>(Some(meta)),
        ],
        [],
    )
    .select([TestTable::ID])
    .build()
    .unwrap();

    assert!(
        op.query
            .starts_with("mutation insert_test_table($TestTable_JsonbCol: jsonb) {\n")
    );
    assert!(op.query.contains(
        "insert_test_table(objects: [{id: 1, name: \"a\", jsonb_col: $TestTable_JsonbCol}])"
    ));
    assert_eq!(
        op.variables.to_json(),
        serde_json::json!({"TestTable_JsonbCol": {"tag": "content-type", "score": 0.5}})
    );
}

#[test]
fn insert_one_fields_mix_literals_and_variables() {
    let op = insert_one_fields([
        TestTable::id_field(2),
        TestTable::age_var(30),
    ])
    .select([TestTable::ID])
    .build()
    .unwrap();

    assert_eq!(
        op.query,
        "mutation insert_test_table_one($TestTable_Age: Int!) {\ninsert_test_table_one(object: {id: 2, age: $TestTable_Age}) {\nid\n}\n}"
    );
}

#[test]
fn insert_one_without_selection_fails() {
    let err = graft::prelude::insert_one(row(1, "a")).query().unwrap_err();
    assert_eq!(err.to_string(), "`insert_test_table_one` selects no fields");
}
