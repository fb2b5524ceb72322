use common::{Meta, TestTable};
use graft::prelude::*;
use graft::BuildError;

mod common;

#[test]
fn update_with_jsonb_variable() {
    let meta = Meta {
        tag: "x".to_string(),
        score: 1.5,
    };
    let op = update::<TestTable>()
        .r#where(eq(TestTable::id_field(3)))
        .set([
            TestTable::name_field("updatetest".to_string()),
            TestTable::jsonb_col_var::<Jsonb>(Some(meta)),
        ])
        .select([TestTable::ID, TestTable::NAME])
        .build()
        .unwrap();

    assert_eq!(
        op.query,
        "mutation update_test_table($TestTable_JsonbCol: jsonb) {\nupdate_test_table(where: {id: {_eq: 3}}, _set: {name: \"updatetest\", jsonb_col: $TestTable_JsonbCol}) {\nreturning {\nid\nname\n}\n}\n}"
    );
    assert_eq!(
        op.variables.to_json(),
        serde_json::json!({"TestTable_JsonbCol": {"tag": "x", "score": 1.5}})
    );
}

#[test]
fn json_variable_type() {
    let op = update::<TestTable>()
        .set([TestTable::jsonb_col_var::<Json>(None)])
        .build()
        .unwrap();

    assert!(op.query.starts_with("mutation update_test_table($TestTable_JsonbCol: json) {"));
    assert_eq!(
        op.variables.var_type("TestTable_JsonbCol"),
        Some(VarType::JSON)
    );
}

#[test]
fn affected_rows_only_when_nothing_selected() {
    let query = update::<TestTable>()
        .r#where(eq(TestTable::id_field(3)))
        .set([TestTable::age_field(11)])
        .query()
        .unwrap();

    assert_eq!(
        query,
        "mutation update_test_table {\nupdate_test_table(where: {id: {_eq: 3}}, _set: {age: 11}) {\naffected_rows\n}\n}"
    );
}

#[test]
fn affected_rows_and_returning() {
    let query = update::<TestTable>()
        .r#where(eq(TestTable::id_field(3)))
        .set([TestTable::age_field(11)])
        .select([TestTable::ID])
        .affected_rows()
        .query()
        .unwrap();

    assert!(query.ends_with(") {\naffected_rows\nreturning {\nid\n}\n}\n}"));
}

#[test]
fn same_variable_twice_is_declared_once() {
    let op = update::<TestTable>()
        .r#where(eq(TestTable::age_var(7)))
        .set([TestTable::age_var(7)])
        .build()
        .unwrap();

    assert_eq!(op.variables.len(), 1);
    assert_eq!(op.query.matches("$TestTable_Age: Int!").count(), 1);
}

#[test]
fn conflicting_variable_values_fail() {
    let err = update::<TestTable>()
        .r#where(eq(TestTable::age_var(7)))
        .set([TestTable::age_var(8)])
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        BuildError::VariableConflict {
            name: "TestTable_Age".to_string()
        }
    );
}
