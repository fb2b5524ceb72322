#![allow(dead_code)]

use graft::Model;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub tag: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(name = "test_table")]
pub struct TestTable {
    pub id: i32,
    pub name: String,
    pub age: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonb_col: Option<Meta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[model(relation)]
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[model(name = "owners")]
pub struct Owner {
    pub id: i32,
    #[serde(rename = "mail")]
    pub email: Option<String>,
    pub verified: bool,
}

pub fn row(id: i32, name: &str) -> TestTable {
    TestTable {
        id,
        name: name.to_string(),
        age: 10,
        jsonb_col: None,
        tags: Vec::new(),
        owner: None,
    }
}
