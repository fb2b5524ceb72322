#![allow(dead_code)]

#[derive(graft::Model)]
#[model(table = "users")]
struct User {
    id: i64,
}

fn main() {}
