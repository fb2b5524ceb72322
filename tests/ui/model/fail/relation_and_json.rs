#![allow(dead_code)]

#[derive(graft::Model)]
struct Item {
    #[model(relation, json)]
    owner: Option<String>,
}

fn main() {}
