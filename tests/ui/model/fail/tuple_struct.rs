#![allow(dead_code)]

#[derive(graft::Model)]
struct Pair(i32, i32);

fn main() {}
