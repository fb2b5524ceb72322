use graft::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Model)]
#[serde(rename_all = "camelCase")]
struct Account {
    account_id: i64,
    #[serde(skip)]
    cached: bool,
}

fn by_id<M: graft::Model>(filter: Predicate<M>) -> graft::QueryBuilder<M, graft::Select> {
    select::<M>().r#where(filter)
}

fn main() {
    let query = by_id(eq(Account::account_id_field(3)))
        .select([Account::ACCOUNT_ID])
        .query()
        .unwrap();
    assert!(query.contains("accountId: {_eq: 3}"));
}
