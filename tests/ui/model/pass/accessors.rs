use graft::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Meta {
    tag: String,
}

#[derive(Debug, Serialize, Deserialize, Model)]
#[model(name = "users")]
struct User {
    id: i64,
    #[serde(rename = "display_name")]
    name: Option<String>,
    #[model(json)]
    meta: Meta,
    tags: Vec<String>,
    #[model(relation)]
    posts: Vec<Post>,
}

#[derive(Debug, Serialize, Deserialize, Model)]
struct Post {
    id: i64,
    r#type: String,
}

fn main() {
    let _: ModelFieldName<User> = User::NAME;
    let _: ModelField<User> = User::id_var(1);
    let _: ModelField<User> = User::name_var(None);
    let _: ModelField<User> = User::meta_var::<Jsonb>(Meta { tag: "x".to_string() });
    let _: ModelField<User> = User::tags_field(vec![]);
    let _: ModelField<Post> = Post::type_field("draft".to_string());
    let _: Selection<User> = User::posts(Post::ID, [Selection::from(Post::TYPE)]);
    assert_eq!(<User as graft::Model>::TABLE, "users");
    assert_eq!(<Post as graft::Model>::TABLE, "post");
}
