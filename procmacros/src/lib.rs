extern crate proc_macro;

mod model;
mod paths;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `graft::Model` and the typed accessors the query builder uses.
///
/// For every serialized field the derive emits a `ModelFieldName` constant,
/// a `<field>_field(val)` constructor and, depending on the field type:
///
/// - scalars (`bool`, integers, floats, `String`, and `Option` of those):
///   `<field>_var(val)` binding a typed query variable
/// - structured values (`#[model(json)]`, or any non-list, non-scalar type):
///   `<field>_var::<Json | Jsonb>(val)`
/// - lists: no variable constructor
///
/// Fields marked `#[model(relation)]` get a sub-selection function instead.
///
/// # Example
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Model)]
/// #[model(name = "test_table")]
/// struct TestTable {
///     id: i32,
///     name: String,
///     #[serde(rename = "jsonb_col")]
///     meta: Option<Meta>,
///     #[model(relation)]
///     owner: Option<Owner>,
/// }
///
/// let filter = eq(TestTable::id_field(3));
/// let payload = TestTable::meta_var::<Jsonb>(Some(meta));
/// let nested = TestTable::owner(Owner::ID, [Owner::EMAIL.into()]);
/// ```
///
/// Serialized names follow `#[serde(rename)]` and `#[serde(rename_all)]`;
/// fields with `#[serde(skip)]` or `#[serde(skip_serializing)]` are left out.
#[proc_macro_derive(Model, attributes(model))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match model::generate_model_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
