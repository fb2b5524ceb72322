use graft_codegen::{FieldDecl, FieldKind, ModelDecl};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::DeriveInput;

use crate::paths::{graft as graft_paths, std as std_paths};

pub(crate) fn generate_model_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let decl = ModelDecl::from_derive(input)?;
    let ident = &input.ident;
    let model = graft_paths::model();
    let model_name = &decl.model_name;
    let type_name = &decl.type_name;

    let accessors: Vec<TokenStream> = decl
        .fields
        .iter()
        .map(|field| field_accessors(&decl, field))
        .collect();

    Ok(quote! {
        impl #model for #ident {
            const TABLE: &'static str = #model_name;
            const TYPE_NAME: &'static str = #type_name;
        }

        #[allow(dead_code)]
        impl #ident {
            #(#accessors)*
        }
    })
}

/// Identifier for generated items; keywords become raw identifiers.
fn item_ident(name: &str) -> Ident {
    if syn::parse_str::<Ident>(name).is_ok() {
        Ident::new(name, Span::call_site())
    } else {
        Ident::new_raw(name, Span::call_site())
    }
}

fn field_accessors(decl: &ModelDecl, field: &FieldDecl) -> TokenStream {
    let model_field_name = graft_paths::model_field_name();
    let model_field = graft_paths::model_field();
    let query_var = graft_paths::query_var();

    let const_ident = item_ident(&field.const_name());
    let column = &field.column;
    let ty = &field.ty;

    let name_const = quote! {
        pub const #const_ident: #model_field_name<Self> = #model_field_name::new(#column);
    };

    match &field.kind {
        FieldKind::Relation { target } => {
            let selection = graft_paths::selection();
            let into = std_paths::into();
            let into_iterator = std_paths::into_iterator();
            let fn_ident = item_ident(&field.ident);
            quote! {
                #name_const

                pub fn #fn_ident(
                    first: impl #into<#selection<#target>>,
                    rest: impl #into_iterator<Item = #selection<#target>>,
                ) -> #selection<Self> {
                    #selection::relation(Self::#const_ident, first, rest)
                }
            }
        }
        kind => {
            let field_fn = item_ident(&field.field_fn());
            let var_fn = item_ident(&field.var_fn());
            let var_name = field.var_name(&decl.type_name);

            let var_ctor = match kind {
                FieldKind::Scalar(scalar) => {
                    let var_type = graft_paths::var_type();
                    let var_type_const = Ident::new(scalar.var_type_const(), Span::call_site());
                    quote! {
                        pub fn #var_fn(val: #ty) -> #model_field<Self> {
                            #model_field::var(
                                Self::#const_ident,
                                #query_var::new(#var_name, #var_type::#var_type_const, val),
                            )
                        }
                    }
                }
                FieldKind::Structured => {
                    let json_var_type = graft_paths::json_var_type();
                    quote! {
                        pub fn #var_fn<T: #json_var_type>(val: #ty) -> #model_field<Self> {
                            #model_field::var(
                                Self::#const_ident,
                                #query_var::json::<T, _>(#var_name, val),
                            )
                        }
                    }
                }
                _ => TokenStream::new(),
            };

            quote! {
                #name_const

                pub fn #field_fn(val: #ty) -> #model_field<Self> {
                    #model_field::new(Self::#const_ident, val)
                }

                #var_ctor
            }
        }
    }
}
