//! Centralized path definitions for generated code.
//!
//! Paths use the `graft::` prefix (without leading `::`) so crates that
//! re-export graft under that name can host the derive.

use proc_macro2::TokenStream;
use quote::quote;

// =============================================================================
// STANDARD LIBRARY
// =============================================================================

pub mod std {
    use super::*;

    pub fn into() -> TokenStream {
        quote!(::std::convert::Into)
    }

    pub fn into_iterator() -> TokenStream {
        quote!(::std::iter::IntoIterator)
    }
}

// =============================================================================
// GRAFT TYPES AND TRAITS
// =============================================================================

pub mod graft {
    use super::*;

    pub fn model() -> TokenStream {
        quote!(graft::Model)
    }

    pub fn model_field_name() -> TokenStream {
        quote!(graft::ModelFieldName)
    }

    pub fn model_field() -> TokenStream {
        quote!(graft::ModelField)
    }

    pub fn query_var() -> TokenStream {
        quote!(graft::QueryVar)
    }

    pub fn var_type() -> TokenStream {
        quote!(graft::VarType)
    }

    pub fn json_var_type() -> TokenStream {
        quote!(graft::JsonVarType)
    }

    pub fn selection() -> TokenStream {
        quote!(graft::Selection)
    }
}
