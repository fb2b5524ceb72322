//! Model descriptions shared by the derive macro and the source generator.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Token, Type};

use crate::error::CodegenError;
use crate::types::{FieldKind, type_name};

/// One model type and the fields accessors are generated for.
#[derive(Debug, Clone)]
pub struct ModelDecl {
    /// Rust type name, e.g. `TestTable`
    pub type_name: String,
    /// Backend table name, e.g. `test_table`
    pub model_name: String,
    pub fields: Vec<FieldDecl>,
}

/// One serialized field of a model.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// Rust field name without any `r#` prefix
    pub ident: String,
    /// Serialized (backend) name
    pub column: String,
    pub ty: Type,
    /// Type as written by the user; used verbatim in generated source
    pub type_text: String,
    pub kind: FieldKind,
}

impl ModelDecl {
    /// Default backend name for a type: its snake_case form.
    pub fn default_model_name(type_name: &str) -> String {
        type_name.to_snake_case()
    }

    /// Parses `#[derive(Model)]` input: `#[model(name = "...")]` on the
    /// struct, `#[model(relation)]`/`#[model(json)]` on fields, and the
    /// serde attributes that change or drop serialized names.
    pub fn from_derive(input: &DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Model can only be derived for structs with named fields",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Model can only be derived for structs with named fields",
            ));
        };
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "Model cannot be derived for generic structs",
            ));
        }

        let type_name = input.ident.unraw().to_string();
        let container = ContainerAttrs::parse(&input.attrs)?;
        let model_name = container
            .name
            .unwrap_or_else(|| Self::default_model_name(&type_name));

        let mut fields = Vec::new();
        for field in &named.named {
            let Some(ident) = &field.ident else {
                continue;
            };
            let attrs = FieldAttrs::parse(&field.attrs)?;
            if attrs.skip {
                continue;
            }
            if attrs.relation && attrs.json {
                return Err(syn::Error::new_spanned(
                    ident,
                    "a field can't be both `relation` and `json`",
                ));
            }

            let ident = ident.unraw().to_string();
            let column = match attrs.rename {
                Some(rename) => rename,
                None => container.rename_all.apply(&ident),
            };
            fields.push(FieldDecl {
                kind: FieldKind::classify(&field.ty, attrs.relation, attrs.json),
                type_text: quote::ToTokens::to_token_stream(&field.ty).to_string(),
                ty: field.ty.clone(),
                ident,
                column,
            });
        }

        Ok(Self {
            type_name,
            model_name,
            fields,
        })
    }

    /// Type names of related models, in field order.
    pub fn relation_targets(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter_map(|field| match &field.kind {
                FieldKind::Relation { target } => type_name(target),
                _ => None,
            })
            .collect()
    }
}

impl FieldDecl {
    /// Builds a field from its textual description (schema files).
    pub fn parse(
        ident: &str,
        column: Option<&str>,
        type_text: &str,
        relation: bool,
        json: bool,
    ) -> Result<Self, CodegenError> {
        let parsed = syn::Ident::parse_any
            .parse_str(ident)
            .map_err(|source| CodegenError::InvalidIdent {
                ident: ident.to_string(),
                source,
            })?;
        let ty: Type = syn::parse_str(type_text).map_err(|source| CodegenError::InvalidType {
            field: ident.to_string(),
            type_text: type_text.to_string(),
            source,
        })?;
        let ident = parsed.unraw().to_string();
        Ok(Self {
            column: column.map_or_else(|| ident.clone(), str::to_string),
            kind: FieldKind::classify(&ty, relation, json),
            type_text: type_text.trim().to_string(),
            ty,
            ident,
        })
    }

    /// `pub const` holding the field name, e.g. `JSONB_COL`.
    pub fn const_name(&self) -> String {
        self.ident.to_shouty_snake_case()
    }

    pub fn field_fn(&self) -> String {
        format!("{}_field", self.ident)
    }

    pub fn var_fn(&self) -> String {
        format!("{}_var", self.ident)
    }

    /// Variable name bound by the var constructor: `<TypeName>_<FieldPascal>`.
    pub fn var_name(&self, type_name: &str) -> String {
        format!("{type_name}_{}", self.ident.to_upper_camel_case())
    }
}

//------------------------------------------------------------------------------
// Attribute parsing
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RenameRule {
    #[default]
    None,
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    fn from_serde(value: &LitStr) -> syn::Result<Self> {
        Ok(match value.value().as_str() {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "PascalCase" => Self::Pascal,
            "camelCase" => Self::Camel,
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            "SCREAMING-KEBAB-CASE" => Self::ScreamingKebab,
            other => {
                return Err(syn::Error::new_spanned(
                    value,
                    format!("unknown rename_all rule `{other}`"),
                ));
            }
        })
    }

    fn apply(self, field: &str) -> String {
        match self {
            Self::None => field.to_string(),
            Self::Lower => field.to_ascii_lowercase(),
            Self::Upper => field.to_ascii_uppercase(),
            Self::Pascal => field.to_upper_camel_case(),
            Self::Camel => field.to_lower_camel_case(),
            Self::Snake => field.to_snake_case(),
            Self::ScreamingSnake => field.to_shouty_snake_case(),
            Self::Kebab => field.to_kebab_case(),
            Self::ScreamingKebab => field.to_shouty_kebab_case(),
        }
    }
}

#[derive(Debug, Default)]
struct ContainerAttrs {
    name: Option<String>,
    rename_all: RenameRule,
}

impl ContainerAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs {
            if attr.path().is_ident("model") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        out.name = Some(meta.value()?.parse::<LitStr>()?.value());
                        Ok(())
                    } else {
                        Err(meta.error("unsupported model attribute, expected `name = \"...\"`"))
                    }
                })?;
            } else if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename_all") {
                        if meta.input.peek(Token![=]) {
                            out.rename_all = RenameRule::from_serde(&meta.value()?.parse()?)?;
                        } else {
                            meta.parse_nested_meta(|inner| {
                                let rule = RenameRule::from_serde(&inner.value()?.parse()?)?;
                                if inner.path.is_ident("serialize") {
                                    out.rename_all = rule;
                                }
                                Ok(())
                            })?;
                        }
                        Ok(())
                    } else {
                        skip_meta(&meta)
                    }
                })?;
            }
        }
        Ok(out)
    }
}

#[derive(Debug, Default)]
struct FieldAttrs {
    relation: bool,
    json: bool,
    rename: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs {
            if attr.path().is_ident("model") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("relation") {
                        out.relation = true;
                        Ok(())
                    } else if meta.path.is_ident("json") {
                        out.json = true;
                        Ok(())
                    } else {
                        Err(meta.error("unsupported model attribute, expected `relation` or `json`"))
                    }
                })?;
            } else if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        if meta.input.peek(Token![=]) {
                            out.rename = Some(meta.value()?.parse::<LitStr>()?.value());
                        } else {
                            meta.parse_nested_meta(|inner| {
                                let value = inner.value()?.parse::<LitStr>()?.value();
                                if inner.path.is_ident("serialize") {
                                    out.rename = Some(value);
                                }
                                Ok(())
                            })?;
                        }
                        Ok(())
                    } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                        out.skip = true;
                        Ok(())
                    } else {
                        skip_meta(&meta)
                    }
                })?;
            }
        }
        Ok(out)
    }
}

/// Consumes a serde attribute we don't interpret.
fn skip_meta(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_meta(&inner))?;
    }
    Ok(())
}
