//! Field type classification.
//!
//! Works on `syn::Type` structurally; paths are matched by their last
//! segment, so `std::string::String` and `String` classify the same.

use syn::{GenericArgument, Path, PathArguments, Type};

/// GraphQL scalar a field maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Boolean,
    Int,
    Float,
    String,
}

/// A scalar plus nullability (`Option<_>` fields are nullable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarType {
    pub kind: ScalarKind,
    pub nullable: bool,
}

impl ScalarType {
    /// Name of the matching `VarType` constant, e.g. `INT` or `NULLABLE_STRING`.
    pub const fn var_type_const(self) -> &'static str {
        match (self.kind, self.nullable) {
            (ScalarKind::Boolean, false) => "BOOLEAN",
            (ScalarKind::Boolean, true) => "NULLABLE_BOOLEAN",
            (ScalarKind::Int, false) => "INT",
            (ScalarKind::Int, true) => "NULLABLE_INT",
            (ScalarKind::Float, false) => "FLOAT",
            (ScalarKind::Float, true) => "NULLABLE_FLOAT",
            (ScalarKind::String, false) => "STRING",
            (ScalarKind::String, true) => "NULLABLE_STRING",
        }
    }
}

/// What the generator emits for a field.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Field constructor plus a typed scalar variable constructor
    Scalar(ScalarType),
    /// Field constructor plus a `json`/`jsonb` variable constructor
    Structured,
    /// Field constructor only
    List,
    /// Sub-selection function over the related model
    Relation { target: Type },
}

impl FieldKind {
    /// Classifies a declared field type. `relation` and `json` come from
    /// explicit markers and take precedence over the structural rules.
    pub fn classify(ty: &Type, relation: bool, json: bool) -> Self {
        if relation {
            return Self::Relation {
                target: relation_target(ty).clone(),
            };
        }
        if json {
            return Self::Structured;
        }

        let inner = option_inner_type(ty);
        if let Some(kind) = scalar_kind(inner.unwrap_or(ty)) {
            return Self::Scalar(ScalarType {
                kind,
                nullable: inner.is_some(),
            });
        }
        if is_list(inner.unwrap_or(ty)) {
            return Self::List;
        }
        Self::Structured
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation { .. })
    }
}

fn type_path(ty: &Type) -> Option<&Path> {
    match ty {
        Type::Path(type_path) => Some(&type_path.path),
        Type::Group(group) => type_path(&group.elem),
        Type::Paren(paren) => type_path(&paren.elem),
        _ => None,
    }
}

fn last_ident(ty: &Type) -> Option<String> {
    type_path(ty)
        .and_then(|path| path.segments.last())
        .map(|seg| seg.ident.to_string())
}

/// The single type argument of `Wrapper<T>` when the last segment is `wrapper`.
fn generic_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let segment = type_path(ty)?.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

pub fn option_inner_type(ty: &Type) -> Option<&Type> {
    generic_arg(ty, "Option")
}

fn scalar_kind(ty: &Type) -> Option<ScalarKind> {
    if let Type::Reference(reference) = ty {
        return match last_ident(&reference.elem).as_deref() {
            Some("str") => Some(ScalarKind::String),
            _ => None,
        };
    }
    if let Some(inner) = generic_arg(ty, "Cow") {
        return scalar_kind(inner).filter(|k| *k == ScalarKind::String);
    }
    match last_ident(ty)?.as_str() {
        "bool" => Some(ScalarKind::Boolean),
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" => Some(ScalarKind::Int),
        "f32" | "f64" => Some(ScalarKind::Float),
        "String" | "str" => Some(ScalarKind::String),
        _ => None,
    }
}

fn is_list(ty: &Type) -> bool {
    match ty {
        Type::Array(_) | Type::Slice(_) => true,
        Type::Reference(reference) => is_list(&reference.elem),
        _ => matches!(
            last_ident(ty).as_deref(),
            Some("Vec" | "VecDeque" | "HashSet" | "BTreeSet")
        ),
    }
}

/// Strips `Option`, `Box`, `Vec`, arrays, slices and references down to the
/// related model type.
pub fn relation_target(ty: &Type) -> &Type {
    match ty {
        Type::Array(array) => relation_target(&array.elem),
        Type::Slice(slice) => relation_target(&slice.elem),
        Type::Reference(reference) => relation_target(&reference.elem),
        Type::Group(group) => relation_target(&group.elem),
        Type::Paren(paren) => relation_target(&paren.elem),
        _ => ["Option", "Box", "Vec", "Arc", "Rc"]
            .iter()
            .find_map(|wrapper| generic_arg(ty, wrapper))
            .map_or(ty, relation_target),
    }
}

/// Last path segment of a type, e.g. `Owner` for `crate::models::Owner`.
pub fn type_name(ty: &Type) -> Option<String> {
    last_ident(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(src: &str) -> Type {
        syn::parse_str(src).unwrap()
    }

    fn scalar(src: &str) -> Option<ScalarType> {
        match FieldKind::classify(&ty(src), false, false) {
            FieldKind::Scalar(s) => Some(s),
            _ => None,
        }
    }

    #[test]
    fn scalars() {
        let int = ScalarType {
            kind: ScalarKind::Int,
            nullable: false,
        };
        assert_eq!(scalar("i32"), Some(int));
        assert_eq!(scalar("u64"), Some(int));
        assert_eq!(scalar("bool").map(|s| s.kind), Some(ScalarKind::Boolean));
        assert_eq!(scalar("f64").map(|s| s.kind), Some(ScalarKind::Float));
        assert_eq!(scalar("String").map(|s| s.kind), Some(ScalarKind::String));
        assert_eq!(
            scalar("std::string::String").map(|s| s.kind),
            Some(ScalarKind::String)
        );
        assert_eq!(
            scalar("&'static str").map(|s| s.kind),
            Some(ScalarKind::String)
        );
    }

    #[test]
    fn option_makes_scalars_nullable() {
        let s = scalar("Option<i32>").unwrap();
        assert!(s.nullable);
        assert_eq!(s.var_type_const(), "NULLABLE_INT");
        assert_eq!(scalar("String").unwrap().var_type_const(), "STRING");
    }

    #[test]
    fn lists_and_structured() {
        assert!(matches!(
            FieldKind::classify(&ty("Vec<i32>"), false, false),
            FieldKind::List
        ));
        assert!(matches!(
            FieldKind::classify(&ty("Option<[u8; 4]>"), false, false),
            FieldKind::List
        ));
        assert!(matches!(
            FieldKind::classify(&ty("Meta"), false, false),
            FieldKind::Structured
        ));
        assert!(matches!(
            FieldKind::classify(&ty("HashMap<String, i32>"), false, false),
            FieldKind::Structured
        ));
        assert!(matches!(
            FieldKind::classify(&ty("Vec<Tag>"), false, true),
            FieldKind::Structured
        ));
    }

    #[test]
    fn relation_targets() {
        for src in ["Owner", "Option<Owner>", "Option<Box<Owner>>", "Vec<Owner>", "models::Owner"] {
            let kind = FieldKind::classify(&ty(src), true, false);
            let FieldKind::Relation { target } = kind else {
                panic!("{src} should be a relation");
            };
            assert_eq!(type_name(&target).as_deref(), Some("Owner"), "{src}");
        }
    }
}
