use rowmap_core::schema::DataType;
use rowmap_core::{Error, Result, Site};

use proc_macro2::{Literal, Span, TokenStream};
use quote::{format_ident, quote, ToTokens};
use syn::visit_mut::{self, VisitMut};

/// Single-segment type names that resolve without a path.
const PRELUDE: &[&str] = &[
    "bool", "char", "str", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize", "f32", "f64", "String", "Vec", "Option", "Box", "Result",
];

/// Path roots that resolve from any module.
const ROOTS: &[&str] = &["crate", "self", "super", "std", "core", "alloc", "uuid", "chrono"];

pub(crate) fn int(v: usize) -> TokenStream {
    Literal::usize_unsuffixed(v).into_token_stream()
}

pub(crate) fn ident(site: &Site, name: &str) -> Result<syn::Ident> {
    syn::parse_str(name.trim())
        .map_err(|err| Error::codegen(site.clone(), format!("`{name}` is not an identifier: {err}")))
}

pub(crate) fn setter(site: &Site, name: &str) -> Result<syn::Ident> {
    let field = ident(site, name)?;
    Ok(format_ident!("set_{}", field))
}

/// Parses a declared type. Paths into the host crate are made absolute so
/// that generated modules can name them.
pub(crate) fn ty(site: &Site, src: &str) -> Result<syn::Type> {
    let mut ty: syn::Type = syn::parse_str(src.trim())
        .map_err(|err| Error::codegen(site.clone(), format!("`{src}` is not a type: {err}")))?;
    CrateRelative.visit_type_mut(&mut ty);
    Ok(ty)
}

/// The Rust type generated code uses for values of `data_type`.
pub(crate) fn rust_type(site: &Site, data_type: DataType) -> Result<syn::Type> {
    match data_type.rust_type() {
        Some(rust_type) => ty(site, rust_type),
        None => Err(Error::codegen(
            site.clone(),
            format!("data type {data_type} has no Rust type"),
        )),
    }
}

pub(crate) fn support_path(src: &str) -> Result<syn::Path> {
    syn::parse_str(src.trim())
        .map_err(|err| rowmap_core::err!("invalid support path `{src}`: {err}"))
}

pub(crate) fn opt_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote!(Some(#value.to_string())),
        None => quote!(None),
    }
}

struct CrateRelative;

impl VisitMut for CrateRelative {
    fn visit_type_path_mut(&mut self, ty: &mut syn::TypePath) {
        if ty.qself.is_none() && ty.path.leading_colon.is_none() {
            if let Some(first) = ty.path.segments.first() {
                let name = first.ident.to_string();
                let external = if ty.path.segments.len() == 1 {
                    PRELUDE.contains(&name.as_str())
                } else {
                    ROOTS.contains(&name.as_str())
                };

                if !external {
                    let root = syn::Ident::new("crate", Span::call_site());
                    ty.path.segments.insert(0, syn::PathSegment::from(root));
                }
            }
        }

        visit_mut::visit_type_path_mut(self, ty);
    }
}
