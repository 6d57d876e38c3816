//! Attribute parsing for the Fields derive macro.
//!
//! This module provides parsers for the `#[field(...)]` member attributes
//! used by the `Fields` derive macro.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Member-level attributes from `#[field(...)]`.
#[derive(Debug, Clone, Default)]
pub struct FieldAttr {
    /// Leave this member out of property access.
    pub skip: bool,
    /// Expose the member as present but not comparable.
    pub opaque: bool,
    /// Custom property name (default: member name).
    pub rename: Option<String>,
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => attr.skip = true,
                Meta::Path(p) if p.is_ident("opaque") => attr.opaque = true,

                // rename = "custom_name"
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.rename = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown field attribute. Expected: skip, opaque, or rename = \"...\"",
                    ));
                }
            }
        }

        if attr.skip && (attr.opaque || attr.rename.is_some()) {
            return Err(Error::new(
                input.span(),
                "skip cannot be combined with opaque or rename",
            ));
        }

        Ok(attr)
    }
}

/// Extract `#[field(...)]` attributes from a member's attributes.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("field") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}
