//! Implementation of the `#[derive(Fields)]` macro.
//!
//! This macro generates an implementation of the `Fields` trait and
//! property name constants for pattern building.

use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::{format_ident, quote, ToTokens};
use syn::{parse_quote, spanned::Spanned, Data, DeriveInput, Error, Fields, Result, Type};

use super::attrs::parse_field_attrs;

/// Main implementation of the Fields derive macro.
pub fn fields_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Ensure we have a struct with named fields
    let members = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Fields can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Fields can only be derived for structs",
            ))
        }
    };

    let type_params: Vec<&Ident> = input.generics.type_params().map(|p| &p.ident).collect();

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut bounded_types: Vec<&Type> = Vec::new();

    for member in members.iter() {
        let member_name = member
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(member.span(), "expected named field"))?;

        let attrs = parse_field_attrs(&member.attrs)?;
        if attrs.skip {
            continue;
        }

        // Raw identifiers (`r#type`) expose their plain name
        let property_name = attrs.rename.unwrap_or_else(|| {
            let name = member_name.to_string();
            name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
        });

        // Names that cannot form an identifier get no constant
        let const_text = to_screaming_snake_case(&property_name);
        if is_identifier(&const_text) {
            let const_name = format_ident!("{}", const_text);
            field_constants.push(quote! {
                /// Property name constant for building patterns.
                pub const #const_name: &'static str = #property_name;
            });
        }

        let value_expr = if attrs.opaque {
            quote! { ::collectify::Value::Opaque }
        } else {
            if mentions_type_param(member.ty.to_token_stream(), &type_params) {
                bounded_types.push(&member.ty);
            }
            quote! { ::collectify::AsValue::as_value(&self.#member_name) }
        };

        field_matches.push(quote! {
            #property_name => #value_expr,
        });
    }

    // Generic member types must convert to a value
    let mut fields_generics = input.generics.clone();
    if !bounded_types.is_empty() {
        let predicates = &mut fields_generics.make_where_clause().predicates;
        for ty in bounded_types {
            predicates.push(parse_quote!(#ty: ::collectify::AsValue));
        }
    }
    let (fields_impl_generics, _, fields_where_clause) = fields_generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #fields_impl_generics ::collectify::Fields for #struct_name #ty_generics
            #fields_where_clause
        {
            fn field(&self, name: &str) -> ::collectify::Value<'_> {
                match name {
                    #(#field_matches)*
                    _ => ::collectify::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_alphanumeric();
        }
    }

    result
}

/// Whether a type's tokens name one of the struct's type parameters.
fn mentions_type_param(tokens: TokenStream, params: &[&Ident]) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Ident(ident) => params.contains(&&ident),
        TokenTree::Group(group) => mentions_type_param(group.stream(), params),
        _ => false,
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("name"), "NAME");
        assert_eq!(to_screaming_snake_case("created_at"), "CREATED_AT");
        assert_eq!(to_screaming_snake_case("isDone"), "IS_DONE");
        assert_eq!(to_screaming_snake_case("first-name"), "FIRST_NAME");
        assert_eq!(to_screaming_snake_case("zip code"), "ZIP_CODE");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("IS_DONE"));
        assert!(!is_identifier("A.B"));
        assert!(!is_identifier("1ST"));
        assert!(!is_identifier("_"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn derive_rejects_tuple_structs() {
        let input: DeriveInput = syn::parse_str("struct Pair(i32, i32);").unwrap();
        let err = fields_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn derive_rejects_enums() {
        let input: DeriveInput = syn::parse_str("enum Kind { A, B }").unwrap();
        assert!(fields_derive_impl(input).is_err());
    }

    #[test]
    fn derive_emits_match_arms_for_exposed_members() {
        let input: DeriveInput = syn::parse_str(
            r#"
            struct Task {
                name: String,
                #[field(rename = "isDone")]
                done: bool,
                #[field(skip)]
                id: u64,
            }
            "#,
        )
        .unwrap();
        let output = fields_derive_impl(input).unwrap().to_string();
        assert!(output.contains("\"name\""));
        assert!(output.contains("\"isDone\""));
        assert!(output.contains("IS_DONE"));
        assert!(!output.contains("\"id\""));
    }

    #[test]
    fn derive_bounds_generic_members() {
        let input: DeriveInput = syn::parse_str("struct W<T> { v: T }").unwrap();
        let output = fields_derive_impl(input).unwrap().to_string();
        let compact = output.replace(' ', "");
        assert!(compact.contains("whereT:::collectify::AsValue"));
    }

    #[test]
    fn derive_bounds_nested_generic_members() {
        let source = "struct W<'a, T> { v: Option<&'a T>, n: u8 }";
        let input: DeriveInput = syn::parse_str(source).unwrap();
        let output = fields_derive_impl(input).unwrap().to_string();
        let compact = output.replace(' ', "");
        assert!(compact.contains("whereOption<&'aT>:::collectify::AsValue"));
        assert!(!compact.contains("u8:::collectify::AsValue"));
    }

    #[test]
    fn derive_leaves_skipped_and_opaque_generics_unbounded() {
        let input: DeriveInput = syn::parse_str(
            r#"
            struct Labelled<T, U> {
                #[field(skip)]
                payload: T,
                #[field(opaque)]
                extra: U,
                name: String,
            }
            "#,
        )
        .unwrap();
        let output = fields_derive_impl(input).unwrap().to_string();
        assert!(!output.contains("where"));
    }
}
