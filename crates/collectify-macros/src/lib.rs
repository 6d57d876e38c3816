//! Proc macros for Collectify.
//!
//! # Available Macros
//!
//! - [`Fields`] - Generate named property access for shape-based matching

mod fields;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Fields` trait for structs with named fields.
///
/// This macro generates an implementation of the `Fields` trait from
/// `collectify`, so the struct's members can be read by name and matched
/// against patterns.
///
/// Every member is exposed by default and must implement
/// `collectify::AsValue` (strings, numbers, booleans, options of those).
/// For generic structs, the generated impl requires `AsValue` of every
/// exposed member type that names a type parameter, so `struct W<T> { v: T }`
/// implements `Fields` whenever `T: AsValue`. Skipped and opaque members add
/// no bound.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Exclude this member; reads as absent |
/// | `rename = "..."` | Expose the member under a different property name |
/// | `opaque` | Expose a compound member (list, nested struct) as present but not comparable |
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Property name constants (e.g., `Task::NAME`, `Task::PRIORITY`)
/// 2. Implementation of `Fields::field()`
///
/// # Example
///
/// ```ignore
/// use collectify::{collection, pattern, Fields};
///
/// #[derive(Clone, Fields)]
/// struct Task {
///     name: String,
///     priority: u8,
///     #[field(rename = "isDone")]
///     done: bool,
///     #[field(skip)]
///     internal_id: u64,
///     #[field(opaque)]
///     tags: Vec<String>,
/// }
///
/// let tasks = collection![
///     Task { name: "Write docs".into(), priority: 3, done: false, internal_id: 1, tags: vec![] },
///     Task { name: "Fix bug".into(), priority: 5, done: true, internal_id: 2, tags: vec![] },
/// ];
///
/// let open = tasks.filter_where(&pattern! { Task::IS_DONE => false });
/// assert_eq!(open.len(), 1);
/// assert_eq!(open[0].name, "Write docs");
/// ```
#[proc_macro_derive(Fields, attributes(field))]
pub fn fields_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fields::fields_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
