//! Implementation of the `#[derive(Fields)]` macro.
//!
//! Generates named property access and property name constants from struct
//! members and their `#[field(...)]` annotations.

mod attrs;
mod derive;

pub use derive::fields_derive_impl;
