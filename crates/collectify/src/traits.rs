//! Traits that give elements named properties and a truthiness rule.
//!
//! [`Fields`] is implemented by the `#[derive(Fields)]` macro to enable
//! shape-based matching on plain structs; [`AsValue`] is what the derive uses
//! to view each property; [`Truthy`] backs [`Collection::compact`].
//!
//! [`Collection::compact`]: crate::Collection::compact

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use crate::value::{number_from_json, Number, Scalar, Value};

/// Trait for types whose properties can be read by name.
///
/// This trait is typically derived using `#[derive(Fields)]`, but can also be
/// implemented manually.
///
/// # Derive Usage
///
/// ```
/// use collectify::{collection, pattern, Fields};
///
/// #[derive(Clone, Fields)]
/// struct Task {
///     name: String,
///     priority: u8,
///     #[field(rename = "isDone")]
///     done: bool,
/// }
///
/// let tasks = collection![
///     Task { name: "Write docs".into(), priority: 3, done: false },
///     Task { name: "Fix bug".into(), priority: 5, done: true },
/// ];
///
/// let open = tasks.filter_where(&pattern! { Task::IS_DONE => false });
/// assert_eq!(open.len(), 1);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use collectify::{Fields, Value, Number};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Fields for Task {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(&self.name),
///             "priority" => Value::Number(Number::U64(self.priority as u64)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Fields {
    /// Returns the value of a property, or [`Value::None`] if the element
    /// has no such property.
    fn field(&self, name: &str) -> Value<'_>;
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Value<'_> {
        (**self).field(name)
    }
}

impl<T: Fields + ?Sized> Fields for Box<T> {
    fn field(&self, name: &str) -> Value<'_> {
        (**self).field(name)
    }
}

impl<T: Fields + ?Sized> Fields for Rc<T> {
    fn field(&self, name: &str) -> Value<'_> {
        (**self).field(name)
    }
}

impl<T: Fields + ?Sized> Fields for Arc<T> {
    fn field(&self, name: &str) -> Value<'_> {
        (**self).field(name)
    }
}

impl Fields for HashMap<String, Scalar> {
    fn field(&self, name: &str) -> Value<'_> {
        self.get(name).map_or(Value::None, Scalar::as_value)
    }
}

impl Fields for BTreeMap<String, Scalar> {
    fn field(&self, name: &str) -> Value<'_> {
        self.get(name).map_or(Value::None, Scalar::as_value)
    }
}

impl Fields for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Value<'_> {
        self.get(name).map_or(Value::None, json_value)
    }
}

/// JSON objects expose their members; every other JSON value has no
/// properties.
impl Fields for serde_json::Value {
    fn field(&self, name: &str) -> Value<'_> {
        match self {
            serde_json::Value::Object(map) => map.field(name),
            _ => Value::None,
        }
    }
}

fn json_value(value: &serde_json::Value) -> Value<'_> {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(number_from_json(n)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Opaque,
    }
}

/// Views a struct member as a property [`Value`].
///
/// Used by `#[derive(Fields)]` for each non-skipped member.
pub trait AsValue {
    /// Borrows `self` as a property value.
    fn as_value(&self) -> Value<'_>;
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Box<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl AsValue for Number {
    fn as_value(&self) -> Value<'_> {
        Value::Number(*self)
    }
}

impl AsValue for Scalar {
    fn as_value(&self) -> Value<'_> {
        Scalar::as_value(self)
    }
}

/// `None` reads as an explicit null, not as an absent property.
impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.as_value(),
            None => Value::Null,
        }
    }
}

macro_rules! as_value_number {
    ($($source:ty),+) => {
        $(
            impl AsValue for $source {
                fn as_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )+
    };
}

as_value_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Truthiness rule used by [`Collection::compact`](crate::Collection::compact).
///
/// The default implementations follow the familiar falsy set: `false`, zero,
/// `NaN`, the empty string, `None`, null and absent values are falsy;
/// everything else is truthy. Implement this trait for your own types, or use
/// [`Collection::compact_by`](crate::Collection::compact_by) to supply a
/// different rule per call.
pub trait Truthy {
    /// Returns `true` if the value counts as present/true.
    fn is_truthy(&self) -> bool;
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Number {
    fn is_truthy(&self) -> bool {
        !self.is_zero_or_nan()
    }
}

impl Truthy for Scalar {
    fn is_truthy(&self) -> bool {
        self.as_value().is_truthy()
    }
}

impl Truthy for Value<'_> {
    fn is_truthy(&self) -> bool {
        match self {
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => n.is_truthy(),
            Value::Bool(b) => *b,
            Value::Opaque => true,
            Value::Null | Value::None => false,
        }
    }
}

macro_rules! truthy_number {
    ($($source:ty),+) => {
        $(
            impl Truthy for $source {
                fn is_truthy(&self) -> bool {
                    Number::from(*self).is_truthy()
                }
            }
        )+
    };
}

truthy_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
