//! Predicate primitives.
//!
//! Small pure combinators used to build predicates from data instead of
//! writing closures by hand. None of them mutate their inputs.

use crate::pattern::Pattern;
use crate::traits::Fields;
use crate::value::Value;

/// Returns `true` if `candidate` holds every property of `pattern` under
/// strict equality. The empty pattern matches everything.
///
/// ```
/// use collectify::{matches, pattern, Record};
///
/// let candidate: Record = vec![("a", 1), ("b", 2)].into_iter().collect();
/// assert!(matches(&pattern! { "a" => 1 }, &candidate));
/// assert!(!matches(&pattern! { "a" => 2 }, &candidate));
/// assert!(matches(&pattern! {}, &candidate));
/// ```
pub fn matches<T: Fields + ?Sized>(pattern: &Pattern, candidate: &T) -> bool {
    pattern.matches(candidate)
}

/// Negates a predicate.
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |item: &T| !predicate(item)
}

/// Binds the first argument of a two-argument function.
///
/// ```
/// use collectify::{matches, partial, pattern, Record};
///
/// let is_joe = partial(matches::<Record>, pattern! { "name" => "joe" });
/// let joe: Record = vec![("name", "joe")].into_iter().collect();
/// assert!(is_joe(&joe));
/// ```
pub fn partial<A, B, R, F>(f: F, bound: A) -> impl Fn(&B) -> R
where
    B: ?Sized,
    F: Fn(&A, &B) -> R,
{
    move |arg: &B| f(&bound, arg)
}

/// Swaps the arguments of a two-argument function.
pub fn flip<A, B, R, F>(f: F) -> impl Fn(&B, &A) -> R
where
    A: ?Sized,
    B: ?Sized,
    F: Fn(&A, &B) -> R,
{
    move |b: &B, a: &A| f(a, b)
}

/// Creates a [`Property`] accessor for the named property.
pub fn property(name: impl Into<String>) -> Property {
    Property { name: name.into() }
}

/// Reads one named property off any [`Fields`] element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
}

impl Property {
    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the property from an element.
    pub fn get<'a, T: Fields + ?Sized>(&self, item: &'a T) -> Value<'a> {
        item.field(&self.name)
    }
}

/// Returns `true` if some element of `items` is strictly equal to `value`.
pub fn contains_strict<T: PartialEq>(items: &[T], value: &T) -> bool {
    contains_by(items, value, &T::eq)
}

/// Membership under a caller-supplied equality.
pub(crate) fn contains_by<T, F>(items: &[T], value: &T, eq: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    items.iter().any(|item| eq(item, value))
}
