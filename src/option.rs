//! Option type - an optional value.
//!
//! This module provides the [`Option<T>`] tagged union, which is either
//! `Some(T)` or `None`. It shadows the prelude name on purpose, the same way
//! `std::io::Result` shadows `Result`: import it explicitly (or through
//! [`crate::prelude`]) and construct values with [`some`] and [`none`].
//!
//! Every transformation returns a new `Option`. Operations that receive a
//! function never call it on the short-circuiting variant:
//!
//! ```rust
//! use optres::{none, some};
//!
//! let doubled = some(21).map(|value| value * 2);
//! assert_eq!(doubled, some(42));
//!
//! let untouched = none::<i32>().map(|value| value * 2);
//! assert_eq!(untouched, none());
//! ```
//!
//! # Combinators
//!
//! - [`Option::wrap`] runs a closure and turns a panic into `None`.
//! - [`Option::all`] collects every `Some`, stopping at the first `None`.
//! - [`Option::any`] returns the first `Some`.
//!
//! Conversion from a standard option goes through `From`, so
//! `Option::from(Some(1))` is `some(1)`, `Option::from(None)` is `none()` and
//! converting an `Option` into itself leaves it unchanged.

use std::fmt;
use std::iter::Flatten;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{Thrown, UnwrapError};
use crate::result::Result;
use crate::unit::Unit;

#[cfg(feature = "serde")]
use crate::render::Structured;

#[cfg(feature = "async")]
use crate::option_async::{IntoOptionAsync, OptionAsync};
#[cfg(feature = "async")]
use std::future::Future;

/// An optional value: either `Some(T)` or `None`.
///
/// A value is in exactly one of the two states for its whole lifetime; all
/// `None` values are interchangeable.
///
/// # Examples
///
/// ```rust
/// use optres::{Option, none, some};
///
/// fn first_even(values: &[i32]) -> Option<i32> {
///     values.iter().copied().find(|value| value % 2 == 0).into()
/// }
///
/// assert_eq!(first_even(&[1, 4, 5]), some(4));
/// assert_eq!(first_even(&[1, 3]), none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Option` may be `None`, which should be handled"]
pub enum Option<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

/// Creates `Some(value)`.
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// Creates `None`.
#[inline]
pub const fn none<T>() -> Option<T> {
    Option::None
}

/// Creates `Some(Unit)`, the payload-less present value.
#[inline]
pub const fn some_unit() -> Option<Unit> {
    Option::Some(Unit)
}

impl<T> Option<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{none, some};
    ///
    /// assert!(some(1).is_some());
    /// assert!(!none::<i32>().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some` and the value satisfies `predicate`.
    #[inline]
    pub fn is_some_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if this is `None` or the value satisfies `predicate`.
    #[inline]
    pub fn is_none_or<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    // =========================================================================
    // Reference Adapters
    // =========================================================================

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Mutably borrows the held value.
    #[inline]
    pub const fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Iterates over a reference to the held value, whatever its type.
    ///
    /// Unlike `IntoIterator`, which flattens an iterable payload, this yields
    /// the payload itself at most once.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_std().into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// `Some(v)` becomes `Some(function(v))`; `None` stays `None` and
    /// `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{none, some};
    ///
    /// assert_eq!(some("four").map(str::len), some(4));
    /// assert_eq!(none::<&str>().map(str::len), none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }

    /// Applies `function` to the held value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default,
        }
    }

    /// Applies `function` to the held value, or computes a default.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default(),
        }
    }

    /// Calls `function` with a reference to the held value, then returns
    /// `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Chains a computation that may itself produce no value.
    ///
    /// `Some(v)` returns `function(v)` as is; `None` returns `None`. Chaining
    /// is associative:
    /// `a.and_then(f).and_then(g) == a.and_then(|v| f(v).and_then(g))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Option, none, some};
    ///
    /// fn half(value: i32) -> Option<i32> {
    ///     if value % 2 == 0 { some(value / 2) } else { none() }
    /// }
    ///
    /// assert_eq!(some(8).and_then(half).and_then(half), some(2));
    /// assert_eq!(some(6).and_then(half).and_then(half), none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
        }
    }

    /// Keeps the held value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Returns `other` if this is `Some`, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if it is `Some`, otherwise the result of `function`.
    ///
    /// This is the bind on the absent side, dual to [`Option::and_then`].
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => function(),
        }
    }

    /// Returns the only `Some` of the two, or `None` if both or neither are.
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Pairs the held values of two options.
    #[inline]
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self, other) {
            (Self::Some(left), Option::Some(right)) => Option::Some((left, right)),
            _ => Option::None,
        }
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Eliminates the option by calling exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{none, some};
    ///
    /// let describe = |option: optres::Option<i32>| {
    ///     option.match_with(|value| format!("got {value}"), || "nothing".to_string())
    /// };
    /// assert_eq!(describe(some(3)), "got 3");
    /// assert_eq!(describe(none()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    // =========================================================================
    // Conversion to Result
    // =========================================================================

    /// Converts into a [`Result`], using `error` for the `None` case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{err, none, ok, some};
    ///
    /// assert_eq!(some(1).ok_or("missing"), ok(1));
    /// assert_eq!(none::<i32>().ok_or("missing"), err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(error),
        }
    }

    /// Converts into a [`Result`], computing the error lazily.
    ///
    /// `function` is only called when this is `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(function()),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the held value, or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the held value, or computes a fallback.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Returns the held value, or [`UnwrapError::NoneOption`].
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::NoneOption`] if this is `None`.
    #[inline]
    pub fn try_unwrap(self) -> std::result::Result<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::NoneOption),
        }
    }

    /// Returns the held value. Intended for tests only.
    ///
    /// Production code should use [`Option::unwrap_or`],
    /// [`Option::unwrap_or_else`] or [`Option::match_with`].
    ///
    /// # Panics
    ///
    /// Panics with "Attempted to unwrap none option" if this is `None`.
    #[track_caller]
    pub fn unsafe_unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(%error, "unsafe_unwrap called on a None option");
                panic!("{error}")
            }
        }
    }

    /// Converts into the standard library option.
    #[inline]
    pub fn into_std(self) -> std::option::Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Runs `function`, returning `Some` of its return value or `None` if it
    /// panics.
    ///
    /// The panic payload is discarded since `Option` has no error channel;
    /// use [`Result::wrap`] to keep it. The default panic hook still reports
    /// the panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Option, none, some};
    ///
    /// assert_eq!(Option::wrap(|| 7), some(7));
    /// assert_eq!(Option::wrap(|| -> i32 { panic!("boom") }), none());
    /// ```
    pub fn wrap<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Some(value),
            Err(payload) => {
                let thrown = Thrown::new(payload);
                tracing::debug!(panic = %thrown, "Option::wrap discarded a captured panic");
                Self::None
            }
        }
    }

    /// Collects the held values of every option, in order.
    ///
    /// Returns `None` at the first `None`; the iterator is not advanced any
    /// further.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Option, none, some};
    ///
    /// assert_eq!(Option::all([some(1), some(2), some(3)]), some(vec![1, 2, 3]));
    /// assert_eq!(Option::all([some(1), none(), some(3)]), none());
    /// ```
    pub fn all<I>(options: I) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let options = options.into_iter();
        let mut values = Vec::with_capacity(options.size_hint().0);
        for (index, option) in options.enumerate() {
            match option {
                Self::Some(value) => values.push(value),
                Self::None => {
                    tracing::trace!(index, "Option::all short-circuited on None");
                    return Option::None;
                }
            }
        }
        Option::Some(values)
    }

    /// Returns the first `Some`, or `None` if every option is `None`.
    ///
    /// The iterator is not advanced past the first `Some`.
    pub fn any<I>(options: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        options
            .into_iter()
            .find(Self::is_some)
            .unwrap_or(Self::None)
    }
}

impl<T: Default> Option<T> {
    /// Returns the held value, or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Option::None,
        }
    }
}

// =============================================================================
// Async Bridges
// =============================================================================

#[cfg(feature = "async")]
impl<T: Send + 'static> Option<T> {
    /// Applies an asynchronous function to the held value.
    ///
    /// `Some(v)` becomes an [`OptionAsync`] settling to `Some(function(v).await)`;
    /// `None` becomes an already settled `None` and `function` is never called.
    pub fn map_async<U, F, Fut>(self, function: F) -> OptionAsync<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U> + Send + 'static,
    {
        match self {
            Self::Some(value) => {
                let future = function(value);
                OptionAsync::new(async move { Option::Some(future.await) })
            }
            Self::None => OptionAsync::settled(Option::None),
        }
    }

    /// Chains an asynchronous computation that may produce no value.
    ///
    /// `function` may return an [`Option`], an [`OptionAsync`], a boxed
    /// future of an `Option` or a shared handle; see [`IntoOptionAsync`].
    pub fn and_then_async<U, R, F>(self, function: F) -> OptionAsync<U>
    where
        U: Send + 'static,
        R: IntoOptionAsync<U>,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Some(value) => function(value).into_option_async(),
            Self::None => OptionAsync::settled(Option::None),
        }
    }

    /// Wraps this option in an already settled [`OptionAsync`].
    #[inline]
    pub fn into_async(self) -> OptionAsync<T> {
        OptionAsync::settled(self)
    }

    /// See [`OptionAsync::from_async`].
    pub fn from_async<Fut>(future: Fut) -> OptionAsync<T>
    where
        Fut: Future<Output = std::option::Option<T>> + Send + 'static,
    {
        OptionAsync::from_async(future)
    }

    /// See [`OptionAsync::wrap`].
    pub fn wrap_async<Fut>(future: Fut) -> OptionAsync<T>
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        OptionAsync::wrap(future)
    }

    /// See [`OptionAsync::all`].
    pub fn all_async<I, A>(options: I) -> OptionAsync<Vec<T>>
    where
        I: IntoIterator<Item = A>,
        A: IntoOptionAsync<T>,
    {
        OptionAsync::all(options)
    }

    /// See [`OptionAsync::any`].
    pub fn any_async<I, A>(options: I) -> OptionAsync<T>
    where
        I: IntoIterator<Item = A>,
        A: IntoOptionAsync<T>,
    {
        OptionAsync::any(options)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Option<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

/// Renders `Some(<v>)` or `None`, the payload through its own `Display`.
///
/// Payloads without a `Display` implementation, such as collections, can be
/// rendered with `Option::display_structured` (feature `serde`).
impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    #[inline]
    fn from(option: std::option::Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.into_std()
    }
}

impl<A, V: FromIterator<A>> FromIterator<Option<A>> for Option<V> {
    /// Collects the held values, or returns `None` at the first `None`.
    fn from_iter<I: IntoIterator<Item = Option<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Option::into_std)
            .collect::<std::option::Option<V>>()
            .into()
    }
}

impl<T: IntoIterator> IntoIterator for Option<T> {
    type Item = T::Item;
    type IntoIter = Flatten<std::option::IntoIter<T>>;

    /// Iterates the elements of the held value; `None` yields nothing.
    ///
    /// ```rust
    /// use optres::{none, some};
    ///
    /// let spread: Vec<i32> = some(vec![1, 2]).into_iter().chain(none::<Vec<i32>>()).collect();
    /// assert_eq!(spread, vec![1, 2]);
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        self.into_std().into_iter().flatten()
    }
}

impl<'a, T> IntoIterator for &'a Option<T>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = Flatten<std::option::IntoIter<&'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_std().into_iter().flatten()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> Option<T> {
    /// Returns a `Display` adapter that renders the payload as JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::some;
    ///
    /// assert_eq!(some(vec![1, 2]).display_structured().to_string(), "Some([1,2])");
    /// ```
    #[inline]
    pub const fn display_structured(&self) -> Structured<'_, Self> {
        Structured::new(self)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Option<T> {
    /// `Some(v)` serializes as `v`, `None` as `null`.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Option<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <std::option::Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{err, ok};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_some_construction() {
        let value = some(42);
        assert!(value.is_some());
        assert!(!value.is_none());
    }

    #[rstest]
    fn test_none_construction() {
        let value = none::<i32>();
        assert!(value.is_none());
        assert!(!value.is_some());
    }

    #[rstest]
    fn test_map_never_calls_function_on_none() {
        let calls = Cell::new(0);
        let mapped = none::<i32>().map(|value| {
            calls.set(calls.get() + 1);
            value
        });
        assert_eq!(mapped, none());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_ok_or_else_not_called_on_some() {
        let converted = some(1).ok_or_else(|| -> &str { unreachable!() });
        assert_eq!(converted, ok(1));
        assert_eq!(none::<i32>().ok_or_else(|| "lazy"), err("lazy"));
    }

    #[rstest]
    #[case(some(1), some(2), none())]
    #[case(some(1), none(), some(1))]
    #[case(none(), some(2), some(2))]
    #[case(none(), none(), none())]
    fn test_xor(#[case] left: Option<i32>, #[case] right: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(left.xor(right), expected);
    }

    #[rstest]
    fn test_std_conversion_roundtrip() {
        let option: Option<i32> = Some(5).into();
        assert_eq!(option, some(5));
        let back: std::option::Option<i32> = option.into();
        assert_eq!(back, Some(5));
        assert_eq!(Option::<i32>::from(None), none());
    }

    #[rstest]
    fn test_from_is_identity_on_option() {
        let option = some("kept");
        assert_eq!(Option::from(option), some("kept"));
    }

    #[rstest]
    fn test_collect_stops_at_first_none() {
        let collected: Option<Vec<i32>> = vec![some(1), none(), some(3)].into_iter().collect();
        assert_eq!(collected, none());
        let collected: Option<Vec<i32>> = vec![some(1), some(3)].into_iter().collect();
        assert_eq!(collected, some(vec![1, 3]));
    }

    #[rstest]
    fn test_flatten() {
        assert_eq!(some(some(1)).flatten(), some(1));
        assert_eq!(some(none::<i32>()).flatten(), none());
        assert_eq!(none::<Option<i32>>().flatten(), none());
    }

    #[rstest]
    fn test_as_mut_allows_in_place_edit_of_owned_value() {
        let mut option = some(String::from("a"));
        if let Option::Some(value) = option.as_mut() {
            value.push('b');
        }
        assert_eq!(option, some(String::from("ab")));
    }
}
