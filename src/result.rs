//! Result type - the outcome of a fallible computation.
//!
//! This module provides the [`Result<T, E>`] tagged union, which is either
//! `Ok(T)` or `Err(E)`. Like [`Option`](crate::Option) it shadows the prelude
//! name; values are built with [`ok`] and [`err`].
//!
//! The success and error channels are dual: [`Result::map`] and
//! [`Result::and_then`] act on `Ok` and pass `Err` through, while
//! [`Result::map_err`] and [`Result::or_else`] act on `Err` and pass `Ok`
//! through. Exactly one of the two sides is ever touched by a call.
//!
//! ```rust
//! use optres::{Result, err, ok};
//!
//! fn divide(dividend: i32, divisor: i32) -> Result<i32, &'static str> {
//!     if divisor == 0 { err("Cannot divide by zero") } else { ok(dividend / divisor) }
//! }
//!
//! assert_eq!(divide(10, 2).map(|value| value * 2), ok(10));
//! assert_eq!(divide(10, 0).map(|value| value * 2), err("Cannot divide by zero"));
//! ```
//!
//! # Combinators
//!
//! - [`Result::wrap`], [`Result::wrap_or`], [`Result::wrap_or_else`] run a
//!   closure and capture a panic into `Err`.
//! - [`Result::all`] collects every `Ok`, returning the first `Err`.
//! - [`Result::any`] returns the first `Ok`, or every error when all fail.

use std::fmt;
use std::iter::Flatten;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{Thrown, UnwrapError};
use crate::option::Option;
use crate::unit::Unit;

#[cfg(feature = "serde")]
use crate::render::Structured;

#[cfg(feature = "async")]
use crate::result_async::{IntoResultAsync, ResultAsync};
#[cfg(feature = "async")]
use std::future::Future;

/// The outcome of a fallible computation: either `Ok(T)` or `Err(E)`.
///
/// # Examples
///
/// ```rust
/// use optres::{Result, err, ok};
///
/// let parsed: Result<u8, String> = "42".parse::<u8>().map_err(|error| error.to_string()).into();
/// assert_eq!(parsed, ok(42));
///
/// let failed: Result<u8, &str> = err("overflow");
/// assert_eq!(failed.unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Result` may be an `Err`, which should be handled"]
pub enum Result<T, E> {
    /// The success payload.
    Ok(T),
    /// The failure payload.
    Err(E),
}

/// Creates `Ok(value)`.
#[inline]
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Creates `Err(error)`.
#[inline]
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Result::Err(error)
}

/// Creates `Ok(Unit)`, the payload-less success.
#[inline]
pub const fn ok_unit<E>() -> Result<Unit, E> {
    Result::Ok(Unit)
}

/// Creates `Err(Unit)`, the payload-less failure.
#[inline]
pub const fn err_unit<T>() -> Result<T, Unit> {
    Result::Err(Unit)
}

impl<T, E> Result<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    #[inline]
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    #[inline]
    pub fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    // =========================================================================
    // Reference Adapters
    // =========================================================================

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Mutably borrows both payloads.
    #[inline]
    pub const fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Iterates over a reference to the success payload; `Err` yields
    /// nothing.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().ok().into_std().into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success payload; `Err` passes through and
    /// `function` is never called.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Applies `function` to the error payload; `Ok` passes through and
    /// `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, ok};
    ///
    /// let failed: Result<i32, &str> = err("io");
    /// assert_eq!(failed.map_err(|error| format!("wrapped: {error}")), err("wrapped: io".to_string()));
    ///
    /// let fine: Result<i32, &str> = ok(1);
    /// assert_eq!(fine.map_err(str::len), ok(1));
    /// ```
    #[inline]
    pub fn map_err<F2, F>(self, function: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(function(error)),
        }
    }

    /// Applies `function` to the success payload, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => default,
        }
    }

    /// Applies `function` to the success payload, or `default` to the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => default(error),
        }
    }

    /// Calls `function` with the success payload, then returns `self`.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with the error payload, then returns `self`.
    #[inline]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Chains a fallible computation on the success channel.
    ///
    /// `Ok(v)` returns `function(v)` as is; `Err` short-circuits.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Chains a recovery on the error channel.
    ///
    /// `Err(e)` returns `function(e)` as is; `Ok` short-circuits. This is the
    /// dual of [`Result::and_then`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, ok};
    ///
    /// let recovered: Result<i32, ()> = err::<i32, &str>("miss").or_else(|_| ok(0));
    /// assert_eq!(recovered, ok(0));
    /// ```
    #[inline]
    pub fn or_else<F2, F>(self, function: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> Result<T, F2>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Returns `other` if this is `Ok`, otherwise this `Err`.
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns this `Ok`, otherwise `other`.
    #[inline]
    pub fn or<F2>(self, other: Result<T, F2>) -> Result<T, F2> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => other,
        }
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Eliminates the result by calling exactly one of two functions.
    #[inline]
    pub fn match_with<U, O, R>(self, on_ok: O, on_err: R) -> U
    where
        O: FnOnce(T) -> U,
        R: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    // =========================================================================
    // Conversion to Option
    // =========================================================================

    /// Projects the success payload, discarding the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, none, ok, some};
    ///
    /// assert_eq!(ok::<i32, &str>(1).ok(), some(1));
    /// assert_eq!(err::<i32, &str>("e").ok(), none());
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::None,
        }
    }

    /// Projects the error payload, discarding the success value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Err(error) => Option::Some(error),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success payload, or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    /// Returns the success payload, or computes a fallback from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Returns the error payload, or `fallback`.
    #[inline]
    pub fn unwrap_err_or(self, fallback: E) -> E {
        match self {
            Self::Ok(_) => fallback,
            Self::Err(error) => error,
        }
    }

    /// Returns the error payload, or computes a fallback from the success
    /// value.
    #[inline]
    pub fn unwrap_err_or_else<F>(self, function: F) -> E
    where
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => error,
        }
    }

    /// Returns the success payload, or an [`UnwrapError::ErrResult`]
    /// carrying the held error.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::ErrResult`] if this is `Err`.
    #[inline]
    pub fn try_unwrap(self) -> std::result::Result<T, UnwrapError<E>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(UnwrapError::ErrResult(error)),
        }
    }

    /// Returns the error payload, or [`UnwrapError::OkResult`].
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::OkResult`] if this is `Ok`.
    #[inline]
    pub fn try_unwrap_err(self) -> std::result::Result<E, UnwrapError> {
        match self {
            Self::Ok(_) => Err(UnwrapError::OkResult),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the error payload. Intended for tests only.
    ///
    /// # Panics
    ///
    /// Panics with "tried unwrapping an Ok value as an error" if this is `Ok`.
    #[track_caller]
    pub fn unsafe_unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(unwrap_error) => {
                tracing::error!(error = %unwrap_error, "unsafe_unwrap_err called on an Ok result");
                panic!("{unwrap_error}")
            }
        }
    }

    /// Converts into the standard library result.
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Converts possibly absent data into a result, using `error` when the
    /// data is absent.
    ///
    /// An existing `Result` passes through `From` unchanged, so this only
    /// needs to cover the absent/present case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, ok};
    ///
    /// assert_eq!(Result::from_or(Some(3), "absent"), ok(3));
    /// assert_eq!(Result::<i32, _>::from_or(None, "absent"), err("absent"));
    /// ```
    #[inline]
    pub fn from_or(data: std::option::Option<T>, error: E) -> Self {
        match data {
            Some(value) => Self::Ok(value),
            None => Self::Err(error),
        }
    }

    /// Like [`Result::from_or`], computing the error lazily.
    #[inline]
    pub fn from_or_else<F>(data: std::option::Option<T>, function: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match data {
            Some(value) => Self::Ok(value),
            None => Self::Err(function()),
        }
    }

    /// Runs `function`, replacing a panic with the fixed `error`.
    pub fn wrap_or<F>(function: F, error: E) -> Self
    where
        F: FnOnce() -> T,
    {
        Result::<T, Thrown>::wrap(function).map_err(|_| error)
    }

    /// Runs `function`, mapping a captured panic through `on_panic`.
    pub fn wrap_or_else<F, G>(function: F, on_panic: G) -> Self
    where
        F: FnOnce() -> T,
        G: FnOnce(Thrown) -> E,
    {
        Result::<T, Thrown>::wrap(function).map_err(on_panic)
    }

    /// Collects every success payload, in order.
    ///
    /// Returns the first `Err`; the iterator is not advanced any further.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, ok};
    ///
    /// assert_eq!(Result::all([ok::<i32, &str>(1), ok(2)]), ok(vec![1, 2]));
    /// assert_eq!(Result::all([ok(1), err("x"), ok(3)]), err("x"));
    /// ```
    pub fn all<I>(results: I) -> Result<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        let results = results.into_iter();
        let mut values = Vec::with_capacity(results.size_hint().0);
        for (index, result) in results.enumerate() {
            match result {
                Self::Ok(value) => values.push(value),
                Self::Err(error) => {
                    tracing::trace!(index, "Result::all short-circuited on Err");
                    return Result::Err(error);
                }
            }
        }
        Result::Ok(values)
    }

    /// Returns the first `Ok`; if every result is `Err`, returns all the
    /// errors in order.
    ///
    /// Unlike [`Result::all`], the error side accumulates instead of
    /// short-circuiting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{Result, err, ok};
    ///
    /// assert_eq!(Result::any([err("a"), ok::<i32, &str>(2), err("c")]), ok(2));
    /// assert_eq!(Result::<i32, _>::any([err("a"), err("b")]), err(vec!["a", "b"]));
    /// ```
    pub fn any<I>(results: I) -> Result<T, Vec<E>>
    where
        I: IntoIterator<Item = Self>,
    {
        let results = results.into_iter();
        let mut errors = Vec::with_capacity(results.size_hint().0);
        for result in results {
            match result {
                Self::Ok(value) => return Result::Ok(value),
                Self::Err(error) => errors.push(error),
            }
        }
        tracing::trace!(count = errors.len(), "Result::any collected only errors");
        Result::Err(errors)
    }
}

impl<T> Result<T, Thrown> {
    /// Runs `function`, returning `Ok` of its return value or `Err` with the
    /// captured panic payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::Result;
    ///
    /// let failed = Result::wrap(|| -> i32 { panic!("boom") });
    /// assert_eq!(failed.unsafe_unwrap_err().message(), Some("boom"));
    ///
    /// assert_eq!(Result::wrap(|| 5).ok(), optres::some(5));
    /// ```
    pub fn wrap<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                let thrown = Thrown::new(payload);
                tracing::debug!(panic = %thrown, "Result::wrap captured a panic");
                Self::Err(thrown)
            }
        }
    }
}

impl<T, E: fmt::Debug> Result<T, E> {
    /// Returns the success payload. Intended for tests only.
    ///
    /// Production code should use [`Result::unwrap_or`],
    /// [`Result::unwrap_or_else`] or [`Result::match_with`].
    ///
    /// # Panics
    ///
    /// Panics with a message carrying the held error if this is `Err`.
    #[track_caller]
    pub fn unsafe_unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(unwrap_error) => {
                tracing::error!(error = %unwrap_error, "unsafe_unwrap called on an Err result");
                panic!("{unwrap_error}")
            }
        }
    }
}

impl<T: Default, E> Result<T, E> {
    /// Returns the success payload, or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Result<T, E> {
        match self {
            Self::Ok(inner) => inner,
            Self::Err(error) => Result::Err(error),
        }
    }
}

// =============================================================================
// Async Bridges
// =============================================================================

#[cfg(feature = "async")]
impl<T: Send + 'static, E: Send + 'static> Result<T, E> {
    /// Applies an asynchronous function to the success payload.
    ///
    /// `Err` becomes an already settled `Err` and `function` is never called.
    pub fn map_async<U, F, Fut>(self, function: F) -> ResultAsync<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U> + Send + 'static,
    {
        match self {
            Self::Ok(value) => {
                let future = function(value);
                ResultAsync::new(async move { Result::Ok(future.await) })
            }
            Self::Err(error) => ResultAsync::settled(Result::Err(error)),
        }
    }

    /// Applies an asynchronous function to the error payload.
    ///
    /// `Ok` becomes an already settled `Ok` and `function` is never called.
    pub fn map_err_async<F2, F, Fut>(self, function: F) -> ResultAsync<T, F2>
    where
        F2: Send + 'static,
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = F2> + Send + 'static,
    {
        match self {
            Self::Ok(value) => ResultAsync::settled(Result::Ok(value)),
            Self::Err(error) => {
                let future = function(error);
                ResultAsync::new(async move { Result::Err(future.await) })
            }
        }
    }

    /// Chains an asynchronous fallible computation on the success channel.
    ///
    /// `function` may return a [`Result`], a [`ResultAsync`], a boxed future
    /// of a `Result` or a shared handle; see [`IntoResultAsync`].
    pub fn and_then_async<U, R, F>(self, function: F) -> ResultAsync<U, E>
    where
        U: Send + 'static,
        R: IntoResultAsync<U, E>,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Ok(value) => function(value).into_result_async(),
            Self::Err(error) => ResultAsync::settled(Result::Err(error)),
        }
    }

    /// Chains an asynchronous recovery on the error channel.
    pub fn or_else_async<F2, R, F>(self, function: F) -> ResultAsync<T, F2>
    where
        F2: Send + 'static,
        R: IntoResultAsync<T, F2>,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => ResultAsync::settled(Result::Ok(value)),
            Self::Err(error) => function(error).into_result_async(),
        }
    }

    /// Wraps this result in an already settled [`ResultAsync`].
    #[inline]
    pub fn into_async(self) -> ResultAsync<T, E> {
        ResultAsync::settled(self)
    }

    /// See [`ResultAsync::from_or`].
    pub fn from_or_async<Fut>(future: Fut, error: E) -> ResultAsync<T, E>
    where
        Fut: Future<Output = std::option::Option<T>> + Send + 'static,
    {
        ResultAsync::from_or(future, error)
    }

    /// See [`ResultAsync::wrap_or`].
    pub fn wrap_or_async<Fut>(future: Fut, error: E) -> ResultAsync<T, E>
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        ResultAsync::wrap_or(future, error)
    }

    /// See [`ResultAsync::wrap_or_else`].
    pub fn wrap_or_else_async<Fut, G>(future: Fut, on_panic: G) -> ResultAsync<T, E>
    where
        Fut: Future<Output = T> + Send + 'static,
        G: FnOnce(Thrown) -> E + Send + 'static,
    {
        ResultAsync::wrap_or_else(future, on_panic)
    }

    /// See [`ResultAsync::all`].
    pub fn all_async<I, A>(results: I) -> ResultAsync<Vec<T>, E>
    where
        I: IntoIterator<Item = A>,
        A: IntoResultAsync<T, E>,
    {
        ResultAsync::all(results)
    }

    /// See [`ResultAsync::any`].
    pub fn any_async<I, A>(results: I) -> ResultAsync<T, Vec<E>>
    where
        I: IntoIterator<Item = A>,
        A: IntoResultAsync<T, E>,
    {
        ResultAsync::any(results)
    }
}

#[cfg(feature = "async")]
impl<T: Send + 'static> Result<T, Thrown> {
    /// See [`ResultAsync::wrap`].
    pub fn wrap_async<Fut>(future: Fut) -> ResultAsync<T, Thrown>
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        ResultAsync::wrap(future)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// Renders `Ok(<v>)` or `Err(<e>)`, each payload through its own `Display`.
///
/// See `Result::display_structured` (feature `serde`) for payloads without a
/// `Display` implementation.
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<A, E, V: FromIterator<A>> FromIterator<Result<A, E>> for Result<V, E> {
    /// Collects the success payloads, or returns the first `Err`.
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Result::into_std)
            .collect::<std::result::Result<V, E>>()
            .into()
    }
}

impl<T: IntoIterator, E> IntoIterator for Result<T, E> {
    type Item = T::Item;
    type IntoIter = Flatten<std::option::IntoIter<T>>;

    /// Iterates the elements of the success payload; `Err` yields nothing.
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_std().into_iter().flatten()
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = Flatten<std::option::IntoIter<&'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().ok().into_std().into_iter().flatten()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, E: serde::Serialize> Result<T, E> {
    /// Returns a `Display` adapter that renders the payload as JSON.
    ///
    /// Unlike serialization, the error payload is kept: `Err(e)` renders as
    /// `Err(<json of e>)`.
    #[inline]
    pub const fn display_structured(&self) -> Structured<'_, Self> {
        Structured::new(self)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, E> serde::Serialize for Result<T, E> {
    /// `Ok(v)` serializes as `v`, `Err(_)` as `null`.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Ok(value) => serializer.serialize_some(value),
            Self::Err(_) => serializer.serialize_none(),
        }
    }
}
