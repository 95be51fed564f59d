//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with [`Applicative::pure`], which lifts
//! a plain value, and [`Applicative::map2`], which combines two values held
//! in the same kind of container.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v) == v                                 // identity
//! pure(f).apply(pure(x)) == pure(f(x))                   // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)            // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::typeclass::Applicative;
//! use optres::{Option, err, none, some};
//!
//! assert_eq!(some(1).map2(some(2), |a, b| a + b), some(3));
//! assert_eq!(some(1).map2(none::<i32>(), |a, b| a + b), none());
//!
//! // The first error wins.
//! let first = err::<i32, &str>("first").map2(err::<i32, &str>("second"), |a, b| a + b);
//! assert_eq!(first, err("first"));
//!
//! let lifted: Option<i32> = Option::<()>::pure(7);
//! assert_eq!(lifted, some(7));
//! ```

use super::Functor;
use crate::option::Option;
use crate::result::Result;

/// A [`Functor`] that can lift plain values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts `value` into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// The function runs only when both sides hold a payload.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the payloads of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two containers, keeping the left payload.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two containers, keeping the right payload.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a held function to a held value.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Option::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Option::Some(b)) => Option::Some(function(a, b)),
            _ => Option::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Option::Some(b), Option::Some(c)) => Option::Some(function(a, b, c)),
            _ => Option::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Result::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Ok(a), Result::Ok(b)) => Result::Ok(function(a, b)),
            (Self::Err(error), _) | (Self::Ok(_), Result::Err(error)) => Result::Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Ok(a), Result::Ok(b), Result::Ok(c)) => Result::Ok(function(a, b, c)),
            (Self::Err(error), _, _)
            | (Self::Ok(_), Result::Err(error), _)
            | (Self::Ok(_), Result::Ok(_), Result::Err(error)) => Result::Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
