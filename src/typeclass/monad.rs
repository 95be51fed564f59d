//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                  // left identity
//! m.flat_map(pure) == m                                        // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```
//!
//! The laws are checked with proptest in `tests/monad_laws.rs`.
//!
//! # Examples
//!
//! ```rust
//! use optres::typeclass::Monad;
//! use optres::{Option, none, some};
//!
//! fn half(value: i32) -> Option<i32> {
//!     if value % 2 == 0 { some(value / 2) } else { none() }
//! }
//!
//! assert_eq!(some(8).flat_map(half).flat_map(half), some(2));
//! assert_eq!(some(6).flat_map(half).flat_map(half), none());
//! ```

use super::Applicative;
use crate::option::Option;
use crate::result::Result;

/// An [`Applicative`] whose next computation may depend on the previous
/// payload.
pub trait Monad: Applicative {
    /// Feeds the payload to `function` and returns its container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the payload of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}
