//! Functor type class - mapping over a payload.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both laws are checked with proptest in `tests/functor_laws.rs`.

use super::TypeConstructor;
use crate::option::Option;
use crate::result::Result;
use crate::unit::Unit;

/// A type constructor whose payload can be transformed without changing its
/// shape.
///
/// # Examples
///
/// ```rust
/// use optres::typeclass::Functor;
/// use optres::{err, ok, some};
///
/// assert_eq!(some(5).fmap(|x| x * 2), some(10));
/// assert_eq!(err::<i32, &str>("e").fmap(|x| x * 2), err("e"));
/// assert_eq!(ok::<i32, &str>(1).void(), optres::ok_unit());
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, keeping the shape.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies `function` to a reference to the payload.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the payload with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Replaces the payload with [`Unit`].
    #[inline]
    fn void(self) -> Self::WithType<Unit>
    where
        Self: Sized,
    {
        self.replace(Unit)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{none, some};
    use crate::result::{err, ok};
    use rstest::rstest;

    #[rstest]
    #[case(some(2), some(4))]
    #[case(none(), none())]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|x| x * 2), expected);
    }

    #[rstest]
    fn option_fmap_ref_leaves_original() {
        let text = some(String::from("hello"));
        assert_eq!(text.fmap_ref(String::len), some(5));
        assert_eq!(text, some(String::from("hello")));
    }

    #[rstest]
    fn option_void_keeps_shape() {
        assert_eq!(some(1).void(), some(Unit));
        assert_eq!(none::<i32>().void(), none());
    }

    #[rstest]
    fn result_fmap_ref_clones_error() {
        let failed: Result<i32, String> = err(String::from("bad"));
        assert_eq!(failed.fmap_ref(|x| x + 1), err(String::from("bad")));
    }

    #[rstest]
    fn result_replace() {
        assert_eq!(ok::<i32, &str>(1).replace("new"), ok("new"));
        assert_eq!(err::<i32, &str>("e").replace("new"), err("e"));
    }
}
