//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf                                  // identity
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! bf.bimap(f, g) == bf.first(f).second(g)                       // consistency
//! ```
//!
//! # Type Parameter Order for Result
//!
//! `Result<T, E>` is implemented as `Bifunctor<E, T>`: `first` maps the
//! error (like [`Result::map_err`](crate::Result::map_err)) and `second`
//! maps the success payload, matching [`Functor::fmap`](super::Functor::fmap).
//!
//! # Examples
//!
//! ```rust
//! use optres::typeclass::Bifunctor;
//! use optres::{err, ok};
//!
//! let failed = err::<i32, &str>("boom").bimap(|e: &str| e.len(), |x| x * 2);
//! assert_eq!(failed, err(4));
//!
//! let passed = ok::<i32, &str>(21).bimap(|e: &str| e.len(), |x| x * 2);
//! assert_eq!(passed, ok(42));
//! ```

use crate::result::Result;

/// A type with two type parameters that can both be mapped.
pub trait Bifunctor<A, B> {
    /// The same constructor applied to `C` and `D`.
    type Target<C, D>;

    /// Maps both type parameters at once.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps both type parameters by reference.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Ok(value) => Result::Ok(second_function(value)),
            Self::Err(error) => Result::Err(first_function(error)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Self::Ok(value) => Result::Ok(second_function(value)),
            Self::Err(error) => Result::Err(first_function(error)),
        }
    }
}
