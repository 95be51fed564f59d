//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` as a type constructor directly.
//! [`TypeConstructor`] names the payload type and re-applies the same
//! constructor to a new payload, which is all [`Functor`](super::Functor)
//! and the traits built on it need.
//!
//! # Example
//!
//! ```rust
//! use optres::typeclass::TypeConstructor;
//! use optres::{Option, none, some};
//!
//! fn forget<T: TypeConstructor>(_: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Option<String> = forget(some(42));
//! assert_eq!(emptied, none());
//! ```

use crate::option::Option;
use crate::result::Result;

/// A type constructor applied to some payload type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The payload type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

/// `Result` is a constructor over its success type; the error type is fixed.
impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
