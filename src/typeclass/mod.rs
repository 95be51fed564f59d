//! Type class traits implemented for [`Option`](crate::Option) and
//! [`Result`](crate::Result).
//!
//! - [`Functor`]: mapping over the payload
//! - [`Applicative`]: lifting values and combining independent results
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: folding the zero-or-one element into a summary value
//! - [`Bifunctor`]: mapping the success and error sides of a `Result`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to name "the same constructor applied to another type",
//! which is enough to write `Functor` and `Monad` generically.
//!
//! # Examples
//!
//! ```rust
//! use optres::typeclass::{Applicative, Functor, Monad};
//! use optres::{Result, ok};
//!
//! fn add_then_double(left: Result<i32, String>, right: Result<i32, String>) -> Result<i32, String> {
//!     left.map2(right, |a, b| a + b).fmap(|sum| sum * 2)
//! }
//!
//! assert_eq!(add_then_double(ok(1), ok(2)), ok(6));
//! assert_eq!(ok::<i32, String>(1).flat_map(|x| ok(x + 1)), ok(2));
//! ```

mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
