//! # optres
//!
//! Explicit absence and failure as values: [`Option`] and [`Result`] tagged
//! unions, their asynchronous counterparts [`OptionAsync`] and
//! [`ResultAsync`], and combinators for chaining, recovering, aggregating
//! and capturing panics.
//!
//! ## Overview
//!
//! - **Synchronous types**: [`Option<T>`] (`Some` / `None`) and
//!   [`Result<T, E>`] (`Ok` / `Err`), with [`Unit`] as the payload that
//!   carries no information.
//! - **Asynchronous types**: [`OptionAsync<T>`] and [`ResultAsync<T, E>`],
//!   each a single pending computation. Every chaining operation is the
//!   synchronous operation lifted through [`Pending`], so
//!   `x.op(f).await == x.await.op(f)` holds for every operation.
//! - **Panic capture**: the `wrap*` constructors turn a panic into `None` or
//!   into `Err` carrying a [`Thrown`] payload.
//! - **Aggregation**: `all` / `any` on every type, short-circuiting and, for
//!   the asynchronous forms, awaiting inputs in order.
//!
//! The types deliberately shadow the standard library's `Option` and
//! `Result` when imported, the same way `std::io::Result` does. Both convert
//! to and from the standard types with `From`.
//!
//! ## Feature Flags
//!
//! - `async` (default): [`OptionAsync`], [`ResultAsync`] and [`Pending`]
//! - `typeclass` (default): `Functor`, `Applicative`, `Monad`, `Foldable`,
//!   `Bifunctor`
//! - `serde`: `Serialize` for `Option`, `Result` and `Unit`, `Deserialize`
//!   for `Option` and `Unit`, and `Structured` for rendering
//!   payloads without `Display` as JSON
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optres::prelude::*;
//!
//! fn parse(text: &str) -> Result<i32, String> {
//!     Result::from(text.parse::<i32>()).map_err(|error| error.to_string())
//! }
//!
//! assert_eq!(parse("20").map(|x| x + 1), ok(21));
//! assert_eq!(parse("x").ok(), none());
//! assert_eq!(some(1).to_string(), "Some(1)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the types, their constructors and, when enabled, the type
/// class traits.
///
/// # Usage
///
/// ```rust
/// use optres::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Thrown, UnwrapError};
    pub use crate::option::{Option, none, some, some_unit};
    pub use crate::result::{Result, err, err_unit, ok, ok_unit};
    pub use crate::unit::Unit;

    #[cfg(feature = "async")]
    pub use crate::option_async::{
        IntoOptionAsync, OptionAsync, SharedOptionAsync, none_async, some_async, some_unit_async,
    };

    #[cfg(feature = "async")]
    pub use crate::result_async::{
        IntoResultAsync, ResultAsync, SharedResultAsync, err_async, err_unit_async, ok_async,
        ok_unit_async,
    };

    #[cfg(feature = "async")]
    pub use crate::pending::{Memoized, Pending};

    #[cfg(feature = "serde")]
    pub use crate::render::Structured;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
pub mod option;
pub mod result;
pub mod unit;

#[cfg(feature = "async")]
pub mod option_async;

#[cfg(feature = "async")]
pub mod pending;

#[cfg(feature = "async")]
pub mod result_async;

#[cfg(feature = "serde")]
pub mod render;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use error::{Thrown, UnwrapError};
pub use option::{Option, none, some, some_unit};
pub use result::{Result, err, err_unit, ok, ok_unit};
pub use unit::Unit;

#[cfg(feature = "async")]
pub use option_async::{
    IntoOptionAsync, OptionAsync, SharedOptionAsync, none_async, some_async, some_unit_async,
};

#[cfg(feature = "async")]
pub use pending::{Memoized, Pending};

#[cfg(feature = "serde")]
pub use render::Structured;

#[cfg(feature = "async")]
pub use result_async::{
    IntoResultAsync, ResultAsync, SharedResultAsync, err_async, err_unit_async, ok_async,
    ok_unit_async,
};
