//! Error types raised outside the represented-failure channel.
//!
//! Represented failures travel inside [`Result::Err`](crate::Result::Err) or
//! as [`Option::None`](crate::Option::None) and are never raised. The types in
//! this module cover the two remaining cases:
//!
//! - [`UnwrapError`]: a programming error, produced when an unsafe unwrap is
//!   called against the wrong variant.
//! - [`Thrown`]: the raw payload of a panic captured by one of the `wrap*`
//!   constructors.

use std::any::Any;
use std::fmt;

use crate::unit::Unit;

/// Raised by the unsafe unwrap family when called against the wrong variant.
///
/// `try_unwrap` and `try_unwrap_err` return this error; `unsafe_unwrap` and
/// `unsafe_unwrap_err` panic with its `Display` message.
///
/// # Examples
///
/// ```rust
/// use optres::{UnwrapError, none};
///
/// let error = none::<i32>().try_unwrap().unwrap_err();
/// assert_eq!(error, UnwrapError::NoneOption);
/// assert_eq!(error.to_string(), "Attempted to unwrap none option");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnwrapError<E = Unit> {
    /// A `None` option was unwrapped.
    NoneOption,
    /// An `Err` result was unwrapped as a success; carries the held error.
    ErrResult(E),
    /// An `Ok` result was unwrapped as an error.
    OkResult,
}

impl<E> UnwrapError<E> {
    /// Returns the error carried by an [`UnwrapError::ErrResult`].
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::ErrResult(error) => Some(error),
            Self::NoneOption | Self::OkResult => None,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for UnwrapError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoneOption => formatter.write_str("Attempted to unwrap none option"),
            Self::ErrResult(error) => {
                write!(formatter, "Attempted to unwrap err result: {error:?}")
            }
            Self::OkResult => formatter.write_str("tried unwrapping an Ok value as an error"),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for UnwrapError<E> {}

/// The payload of a panic captured by a `wrap*` constructor.
///
/// The payload is kept verbatim. Panics raised through `panic!` with a
/// message carry a `&'static str` or a `String`, which [`Thrown::message`]
/// exposes; anything raised through [`std::panic::panic_any`] can be
/// recovered with [`Thrown::downcast`].
///
/// # Examples
///
/// ```rust
/// use optres::Result;
///
/// let result = Result::wrap(|| -> i32 { panic!("boom") });
/// assert_eq!(result.err().unwrap_or_else(|| unreachable!()).message(), Some("boom"));
/// ```
pub struct Thrown {
    payload: Box<dyn Any + Send>,
}

impl Thrown {
    /// Wraps a raw panic payload.
    #[inline]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Returns the panic message when the payload is a string.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns `true` if the payload is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Attempts to recover the payload as a `T`.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged if the payload is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        self.payload
            .downcast::<T>()
            .map(|payload| *payload)
            .map_err(Self::new)
    }

    /// Returns the raw payload, e.g. to resume the panic with
    /// [`std::panic::resume_unwind`].
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl From<Box<dyn Any + Send>> for Thrown {
    #[inline]
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self::new(payload)
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Thrown")
            .field(&self.message().unwrap_or("<non-string panic payload>"))
            .finish()
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message().unwrap_or("non-string panic payload"))
    }
}

impl std::error::Error for Thrown {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UnwrapError::NoneOption, "Attempted to unwrap none option")]
    #[case(UnwrapError::OkResult, "tried unwrapping an Ok value as an error")]
    #[case(
        UnwrapError::ErrResult("bad input"),
        "Attempted to unwrap err result: \"bad input\""
    )]
    fn unwrap_error_display(#[case] error: UnwrapError<&'static str>, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn unwrap_error_into_error_returns_held_error() {
        assert_eq!(UnwrapError::ErrResult(7).into_error(), Some(7));
        assert_eq!(UnwrapError::<i32>::NoneOption.into_error(), None);
    }

    #[rstest]
    fn thrown_reads_static_str_message() {
        let thrown = Thrown::new(Box::new("boom"));
        assert_eq!(thrown.message(), Some("boom"));
        assert_eq!(thrown.to_string(), "boom");
    }

    #[rstest]
    fn thrown_reads_string_message() {
        let thrown = Thrown::new(Box::new(String::from("formatted 42")));
        assert_eq!(thrown.message(), Some("formatted 42"));
    }

    #[rstest]
    fn thrown_downcasts_custom_payload() {
        #[derive(Debug, PartialEq)]
        struct Code(u16);

        let thrown = Thrown::new(Box::new(Code(503)));
        assert!(thrown.is::<Code>());
        assert_eq!(thrown.message(), None);
        assert_eq!(thrown.to_string(), "non-string panic payload");
        assert_eq!(thrown.downcast::<Code>().ok(), Some(Code(503)));
    }

    #[rstest]
    fn thrown_downcast_mismatch_returns_self() {
        let thrown = Thrown::new(Box::new(1_u8));
        let recovered = thrown.downcast::<String>().unwrap_err();
        assert!(recovered.is::<u8>());
    }
}
