//! Structured rendering for payloads without a `Display` implementation.
//!
//! The `Display` implementations of [`Option`] and [`Result`] render the
//! payload through its own `Display`, which rules out collections and plain
//! data structs. [`Structured`] renders the same `Some(..)` / `Ok(..)` /
//! `Err(..)` shape with the payload encoded as JSON instead.
//!
//! ```rust
//! use optres::{Result, err, some};
//!
//! assert_eq!(some(vec![1, 2]).display_structured().to_string(), "Some([1,2])");
//!
//! let failed: Result<i32, Vec<&str>> = err(vec!["a", "b"]);
//! assert_eq!(failed.display_structured().to_string(), r#"Err(["a","b"])"#);
//! ```
//!
//! A payload that cannot be encoded as JSON renders as `<unserializable>`, so
//! formatting never fails.

use std::fmt;

use serde::Serialize;

use crate::option::Option;
use crate::result::Result;

const UNSERIALIZABLE: &str = "<unserializable>";

/// Renders an [`Option`] or [`Result`] with its payload encoded as JSON.
///
/// Obtained from `Option::display_structured` or
/// `Result::display_structured`.
#[derive(Debug, Clone, Copy)]
pub struct Structured<'a, V>(&'a V);

impl<'a, V> Structured<'a, V> {
    pub(crate) const fn new(value: &'a V) -> Self {
        Self(value)
    }
}

fn write_json<P: Serialize + ?Sized>(formatter: &mut fmt::Formatter<'_>, payload: &P) -> fmt::Result {
    match serde_json::to_string(payload) {
        Ok(json) => formatter.write_str(&json),
        Err(error) => {
            tracing::debug!(%error, "payload could not be rendered as JSON");
            formatter.write_str(UNSERIALIZABLE)
        }
    }
}

impl<T: Serialize> fmt::Display for Structured<'_, Option<T>> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Option::Some(value) => {
                formatter.write_str("Some(")?;
                write_json(formatter, value)?;
                formatter.write_str(")")
            }
            Option::None => formatter.write_str("None"),
        }
    }
}

impl<T: Serialize, E: Serialize> fmt::Display for Structured<'_, Result<T, E>> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Result::Ok(value) => {
                formatter.write_str("Ok(")?;
                write_json(formatter, value)?;
                formatter.write_str(")")
            }
            Result::Err(error) => {
                formatter.write_str("Err(")?;
                write_json(formatter, error)?;
                formatter.write_str(")")
            }
        }
    }
}
