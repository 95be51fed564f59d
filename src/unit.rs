//! The `Unit` marker type.
//!
//! [`Unit`] stands in for "no value" when an [`Option`](crate::Option) or
//! [`Result`](crate::Result) variant carries no meaningful payload, for
//! example `ok_unit()` for a side-effecting operation that succeeded.
//!
//! # Examples
//!
//! ```rust
//! use optres::{Unit, ok_unit};
//!
//! let done = ok_unit::<String>();
//! assert_eq!(done.unwrap_or(Unit), Unit);
//! assert_eq!(Unit.to_string(), "{}");
//! ```

use std::fmt;

/// A zero-information marker value.
///
/// Exactly one logical value of this type exists, so every `Unit` compares
/// equal to every other. It renders as `{}` and serializes as an empty map,
/// which keeps logged or persisted `Ok(Unit)` values readable as an empty
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{}")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

#[cfg(feature = "serde")]
impl serde::Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        serializer.serialize_map(Some(0))?.end()
    }
}

#[cfg(feature = "serde")]
struct UnitVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for UnitVisitor {
    type Value = Unit;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an empty map or unit")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Unit)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        if map.next_key::<serde::de::IgnoredAny>()?.is_some() {
            return Err(serde::de::Error::invalid_length(1, &self));
        }
        Ok(Unit)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(UnitVisitor)
    }
}
