//! Foldable type class - reducing a structure to a summary value.
//!
//! `Option` and `Result` hold at most one element, so every fold sees zero
//! or one element: `None` and `Err` are empty.
//!
//! # Examples
//!
//! ```rust
//! use optres::typeclass::Foldable;
//! use optres::{err, some};
//!
//! assert_eq!(some(3).fold_left(10, |acc, x| acc + x), 13);
//! assert_eq!(err::<i32, &str>("e").fold_left(10, |acc, x| acc + x), 10);
//! assert_eq!(some(3).length(), 1);
//! ```

use super::TypeConstructor;
use crate::option::Option;
use crate::result::Result;

/// A structure whose elements can be folded into a single value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the structure holds no element.
    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Counts the elements.
    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element matching `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Option::None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Option::Some(element)
            } else {
                Option::None
            }
        })
    }

    /// Returns `true` if some element matches `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element matches `predicate`; empty structures
    /// match vacuously.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<A> Foldable for Option<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::None => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::None => init,
        }
    }
}

impl<T, E> Foldable for Result<T, E> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Ok(value) => function(init, value),
            Self::Err(_) => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Ok(value) => function(value, init),
            Self::Err(_) => init,
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
    #[case(some(4), false, 1)]
    #[case(none(), true, 0)]
    fn option_emptiness(#[case] input: Option<i32>, #[case] empty: bool, #[case] length: usize) {
        assert_eq!(input.is_empty(), empty);
        assert_eq!(input.length(), length);
    }

    #[rstest]
    fn option_fold_right_uses_element() {
        let rendered = some(1).fold_right(String::from("!"), |x, acc| format!("{x}{acc}"));
        assert_eq!(rendered, "1!");
    }

    #[rstest]
    fn option_find_applies_predicate() {
        assert_eq!(some(4).find(|x| x % 2 == 0), some(4));
        assert_eq!(some(3).find(|x| x % 2 == 0), none());
    }

    #[rstest]
    fn result_err_is_empty() {
        let failed: Result<i32, &str> = err("e");
        assert!(failed.is_empty());
        assert!(!failed.exists(|_| true));
        assert!(failed.for_all(|_| false));
        assert_eq!(failed.to_list(), Vec::<i32>::new());
    }

    #[rstest]
    fn result_ok_exists() {
        let value: Result<i32, &str> = ok(7);
        assert!(value.exists(|x| *x == 7));
        assert_eq!(value.to_list(), vec![7]);
    }
}
