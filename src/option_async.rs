//! `OptionAsync` - an [`Option`] that is still being computed.
//!
//! [`OptionAsync<T>`] owns exactly one pending computation that settles to an
//! `Option<T>`. It implements [`Future`], so `.await` yields the settled
//! option. Every chaining operation is the synchronous operation of the same
//! name lifted across the pending boundary with [`Pending::lift`], which makes
//! the following hold for every operation `op` and function `f`:
//!
//! ```text
//! x.op(f).await == x.await.op(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::{OptionAsync, some, some_async};
//!
//! # futures::executor::block_on(async {
//! let chained = some_async(1)
//!     .map(|value| value + 1)
//!     .and_then(|value| some_async(value * 2));
//! assert_eq!(chained.await, some(4));
//!
//! let from_io = OptionAsync::from_async(async { Some("cached") });
//! assert_eq!(from_io.await, some("cached"));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt};
use pin_project_lite::pin_project;

use crate::error::UnwrapError;
use crate::option::Option;
use crate::pending::{Memoized, Pending};
use crate::result_async::ResultAsync;
use crate::unit::Unit;

/// A memoized [`OptionAsync`] that can be cloned and awaited by many
/// consumers.
pub type SharedOptionAsync<T> = Memoized<Option<T>>;

pin_project! {
    /// A pending computation that settles to an [`Option<T>`].
    ///
    /// Operations never run before the wrapped computation settles, and
    /// they run when the returned value is awaited. Panics raised inside the
    /// computation propagate to the awaiting task; only [`OptionAsync::wrap`]
    /// captures them.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct OptionAsync<T> {
        #[pin]
        inner: Pending<Option<T>>,
    }
}

impl<T: 'static> Future for OptionAsync<T> {
    type Output = Option<T>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context)
    }
}

impl<T> fmt::Debug for OptionAsync<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("OptionAsync")
            .field(&self.inner)
            .finish()
    }
}

/// Creates an [`OptionAsync`] already settled to `Some(value)`.
#[inline]
pub fn some_async<T: Send + 'static>(value: T) -> OptionAsync<T> {
    OptionAsync::settled(Option::Some(value))
}

/// Creates an [`OptionAsync`] already settled to `None`.
#[inline]
pub fn none_async<T: Send + 'static>() -> OptionAsync<T> {
    OptionAsync::settled(Option::None)
}

/// Creates an [`OptionAsync`] already settled to `Some(Unit)`.
#[inline]
pub fn some_unit_async() -> OptionAsync<Unit> {
    some_async(Unit)
}

// =============================================================================
// Normalization
// =============================================================================

/// Values that can stand in for an [`OptionAsync`].
///
/// `and_then`, `or_else` and the aggregation combinators accept any of:
///
/// - an [`Option<T>`] (already settled),
/// - an [`OptionAsync<T>`],
/// - a raw boxed future `BoxFuture<'static, Option<T>>`, as produced by
///   `futures::FutureExt::boxed`,
/// - a [`SharedOptionAsync<T>`].
pub trait IntoOptionAsync<T> {
    /// Performs the conversion.
    fn into_option_async(self) -> OptionAsync<T>;
}

impl<T: Send + 'static> IntoOptionAsync<T> for Option<T> {
    #[inline]
    fn into_option_async(self) -> OptionAsync<T> {
        OptionAsync::settled(self)
    }
}

impl<T> IntoOptionAsync<T> for OptionAsync<T> {
    #[inline]
    fn into_option_async(self) -> OptionAsync<T> {
        self
    }
}

impl<T: Send + 'static> IntoOptionAsync<T> for BoxFuture<'static, Option<T>> {
    #[inline]
    fn into_option_async(self) -> OptionAsync<T> {
        OptionAsync::new(self)
    }
}

impl<T: Clone + Send + Sync + 'static> IntoOptionAsync<T> for SharedOptionAsync<T> {
    #[inline]
    fn into_option_async(self) -> OptionAsync<T> {
        OptionAsync::new(self)
    }
}

impl<T: Send + 'static> From<Option<T>> for OptionAsync<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::settled(option)
    }
}

impl<T: Send + 'static> OptionAsync<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps a future that settles to an [`Option`].
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        Self::from_pending(Pending::from_future(future))
    }

    /// Wraps an already known option.
    #[inline]
    pub const fn settled(option: Option<T>) -> Self {
        Self::from_pending(Pending::settled(option))
    }

    #[inline]
    pub(crate) const fn from_pending(inner: Pending<Option<T>>) -> Self {
        Self { inner }
    }

    /// Wraps a future of a possibly absent value: `None` settles to `None`,
    /// anything else to `Some`.
    pub fn from_async<F>(future: F) -> Self
    where
        F: Future<Output = std::option::Option<T>> + Send + 'static,
    {
        Self::new(future.map(Option::from))
    }

    /// Wraps a future, settling to `Some` of its output or to `None` if it
    /// panics while being polled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{OptionAsync, none, some};
    ///
    /// async fn explode() -> i32 {
    ///     panic!("lost")
    /// }
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(OptionAsync::wrap(async { 1 }).await, some(1));
    /// assert_eq!(OptionAsync::wrap(explode()).await, none());
    /// # });
    /// ```
    pub fn wrap<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::new(async move {
            match std::panic::AssertUnwindSafe(future).catch_unwind().await {
                Ok(value) => Option::Some(value),
                Err(payload) => {
                    let thrown = crate::error::Thrown::new(payload);
                    tracing::debug!(panic = %thrown, "OptionAsync::wrap discarded a captured panic");
                    Option::None
                }
            }
        })
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Awaits every input in order and collects their values.
    ///
    /// Inputs are awaited one at a time, never concurrently. At the first
    /// `None` the result settles to `None` and the remaining inputs are
    /// dropped without being polled.
    pub fn all<I, A>(options: I) -> OptionAsync<Vec<T>>
    where
        I: IntoIterator<Item = A>,
        A: IntoOptionAsync<T>,
    {
        let pending: Vec<Self> = options
            .into_iter()
            .map(IntoOptionAsync::into_option_async)
            .collect();

        OptionAsync::new(async move {
            let mut values = Vec::with_capacity(pending.len());
            for (index, option) in pending.into_iter().enumerate() {
                match option.await {
                    Option::Some(value) => values.push(value),
                    Option::None => {
                        tracing::trace!(index, "OptionAsync::all short-circuited on None");
                        return Option::None;
                    }
                }
            }
            Option::Some(values)
        })
    }

    /// Awaits the inputs in order and settles to the first `Some`.
    ///
    /// Inputs after the first `Some` are dropped without being polled.
    pub fn any<I, A>(options: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: IntoOptionAsync<T>,
    {
        let pending: Vec<Self> = options
            .into_iter()
            .map(IntoOptionAsync::into_option_async)
            .collect();

        Self::new(async move {
            for option in pending {
                if let Option::Some(value) = option.await {
                    return Option::Some(value);
                }
            }
            Option::None
        })
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Settles to `true` if the option is `Some`.
    pub fn is_some(self) -> Pending<bool> {
        self.inner.lift(|option| option.is_some())
    }

    /// Settles to `true` if the option is `None`.
    pub fn is_none(self) -> Pending<bool> {
        self.inner.lift(|option| option.is_none())
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Lifted [`Option::map`].
    pub fn map<U, F>(self, function: F) -> OptionAsync<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        OptionAsync::from_pending(self.inner.lift(move |option| option.map(function)))
    }

    /// Lifted [`Option::map_async`].
    pub fn map_async<U, F, Fut>(self, function: F) -> OptionAsync<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        OptionAsync::from_pending(
            self.inner
                .lift_async(move |option| option.map_async(function)),
        )
    }

    /// Lifted [`Option::and_then_async`].
    ///
    /// `function` may return an [`Option`], an [`OptionAsync`], a boxed
    /// future or a shared handle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::FutureExt;
    /// use optres::{some, some_async};
    ///
    /// # futures::executor::block_on(async {
    /// let sync_step = some_async(2).and_then(|value| some(value + 1));
    /// let async_step = sync_step.and_then(|value| some_async(value * 10));
    /// let raw_step = async_step.and_then(|value| async move { some(value - 5) }.boxed());
    /// assert_eq!(raw_step.await, some(25));
    /// # });
    /// ```
    pub fn and_then<U, R, F>(self, function: F) -> OptionAsync<U>
    where
        U: Send + 'static,
        R: IntoOptionAsync<U>,
        F: FnOnce(T) -> R + Send + 'static,
    {
        OptionAsync::from_pending(
            self.inner
                .lift_async(move |option| option.and_then_async(function)),
        )
    }

    /// Settles to this option if it is `Some`, otherwise to the option
    /// produced by `function`.
    pub fn or_else<R, F>(self, function: F) -> Self
    where
        R: IntoOptionAsync<T>,
        F: FnOnce() -> R + Send + 'static,
    {
        Self::from_pending(self.inner.lift_async(move |option| match option {
            Option::Some(value) => Self::settled(Option::Some(value)),
            Option::None => function().into_option_async(),
        }))
    }

    /// Lifted [`Option::filter`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::from_pending(self.inner.lift(move |option| option.filter(predicate)))
    }

    /// Lifted [`Option::inspect`].
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::from_pending(self.inner.lift(move |option| option.inspect(function)))
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Lifted [`Option::match_with`].
    pub fn match_with<U, S, N>(self, on_some: S, on_none: N) -> Pending<U>
    where
        U: Send + 'static,
        S: FnOnce(T) -> U + Send + 'static,
        N: FnOnce() -> U + Send + 'static,
    {
        self.inner
            .lift(move |option| option.match_with(on_some, on_none))
    }

    /// Lifted [`Option::ok_or`].
    pub fn ok_or<E>(self, error: E) -> ResultAsync<T, E>
    where
        E: Send + 'static,
    {
        ResultAsync::from_pending(self.inner.lift(move |option| option.ok_or(error)))
    }

    /// Lifted [`Option::ok_or_else`].
    pub fn ok_or_else<E, F>(self, function: F) -> ResultAsync<T, E>
    where
        E: Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        ResultAsync::from_pending(self.inner.lift(move |option| option.ok_or_else(function)))
    }

    /// Lifted [`Option::unwrap_or`].
    pub fn unwrap_or(self, fallback: T) -> Pending<T> {
        self.inner.lift(move |option| option.unwrap_or(fallback))
    }

    /// Lifted [`Option::unwrap_or_else`].
    pub fn unwrap_or_else<F>(self, function: F) -> Pending<T>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        self.inner
            .lift(move |option| option.unwrap_or_else(function))
    }

    /// Lifted [`Option::unwrap_or_default`].
    pub fn unwrap_or_default(self) -> Pending<T>
    where
        T: Default,
    {
        self.inner.lift(Option::unwrap_or_default)
    }

    /// Lifted [`Option::try_unwrap`].
    pub fn try_unwrap(self) -> Pending<std::result::Result<T, UnwrapError>> {
        self.inner.lift(Option::try_unwrap)
    }

    /// Lifted [`Option::unsafe_unwrap`]. Intended for tests only.
    ///
    /// # Panics
    ///
    /// The returned computation panics when awaited if the option is `None`.
    pub fn unsafe_unwrap(self) -> Pending<T> {
        self.inner.lift(Option::unsafe_unwrap)
    }

    // =========================================================================
    // Sharing
    // =========================================================================

    /// Turns this computation into a cloneable handle whose clones all
    /// observe the same settled option.
    pub fn shared(self) -> SharedOptionAsync<T>
    where
        T: Clone,
    {
        self.inner.shared()
    }

    /// Exposes the underlying pending computation.
    #[inline]
    pub fn into_pending(self) -> Pending<Option<T>> {
        self.inner
    }
}

impl<T: Send + 'static> OptionAsync<Option<T>> {
    /// Lifted [`Option::flatten`].
    pub fn flatten(self) -> OptionAsync<T> {
        OptionAsync::from_pending(self.inner.lift(Option::flatten))
    }
}

impl<T: Send + 'static> From<Pending<Option<T>>> for OptionAsync<T> {
    #[inline]
    fn from(inner: Pending<Option<T>>) -> Self {
        Self::from_pending(inner)
    }
}

impl<T: Send + 'static> From<OptionAsync<T>> for Pending<Option<T>> {
    #[inline]
    fn from(option: OptionAsync<T>) -> Self {
        option.into_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{none, some};
    use crate::result::{err, ok};
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test]
    async fn test_some_async_settles_to_some() {
        assert_eq!(some_async(5).await, some(5));
    }

    #[rstest]
    #[tokio::test]
    async fn test_none_async_short_circuits_map() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mapped = none_async::<i32>().map(move |value| {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });

        assert_eq!(mapped.await, none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_ok_or_converts_to_result_async() {
        assert_eq!(some_async(1).ok_or("missing").await, ok(1));
        assert_eq!(none_async::<i32>().ok_or("missing").await, err("missing"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_or_else_recovers_none() {
        let recovered = none_async::<i32>().or_else(|| some_async(9));
        assert_eq!(recovered.await, some(9));
    }

    #[rstest]
    #[tokio::test]
    async fn test_flatten_removes_nesting() {
        assert_eq!(some_async(some(1)).flatten().await, some(1));
    }
}
