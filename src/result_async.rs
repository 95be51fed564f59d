//! `ResultAsync` - a [`Result`] that is still being computed.
//!
//! [`ResultAsync<T, E>`] owns exactly one pending computation that settles to
//! a `Result<T, E>`. Like [`OptionAsync`](crate::OptionAsync), each chaining
//! operation is the synchronous one lifted with [`Pending::lift`], so awaiting
//! a chain gives the same value as running the chain on the awaited result.
//!
//! # Examples
//!
//! ```rust
//! use optres::{ok, ok_async};
//!
//! # futures::executor::block_on(async {
//! let chained = ok_async::<i32, String>(1)
//!     .and_then(|value| ok(value + 1))
//!     .and_then(|value| ok_async(value * 2));
//! assert_eq!(chained.await, ok(4));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt};
use pin_project_lite::pin_project;

use crate::error::{Thrown, UnwrapError};
use crate::option_async::OptionAsync;
use crate::pending::{Memoized, Pending};
use crate::result::Result;
use crate::unit::Unit;

/// A memoized [`ResultAsync`] that can be cloned and awaited by many
/// consumers.
pub type SharedResultAsync<T, E> = Memoized<Result<T, E>>;

pin_project! {
    /// A pending computation that settles to a [`Result<T, E>`].
    ///
    /// Panics raised inside the computation propagate to the awaiting task;
    /// only the `wrap*` constructors capture them.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ResultAsync<T, E> {
        #[pin]
        inner: Pending<Result<T, E>>,
    }
}

impl<T: 'static, E: 'static> Future for ResultAsync<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context)
    }
}

impl<T, E> fmt::Debug for ResultAsync<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ResultAsync")
            .field(&self.inner)
            .finish()
    }
}

/// Creates a [`ResultAsync`] already settled to `Ok(value)`.
#[inline]
pub fn ok_async<T: Send + 'static, E: Send + 'static>(value: T) -> ResultAsync<T, E> {
    ResultAsync::settled(Result::Ok(value))
}

/// Creates a [`ResultAsync`] already settled to `Err(error)`.
#[inline]
pub fn err_async<T: Send + 'static, E: Send + 'static>(error: E) -> ResultAsync<T, E> {
    ResultAsync::settled(Result::Err(error))
}

/// Creates a [`ResultAsync`] already settled to `Ok(Unit)`.
#[inline]
pub fn ok_unit_async<E: Send + 'static>() -> ResultAsync<Unit, E> {
    ok_async(Unit)
}

/// Creates a [`ResultAsync`] already settled to `Err(Unit)`.
#[inline]
pub fn err_unit_async<T: Send + 'static>() -> ResultAsync<T, Unit> {
    err_async(Unit)
}

// =============================================================================
// Normalization
// =============================================================================

/// Values that can stand in for a [`ResultAsync`].
///
/// Accepted by `and_then`, `or_else` and the aggregation combinators:
/// a [`Result<T, E>`], a [`ResultAsync<T, E>`], a boxed future
/// `BoxFuture<'static, Result<T, E>>` or a [`SharedResultAsync<T, E>`].
pub trait IntoResultAsync<T, E> {
    /// Performs the conversion.
    fn into_result_async(self) -> ResultAsync<T, E>;
}

impl<T: Send + 'static, E: Send + 'static> IntoResultAsync<T, E> for Result<T, E> {
    #[inline]
    fn into_result_async(self) -> ResultAsync<T, E> {
        ResultAsync::settled(self)
    }
}

impl<T, E> IntoResultAsync<T, E> for ResultAsync<T, E> {
    #[inline]
    fn into_result_async(self) -> ResultAsync<T, E> {
        self
    }
}

impl<T: Send + 'static, E: Send + 'static> IntoResultAsync<T, E>
    for BoxFuture<'static, Result<T, E>>
{
    #[inline]
    fn into_result_async(self) -> ResultAsync<T, E> {
        ResultAsync::new(self)
    }
}

impl<T, E> IntoResultAsync<T, E> for SharedResultAsync<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    #[inline]
    fn into_result_async(self) -> ResultAsync<T, E> {
        ResultAsync::new(self)
    }
}

impl<T: Send + 'static, E: Send + 'static> From<Result<T, E>> for ResultAsync<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::settled(result)
    }
}

impl<T: Send + 'static> ResultAsync<T, Thrown> {
    /// Wraps a future, settling to `Ok` of its output or to `Err` with the
    /// captured panic payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::ResultAsync;
    ///
    /// async fn explode() -> i32 {
    ///     panic!("boom")
    /// }
    ///
    /// # futures::executor::block_on(async {
    /// let failed = ResultAsync::wrap(explode()).await;
    /// assert_eq!(failed.unsafe_unwrap_err().message(), Some("boom"));
    /// # });
    /// ```
    pub fn wrap<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::new(async move {
            match std::panic::AssertUnwindSafe(future).catch_unwind().await {
                Ok(value) => Result::Ok(value),
                Err(payload) => {
                    let thrown = Thrown::new(payload);
                    tracing::debug!(panic = %thrown, "ResultAsync::wrap captured a panic");
                    Result::Err(thrown)
                }
            }
        })
    }
}

impl<T: Send + 'static, E: Send + 'static> ResultAsync<T, E> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps a future that settles to a [`Result`].
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::from_pending(Pending::from_future(future))
    }

    /// Wraps an already known result.
    #[inline]
    pub const fn settled(result: Result<T, E>) -> Self {
        Self::from_pending(Pending::settled(result))
    }

    #[inline]
    pub(crate) const fn from_pending(inner: Pending<Result<T, E>>) -> Self {
        Self { inner }
    }

    /// Wraps a future of possibly absent data; absence settles to
    /// `Err(error)`.
    pub fn from_or<F>(future: F, error: E) -> Self
    where
        F: Future<Output = std::option::Option<T>> + Send + 'static,
    {
        Self::new(future.map(move |data| Result::from_or(data, error)))
    }

    /// Like [`ResultAsync::from_or`], computing the error lazily.
    pub fn from_or_else<F, G>(future: F, function: G) -> Self
    where
        F: Future<Output = std::option::Option<T>> + Send + 'static,
        G: FnOnce() -> E + Send + 'static,
    {
        Self::new(future.map(move |data| Result::from_or_else(data, function)))
    }

    /// Wraps a fallible future from the standard library.
    pub fn from_std<F>(future: F) -> Self
    where
        F: Future<Output = std::result::Result<T, E>> + Send + 'static,
    {
        Self::new(future.map(Result::from))
    }

    /// Wraps a future, replacing a panic with the fixed `error`.
    pub fn wrap_or<F>(future: F, error: E) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        ResultAsync::<T, Thrown>::wrap(future).map_err(move |_| error)
    }

    /// Wraps a future, mapping a captured panic through `on_panic`.
    pub fn wrap_or_else<F, G>(future: F, on_panic: G) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        G: FnOnce(Thrown) -> E + Send + 'static,
    {
        ResultAsync::<T, Thrown>::wrap(future).map_err(on_panic)
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Awaits every input in order and collects the success payloads.
    ///
    /// Inputs are awaited one at a time. At the first `Err` the result
    /// settles to that error and the remaining inputs are dropped without
    /// being polled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{ResultAsync, err, err_async, ok, ok_async};
    ///
    /// # futures::executor::block_on(async {
    /// let all = ResultAsync::all(vec![ok_async::<i32, &str>(1), ok(2).into(), err_async("x")]);
    /// assert_eq!(all.await, err("x"));
    /// # });
    /// ```
    pub fn all<I, A>(results: I) -> ResultAsync<Vec<T>, E>
    where
        I: IntoIterator<Item = A>,
        A: IntoResultAsync<T, E>,
    {
        let pending: Vec<Self> = results
            .into_iter()
            .map(IntoResultAsync::into_result_async)
            .collect();

        ResultAsync::new(async move {
            let mut values = Vec::with_capacity(pending.len());
            for (index, result) in pending.into_iter().enumerate() {
                match result.await {
                    Result::Ok(value) => values.push(value),
                    Result::Err(error) => {
                        tracing::trace!(index, "ResultAsync::all short-circuited on Err");
                        return Result::Err(error);
                    }
                }
            }
            Result::Ok(values)
        })
    }

    /// Awaits the inputs in order and settles to the first `Ok`; if every
    /// input fails, settles to all the errors in order.
    pub fn any<I, A>(results: I) -> ResultAsync<T, Vec<E>>
    where
        I: IntoIterator<Item = A>,
        A: IntoResultAsync<T, E>,
    {
        let pending: Vec<Self> = results
            .into_iter()
            .map(IntoResultAsync::into_result_async)
            .collect();

        ResultAsync::new(async move {
            let mut errors = Vec::with_capacity(pending.len());
            for result in pending {
                match result.await {
                    Result::Ok(value) => return Result::Ok(value),
                    Result::Err(error) => errors.push(error),
                }
            }
            Result::Err(errors)
        })
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Settles to `true` if the result is `Ok`.
    pub fn is_ok(self) -> Pending<bool> {
        self.inner.lift(|result| result.is_ok())
    }

    /// Settles to `true` if the result is `Err`.
    pub fn is_err(self) -> Pending<bool> {
        self.inner.lift(|result| result.is_err())
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Lifted [`Result::map`].
    pub fn map<U, F>(self, function: F) -> ResultAsync<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        ResultAsync::from_pending(self.inner.lift(move |result| result.map(function)))
    }

    /// Lifted [`Result::map_err`].
    pub fn map_err<F2, F>(self, function: F) -> ResultAsync<T, F2>
    where
        F2: Send + 'static,
        F: FnOnce(E) -> F2 + Send + 'static,
    {
        ResultAsync::from_pending(self.inner.lift(move |result| result.map_err(function)))
    }

    /// Lifted [`Result::map_async`].
    pub fn map_async<U, F, Fut>(self, function: F) -> ResultAsync<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        ResultAsync::from_pending(
            self.inner
                .lift_async(move |result| result.map_async(function)),
        )
    }

    /// Lifted [`Result::map_err_async`].
    pub fn map_err_async<F2, F, Fut>(self, function: F) -> ResultAsync<T, F2>
    where
        F2: Send + 'static,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = F2> + Send + 'static,
    {
        ResultAsync::from_pending(
            self.inner
                .lift_async(move |result| result.map_err_async(function)),
        )
    }

    /// Lifted [`Result::and_then_async`].
    ///
    /// `function` may return a [`Result`], a [`ResultAsync`], a boxed future
    /// or a shared handle.
    pub fn and_then<U, R, F>(self, function: F) -> ResultAsync<U, E>
    where
        U: Send + 'static,
        R: IntoResultAsync<U, E>,
        F: FnOnce(T) -> R + Send + 'static,
    {
        ResultAsync::from_pending(
            self.inner
                .lift_async(move |result| result.and_then_async(function)),
        )
    }

    /// Lifted [`Result::or_else_async`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::{err_async, ok, ok_async};
    ///
    /// # futures::executor::block_on(async {
    /// let recovered = err_async::<i32, &str>("cache miss").or_else(|_| ok_async::<i32, ()>(0));
    /// assert_eq!(recovered.await, ok(0));
    /// # });
    /// ```
    pub fn or_else<F2, R, F>(self, function: F) -> ResultAsync<T, F2>
    where
        F2: Send + 'static,
        R: IntoResultAsync<T, F2>,
        F: FnOnce(E) -> R + Send + 'static,
    {
        ResultAsync::from_pending(
            self.inner
                .lift_async(move |result| result.or_else_async(function)),
        )
    }

    /// Lifted [`Result::inspect`].
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::from_pending(self.inner.lift(move |result| result.inspect(function)))
    }

    /// Lifted [`Result::inspect_err`].
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        Self::from_pending(self.inner.lift(move |result| result.inspect_err(function)))
    }

    // =========================================================================
    // Conversion to OptionAsync
    // =========================================================================

    /// Lifted [`Result::ok`].
    pub fn ok(self) -> OptionAsync<T> {
        OptionAsync::from_pending(self.inner.lift(Result::ok))
    }

    /// Lifted [`Result::err`].
    pub fn err(self) -> OptionAsync<E> {
        OptionAsync::from_pending(self.inner.lift(Result::err))
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Lifted [`Result::match_with`].
    pub fn match_with<U, O, R>(self, on_ok: O, on_err: R) -> Pending<U>
    where
        U: Send + 'static,
        O: FnOnce(T) -> U + Send + 'static,
        R: FnOnce(E) -> U + Send + 'static,
    {
        self.inner
            .lift(move |result| result.match_with(on_ok, on_err))
    }

    /// Lifted [`Result::unwrap_or`].
    pub fn unwrap_or(self, fallback: T) -> Pending<T> {
        self.inner.lift(move |result| result.unwrap_or(fallback))
    }

    /// Lifted [`Result::unwrap_or_else`].
    pub fn unwrap_or_else<F>(self, function: F) -> Pending<T>
    where
        F: FnOnce(E) -> T + Send + 'static,
    {
        self.inner
            .lift(move |result| result.unwrap_or_else(function))
    }

    /// Lifted [`Result::unwrap_or_default`].
    pub fn unwrap_or_default(self) -> Pending<T>
    where
        T: Default,
    {
        self.inner.lift(Result::unwrap_or_default)
    }

    /// Lifted [`Result::unwrap_err_or`].
    pub fn unwrap_err_or(self, fallback: E) -> Pending<E> {
        self.inner.lift(move |result| result.unwrap_err_or(fallback))
    }

    /// Lifted [`Result::unwrap_err_or_else`].
    pub fn unwrap_err_or_else<F>(self, function: F) -> Pending<E>
    where
        F: FnOnce(T) -> E + Send + 'static,
    {
        self.inner
            .lift(move |result| result.unwrap_err_or_else(function))
    }

    /// Lifted [`Result::try_unwrap`].
    pub fn try_unwrap(self) -> Pending<std::result::Result<T, UnwrapError<E>>> {
        self.inner.lift(Result::try_unwrap)
    }

    /// Lifted [`Result::try_unwrap_err`].
    pub fn try_unwrap_err(self) -> Pending<std::result::Result<E, UnwrapError>> {
        self.inner.lift(Result::try_unwrap_err)
    }

    /// Lifted [`Result::unsafe_unwrap`]. Intended for tests only.
    ///
    /// # Panics
    ///
    /// The returned computation panics when awaited if the result is `Err`.
    pub fn unsafe_unwrap(self) -> Pending<T>
    where
        E: fmt::Debug,
    {
        self.inner.lift(Result::unsafe_unwrap)
    }

    /// Lifted [`Result::unsafe_unwrap_err`]. Intended for tests only.
    ///
    /// # Panics
    ///
    /// The returned computation panics when awaited if the result is `Ok`.
    pub fn unsafe_unwrap_err(self) -> Pending<E> {
        self.inner.lift(Result::unsafe_unwrap_err)
    }

    // =========================================================================
    // Sharing
    // =========================================================================

    /// Turns this computation into a cloneable handle whose clones all
    /// observe the same settled result.
    pub fn shared(self) -> SharedResultAsync<T, E>
    where
        T: Clone,
        E: Clone,
    {
        self.inner.shared()
    }

    /// Exposes the underlying pending computation.
    #[inline]
    pub fn into_pending(self) -> Pending<Result<T, E>> {
        self.inner
    }
}

impl<T: Send + 'static, E: Send + 'static> ResultAsync<Result<T, E>, E> {
    /// Lifted [`Result::flatten`].
    pub fn flatten(self) -> ResultAsync<T, E> {
        ResultAsync::from_pending(self.inner.lift(Result::flatten))
    }
}

impl<T: Send + 'static, E: Send + 'static> From<Pending<Result<T, E>>> for ResultAsync<T, E> {
    #[inline]
    fn from(inner: Pending<Result<T, E>>) -> Self {
        Self::from_pending(inner)
    }
}

impl<T: Send + 'static, E: Send + 'static> From<ResultAsync<T, E>> for Pending<Result<T, E>> {
    #[inline]
    fn from(result: ResultAsync<T, E>) -> Self {
        result.into_pending()
    }
}
