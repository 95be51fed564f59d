//! The pending-computation adapter shared by the asynchronous types.
//!
//! [`Pending<S>`] wraps exactly one computation that settles to an `S`. It is
//! the only place where asynchronous behavior lives: [`OptionAsync`] and
//! [`ResultAsync`] are thin wrappers around `Pending<Option<T>>` and
//! `Pending<Result<T, E>>`, and every chaining operation they expose is a
//! [`Pending::lift`] (or [`Pending::lift_async`]) of the matching synchronous
//! operation. Awaiting `x.op(f)` is therefore the same as applying `op(f)` to
//! `x.await`, for every operation and every input.
//!
//! # State Machine
//!
//! - `Settled` -> `Completed`: a value that is already known, returned on the
//!   first poll without allocating.
//! - `Chained` -> `Completed`: a source (a settled value or a boxed future)
//!   followed by a queue of lifted continuations.
//!
//! Lifting never nests futures. Each [`Pending::lift`] pushes one type-erased
//! continuation onto the queue in O(1), and polling drains the queue in a
//! loop, so a chain of any length is driven with constant stack depth. A
//! continuation added by [`Pending::lift_async`] suspends the loop until the
//! future it returns settles.
//!
//! Lifted functions never run before the wrapped computation settles; they
//! run when the resulting `Pending` is polled.
//!
//! [`OptionAsync`]: crate::OptionAsync
//! [`ResultAsync`]: crate::ResultAsync

use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::future::{BoxFuture, FutureExt, Shared};

// =============================================================================
// Type-Erased Continuations
// =============================================================================

/// A settled value whose type is only known to the continuation consuming it.
type Erased = Box<dyn Any + Send>;

/// One lifted operation waiting for the value before it.
enum Continuation {
    /// A synchronous function, applied in place.
    Map(Box<dyn FnOnce(Erased) -> Erased + Send>),
    /// An asynchronous function; its future becomes the new source.
    Then(Box<dyn FnOnce(Erased) -> BoxFuture<'static, Erased> + Send>),
}

enum Source {
    /// `None` once taken, or when the chain was built from a spent `Pending`.
    Ready(Option<Erased>),
    Running(BoxFuture<'static, Erased>),
}

/// A source followed by the continuations still to apply, in FIFO order.
struct Chain {
    source: Source,
    queue: VecDeque<Continuation>,
}

impl Chain {
    fn push(mut self, continuation: Continuation) -> Self {
        self.queue.push_back(continuation);
        self
    }

    /// Drives the source and the queue until a continuation has to wait or
    /// the queue is exhausted.
    fn poll_drain(&mut self, context: &mut Context<'_>) -> Poll<Erased> {
        loop {
            let mut value = match &mut self.source {
                Source::Ready(value) => value.take().expect(
                    "Pending internal error: settled value was already consumed. \
                     This indicates the Pending was polled after completion.",
                ),
                Source::Running(future) => ready!(future.as_mut().poll(context)),
            };

            loop {
                match self.queue.pop_front() {
                    None => return Poll::Ready(value),
                    Some(Continuation::Map(function)) => value = function(value),
                    Some(Continuation::Then(function)) => {
                        self.source = Source::Running(function(value));
                        break;
                    }
                }
            }
        }
    }
}

fn erase<S: Send + 'static>(value: S) -> Erased {
    Box::new(value)
}

fn restore<S: 'static>(value: Erased) -> S {
    *value
        .downcast::<S>()
        .expect("Pending internal error: type mismatch in continuation application")
}

// =============================================================================
// Pending
// =============================================================================

/// A computation that settles to a value of type `S` exactly once.
///
/// `Pending` implements [`Future`], so it can be awaited directly. It is
/// the return type of the terminal operations on the asynchronous types,
/// such as `OptionAsync::unwrap_or` or `ResultAsync::match_with`.
///
/// # Examples
///
/// ```rust
/// use optres::Pending;
///
/// # futures::executor::block_on(async {
/// let doubled = Pending::settled(21).lift(|value| value * 2);
/// assert_eq!(doubled.await, 42);
/// # });
/// ```
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Pending<S> {
    state: PendingState<S>,
}

enum PendingState<S> {
    Settled { value: Option<S> },
    Chained { chain: Chain },
    Completed,
}

// The settled value is moved out, never pinned, and every future in a chain
// is already boxed.
impl<S> Unpin for Pending<S> {}

impl<S: 'static> Future for Pending<S> {
    type Output = S;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        let value = match &mut this.state {
            PendingState::Settled { value } => value.take().expect(
                "Pending internal error: settled value was already consumed. \
                 This indicates the Pending was polled after completion.",
            ),
            PendingState::Chained { chain } => restore(ready!(chain.poll_drain(context))),
            PendingState::Completed => {
                panic!(
                    "Pending internal error: Pending was polled after completion. \
                     Futures should not be polled after returning Poll::Ready."
                );
            }
        };

        this.state = PendingState::Completed;
        Poll::Ready(value)
    }
}

impl<S: Send + 'static> Pending<S> {
    /// Creates a `Pending` that is already settled to `value`.
    #[inline]
    pub const fn settled(value: S) -> Self {
        Self {
            state: PendingState::Settled { value: Some(value) },
        }
    }

    /// Creates a `Pending` driven by `future`.
    ///
    /// The future is boxed and is not polled until the `Pending` is.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = S> + Send + 'static,
    {
        Self::chained(Chain {
            source: Source::Running(future.map(erase).boxed()),
            queue: VecDeque::new(),
        })
    }

    const fn chained(chain: Chain) -> Self {
        Self {
            state: PendingState::Chained { chain },
        }
    }

    fn into_chain(self) -> Chain {
        match self.state {
            PendingState::Settled { value } => Chain {
                source: Source::Ready(value.map(erase)),
                queue: VecDeque::new(),
            },
            PendingState::Chained { chain } => chain,
            PendingState::Completed => Chain {
                source: Source::Ready(None),
                queue: VecDeque::new(),
            },
        }
    }

    /// Lifts a synchronous function across the pending boundary.
    ///
    /// The returned `Pending` awaits this computation, then applies
    /// `function` to the settled value. Lifting is O(1) and does not deepen
    /// the stack used to poll the chain.
    pub fn lift<R, F>(self, function: F) -> Pending<R>
    where
        R: Send + 'static,
        F: FnOnce(S) -> R + Send + 'static,
    {
        let continuation = Continuation::Map(Box::new(move |value| erase(function(restore(value)))));
        Pending::chained(self.into_chain().push(continuation))
    }

    /// Lifts an asynchronous function across the pending boundary.
    ///
    /// The returned `Pending` awaits this computation, applies `function` to
    /// the settled value and awaits the future it returns.
    pub fn lift_async<R, F, Fut>(self, function: F) -> Pending<R>
    where
        R: Send + 'static,
        F: FnOnce(S) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let continuation = Continuation::Then(Box::new(move |value| {
            function(restore(value)).map(erase).boxed()
        }));
        Pending::chained(self.into_chain().push(continuation))
    }

    /// Turns this computation into a cloneable handle.
    ///
    /// The computation runs once; every clone of the returned [`Memoized`]
    /// resolves to a clone of the same settled value.
    pub fn shared(self) -> Memoized<S>
    where
        S: Clone,
    {
        Memoized {
            inner: FutureExt::shared(self),
        }
    }
}

impl<S> fmt::Debug for Pending<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            PendingState::Settled { .. } => "Settled",
            PendingState::Chained { chain } => match chain.source {
                Source::Ready(_) => "Settled",
                Source::Running(_) => "Running",
            },
            PendingState::Completed => "Completed",
        };
        formatter.debug_tuple("Pending").field(&state).finish()
    }
}

/// A cloneable, memoized pending computation.
///
/// Every clone observes the same settled value, no matter which clone drives
/// the computation or in which order the clones are awaited.
///
/// # Examples
///
/// ```rust
/// use optres::{Pending, some};
///
/// # futures::executor::block_on(async {
/// let shared = Pending::settled(some(1)).shared();
/// let other = shared.clone();
/// assert_eq!(shared.await, some(1));
/// assert_eq!(other.await, some(1));
/// # });
/// ```
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Memoized<S: Clone + 'static> {
    inner: Shared<Pending<S>>,
}

impl<S: Clone + 'static> Clone for Memoized<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Clone + 'static> Future for Memoized<S> {
    type Output = S;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(context)
    }
}

impl<S: Clone + 'static> Memoized<S> {
    /// Returns the settled value if some clone already drove the computation
    /// to completion.
    pub fn peek(&self) -> Option<&S> {
        self.inner.peek()
    }
}

impl<S: Clone + 'static> fmt::Debug for Memoized<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.inner.peek().is_some() {
            "Settled"
        } else {
            "Pending"
        };
        formatter.debug_tuple("Memoized").field(&state).finish()
    }
}
