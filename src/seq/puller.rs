//! Puller - explicit pull interface over a push-style sequence.
//!
//! A [`Puller`] owns the suspended producer of one [`Seq`] and advances it by
//! exactly one element per pull. It is the building block of every combinator
//! in this crate.
//!
//! # Release
//!
//! The producer is released exactly once: when it runs to completion, when
//! [`Puller::release`] is called, or when the puller is dropped, whichever
//! comes first. Releasing a producer that is suspended inside
//! [`Co::yield_`](crate::seq::Co::yield_) makes that yield resolve to `false`,
//! so the producer can run its own cleanup before it is dropped. A producer
//! that was never started is dropped without running.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::thread::{self, Thread};

use futures::future::{poll_fn, LocalBoxFuture};
use futures::task::{waker, ArcWake};
use futures::{FutureExt, Stream};

use crate::seq::co::{Co, Slot};
use crate::seq::trait_def::Seq;

/// Pull-style handle over a [`Seq`].
///
/// `Puller` is both an [`Iterator`] (blocking pulls) and a
/// [`Stream`] (cooperative pulls for async code and for producers that
/// consume other sequences).
///
/// # Example
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut puller = from_iter(["a", "b"]).pull();
/// assert_eq!(puller.next(), Some("a"));
/// assert_eq!(puller.next(), Some("b"));
/// assert_eq!(puller.next(), None);
/// assert_eq!(puller.next(), None);
/// assert!(puller.is_released());
/// ```
pub struct Puller<'a, T> {
    slot: Rc<RefCell<Slot<T>>>,
    driver: Option<LocalBoxFuture<'a, ()>>,
    started: bool,
    exhausted: bool,
    released: bool,
}

impl<'a, T> Puller<'a, T> {
    /// Adapt a sequence for explicit pulling.
    ///
    /// Nothing runs until the first pull.
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq<Item = T> + 'a,
    {
        let slot = Rc::new(RefCell::new(Slot::default()));
        let driver = seq.drive(Co::new(Rc::clone(&slot))).boxed_local();
        Puller {
            slot,
            driver: Some(driver),
            started: false,
            exhausted: false,
            released: false,
        }
    }

    /// Pull the next value, blocking the current thread until the producer
    /// offers one or finishes.
    ///
    /// Returns `None` on every call once the sequence is exhausted or
    /// released.
    ///
    /// Safe to call from inside a closure that another pipeline is running,
    /// so sequences can be consumed within `map`, `filter` and friends. Async
    /// code should prefer [`Puller::next_async`], which does not park the
    /// thread.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        if self.driver.is_none() {
            return None;
        }
        let waker = waker(Arc::new(ParkWaker(thread::current())));
        let mut cx = Context::from_waker(&waker);
        loop {
            if let Poll::Ready(item) = self.poll_pull(&mut cx) {
                return item;
            }
            // Spurious unparks just cost another poll.
            thread::park();
        }
    }

    /// Pull the next value cooperatively.
    pub fn next_async(&mut self) -> impl Future<Output = Option<T>> + use<'_, 'a, T> {
        poll_fn(move |cx| self.poll_pull(cx))
    }

    /// Poll the producer for its next value.
    pub fn poll_pull(&mut self, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let Some(driver) = self.driver.as_mut() else {
            return Poll::Ready(None);
        };
        self.started = true;
        match driver.as_mut().poll(cx) {
            Poll::Ready(()) => {
                self.driver = None;
                self.exhausted = true;
                let last = self.slot.borrow_mut().value.take();
                self.release();
                Poll::Ready(last)
            }
            Poll::Pending => match self.slot.borrow_mut().value.take() {
                Some(value) => Poll::Ready(Some(value)),
                None => Poll::Pending,
            },
        }
    }

    /// Release the producer.
    ///
    /// Idempotent: only the first call has an effect. Called automatically
    /// on exhaustion and on drop.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.slot.borrow_mut().stopped = true;

        if let Some(mut driver) = self.driver.take() {
            // Give a suspended producer one poll to observe the stop; a
            // producer that still waits on something else is dropped as is.
            if self.started && !std::thread::panicking() {
                let waker = futures::task::noop_waker();
                let mut cx = Context::from_waker(&waker);
                let _ = driver.as_mut().poll(&mut cx);
            }
            drop(driver);
        }
        self.slot.borrow_mut().value = None;

        #[cfg(feature = "tracing")]
        tracing::trace!(exhausted = self.exhausted, "puller released");
    }

    /// Whether the producer has been released.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Whether the producer ran to completion.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Wakes a thread parked in [`Puller::next`].
struct ParkWaker(Thread);

impl ArcWake for ParkWaker {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        arc_self.0.unpark();
    }
}

impl<T> Drop for Puller<'_, T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Iterator for Puller<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Puller::next(self)
    }
}

impl<T> Stream for Puller<'_, T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.get_mut().poll_pull(cx)
    }
}

impl<T> fmt::Debug for Puller<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Puller")
            .field("driver", &"<producer>")
            .field("started", &self.started)
            .field("exhausted", &self.exhausted)
            .field("released", &self.released)
            .finish()
    }
}
