//! The acceptance handle handed to push-style producers.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

/// Single-element handoff shared between one producer and its puller.
#[derive(Debug)]
pub(crate) struct Slot<T> {
    pub(crate) value: Option<T>,
    pub(crate) stopped: bool,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot {
            value: None,
            stopped: false,
        }
    }
}

/// Handle a producer uses to offer values to its consumer.
///
/// Every [`Seq::drive`](crate::seq::Seq::drive) call receives exactly one
/// `Co`. It is `!Send`: a producer and the puller driving it always live on
/// the same thread.
pub struct Co<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Co<T> {
    pub(crate) fn new(slot: Rc<RefCell<Slot<T>>>) -> Self {
        Co { slot }
    }

    /// Offer one value to the consumer.
    ///
    /// The returned future resolves once the consumer took the value and asks
    /// for another one (`true`), or once the consumer stopped (`false`).
    /// After `false` the producer must return without yielding again; any
    /// further offers are dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let seq = from_fn(|co| async move {
    ///     let mut n = 0;
    ///     while co.yield_(n).await {
    ///         n += 1;
    ///     }
    /// });
    ///
    /// let mut puller = seq.pull();
    /// assert_eq!(puller.next(), Some(0));
    /// assert_eq!(puller.next(), Some(1));
    /// ```
    pub fn yield_(&self, value: T) -> Yield<'_, T> {
        Yield {
            co: self,
            value: Some(value),
        }
    }

    /// Whether the consumer has already stopped.
    pub fn is_stopped(&self) -> bool {
        self.slot.borrow().stopped
    }
}

impl<T> fmt::Debug for Co<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Co")
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

/// Future returned by [`Co::yield_`].
#[must_use = "a value is only offered when the yield is awaited"]
pub struct Yield<'a, T> {
    co: &'a Co<T>,
    value: Option<T>,
}

// Never pin-projected.
impl<T> Unpin for Yield<'_, T> {}

impl<T> Future for Yield<'_, T> {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<bool> {
        let this = &mut *self;
        let mut slot = this.co.slot.borrow_mut();
        if slot.stopped {
            return Poll::Ready(false);
        }
        match this.value.take() {
            Some(value) => {
                // The puller reads the slot right after this poll returns.
                slot.value = Some(value);
                Poll::Pending
            }
            None if slot.value.is_some() => Poll::Pending,
            None => Poll::Ready(true),
        }
    }
}

impl<T> fmt::Debug for Yield<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Yield")
            .field("pending_value", &self.value.is_some())
            .finish()
    }
}
