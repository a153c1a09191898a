//! Seq trait definition - the core abstraction for lazy sequences.
//!
//! A `Seq` is a push-style producer: it is driven by an async routine that
//! offers each value to a [`Co`] handle and suspends until the consumer asks
//! for the next one. The suspension point is what lets a [`Puller`] turn the
//! push-style producer into an explicit "give me the next value" interface
//! without threads.
//!
//! # Design Philosophy
//!
//! This trait follows the same pattern as `Iterator`:
//! - Combinators return concrete types (zero-cost abstractions)
//! - `drive` consumes `self`, so a sequence is single-pass by construction
//!
//! [`Puller`]: crate::seq::Puller

use std::future::Future;

use crate::seq::co::Co;

/// A lazy, single-pass producer of values.
///
/// Implementors offer each value through [`Co::yield_`] and must stop as soon
/// as it resolves to `false`. Sequences are usually built from the
/// constructors in [`crate::seq::constructors`] and transformed with the
/// methods of [`SeqExt`](crate::seq::SeqExt) rather than implemented by hand.
///
/// # Example
///
/// ```rust
/// use pullseq::prelude::*;
///
/// struct Countdown(u32);
///
/// impl Seq for Countdown {
///     type Item = u32;
///
///     async fn drive(self, co: Co<u32>) {
///         for n in (1..=self.0).rev() {
///             if !co.yield_(n).await {
///                 return;
///             }
///         }
///     }
/// }
///
/// assert_eq!(Countdown(3).to_vec(), vec![3, 2, 1]);
/// ```
pub trait Seq: Sized {
    /// The type of values produced.
    type Item;

    /// Run the producer, offering every value to `co`.
    ///
    /// The returned future suspends inside each `co.yield_(..)` until the
    /// value has been taken by the consumer.
    fn drive(self, co: Co<Self::Item>) -> impl Future<Output = ()>;
}
