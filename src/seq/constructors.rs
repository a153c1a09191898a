//! Constructors for sequences.
//!
//! These are the leaves of every pipeline: they turn an in-memory collection,
//! a hand-written producer, or nothing at all into a [`Seq`].

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use crate::seq::co::Co;
use crate::seq::trait_def::Seq;

/// A sequence over the items of an [`IntoIterator`].
///
/// Created by [`from_iter`].
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    items: I,
}

impl<I> Seq for FromIter<I>
where
    I: IntoIterator,
{
    type Item = I::Item;

    async fn drive(self, co: Co<I::Item>) {
        for item in self.items {
            if !co.yield_(item).await {
                return;
            }
        }
    }
}

/// Create a sequence from any ordered collection.
///
/// The collection is only iterated as values are pulled.
///
/// # Example
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let seq = from_iter(vec!["forty-two", "42"]);
/// assert_eq!(seq.to_vec(), vec!["forty-two", "42"]);
/// ```
pub fn from_iter<I>(items: I) -> FromIter<I>
where
    I: IntoIterator,
{
    FromIter { items }
}

/// A sequence driven by a hand-written async producer.
///
/// Created by [`from_fn`].
pub struct FromFn<F, T> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

impl<F, T> fmt::Debug for FromFn<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("f", &"<producer>")
            .finish()
    }
}

impl<F, Fut, T> Seq for FromFn<F, T>
where
    F: FnOnce(Co<T>) -> Fut,
    Fut: Future<Output = ()>,
{
    type Item = T;

    async fn drive(self, co: Co<T>) {
        (self.f)(co).await
    }
}

/// Create a sequence from a producer function.
///
/// The producer receives the [`Co`] handle and offers values with
/// `co.yield_(value).await`, returning as soon as a yield resolves to
/// `false`.
///
/// # Example
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let squares = from_fn(|co| async move {
///     for n in 1u32.. {
///         if !co.yield_(n * n).await {
///             return;
///         }
///     }
/// });
///
/// let first: Vec<u32> = squares.pull().take(3).collect();
/// assert_eq!(first, vec![1, 4, 9]);
/// ```
pub fn from_fn<F, Fut, T>(f: F) -> FromFn<F, T>
where
    F: FnOnce(Co<T>) -> Fut,
    Fut: Future<Output = ()>,
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

/// A sequence that produces nothing.
///
/// Created by [`empty`].
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Seq for Empty<T> {
    type Item = T;

    async fn drive(self, _co: Co<T>) {}
}

/// Create an empty sequence.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _item: PhantomData,
    }
}
