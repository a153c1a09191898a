//! WithError combinator - lifts a plain sequence into an error-carrying one.

use std::marker::PhantomData;

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// WithError combinator - emits `Ok(value)` for every value.
///
/// Has no failure path of its own; it only lets an always-succeeding
/// sequence feed combinators that expect `Result` items.
///
/// Created by [`SeqExt::with_error`](crate::seq::SeqExt::with_error).
pub struct WithError<S, E> {
    pub(crate) inner: S,
    pub(crate) _error: PhantomData<fn() -> E>,
}

impl<S: std::fmt::Debug, E> std::fmt::Debug for WithError<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WithError")
            .field("inner", &self.inner)
            .field("error", &std::any::type_name::<E>())
            .finish()
    }
}

impl<S: Clone, E> Clone for WithError<S, E> {
    fn clone(&self) -> Self {
        WithError {
            inner: self.inner.clone(),
            _error: PhantomData,
        }
    }
}

impl<S, E> Seq for WithError<S, E>
where
    S: Seq,
{
    type Item = Result<S::Item, E>;

    async fn drive(self, co: Co<Result<S::Item, E>>) {
        let mut source = Puller::new(self.inner);
        while let Some(item) = source.next_async().await {
            if !co.yield_(Ok(item)).await {
                return;
            }
        }
    }
}
