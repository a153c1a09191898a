//! WithIndex combinator - pairs every value with its position.

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// WithIndex combinator - emits `(initial + n, value_n)`.
///
/// The index depends only on the position of a value, never on its content,
/// and the sequence ends exactly when the source ends. The counter wraps
/// on overflow, so starting at `usize::MAX` is allowed.
///
/// Created by [`SeqExt::with_index`](crate::seq::SeqExt::with_index).
#[derive(Debug, Clone)]
pub struct WithIndex<S> {
    pub(crate) inner: S,
    pub(crate) initial: usize,
}

impl<S> Seq for WithIndex<S>
where
    S: Seq,
{
    type Item = (usize, S::Item);

    async fn drive(self, co: Co<(usize, S::Item)>) {
        let mut index = self.initial;
        let mut source = Puller::new(self.inner);
        while let Some(item) = source.next_async().await {
            if !co.yield_((index, item)).await {
                return;
            }
            index = index.wrapping_add(1);
        }
    }
}
