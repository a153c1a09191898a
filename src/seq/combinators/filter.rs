//! Filter combinator - keeps the values matching a predicate.

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// Filter combinator - forwards only the values the predicate accepts.
///
/// Created by [`SeqExt::filter`](crate::seq::SeqExt::filter).
pub struct Filter<S, P> {
    pub(crate) inner: S,
    pub(crate) predicate: P,
}

impl<S: std::fmt::Debug, P> std::fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &self.inner)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    async fn drive(self, co: Co<S::Item>) {
        let Filter {
            inner,
            mut predicate,
        } = self;
        let mut source = Puller::new(inner);
        while let Some(item) = source.next_async().await {
            if predicate(&item) && !co.yield_(item).await {
                return;
            }
        }
    }
}
