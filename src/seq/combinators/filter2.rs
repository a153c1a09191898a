//! Filter2 combinator - keeps the pairs matching a two-argument predicate.

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// Filter2 combinator - forwards only the pairs the predicate accepts.
///
/// Created by [`PairSeqExt::filter2`](crate::seq::PairSeqExt::filter2).
pub struct Filter2<S, P> {
    pub(crate) inner: S,
    pub(crate) predicate: P,
}

impl<S: std::fmt::Debug, P> std::fmt::Debug for Filter2<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter2")
            .field("inner", &self.inner)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<S, P, K, V> Seq for Filter2<S, P>
where
    S: Seq<Item = (K, V)>,
    P: FnMut(&K, &V) -> bool,
{
    type Item = (K, V);

    async fn drive(self, co: Co<(K, V)>) {
        let Filter2 {
            inner,
            mut predicate,
        } = self;
        let mut source = Puller::new(inner);
        while let Some((key, value)) = source.next_async().await {
            if predicate(&key, &value) && !co.yield_((key, value)).await {
                return;
            }
        }
    }
}
