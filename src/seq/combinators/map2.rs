//! Map2 combinator - transforms both halves of a pair sequence.

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// Map2 combinator - applies a two-argument function to every pulled pair.
///
/// Created by [`PairSeqExt::map2`](crate::seq::PairSeqExt::map2).
pub struct Map2<S, F> {
    pub(crate) inner: S,
    pub(crate) f: F,
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for Map2<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map2")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, K, V, K2, V2> Seq for Map2<S, F>
where
    S: Seq<Item = (K, V)>,
    F: FnMut(K, V) -> (K2, V2),
{
    type Item = (K2, V2);

    async fn drive(self, co: Co<(K2, V2)>) {
        let Map2 { inner, mut f } = self;
        let mut source = Puller::new(inner);
        while let Some((key, value)) = source.next_async().await {
            if !co.yield_(f(key, value)).await {
                return;
            }
        }
    }
}
