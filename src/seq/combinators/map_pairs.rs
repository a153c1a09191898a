//! MapPairs combinator - maps values into arbitrary key/value pairs.

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// MapPairs combinator - emits `f(value)` as a `(key, value)` pair.
///
/// `f` runs once per pulled value on the consumer's thread and may keep
/// state of its own, such as a counter. Such a sequence must be driven by a
/// single consumer.
///
/// Created by [`SeqExt::map_pairs`](crate::seq::SeqExt::map_pairs).
pub struct MapPairs<S, F> {
    pub(crate) inner: S,
    pub(crate) f: F,
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for MapPairs<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapPairs")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, K, V> Seq for MapPairs<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> (K, V),
{
    type Item = (K, V);

    async fn drive(self, co: Co<(K, V)>) {
        let MapPairs { inner, mut f } = self;
        let mut source = Puller::new(inner);
        while let Some(item) = source.next_async().await {
            if !co.yield_(f(item)).await {
                return;
            }
        }
    }
}
