//! Pairs combinator - spells error-carrying items as `(value, error)` pairs.

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// Pairs combinator - `Ok(v)` becomes `(v, None)`, `Err(e)` becomes
/// `(V::default(), Some(e))`.
///
/// Created by [`TrySeqExt::pairs`](crate::seq::TrySeqExt::pairs).
#[derive(Debug, Clone)]
pub struct Pairs<S> {
    pub(crate) inner: S,
}

impl<S, V, E> Seq for Pairs<S>
where
    S: Seq<Item = Result<V, E>>,
    V: Default,
{
    type Item = (V, Option<E>);

    async fn drive(self, co: Co<(V, Option<E>)>) {
        let mut source = Puller::new(self.inner);
        while let Some(item) = source.next_async().await {
            let pair = match item {
                Ok(value) => (value, None),
                Err(err) => (V::default(), Some(err)),
            };
            if !co.yield_(pair).await {
                return;
            }
        }
    }
}
