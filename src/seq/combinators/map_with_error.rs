//! MapWithError combinator - maps values through a fallible function.

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// MapWithError combinator - emits `f(value)` for every value.
///
/// A failing element becomes an `Err` item; the sequence keeps pulling and
/// yields exactly one item per source value. Stopping on the first error is
/// the consumer's decision.
///
/// Created by [`SeqExt::map_with_error`](crate::seq::SeqExt::map_with_error).
pub struct MapWithError<S, F> {
    pub(crate) inner: S,
    pub(crate) f: F,
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for MapWithError<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapWithError")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, V, E> Seq for MapWithError<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Result<V, E>,
{
    type Item = Result<V, E>;

    async fn drive(self, co: Co<Result<V, E>>) {
        let MapWithError { inner, mut f } = self;
        let mut source = Puller::new(inner);
        while let Some(item) = source.next_async().await {
            if !co.yield_(f(item)).await {
                return;
            }
        }
    }
}
