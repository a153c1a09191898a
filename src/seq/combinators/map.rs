//! Map combinator - transforms each value of a sequence.

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// Map combinator - applies a function to every pulled value.
///
/// Created by [`SeqExt::map`](crate::seq::SeqExt::map).
pub struct Map<S, F> {
    pub(crate) inner: S,
    pub(crate) f: F,
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, U> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    async fn drive(self, co: Co<U>) {
        let Map { inner, mut f } = self;
        let mut source = Puller::new(inner);
        while let Some(item) = source.next_async().await {
            if !co.yield_(f(item)).await {
                return;
            }
        }
    }
}
