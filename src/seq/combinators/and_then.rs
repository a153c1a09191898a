//! AndThen combinator - chains a fallible step onto an error-carrying sequence.

use crate::seq::co::Co;
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// AndThen combinator - applies `f` to `Ok` items, forwards `Err` items.
///
/// Created by [`TrySeqExt::and_then`](crate::seq::TrySeqExt::and_then).
pub struct AndThen<S, F> {
    pub(crate) inner: S,
    pub(crate) f: F,
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for AndThen<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, V, U, E> Seq for AndThen<S, F>
where
    S: Seq<Item = Result<V, E>>,
    F: FnMut(V) -> Result<U, E>,
{
    type Item = Result<U, E>;

    async fn drive(self, co: Co<Result<U, E>>) {
        let AndThen { inner, mut f } = self;
        let mut source = Puller::new(inner);
        while let Some(item) = source.next_async().await {
            if !co.yield_(item.and_then(&mut f)).await {
                return;
            }
        }
    }
}
