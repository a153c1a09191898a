//! Indexer - owned counter state for index-producing mappings.

use std::fmt;

/// A counter paired with a mapping function.
///
/// Each call to [`Indexer::index`] returns the current position together with
/// the mapped value and advances the counter. An `Indexer` belongs to exactly
/// one combinator; move it into the closure handed to
/// [`SeqExt::map_pairs`](crate::seq::SeqExt::map_pairs).
///
/// # Example
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut indexer = Indexer::new(0, |s: &str| s.len());
/// let pairs = from_iter(["forty-two", "42"])
///     .map_pairs(move |s| indexer.index(s))
///     .to_vec();
///
/// assert_eq!(pairs, vec![(0, 9), (1, 2)]);
/// ```
pub struct Indexer<F> {
    next: usize,
    f: F,
}

impl<F> Indexer<F> {
    /// Create an indexer counting from `initial`.
    pub fn new(initial: usize, f: F) -> Self {
        Indexer { next: initial, f }
    }

    /// Map `value` and pair it with the current position.
    ///
    /// The position wraps on overflow.
    pub fn index<T, V>(&mut self, value: T) -> (usize, V)
    where
        F: FnMut(T) -> V,
    {
        let index = self.next;
        self.next = self.next.wrapping_add(1);
        (index, (self.f)(value))
    }

    /// The index the next call will hand out.
    pub fn position(&self) -> usize {
        self.next
    }
}

impl<F> fmt::Debug for Indexer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indexer")
            .field("next", &self.next)
            .field("f", &"<function>")
            .finish()
    }
}
