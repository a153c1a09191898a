//! Extension traits providing combinator methods for all sequences.
//!
//! [`SeqExt`] is automatically implemented for every [`Seq`].
//! [`PairSeqExt`] adds two-argument variants for sequences of pairs and
//! [`TrySeqExt`] adds methods for error-carrying sequences
//! (`Seq<Item = Result<V, E>>`).

use std::marker::PhantomData;

use crate::bridge::{Bridge, BridgeConfig, BridgeError};
use crate::seq::combinators::{
    AndThen, Filter, Filter2, Map, Map2, MapPairs, MapWithError, Pairs, WithError, WithIndex,
};
use crate::seq::puller::Puller;
use crate::seq::trait_def::Seq;

/// Extension trait providing combinator methods for all sequences.
///
/// This trait is automatically implemented for all types that implement
/// `Seq`. You don't need to implement this trait yourself.
///
/// # Example
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let lengths = from_iter(["aa", "aaa", "aaaaaaa", "a"])
///     .filter(|s| s.len() > 1)
///     .map(|s| s.len())
///     .to_vec();
///
/// assert_eq!(lengths, vec![2, 3, 7]);
/// ```
pub trait SeqExt: Seq {
    /// Transform every value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map { inner: self, f }
    }

    /// Keep only the values matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter {
            inner: self,
            predicate,
        }
    }

    /// Pair every value with its position, counting from `initial`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let indexed = from_iter(["forty-two", "42"]).with_index(10).to_vec();
    /// assert_eq!(indexed, vec![(10, "forty-two"), (11, "42")]);
    /// ```
    fn with_index(self, initial: usize) -> WithIndex<Self> {
        WithIndex {
            inner: self,
            initial,
        }
    }

    /// Lift every value into `Ok`, producing an error-carrying sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    /// use std::num::ParseIntError;
    ///
    /// let parsed = from_iter(["forty-two", "42"])
    ///     .with_error::<ParseIntError>()
    ///     .and_then(|s| s.parse::<i32>())
    ///     .pairs()
    ///     .to_vec();
    ///
    /// assert_eq!(parsed[0].0, 0);
    /// assert!(parsed[0].1.is_some());
    /// assert_eq!(parsed[1], (42, None));
    /// ```
    fn with_error<E>(self) -> WithError<Self, E> {
        WithError {
            inner: self,
            _error: PhantomData,
        }
    }

    /// Map every value into a `(key, value)` pair.
    ///
    /// `f` may carry state (see [`Indexer`](crate::seq::Indexer)).
    fn map_pairs<K, V, F>(self, f: F) -> MapPairs<Self, F>
    where
        F: FnMut(Self::Item) -> (K, V),
    {
        MapPairs { inner: self, f }
    }

    /// Map every value through a fallible function.
    ///
    /// Failures become `Err` items; the sequence never stops because of
    /// them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let parsed = from_iter(["forty-two", "42"])
    ///     .map_with_error(|s| s.parse::<i32>())
    ///     .to_vec();
    ///
    /// assert!(parsed[0].is_err());
    /// assert_eq!(parsed[1], Ok(42));
    /// ```
    fn map_with_error<V, E, F>(self, f: F) -> MapWithError<Self, F>
    where
        F: FnMut(Self::Item) -> Result<V, E>,
    {
        MapWithError { inner: self, f }
    }

    /// Adapt this sequence for explicit pulling.
    fn pull<'a>(self) -> Puller<'a, Self::Item>
    where
        Self: 'a,
    {
        Puller::new(self)
    }

    /// Drain the sequence into a collection.
    fn collect<B>(self) -> B
    where
        B: FromIterator<Self::Item>,
    {
        self.pull().collect()
    }

    /// Drain the sequence into a `Vec`.
    fn to_vec(self) -> Vec<Self::Item> {
        self.collect()
    }

    /// Push every value into `f` until the sequence ends or `f` returns
    /// `false`.
    ///
    /// Returns the number of values handed to `f`.
    fn for_each_while<F>(self, mut f: F) -> usize
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut puller = self.pull();
        let mut seen = 0;
        while let Some(item) = puller.next() {
            seen += 1;
            if !f(item) {
                break;
            }
        }
        puller.release();
        seen
    }

    /// Stream this sequence from a producer thread using the default
    /// [`BridgeConfig`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// # fn main() -> Result<(), BridgeError> {
    /// let words = from_iter(vec!["aa", "aaa", "aaaaaaa", "a"]).filter(|_| true);
    /// let received = words.bridge()?.to_vec();
    /// assert_eq!(received, vec!["aa", "aaa", "aaaaaaa", "a"]);
    /// # Ok(())
    /// # }
    /// ```
    fn bridge(self) -> Result<Bridge<Self::Item>, BridgeError>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
    {
        Bridge::spawn(self, BridgeConfig::default())
    }

    /// Stream this sequence from a producer thread.
    fn bridge_with(self, config: BridgeConfig) -> Result<Bridge<Self::Item>, BridgeError>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
    {
        Bridge::spawn(self, config)
    }
}

impl<S: Seq> SeqExt for S {}

/// Extension trait for sequences of `(K, V)` pairs.
pub trait PairSeqExt<K, V>: Seq<Item = (K, V)> {
    /// Transform both halves of every pair.
    fn map2<K2, V2, F>(self, f: F) -> Map2<Self, F>
    where
        F: FnMut(K, V) -> (K2, V2),
    {
        Map2 { inner: self, f }
    }

    /// Keep only the pairs matching `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let kept = from_iter(["forty-two", "", "42"])
    ///     .with_index(0)
    ///     .filter2(|_, s| !s.is_empty())
    ///     .to_vec();
    ///
    /// assert_eq!(kept, vec![(0, "forty-two"), (2, "42")]);
    /// ```
    fn filter2<P>(self, predicate: P) -> Filter2<Self, P>
    where
        P: FnMut(&K, &V) -> bool,
    {
        Filter2 {
            inner: self,
            predicate,
        }
    }
}

impl<S, K, V> PairSeqExt<K, V> for S where S: Seq<Item = (K, V)> {}

/// Extension trait for error-carrying sequences.
pub trait TrySeqExt<V, E>: Seq<Item = Result<V, E>> {
    /// Apply a fallible step to every `Ok` item; `Err` items pass through.
    fn and_then<U, F>(self, f: F) -> AndThen<Self, F>
    where
        F: FnMut(V) -> Result<U, E>,
    {
        AndThen { inner: self, f }
    }

    /// Spell every item as a `(value, error)` pair.
    ///
    /// Failed items carry `V::default()` as their value.
    fn pairs(self) -> Pairs<Self>
    where
        V: Default,
    {
        Pairs { inner: self }
    }
}

impl<S, V, E> TrySeqExt<V, E> for S where S: Seq<Item = Result<V, E>> {}
