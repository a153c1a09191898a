//! Testing utilities and helpers for pullseq
//!
//! This module provides an instrumented source for checking the release and
//! laziness guarantees of a pipeline, an assertion macro, and (behind the
//! `proptest` feature) a strategy for generating sequences.
//!
//! # Examples
//!
//! ## ReleaseProbe
//!
//! ```rust
//! use pullseq::prelude::*;
//! use pullseq::testing::ReleaseProbe;
//! use pullseq::assert_released_once;
//!
//! let probe = ReleaseProbe::new();
//! let first: Vec<_> = probe
//!     .source(vec![1, 2, 3, 4])
//!     .with_index(0)
//!     .pull()
//!     .take(2)
//!     .collect();
//!
//! assert_eq!(first, vec![(0, 1), (1, 2)]);
//! assert_eq!(probe.pulled(), 2);
//! assert_released_once!(probe);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::seq::{Co, Seq};

#[derive(Debug, Default)]
struct ProbeCounts {
    pulled: AtomicUsize,
    released: AtomicUsize,
}

/// Counts how many values an instrumented source handed out and how often it
/// was released.
///
/// Clones share their counters, and the counters are atomic, so a probe can
/// watch a source that runs on a bridge thread.
#[derive(Debug, Clone, Default)]
pub struct ReleaseProbe {
    counts: Arc<ProbeCounts>,
}

impl ReleaseProbe {
    /// Create a probe with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source over `items` that reports to this probe.
    ///
    /// The source counts as released when its producer finishes or is
    /// dropped, started or not.
    pub fn source<I>(&self, items: I) -> ProbedSeq<I>
    where
        I: IntoIterator,
    {
        ProbedSeq {
            items,
            guard: ReleaseGuard {
                counts: Arc::clone(&self.counts),
            },
        }
    }

    /// Number of values the source has offered so far.
    pub fn pulled(&self) -> usize {
        self.counts.pulled.load(Ordering::SeqCst)
    }

    /// Number of times the source has been released.
    pub fn releases(&self) -> usize {
        self.counts.released.load(Ordering::SeqCst)
    }
}

struct ReleaseGuard {
    counts: Arc<ProbeCounts>,
}

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        self.counts.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Instrumented source created by [`ReleaseProbe::source`].
pub struct ProbedSeq<I> {
    items: I,
    guard: ReleaseGuard,
}

impl<I: fmt::Debug> fmt::Debug for ProbedSeq<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbedSeq")
            .field("items", &self.items)
            .finish()
    }
}

impl<I> Seq for ProbedSeq<I>
where
    I: IntoIterator,
{
    type Item = I::Item;

    async fn drive(self, co: Co<I::Item>) {
        let ProbedSeq { items, guard } = self;
        for item in items {
            guard.counts.pulled.fetch_add(1, Ordering::SeqCst);
            if !co.yield_(item).await {
                return;
            }
        }
    }
}

/// Assert that a probed source was released exactly once.
///
/// # Example
///
/// ```rust
/// use pullseq::prelude::*;
/// use pullseq::testing::ReleaseProbe;
/// use pullseq::assert_released_once;
///
/// let probe = ReleaseProbe::new();
/// assert_eq!(probe.source(vec!["a"]).to_vec(), vec!["a"]);
/// assert_released_once!(probe);
/// ```
#[macro_export]
macro_rules! assert_released_once {
    ($probe:expr) => {
        match $probe.releases() {
            1 => {}
            n => panic!("Expected exactly one release, got {}", n),
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy producing sequences over vectors of `element` values.
///
/// # Example
///
/// ```rust,ignore
/// use proptest::prelude::*;
/// use pullseq::prelude::*;
/// use pullseq::testing::arb_seq;
///
/// proptest! {
///     #[test]
///     fn indices_are_dense(seq in arb_seq(any::<u8>(), 0..50)) {
///         let pairs = seq.with_index(0).to_vec();
///         for (n, (i, _)) in pairs.iter().enumerate() {
///             prop_assert_eq!(*i, n);
///         }
///     }
/// }
/// ```
#[cfg(feature = "proptest")]
pub fn arb_seq<S>(
    element: S,
    size: impl Into<proptest::collection::SizeRange>,
) -> impl Strategy<Value = crate::seq::FromIter<Vec<S::Value>>>
where
    S: Strategy,
{
    proptest::collection::vec(element, size).prop_map(crate::seq::from_iter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::SeqExt;

    #[test]
    fn probe_counts_full_drain() {
        let probe = ReleaseProbe::new();
        let items = probe.source(vec![1, 2, 3]).to_vec();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(probe.pulled(), 3);
        assert_released_once!(probe);
    }

    #[test]
    fn probe_counts_unstarted_source() {
        let probe = ReleaseProbe::new();
        let puller = probe.source(vec![1, 2, 3]).pull();
        drop(puller);
        assert_eq!(probe.pulled(), 0);
        assert_released_once!(probe);
    }

    #[test]
    fn clones_share_counters() {
        let probe = ReleaseProbe::new();
        let clone = probe.clone();
        let _ = probe.source(vec!["x"]).to_vec();
        assert_eq!(clone.pulled(), 1);
        assert_eq!(clone.releases(), 1);
    }

    #[test]
    #[should_panic(expected = "Expected exactly one release, got 0")]
    fn assert_released_once_panics_before_release() {
        let probe = ReleaseProbe::new();
        let _source = probe.source(vec![1]);
        assert_released_once!(probe);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;

        proptest! {
            #[test]
            fn arb_seq_respects_size(seq in arb_seq(any::<i32>(), 0..20)) {
                let len = seq.to_vec().len();
                prop_assert!(len < 20);
            }
        }
    }
}
