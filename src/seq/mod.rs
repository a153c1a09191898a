//! Lazy single-pass sequences.
//!
//! A [`Seq`] produces values one at a time, push-style, through a [`Co`]
//! handle. A [`Puller`] turns any `Seq` into an explicit pull interface by
//! suspending the producer after every value, and every combinator here is
//! built on one `Puller` over its source.
//!
//! # Overview
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let parsed = from_iter(["forty-two", "42"])
//!     .map_with_error(|s| s.parse::<i32>())
//!     .pairs()
//!     .to_vec();
//!
//! assert_eq!(parsed[0].0, 0);
//! assert_eq!(
//!     parsed[0].1.as_ref().map(|e| e.to_string()),
//!     Some("invalid digit found in string".to_string())
//! );
//! assert_eq!(parsed[1], (42, None));
//! ```
//!
//! # Sequence Shapes
//!
//! | Shape | Item | Produced by |
//! |-------|------|-------------|
//! | Sequence | `T` | `from_iter`, `from_fn`, `map`, `filter` |
//! | Pair sequence | `(K, V)` | `with_index`, `map_pairs`, `map2`, `filter2` |
//! | Error-carrying sequence | `Result<V, E>` | `with_error`, `map_with_error`, `and_then` |
//!
//! Errors are data: an `Err` item never ends a sequence. A consumer that
//! wants to stop on the first error simply stops pulling, and the source is
//! released right away.
//!
//! # Module Structure
//!
//! - [`Seq`] - Core trait
//! - [`SeqExt`], [`PairSeqExt`], [`TrySeqExt`] - Combinator methods
//! - [`Puller`] - Explicit pulling with guaranteed release
//! - [`from_iter`], [`from_fn`], [`empty`] - Constructors
//! - [`Indexer`] - Owned counter state for index-producing closures

pub mod combinators;
pub mod constructors;
mod co;
mod ext;
mod indexer;
mod puller;
mod trait_def;

// Re-export core trait and handle
pub use co::{Co, Yield};
pub use trait_def::Seq;

// Re-export extension traits
pub use ext::{PairSeqExt, SeqExt, TrySeqExt};

pub use indexer::Indexer;
pub use puller::Puller;

// Re-export constructors
pub use constructors::{empty, from_fn, from_iter, Empty, FromFn, FromIter};

// Re-export combinator types
pub use combinators::{
    AndThen, Filter, Filter2, Map, Map2, MapPairs, MapWithError, Pairs, WithError, WithIndex,
};
