//! # pullseq
//!
//! Lazy single-pass sequences for Rust: produce, transform and consume
//! values one at a time without materializing intermediate collections.
//!
//! ## Philosophy
//!
//! - **Push to write**: a producer is an async routine that offers values to a
//!   [`Co`] handle, one `co.yield_(value).await` at a time.
//! - **Pull to read**: a [`Puller`] suspends the producer after every value and
//!   hands values out on demand, with a release that runs exactly once.
//! - **Errors are data**: fallible steps produce `Result` items; a failing
//!   element never ends a sequence.
//!
//! ## Quick Example
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let parsed = from_iter(["forty-two", "42"])
//!     .map_with_error(|s| s.parse::<i32>())
//!     .with_index(0)
//!     .to_vec();
//!
//! assert_eq!(parsed.len(), 2);
//! assert!(parsed[0].1.is_err());
//! assert_eq!(parsed[1], (1, Ok(42)));
//! ```
//!
//! ## Crossing Threads
//!
//! A [`Bridge`] drains a sequence on a producer thread and hands values to the
//! consumer through a channel holding at most one value:
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! # fn main() -> Result<(), BridgeError> {
//! let received = from_iter(vec!["aa", "aaa", "aaaaaaa", "a"])
//!     .filter(|_| true)
//!     .bridge()?
//!     .to_vec();
//!
//! assert_eq!(received, vec!["aa", "aaa", "aaaaaaa", "a"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `async`: [`bridge::BridgeStream`], a tokio-backed bridge consumed as a `Stream`
//! - `tracing`: producer and release events through `tracing`
//! - `proptest`: the `testing::arb_seq` strategy

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bridge;
pub mod seq;
pub mod testing;

// Re-exports
pub use bridge::{Bridge, BridgeConfig, BridgeError, BridgeState};
pub use seq::{
    empty, from_fn, from_iter, Co, Indexer, PairSeqExt, Puller, Seq, SeqExt, TrySeqExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bridge::{Bridge, BridgeConfig, BridgeError, BridgeState};
    pub use crate::seq::{
        empty, from_fn, from_iter, Co, Indexer, PairSeqExt, Puller, Seq, SeqExt, TrySeqExt,
    };
}
