//! Channel bridge: stream a lazy sequence from one thread to another.
//!
//! A bridge decouples *when* values are generated from *when* they are
//! consumed. A producer drains the source sequence on its own thread and
//! hands every value across a channel that holds at most one value, so the
//! producer can never race ahead of the consumer by more than that slot.
//!
//! # Overview
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! # fn main() -> Result<(), BridgeError> {
//! let chain = from_iter(vec!["aa", "aaa", "aaaaaaa", "a"]).filter(|_| true);
//!
//! // Produced on the bridge thread, consumed here.
//! let received = chain.bridge()?.to_vec();
//! assert_eq!(received, vec!["aa", "aaa", "aaaaaaa", "a"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Lifecycle
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Streaming` | The producer may still hand over values |
//! | `Closed` | The consumer saw the end of the stream |
//! | `Abandoned` | The consumer stopped first; the producer was told to stop |
//!
//! Whichever way a bridge ends, its producer thread is joined before the
//! consumer side is gone, and the source sequence is released exactly once.
//!
//! # Module Structure
//!
//! - [`Bridge`] - Thread-backed bridge, itself a `Seq`
//! - [`BridgeConfig`] - Capacity and thread name
//! - [`BridgeError`] - Start-up and shutdown failures
//! - `BridgeStream` - tokio-backed bridge exposed as a `Stream` (feature `async`)

mod config;
mod error;
mod thread;

#[cfg(feature = "async")]
mod stream;

pub use config::{BridgeConfig, DEFAULT_THREAD_NAME};
pub use error::BridgeError;
pub use thread::{Bridge, BridgeIter, BridgeState};

#[cfg(feature = "async")]
pub use stream::BridgeStream;

#[cfg(test)]
mod tests;
