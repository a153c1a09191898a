//! Zero-cost combinator types for sequence composition.
//!
//! This module contains concrete types returned by sequence combinators.
//! Every combinator owns one [`Puller`](crate::seq::Puller) over its source,
//! pulls one value per request from downstream and releases the source when
//! it stops, whether the source ran dry or the consumer went away.
//!
//! Most users won't need to work with these types directly. Instead,
//! use the methods on `SeqExt`, `PairSeqExt` and `TrySeqExt`.

mod and_then;
mod filter;
mod filter2;
mod map;
mod map2;
mod map_pairs;
mod map_with_error;
mod pairs;
mod with_error;
mod with_index;

pub use and_then::AndThen;
pub use filter::Filter;
pub use filter2::Filter2;
pub use map::Map;
pub use map2::Map2;
pub use map_pairs::MapPairs;
pub use map_with_error::MapWithError;
pub use pairs::Pairs;
pub use with_error::WithError;
pub use with_index::WithIndex;
