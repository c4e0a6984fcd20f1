//! Fixed-capacity, append-only chunks of time-series samples.
//!
//! A chunk holds a capped, contiguous run of `(timestamp, value)` samples.
//! Higher layers split an unbounded stream into successive chunks: append
//! until [`AppendResult::Full`], then start a new chunk. Iterators read a
//! chunk forward (earliest first) or in reverse (latest first).
//!
//! # Caller contract
//!
//! - Timestamps are not checked for order; use [`StrictChunk`] to reject
//!   out-of-order samples
//! - There is no internal locking; `append` takes `&mut self`
//! - `Full` and iterator exhaustion are signals, not errors

pub mod chunk;
pub mod config;
pub mod error;
pub mod sample;
pub mod strict;

pub use chunk::{AppendResult, ChunkCursor, ChunkIter, ChunkOps, Direction, UncompressedChunk};
pub use config::{ChunkConfig, DEFAULT_SAMPLES_PER_CHUNK};
pub use error::{Error, Result};
pub use sample::{Sample, Timestamp};
pub use strict::StrictChunk;
