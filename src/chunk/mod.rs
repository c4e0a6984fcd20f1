//! Chunk contract shared by every chunk encoding.
//!
//! A chunk is a fixed-capacity, append-only run of samples. The series layer
//! creates chunks with a capacity policy, appends until a chunk reports
//! [`AppendResult::Full`], then starts a new one. Readers open iterators in
//! either time direction.
//!
//! # Design
//!
//! - **Contract**: [`ChunkOps`] is the operation set every encoding provides
//!   (uncompressed here, compressed elsewhere) so callers hold either kind
//! - **Storage**: [`UncompressedChunk`] keeps samples in a pre-sized buffer
//! - **Traversal**: [`ChunkCursor`] holds traversal state detached from the
//!   chunk; [`ChunkIter`] couples a cursor with a borrowed chunk
//!
//! # Caller contract
//!
//! The core does not check that timestamps are non-decreasing, does not lock,
//! and never reorders or removes a sample. Ordering checks belong one layer up
//! (see [`crate::StrictChunk`]).

mod cursor;
mod uncompressed;

pub use cursor::{ChunkCursor, ChunkIter};
pub use uncompressed::UncompressedChunk;

use crate::sample::{Sample, Timestamp};

/// Traversal direction of a chunk iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Earliest to latest, in append order.
    #[default]
    Forward,
    /// Latest to earliest.
    Reverse,
}

impl Direction {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }

    pub fn is_reverse(self) -> bool {
        self == Direction::Reverse
    }
}

/// Outcome of an append.
///
/// `Full` is an ordinary signal that the caller should start a new chunk.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendResult {
    Appended,
    Full,
}

impl AppendResult {
    pub fn is_full(self) -> bool {
        self == AppendResult::Full
    }
}

/// Operation set shared by all chunk encodings.
pub trait ChunkOps {
    /// Iterator returned by [`ChunkOps::iter`]. `None` from `next` means the
    /// scan is exhausted; dropping the iterator closes it.
    type Iter<'a>: Iterator<Item = Sample>
    where
        Self: 'a;

    /// Capacity fixed at creation.
    fn max_samples(&self) -> usize;

    /// Number of samples appended so far.
    fn num_samples(&self) -> usize;

    /// Timestamp of the earliest stored sample, `None` when empty.
    fn first_timestamp(&self) -> Option<Timestamp>;

    /// Timestamp of the latest stored sample, `None` when empty.
    fn last_timestamp(&self) -> Option<Timestamp>;

    /// Timestamp of the first sample ever appended. Set once.
    fn base_timestamp(&self) -> Option<Timestamp>;

    /// Append a sample, or report `Full` and leave the chunk untouched.
    fn append(&mut self, sample: Sample) -> AppendResult;

    /// Open an iterator over the stored samples.
    ///
    /// The iterator borrows the chunk, so no append can happen while it is
    /// alive. Readers that must keep reading while the chunk grows use the
    /// encoding's detached cursor instead (for [`UncompressedChunk`], see
    /// [`UncompressedChunk::cursor`] and [`ChunkCursor`]); every encoding is
    /// expected to provide one with the same forward/reverse semantics.
    fn iter(&self, direction: Direction) -> Self::Iter<'_>;

    /// Memory accounted to this chunk. Depends on capacity only.
    fn byte_footprint(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.num_samples() == 0
    }

    fn is_full(&self) -> bool {
        self.num_samples() >= self.max_samples()
    }

    fn remaining(&self) -> usize {
        self.max_samples().saturating_sub(self.num_samples())
    }

    /// `(first, last)` timestamps, `None` when empty.
    fn time_range(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.first_timestamp()?, self.last_timestamp()?))
    }
}
