//! Read-only traversal over an uncompressed chunk.
//!
//! # Design
//!
//! - [`ChunkCursor`] owns only traversal state and is stepped against a
//!   chunk passed on every call, so the chunk stays appendable between steps
//! - [`ChunkIter`] pairs a cursor with a borrowed chunk and implements
//!   [`Iterator`]; it cannot outlive the chunk
//!
//! # Live bound asymmetry
//!
//! A forward cursor compares its index against the chunk's sample count on
//! every step, so samples appended after it was opened are emitted. A reverse
//! cursor starts at the last sample present at open time and walks down, so
//! later appends are never visible to it. Both behaviors are intentional.
//!
//! Once a cursor reports exhaustion it stays exhausted, even if the chunk
//! grows afterwards.

use std::iter::FusedIterator;

use crate::chunk::{ChunkOps, Direction, UncompressedChunk};
use crate::sample::Sample;

/// Traversal state over an [`UncompressedChunk`].
///
/// # Usage Pattern
///
/// ```text
/// 1. Open with UncompressedChunk::cursor() or ChunkCursor::open()
/// 2. Loop: next(&chunk) until it returns None
///    (appends to the chunk are allowed between steps)
/// 3. Drop the cursor; the chunk is unaffected
/// ```
#[derive(Debug, Clone)]
pub struct ChunkCursor {
    direction: Direction,
    /// Forward: index of the next sample.
    /// Reverse: number of samples not yet emitted (next index + 1).
    position: usize,
    exhausted: bool,
}

impl ChunkCursor {
    /// Open a cursor. A reverse cursor fixes its start at the current last
    /// sample; on an empty chunk it is exhausted from the first step.
    pub fn open(chunk: &UncompressedChunk, direction: Direction) -> Self {
        let position = match direction {
            Direction::Forward => 0,
            Direction::Reverse => chunk.num_samples(),
        };
        Self {
            direction,
            position,
            exhausted: false,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True once `next` has returned `None`.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Emit the next sample, or `None` when the scan is exhausted.
    ///
    /// `chunk` must be the chunk this cursor was opened on. Passing a shorter
    /// chunk ends the scan rather than reading out of bounds.
    pub fn next(&mut self, chunk: &UncompressedChunk) -> Option<Sample> {
        if self.exhausted {
            return None;
        }
        let sample = match self.direction {
            Direction::Forward => {
                let sample = chunk.samples().get(self.position).copied();
                if sample.is_some() {
                    self.position += 1;
                }
                sample
            }
            Direction::Reverse => match self.position.checked_sub(1) {
                Some(index) => {
                    let sample = chunk.samples().get(index).copied();
                    if sample.is_some() {
                        self.position = index;
                    }
                    sample
                }
                None => None,
            },
        };
        if sample.is_none() {
            self.exhausted = true;
        }
        sample
    }

    fn remaining(&self, chunk: &UncompressedChunk) -> usize {
        if self.exhausted {
            return 0;
        }
        match self.direction {
            Direction::Forward => chunk.num_samples().saturating_sub(self.position),
            Direction::Reverse => self.position.min(chunk.num_samples()),
        }
    }
}

/// Borrowing iterator over an [`UncompressedChunk`].
///
/// Not restartable: open a new one to scan again.
#[derive(Debug, Clone)]
pub struct ChunkIter<'a> {
    chunk: &'a UncompressedChunk,
    cursor: ChunkCursor,
}

impl<'a> ChunkIter<'a> {
    pub fn new(chunk: &'a UncompressedChunk, direction: Direction) -> Self {
        Self {
            chunk,
            cursor: ChunkCursor::open(chunk, direction),
        }
    }

    pub fn direction(&self) -> Direction {
        self.cursor.direction()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Detach the traversal state, releasing the borrow on the chunk.
    pub fn into_cursor(self) -> ChunkCursor {
        self.cursor
    }
}

impl Iterator for ChunkIter<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        self.cursor.next(self.chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining(self.chunk);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChunkIter<'_> {}

impl FusedIterator for ChunkIter<'_> {}
