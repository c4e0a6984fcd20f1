use std::mem::size_of;

use log::{debug, trace};

use crate::chunk::{AppendResult, ChunkCursor, ChunkIter, ChunkOps, Direction};
use crate::config::ChunkConfig;
use crate::sample::{Sample, Timestamp};
use crate::{Error, Result};

/// Array-backed chunk storing samples as-is.
///
/// Storage is reserved once for `max_samples` samples and never grows, so
/// appends are O(1) and never reallocate. Only `[0, num_samples)` is ever
/// exposed to readers.
///
/// # Example
///
/// ```
/// use tschunk::{AppendResult, ChunkOps, Direction, Sample, UncompressedChunk};
///
/// let mut chunk = UncompressedChunk::new(2)?;
/// assert_eq!(chunk.append(Sample::new(10, 1.0)), AppendResult::Appended);
/// assert_eq!(chunk.append(Sample::new(20, 2.0)), AppendResult::Appended);
/// assert_eq!(chunk.append(Sample::new(30, 3.0)), AppendResult::Full);
///
/// let latest_first: Vec<_> = chunk.iter(Direction::Reverse).map(|s| s.timestamp).collect();
/// assert_eq!(latest_first, vec![20, 10]);
/// # Ok::<(), tschunk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct UncompressedChunk {
    max_samples: usize,
    base_timestamp: Option<Timestamp>,
    samples: Vec<Sample>,
}

impl UncompressedChunk {
    /// Create an empty chunk able to hold `capacity` samples.
    ///
    /// # Errors
    ///
    /// - `Error::ZeroCapacity`: `capacity` is zero
    /// - `Error::Alloc`: sample storage could not be reserved
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Alloc { capacity })?;
        debug!("created uncompressed chunk with capacity {capacity}");
        Ok(Self {
            max_samples: capacity,
            base_timestamp: None,
            samples,
        })
    }

    /// Create a chunk sized by `config.samples_per_chunk`.
    pub fn with_config(config: &ChunkConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.samples_per_chunk)
    }

    /// Stored samples in append order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Open a detached cursor. See [`ChunkCursor`] for how it differs from
    /// [`ChunkOps::iter`].
    pub fn cursor(&self, direction: Direction) -> ChunkCursor {
        ChunkCursor::open(self, direction)
    }
}

impl ChunkOps for UncompressedChunk {
    type Iter<'a> = ChunkIter<'a>;

    fn max_samples(&self) -> usize {
        self.max_samples
    }

    fn num_samples(&self) -> usize {
        self.samples.len()
    }

    fn first_timestamp(&self) -> Option<Timestamp> {
        self.samples.first().map(|s| s.timestamp)
    }

    fn last_timestamp(&self) -> Option<Timestamp> {
        self.samples.last().map(|s| s.timestamp)
    }

    fn base_timestamp(&self) -> Option<Timestamp> {
        self.base_timestamp
    }

    fn append(&mut self, sample: Sample) -> AppendResult {
        debug_assert!(self.samples.len() <= self.max_samples);
        if self.samples.len() == self.max_samples {
            trace!("chunk full at {} samples", self.max_samples);
            return AppendResult::Full;
        }
        if self.samples.is_empty() {
            self.base_timestamp = Some(sample.timestamp);
        }
        let reserved = self.samples.capacity();
        self.samples.push(sample);
        debug_assert_eq!(reserved, self.samples.capacity(), "append reallocated");
        AppendResult::Appended
    }

    fn iter(&self, direction: Direction) -> ChunkIter<'_> {
        ChunkIter::new(self, direction)
    }

    fn byte_footprint(&self) -> usize {
        size_of::<Self>() + self.max_samples * size_of::<Sample>()
    }
}
