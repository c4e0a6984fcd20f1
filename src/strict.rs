//! Opt-in ordering check on top of any chunk.
//!
//! Chunks accept samples in whatever order they arrive. `StrictChunk` is for
//! callers that want a sample older than the current last sample rejected
//! instead of stored.

use log::warn;

use crate::chunk::{AppendResult, ChunkOps, Direction};
use crate::sample::{Sample, Timestamp};
use crate::{Error, Result};

/// Chunk wrapper rejecting out-of-order appends.
///
/// Equal timestamps are accepted. Through [`ChunkOps`] a strict chunk can be
/// used anywhere another chunk is; use [`StrictChunk::try_append`] to see
/// rejections as errors.
#[derive(Debug, Clone)]
pub struct StrictChunk<C> {
    inner: C,
    rejected: u64,
}

impl<C: ChunkOps> StrictChunk<C> {
    pub fn new(inner: C) -> Self {
        Self { inner, rejected: 0 }
    }

    /// Append `sample` if it does not precede the last stored sample.
    ///
    /// # Errors
    ///
    /// - `Error::OutOfOrder`: `sample.timestamp` is older than the last
    ///   timestamp; the chunk is unchanged
    pub fn try_append(&mut self, sample: Sample) -> Result<AppendResult> {
        if let Some(last) = self.inner.last_timestamp() {
            if sample.timestamp < last {
                warn!(
                    "rejecting out of order sample at {} (last {})",
                    sample.timestamp, last
                );
                self.rejected += 1;
                return Err(Error::OutOfOrder {
                    last,
                    timestamp: sample.timestamp,
                });
            }
        }
        Ok(self.inner.append(sample))
    }

    /// Number of out-of-order samples turned away so far.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: ChunkOps> ChunkOps for StrictChunk<C> {
    type Iter<'a> = C::Iter<'a>
    where
        Self: 'a;

    fn max_samples(&self) -> usize {
        self.inner.max_samples()
    }

    fn num_samples(&self) -> usize {
        self.inner.num_samples()
    }

    fn first_timestamp(&self) -> Option<Timestamp> {
        self.inner.first_timestamp()
    }

    fn last_timestamp(&self) -> Option<Timestamp> {
        self.inner.last_timestamp()
    }

    fn base_timestamp(&self) -> Option<Timestamp> {
        self.inner.base_timestamp()
    }

    /// Out-of-order samples are dropped and counted in
    /// [`StrictChunk::rejected`]; the chunk is unchanged and the result
    /// reports only whether the chunk is full.
    fn append(&mut self, sample: Sample) -> AppendResult {
        match self.try_append(sample) {
            Ok(result) => result,
            Err(_) if self.inner.is_full() => AppendResult::Full,
            Err(_) => AppendResult::Appended,
        }
    }

    fn iter(&self, direction: Direction) -> C::Iter<'_> {
        self.inner.iter(direction)
    }

    fn byte_footprint(&self) -> usize {
        self.inner.byte_footprint()
    }
}
