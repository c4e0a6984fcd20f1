//! Chunk capacity configuration.
//!
//! Callers that create chunks use this to agree on a capacity policy.

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use log::debug;

use crate::sample::Sample;
use crate::{Error, Result};

/// Samples per chunk when nothing else is configured.
pub const DEFAULT_SAMPLES_PER_CHUNK: usize = 360;

/// Configuration for newly created chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkConfig {
    /// Capacity of each chunk in samples.
    /// Default: 360
    pub samples_per_chunk: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            samples_per_chunk: DEFAULT_SAMPLES_PER_CHUNK,
        }
    }
}

impl ChunkConfig {
    /// Size chunks to fit a byte budget for sample storage. Always at least
    /// one sample.
    pub fn from_chunk_bytes(bytes: usize) -> Self {
        Self {
            samples_per_chunk: (bytes / std::mem::size_of::<Sample>()).max(1),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.samples_per_chunk == 0 {
            return Err(Error::InvalidConfig("samples_per_chunk must be positive"));
        }
        Ok(())
    }

    /// Load a JSON config file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// - `Error::Io`: file could not be read
    /// - `Error::Json`: file is not valid config JSON
    /// - `Error::InvalidConfig`: values fail validation
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let config: ChunkConfig = serde_json::from_slice(&bytes)?;
        config.validate()?;
        debug!(
            "loaded chunk config from {}: {} samples per chunk",
            path.display(),
            config.samples_per_chunk
        );
        Ok(config)
    }
}
