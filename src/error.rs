use thiserror::Error;

use crate::sample::Timestamp;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chunk capacity must be at least one sample")]
    ZeroCapacity,
    #[error("failed to allocate storage for {capacity} samples")]
    Alloc { capacity: usize },
    #[error("out of order sample: timestamp {timestamp} precedes last timestamp {last}")]
    OutOfOrder { last: Timestamp, timestamp: Timestamp },
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
