/// Sample timestamp. Units are chosen by the caller (ms or ns).
pub type Timestamp = u64;

/// One `(timestamp, value)` observation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub timestamp: Timestamp,
    pub value: f64,
}

impl Sample {
    pub const fn new(timestamp: Timestamp, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(Timestamp, f64)> for Sample {
    fn from((timestamp, value): (Timestamp, f64)) -> Self {
        Self { timestamp, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<Sample>(), 16);
    }

    #[test]
    fn from_tuple() {
        let sample: Sample = (42, 1.5).into();
        assert_eq!(sample, Sample::new(42, 1.5));
    }
}
