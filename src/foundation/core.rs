use crate::foundation::error::{MuxuError, MuxuResult};

/// Zero-based position inside a frame sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

impl FrameIndex {
    pub const ZERO: FrameIndex = FrameIndex(0);

    /// Absolute index distance, used by the cache eviction policy.
    pub fn distance(self, other: FrameIndex) -> u32 {
        self.0.abs_diff(other.0)
    }
}

/// Number of frames in a sequence. Always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FrameCount(u32);

impl FrameCount {
    /// Frame count used when the sequence descriptor is unavailable.
    pub const DEFAULT: FrameCount = FrameCount(439);

    pub fn new(n: u32) -> MuxuResult<Self> {
        if n == 0 {
            return Err(MuxuError::validation("FrameCount must be > 0"));
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Index of the final frame (`N - 1`).
    pub fn last(self) -> FrameIndex {
        FrameIndex(self.0 - 1)
    }

    pub fn contains(self, i: i64) -> bool {
        i >= 0 && i < i64::from(self.0)
    }

    /// Clamp an arbitrary signed position into `[0, N-1]`.
    pub fn clamp(self, i: i64) -> FrameIndex {
        FrameIndex(i.clamp(0, i64::from(self.last().0)) as u32)
    }

    /// Normalized playback progress `index / max(1, N-1)`, in `[0, 1]`.
    pub fn progress(self, i: FrameIndex) -> f64 {
        let denom = self.last().0.max(1);
        (f64::from(i.0.min(self.last().0)) / f64::from(denom)).clamp(0.0, 1.0)
    }
}

impl TryFrom<u32> for FrameCount {
    type Error = MuxuError;

    fn try_from(n: u32) -> MuxuResult<Self> {
        Self::new(n)
    }
}

impl From<FrameCount> for u32 {
    fn from(c: FrameCount) -> u32 {
        c.0
    }
}

impl Default for FrameCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
