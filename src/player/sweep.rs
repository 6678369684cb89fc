use std::time::{Duration, Instant};

use crate::{
    foundation::core::{FrameCount, FrameIndex},
    player::input::Direction,
};

/// Playback state machine of the hero sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    SweepingForward {
        start: FrameIndex,
        started_at: Instant,
    },
    SweepingBackward {
        start: FrameIndex,
        started_at: Instant,
    },
}

impl PlaybackState {
    pub fn is_animating(self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Idle => None,
            Self::SweepingForward { .. } => Some(Direction::Down),
            Self::SweepingBackward { .. } => Some(Direction::Up),
        }
    }

    /// State for a sweep from `start` towards the end selected by `direction`.
    ///
    /// Returns `Idle` when `start` already sits on that end.
    pub fn sweep(
        direction: Direction,
        start: FrameIndex,
        started_at: Instant,
        count: FrameCount,
    ) -> Self {
        if frames_to_travel(direction, start, count) == 0 {
            return Self::Idle;
        }
        match direction {
            Direction::Down => Self::SweepingForward { start, started_at },
            Direction::Up => Self::SweepingBackward { start, started_at },
        }
    }
}

pub fn frames_to_travel(direction: Direction, start: FrameIndex, count: FrameCount) -> u32 {
    let start = start.0.min(count.last().0);
    match direction {
        Direction::Down => count.last().0 - start,
        Direction::Up => start,
    }
}

/// `target × frames / N`: partial sweeps keep the apparent frame rate of a full one.
pub fn sweep_duration(target: Duration, frames: u32, count: FrameCount) -> Duration {
    target.mul_f64(f64::from(frames) / f64::from(count.get()))
}

/// Index reached `elapsed` into a sweep, and whether the sweep has reached its bound.
pub fn sample_sweep(
    direction: Direction,
    start: FrameIndex,
    elapsed: Duration,
    target: Duration,
    count: FrameCount,
) -> (FrameIndex, bool) {
    let start = FrameIndex(start.0.min(count.last().0));
    let remaining = frames_to_travel(direction, start, count);
    if remaining == 0 {
        return (start, true);
    }

    let duration = sweep_duration(target, remaining, count);
    let progress = if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    };
    let step = ((progress * f64::from(remaining)).floor() as u32).min(remaining);

    let index = match direction {
        Direction::Down => start.0 + step,
        Direction::Up => start.0 - step,
    };
    (FrameIndex(index), step == remaining)
}

#[cfg(test)]
#[path = "../../tests/unit/player/sweep.rs"]
mod tests;
