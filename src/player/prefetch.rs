use std::{
    collections::BTreeSet,
    time::{Duration, Instant},
};

use crate::{
    foundation::{
        core::{FrameCount, FrameIndex},
        error::MuxuResult,
    },
    player::cache::FrameCache,
};

/// Outcome of one asynchronous frame load.
#[derive(Debug)]
pub struct FrameLoad<T> {
    pub index: FrameIndex,
    pub result: MuxuResult<T>,
}

/// Fire-and-forget frame source.
///
/// `request` must not block; finished loads are handed back through `poll_completed`, which
/// the player calls from its own thread. Implementations may complete requests in any order.
pub trait FrameLoader {
    type Frame;

    fn request(&mut self, index: FrameIndex);

    fn poll_completed(&mut self) -> Vec<FrameLoad<Self::Frame>>;

    /// Stop background work. Later requests are dropped.
    fn shutdown(&mut self) {}
}

/// Tracks in-flight loads and schedules the periodic look-ahead window.
#[derive(Debug)]
pub struct Prefetcher {
    look_ahead: u32,
    interval: Duration,
    in_flight: BTreeSet<FrameIndex>,
    last_tick: Option<Instant>,
    failures: u64,
}

impl Prefetcher {
    pub fn new(look_ahead: u32, interval: Duration) -> Self {
        Self {
            look_ahead,
            interval,
            in_flight: BTreeSet::new(),
            last_tick: None,
            failures: 0,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_in_flight(&self, index: FrameIndex) -> bool {
        self.in_flight.contains(&index)
    }

    /// Number of loads that failed so far.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Indices of the window around `current`, nearest first, forward before backward.
    pub fn window(current: FrameIndex, look_ahead: u32, count: FrameCount) -> Vec<FrameIndex> {
        let mut out = Vec::with_capacity(look_ahead as usize * 2 + 1);
        let c = i64::from(current.0);
        for k in 0..=i64::from(look_ahead) {
            if count.contains(c + k) {
                out.push(FrameIndex((c + k) as u32));
            }
            if k > 0 && count.contains(c - k) {
                out.push(FrameIndex((c - k) as u32));
            }
        }
        out
    }

    /// Request one frame unless it is out of range, cached or already loading.
    pub fn request<L: FrameLoader>(
        &mut self,
        index: FrameIndex,
        cache: &FrameCache<L::Frame>,
        loader: &mut L,
        count: FrameCount,
    ) -> bool {
        if !count.contains(i64::from(index.0))
            || cache.contains(index)
            || self.in_flight.contains(&index)
        {
            return false;
        }
        self.in_flight.insert(index);
        loader.request(index);
        true
    }

    /// Request the first two frames so the first paint is not blank.
    pub fn prime<L: FrameLoader>(
        &mut self,
        cache: &FrameCache<L::Frame>,
        loader: &mut L,
        count: FrameCount,
    ) {
        self.request(FrameIndex(0), cache, loader, count);
        self.request(FrameIndex(1), cache, loader, count);
    }

    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_tick {
            None => true,
            Some(t) => now.saturating_duration_since(t) >= self.interval,
        }
    }

    /// Request the look-ahead window if the interval elapsed. Returns the number of new requests.
    pub fn tick<L: FrameLoader>(
        &mut self,
        now: Instant,
        current: FrameIndex,
        cache: &FrameCache<L::Frame>,
        loader: &mut L,
        count: FrameCount,
    ) -> usize {
        if !self.is_due(now) {
            return 0;
        }
        self.last_tick = Some(now);
        Self::window(current, self.look_ahead, count)
            .into_iter()
            .filter(|&i| self.request(i, cache, loader, count))
            .count()
    }

    /// Apply a finished load. Failures are forgotten so a later tick retries them.
    pub fn complete<T>(
        &mut self,
        load: FrameLoad<T>,
        cache: &mut FrameCache<T>,
        current: FrameIndex,
    ) -> Vec<FrameIndex> {
        self.in_flight.remove(&load.index);
        match load.result {
            Ok(frame) => cache.insert(load.index, frame, current),
            Err(err) => {
                self.failures += 1;
                tracing::debug!(index = load.index.0, %err, "frame load failed; will retry");
                Vec::new()
            }
        }
    }

    /// Forget in-flight bookkeeping, e.g. after the loader shut down.
    pub fn reset(&mut self) {
        self.in_flight.clear();
        self.last_tick = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/prefetch.rs"]
mod tests;
