//! Scroll-driven frame sequence player for the landing hero.
//!
//! The player owns every piece of mutable playback state: the [`PlaybackState`] machine, the
//! current index, the [`FrameCache`] and the [`Prefetcher`] bookkeeping. Hosts feed it input
//! events and call [`FramePlayer::tick`] once per display frame; nothing here blocks.
//!
//! ```ignore
//! let mut player = FramePlayer::open(AssetRoot::parse("public/hero-frames"), PlayerConfig::default())?;
//! let outcome = player.handle_input(InputEvent::Wheel { delta_y: 40.0 }, 0.0, Instant::now());
//! if outcome.suppresses_scroll() { /* prevent the native scroll */ }
//! let tick = player.tick(Instant::now());
//! ```

pub mod cache;
pub mod input;
pub mod overlay;
pub mod prefetch;
pub mod sweep;

use std::time::Instant;

use crate::{
    assets::{
        pool::DecodePool,
        source::{AssetRoot, resolve_frame_count},
    },
    config::PlayerConfig,
    foundation::{
        core::{FrameCount, FrameIndex},
        error::MuxuResult,
    },
};

use cache::FrameCache;
use input::{Direction, Gesture, InputEvent, InputNormalizer};
use overlay::Overlays;
use prefetch::{FrameLoader, Prefetcher};
use sweep::{PlaybackState, sample_sweep};

/// What the host should do with the native scroll after a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureOutcome {
    /// Not captured; let the page scroll.
    PassThrough,
    /// Captured while a sweep is running; dropped.
    Swallowed,
    SweepStarted(Direction),
    /// Pushed past the last frame: capture is released and the page should move on to the
    /// next section.
    ReleaseCapture,
    /// Pushed above the first frame while the page is not at its top: scroll to the top.
    ScrollToTop,
}

impl GestureOutcome {
    pub fn suppresses_scroll(self) -> bool {
        matches!(
            self,
            Self::Swallowed | Self::SweepStarted(_) | Self::ReleaseCapture
        )
    }
}

/// Result of one render-loop tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameTick {
    /// Logical playback index.
    pub index: FrameIndex,
    /// Cached frame to paint (nearest available to `index`); `None` paints black.
    pub drawn: Option<FrameIndex>,
    pub overlays: Overlays,
    pub animating: bool,
    /// Set on the tick a sweep reaches its bound. After an upward sweep the host should also
    /// scroll the page to its top.
    pub completed: Option<Direction>,
}

pub struct FramePlayer<L: FrameLoader> {
    config: PlayerConfig,
    count: FrameCount,
    index: FrameIndex,
    state: PlaybackState,
    locked: bool,
    // Page scrolled past the lock zone since capture was released.
    left_zone: bool,
    // Finished sweep not yet reported by `tick`.
    pending_completed: Option<Direction>,
    input: InputNormalizer,
    cache: FrameCache<L::Frame>,
    prefetch: Prefetcher,
    loader: L,
}

impl FramePlayer<DecodePool> {
    /// Resolve the sequence length from `meta.json` (falling back to the configured default)
    /// and start decoding frames from `root` in the background.
    #[tracing::instrument(skip(config))]
    pub fn open(root: AssetRoot, config: PlayerConfig) -> MuxuResult<Self> {
        config.validate()?;
        let count = resolve_frame_count(&root, config.default_frame_count);
        let pool = DecodePool::spawn(root, count, config.loader_threads)?;
        Self::new(config, count, pool)
    }
}

impl<L: FrameLoader> FramePlayer<L> {
    pub fn new(config: PlayerConfig, count: FrameCount, mut loader: L) -> MuxuResult<Self> {
        config.validate()?;
        let cache = FrameCache::new(config.cache_capacity);
        let mut prefetch = Prefetcher::new(config.look_ahead, config.prefetch_interval());
        prefetch.prime(&cache, &mut loader, count);
        tracing::debug!(frames = count.get(), capacity = cache.capacity(), "frame player ready");
        Ok(Self {
            input: InputNormalizer::new(config.touch_threshold_px),
            config,
            count,
            index: FrameIndex::ZERO,
            state: PlaybackState::Idle,
            locked: true,
            left_zone: false,
            pending_completed: None,
            cache,
            prefetch,
            loader,
        })
    }

    pub fn frame_count(&self) -> FrameCount {
        self.count
    }

    pub fn index(&self) -> FrameIndex {
        self.index
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Whether gestures are currently captured by the player.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn cache(&self) -> &FrameCache<L::Frame> {
        &self.cache
    }

    pub fn prefetcher(&self) -> &Prefetcher {
        &self.prefetch
    }

    pub fn frame(&self, index: FrameIndex) -> Option<&L::Frame> {
        self.cache.get(index)
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Normalize a raw input event and feed it to [`FramePlayer::handle_gesture`].
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        scroll_offset: f64,
        now: Instant,
    ) -> GestureOutcome {
        match self.input.normalize(event) {
            Some(g) => self.handle_gesture(g, scroll_offset, now),
            None => GestureOutcome::PassThrough,
        }
    }

    pub fn handle_gesture(
        &mut self,
        gesture: Gesture,
        scroll_offset: f64,
        now: Instant,
    ) -> GestureOutcome {
        if scroll_offset > self.config.capture_zone_px || !self.locked {
            return GestureOutcome::PassThrough;
        }
        self.advance(now);
        if self.state.is_animating() {
            return GestureOutcome::Swallowed;
        }

        match gesture.direction {
            Direction::Down if self.index < self.count.last() => {
                self.start_sweep(Direction::Down, now);
                GestureOutcome::SweepStarted(Direction::Down)
            }
            Direction::Down => {
                self.locked = false;
                self.left_zone = false;
                tracing::debug!("capture released at last frame");
                GestureOutcome::ReleaseCapture
            }
            Direction::Up if self.index > FrameIndex::ZERO => {
                self.start_sweep(Direction::Up, now);
                GestureOutcome::SweepStarted(Direction::Up)
            }
            Direction::Up if scroll_offset > 0.0 => GestureOutcome::ScrollToTop,
            Direction::Up => GestureOutcome::PassThrough,
        }
    }

    /// Track the page scroll offset. Returns whether native scrolling should stay suppressed.
    ///
    /// Once the page has left the lock zone after capture was released, scrolling back into
    /// it re-engages capture with the sequence parked on its last frame.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> bool {
        if !self.locked && scroll_offset >= self.config.lock_zone_px {
            self.left_zone = true;
        }
        if !self.locked && self.left_zone && scroll_offset < self.config.lock_zone_px {
            self.locked = true;
            self.left_zone = false;
            self.state = PlaybackState::Idle;
            self.index = self.count.last();
            tracing::debug!("capture re-engaged");
        }
        self.locked && scroll_offset < self.config.lock_zone_px
    }

    /// Park the sequence on `index` (clamped), cancelling any sweep.
    pub fn seek(&mut self, index: FrameIndex) {
        self.index = self.count.clamp(i64::from(index.0));
        self.state = PlaybackState::Idle;
    }

    /// Start a sweep towards the end selected by `direction`, overriding any sweep in flight.
    pub fn start_sweep(&mut self, direction: Direction, now: Instant) {
        self.state = PlaybackState::sweep(direction, self.index, now, self.count);
        if let Some(d) = self.state.direction() {
            tracing::trace!(direction = ?d, from = self.index.0, "sweep started");
        }
    }

    /// Move the index along the running sweep. A sweep that reaches its bound is recorded in
    /// `pending_completed` until the next [`FramePlayer::tick`] reports it.
    fn advance(&mut self, now: Instant) {
        let (direction, start, started_at) = match self.state {
            PlaybackState::Idle => return,
            PlaybackState::SweepingForward { start, started_at } => {
                (Direction::Down, start, started_at)
            }
            PlaybackState::SweepingBackward { start, started_at } => {
                (Direction::Up, start, started_at)
            }
        };
        let elapsed = now.saturating_duration_since(started_at);
        let (index, done) = sample_sweep(
            direction,
            start,
            elapsed,
            self.config.target_duration(),
            self.count,
        );
        self.index = index;
        if done {
            self.state = PlaybackState::Idle;
            self.pending_completed = Some(direction);
        }
    }

    /// Apply finished loads and run the prefetch window when due.
    pub fn poll(&mut self, now: Instant) {
        for load in self.loader.poll_completed() {
            self.prefetch.complete(load, &mut self.cache, self.index);
        }
        self.prefetch
            .tick(now, self.index, &self.cache, &mut self.loader, self.count);
    }

    /// One render-loop step: advance the sweep, service loads, resolve the frame to paint.
    pub fn tick(&mut self, now: Instant) -> FrameTick {
        self.advance(now);
        let completed = self.pending_completed.take();
        self.poll(now);
        FrameTick {
            index: self.index,
            drawn: self.cache.closest(self.index, self.count).map(|(i, _)| i),
            overlays: overlay::overlays(self.count.progress(self.index)),
            animating: self.state.is_animating(),
            completed,
        }
    }

    /// Nearest cached frame to the current index; `None` only while the cache is empty.
    pub fn current_frame(&self) -> Option<&L::Frame> {
        self.cache.closest(self.index, self.count).map(|(_, f)| f)
    }

    /// Stop background loading. Playback state stays readable.
    pub fn shutdown(&mut self) {
        self.loader.shutdown();
        self.prefetch.reset();
        self.state = PlaybackState::Idle;
        self.pending_completed = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/player.rs"]
mod tests;
