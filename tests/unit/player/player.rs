use std::time::Duration;

use super::*;
use crate::{foundation::error::MuxuError, player::prefetch::FrameLoad};

/// Completes every request on the next poll.
#[derive(Default)]
struct InstantLoader {
    pending: Vec<FrameIndex>,
    requested: usize,
    shut_down: bool,
}

impl FrameLoader for InstantLoader {
    type Frame = u32;

    fn request(&mut self, index: FrameIndex) {
        if self.shut_down {
            return;
        }
        self.requested += 1;
        self.pending.push(index);
    }

    fn poll_completed(&mut self) -> Vec<FrameLoad<u32>> {
        self.pending
            .drain(..)
            .map(|index| FrameLoad {
                index,
                result: Ok(index.0),
            })
            .collect()
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
        self.pending.clear();
    }
}

fn player(n: u32) -> FramePlayer<InstantLoader> {
    FramePlayer::new(
        PlayerConfig::default(),
        FrameCount::new(n).unwrap(),
        InstantLoader::default(),
    )
    .unwrap()
}

fn down() -> Gesture {
    Gesture {
        direction: Direction::Down,
        magnitude: 40.0,
    }
}

fn up() -> Gesture {
    Gesture {
        direction: Direction::Up,
        magnitude: 40.0,
    }
}

#[test]
fn construction_primes_the_first_two_frames() {
    let p = player(10);
    assert_eq!(p.loader().pending, vec![FrameIndex(0), FrameIndex(1)]);
    assert!(p.is_locked());
    assert_eq!(p.index(), FrameIndex::ZERO);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = PlayerConfig {
        cache_capacity: 0,
        ..PlayerConfig::default()
    };
    let res = FramePlayer::new(cfg, FrameCount::new(10).unwrap(), InstantLoader::default());
    assert!(matches!(res, Err(MuxuError::Validation(_))));
}

#[test]
fn down_gesture_sweeps_to_the_last_frame() {
    let mut p = player(10);
    let t0 = Instant::now();

    assert_eq!(
        p.handle_gesture(down(), 0.0, t0),
        GestureOutcome::SweepStarted(Direction::Down)
    );
    assert!(p.is_animating());

    // Full sweep over 10 frames lasts 3200 * 9 / 10 = 2880ms.
    let mid = p.tick(t0 + Duration::from_millis(1440));
    assert_eq!(mid.index, FrameIndex(4));
    assert!(mid.animating);
    assert_eq!(mid.completed, None);

    let end = p.tick(t0 + Duration::from_millis(3000));
    assert_eq!(end.index, FrameIndex(9));
    assert!(!end.animating);
    assert_eq!(end.completed, Some(Direction::Down));
    assert_eq!(end.overlays.title.opacity, 1.0);
}

#[test]
fn gestures_during_a_sweep_are_swallowed() {
    let mut p = player(10);
    let t0 = Instant::now();
    p.handle_gesture(down(), 0.0, t0);

    let outcome = p.handle_gesture(up(), 0.0, t0 + Duration::from_millis(100));
    assert_eq!(outcome, GestureOutcome::Swallowed);
    assert!(outcome.suppresses_scroll());
    assert_eq!(p.state().direction(), Some(Direction::Down));
}

#[test]
fn up_gesture_after_a_forward_sweep_plays_backwards() {
    let mut p = player(10);
    let t0 = Instant::now();
    p.handle_gesture(down(), 0.0, t0);
    p.tick(t0 + Duration::from_secs(4));

    let t1 = t0 + Duration::from_secs(5);
    assert_eq!(
        p.handle_gesture(up(), 0.0, t1),
        GestureOutcome::SweepStarted(Direction::Up)
    );
    let end = p.tick(t1 + Duration::from_secs(4));
    assert_eq!(end.index, FrameIndex::ZERO);
    assert_eq!(end.completed, Some(Direction::Up));
}

#[test]
fn completion_reached_before_a_gesture_is_reported_on_the_next_tick() {
    let mut p = player(10);
    let t0 = Instant::now();
    p.handle_gesture(down(), 0.0, t0);
    p.tick(t0 + Duration::from_secs(4));

    let t1 = t0 + Duration::from_secs(5);
    p.handle_gesture(up(), 0.0, t1);

    // The upward sweep ends before this gesture arrives; no tick ran in between.
    let t2 = t1 + Duration::from_secs(4);
    assert_eq!(
        p.handle_gesture(down(), 0.0, t2),
        GestureOutcome::SweepStarted(Direction::Down)
    );
    let tick = p.tick(t2);
    assert_eq!(tick.completed, Some(Direction::Up));
    assert_eq!(tick.index, FrameIndex::ZERO);
    assert!(tick.animating);

    let next = p.tick(t2 + Duration::from_millis(16));
    assert_eq!(next.completed, None);
}

#[test]
fn down_at_the_last_frame_releases_capture_until_the_page_returns() {
    let mut p = player(10);
    let t0 = Instant::now();
    p.handle_gesture(down(), 0.0, t0);
    p.tick(t0 + Duration::from_secs(4));

    let t1 = t0 + Duration::from_secs(5);
    let outcome = p.handle_gesture(down(), 0.0, t1);
    assert_eq!(outcome, GestureOutcome::ReleaseCapture);
    assert!(!p.is_locked());

    // Released: gestures pass through and the page is free to scroll.
    assert_eq!(p.handle_gesture(up(), 0.0, t1), GestureOutcome::PassThrough);
    assert!(!p.on_scroll(20.0));
    assert!(!p.is_locked());
    assert!(!p.on_scroll(600.0));

    // Back into the lock zone: captured again, parked on the last frame.
    assert!(p.on_scroll(40.0));
    assert!(p.is_locked());
    assert_eq!(p.index(), FrameIndex(9));
}

#[test]
fn up_at_the_first_frame_depends_on_the_page_offset() {
    let mut p = player(10);
    let now = Instant::now();
    assert_eq!(p.handle_gesture(up(), 50.0, now), GestureOutcome::ScrollToTop);
    assert_eq!(p.handle_gesture(up(), 0.0, now), GestureOutcome::PassThrough);
    assert!(!GestureOutcome::ScrollToTop.suppresses_scroll());
}

#[test]
fn gestures_outside_the_capture_zone_pass_through() {
    let mut p = player(10);
    let now = Instant::now();
    assert_eq!(
        p.handle_gesture(down(), 150.0, now),
        GestureOutcome::PassThrough
    );
    assert!(!p.is_animating());
}

#[test]
fn zero_wheel_delta_is_ignored() {
    let mut p = player(10);
    let outcome = p.handle_input(InputEvent::Wheel { delta_y: 0.0 }, 0.0, Instant::now());
    assert_eq!(outcome, GestureOutcome::PassThrough);
    assert!(!p.is_animating());
}

#[test]
fn tick_paints_the_nearest_loaded_frame() {
    let mut p = player(100);
    let t0 = Instant::now();

    let first = p.tick(t0);
    assert_eq!(first.drawn, Some(FrameIndex(0)));
    assert_eq!(first.overlays.title.opacity, 0.0);
    assert_eq!(p.current_frame(), Some(&0));

    // The look-ahead window was requested on that tick and lands on the next one.
    p.handle_gesture(down(), 0.0, t0);
    let later = p.tick(t0 + Duration::from_millis(200));
    assert!(later.index.0 > 0);
    assert_eq!(later.drawn, Some(later.index));
    assert!(p.cache().len() <= p.cache().capacity());
}

#[test]
fn on_scroll_reports_suppression_inside_the_lock_zone() {
    let mut p = player(10);
    assert!(p.on_scroll(0.0));
    assert!(!p.on_scroll(120.0));
    assert!(p.is_locked());
}

#[test]
fn shutdown_stops_loading_and_playback() {
    let mut p = player(10);
    let t0 = Instant::now();
    p.handle_gesture(down(), 0.0, t0);
    p.shutdown();

    assert!(!p.is_animating());
    assert_eq!(p.prefetcher().in_flight(), 0);
    let before = p.loader().requested;
    p.tick(t0 + Duration::from_millis(500));
    assert_eq!(p.loader().requested, before);
}

#[test]
fn seek_clamps_and_cancels_the_sweep() {
    let mut p = player(10);
    let t0 = Instant::now();
    p.handle_gesture(down(), 0.0, t0);
    p.seek(FrameIndex(50));
    assert_eq!(p.index(), FrameIndex(9));
    assert!(!p.is_animating());
}
