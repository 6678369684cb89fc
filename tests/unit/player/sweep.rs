use super::*;

const TARGET: Duration = Duration::from_millis(3200);

fn n(v: u32) -> FrameCount {
    FrameCount::new(v).unwrap()
}

#[test]
fn duration_scales_with_frames_remaining() {
    let count = n(439);
    let full = sweep_duration(TARGET, 438, count);
    let half = sweep_duration(TARGET, 219, count);
    let ratio = half.as_secs_f64() / full.as_secs_f64();
    assert!((ratio - 0.5).abs() < 1e-9, "ratio={ratio}");
    assert!(full <= TARGET);
}

#[test]
fn forward_sweep_lands_exactly_on_last_frame() {
    let count = n(439);
    for start in [0u32, 1, 200, 437] {
        let (idx, done) = sample_sweep(
            Direction::Down,
            FrameIndex(start),
            Duration::from_secs(60),
            TARGET,
            count,
        );
        assert_eq!(idx, FrameIndex(438));
        assert!(done);
    }
}

#[test]
fn backward_sweep_lands_exactly_on_zero() {
    let count = n(439);
    for start in [1u32, 5, 438] {
        let (idx, done) = sample_sweep(
            Direction::Up,
            FrameIndex(start),
            Duration::from_secs(60),
            TARGET,
            count,
        );
        assert_eq!(idx, FrameIndex(0));
        assert!(done);
    }
}

#[test]
fn sweep_is_monotonic_over_time() {
    let count = n(439);
    let mut prev = 0;
    for ms in (0..4000).step_by(7) {
        let (idx, _) = sample_sweep(
            Direction::Down,
            FrameIndex(0),
            Duration::from_millis(ms),
            TARGET,
            count,
        );
        assert!(idx.0 >= prev);
        prev = idx.0;
    }

    let mut prev = 438;
    for ms in (0..4000).step_by(7) {
        let (idx, _) = sample_sweep(
            Direction::Up,
            FrameIndex(438),
            Duration::from_millis(ms),
            TARGET,
            count,
        );
        assert!(idx.0 <= prev);
        prev = idx.0;
    }
}

#[test]
fn midway_through_a_sweep_is_not_done() {
    let count = n(439);
    let d = sweep_duration(TARGET, 438, count);
    let (idx, done) = sample_sweep(Direction::Down, FrameIndex(0), d / 2, TARGET, count);
    assert!(!done);
    assert!((218..=219).contains(&idx.0), "idx={idx:?}");
}

#[test]
fn zero_length_sweep_is_idle() {
    let now = Instant::now();
    let count = n(10);
    assert_eq!(
        PlaybackState::sweep(Direction::Down, FrameIndex(9), now, count),
        PlaybackState::Idle
    );
    assert_eq!(
        PlaybackState::sweep(Direction::Up, FrameIndex(0), now, count),
        PlaybackState::Idle
    );
    assert!(PlaybackState::sweep(Direction::Up, FrameIndex(3), now, count).is_animating());

    let single = n(1);
    assert_eq!(
        PlaybackState::sweep(Direction::Down, FrameIndex(0), now, single),
        PlaybackState::Idle
    );
}
