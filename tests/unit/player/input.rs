use super::*;

#[test]
fn wheel_sign_maps_to_direction() {
    let mut n = InputNormalizer::new(15.0);
    let g = n.normalize(InputEvent::Wheel { delta_y: 3.0 }).unwrap();
    assert_eq!(g.direction, Direction::Down);
    assert_eq!(g.magnitude, 3.0);

    let g = n.normalize(InputEvent::Wheel { delta_y: -120.0 }).unwrap();
    assert_eq!(g.direction, Direction::Up);
    assert_eq!(g.magnitude, 120.0);

    assert!(n.normalize(InputEvent::Wheel { delta_y: 0.0 }).is_none());
    assert!(n.normalize(InputEvent::Wheel { delta_y: f64::NAN }).is_none());
}

#[test]
fn touch_swipe_up_scrolls_down() {
    let mut n = InputNormalizer::new(15.0);
    assert!(n.normalize(InputEvent::TouchStart { y: 500.0 }).is_none());
    let g = n.normalize(InputEvent::TouchMove { y: 470.0 }).unwrap();
    assert_eq!(g.direction, Direction::Down);
    assert_eq!(g.magnitude, 30.0);

    let g = n.normalize(InputEvent::TouchMove { y: 520.0 }).unwrap();
    assert_eq!(g.direction, Direction::Up);
}

#[test]
fn touch_jitter_is_ignored_but_moves_reference() {
    let mut n = InputNormalizer::new(15.0);
    n.normalize(InputEvent::TouchStart { y: 500.0 });
    assert!(n.normalize(InputEvent::TouchMove { y: 490.0 }).is_none());
    // 490 -> 480 is 10px from the updated reference, still below threshold.
    assert!(n.normalize(InputEvent::TouchMove { y: 480.0 }).is_none());
    assert!(n.normalize(InputEvent::TouchMove { y: 460.0 }).is_some());
}
