//! Reduces raw wheel/touch events to a single gesture value.

/// Scroll direction of a gesture. `Down` plays the sequence forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Down,
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub direction: Direction,
    /// Absolute delta in pixels.
    pub magnitude: f64,
}

/// Raw pointer input as delivered by the host page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Wheel delta; positive scrolls down.
    Wheel { delta_y: f64 },
    TouchStart { y: f64 },
    /// Finger position; moving the finger up scrolls down.
    TouchMove { y: f64 },
}

#[derive(Clone, Debug)]
pub struct InputNormalizer {
    touch_threshold: f64,
    touch_y: f64,
}

impl InputNormalizer {
    pub fn new(touch_threshold: f64) -> Self {
        Self {
            touch_threshold,
            touch_y: 0.0,
        }
    }

    pub fn normalize(&mut self, event: InputEvent) -> Option<Gesture> {
        match event {
            InputEvent::Wheel { delta_y } => gesture_from_delta(delta_y),
            InputEvent::TouchStart { y } => {
                self.touch_y = y;
                None
            }
            InputEvent::TouchMove { y } => {
                let dy = self.touch_y - y;
                // The reference follows the finger even for ignored jitter.
                self.touch_y = y;
                if dy.abs() < self.touch_threshold {
                    return None;
                }
                gesture_from_delta(dy)
            }
        }
    }
}

fn gesture_from_delta(delta: f64) -> Option<Gesture> {
    if !delta.is_finite() || delta == 0.0 {
        return None;
    }
    let direction = if delta > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(Gesture {
        direction,
        magnitude: delta.abs(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/player/input.rs"]
mod tests;
