/// Piecewise-linear fade: 0 below `start`, 1 at or above `end`, linear in between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ramp {
    pub start: f64,
    pub end: f64,
}

impl Ramp {
    pub const TITLE: Ramp = Ramp {
        start: 0.06,
        end: 0.18,
    };
    pub const SUBTITLE: Ramp = Ramp {
        start: 0.12,
        end: 0.26,
    };

    pub fn apply(self, progress: f64) -> f64 {
        if progress.is_nan() || progress <= self.start {
            return 0.0;
        }
        if progress >= self.end {
            return 1.0;
        }
        ((progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OverlayStyle {
    pub opacity: f64,
    /// Downward offset in pixels; the text rises into place as it fades in.
    pub offset_y: f64,
}

impl OverlayStyle {
    fn from_ramp(ramp: Ramp, lift: f64, progress: f64) -> Self {
        let opacity = ramp.apply(progress);
        Self {
            opacity,
            offset_y: lift * (1.0 - opacity),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Overlays {
    pub title: OverlayStyle,
    pub subtitle: OverlayStyle,
}

const TITLE_LIFT_PX: f64 = 12.0;
const SUBTITLE_LIFT_PX: f64 = 10.0;

pub fn overlays(progress: f64) -> Overlays {
    Overlays {
        title: OverlayStyle::from_ramp(Ramp::TITLE, TITLE_LIFT_PX, progress),
        subtitle: OverlayStyle::from_ramp(Ramp::SUBTITLE, SUBTITLE_LIFT_PX, progress),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/overlay.rs"]
mod tests;
