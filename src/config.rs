//! Tunables for the hero player and the checkout backends.
//!
//! Every field has a default so a config file only needs to name what it overrides:
//!
//! ```json
//! { "player": { "cache_capacity": 120 }, "checkout": { "timeout_ms": 5000 } }
//! ```

use std::{path::Path, time::Duration};

use anyhow::Context;

use crate::foundation::{
    core::FrameCount,
    error::{MuxuError, MuxuResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Frame count assumed when `meta.json` is missing or unreadable.
    pub default_frame_count: FrameCount,
    /// Wall-clock length of a full sweep over the sequence.
    pub target_duration_ms: u64,
    /// Maximum decoded frames retained.
    pub cache_capacity: usize,
    /// Prefetch window radius around the current index.
    pub look_ahead: u32,
    pub prefetch_interval_ms: u64,
    /// Gestures are captured only while the page scroll offset is at or below this.
    pub capture_zone_px: f64,
    /// Scrolling back above this offset re-engages capture.
    pub lock_zone_px: f64,
    /// Touch moves shorter than this are ignored.
    pub touch_threshold_px: f64,
    pub loader_threads: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_frame_count: FrameCount::DEFAULT,
            target_duration_ms: 3200,
            cache_capacity: 80,
            look_ahead: 45,
            prefetch_interval_ms: 120,
            capture_zone_px: 100.0,
            lock_zone_px: 80.0,
            touch_threshold_px: 15.0,
            loader_threads: 4,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> MuxuResult<()> {
        if self.target_duration_ms == 0 {
            return Err(MuxuError::validation("target_duration_ms must be > 0"));
        }
        if self.cache_capacity == 0 {
            return Err(MuxuError::validation("cache_capacity must be > 0"));
        }
        if self.loader_threads == 0 {
            return Err(MuxuError::validation("loader_threads must be > 0"));
        }
        for (name, v) in [
            ("capture_zone_px", self.capture_zone_px),
            ("lock_zone_px", self.lock_zone_px),
            ("touch_threshold_px", self.touch_threshold_px),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(MuxuError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    pub fn target_duration(&self) -> Duration {
        Duration::from_millis(self.target_duration_ms)
    }

    pub fn prefetch_interval(&self) -> Duration {
        Duration::from_millis(self.prefetch_interval_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Session endpoint of the hosted checkout API.
    pub hosted_endpoint: String,
    /// Session endpoint of the card-payment processor.
    pub card_endpoint: String,
    pub timeout_ms: u64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            hosted_endpoint: "http://localhost:3000/api/create-cart-checkout".to_string(),
            card_endpoint: "http://localhost:3000/api/create-stripe-checkout".to_string(),
            timeout_ms: 15_000,
        }
    }
}

impl CheckoutConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub checkout: CheckoutConfig,
}

impl Config {
    pub fn from_json_str(s: &str) -> MuxuResult<Self> {
        let cfg: Config =
            serde_json::from_str(s).map_err(|e| MuxuError::serde(format!("config: {e}")))?;
        cfg.player.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> MuxuResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
