//! Animated background configuration types.

use serde::{Deserialize, Serialize};

/// Settings handed to the halo effect constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HaloConfig {
    pub mouse_controls: bool,
    pub touch_controls: bool,
    pub gyro_controls: bool,
    pub min_height: f64,
    pub min_width: f64,
    /// 0xRRGGBB
    pub base_color: u32,
    /// 0xRRGGBB
    pub background_color: u32,
    pub y_offset: f64,
}

impl Default for HaloConfig {
    fn default() -> Self {
        Self {
            mouse_controls: true,
            touch_controls: true,
            gyro_controls: false,
            min_height: 400.0,
            min_width: 800.0,
            base_color: 0x22b945,
            background_color: 0x000000,
            y_offset: 0.20,
        }
    }
}

/// Background effect configuration.
///
/// `scripts` are injected in order; the load event of the last one is the
/// readiness signal for the effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub enabled: bool,
    pub scripts: Vec<String>,
    pub halo: HaloConfig,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scripts: vec![
                "https://cdnjs.cloudflare.com/ajax/libs/three.js/r121/three.min.js".into(),
                "https://cdn.jsdelivr.net/npm/vanta@latest/dist/vanta.halo.min.js".into(),
            ],
            halo: HaloConfig::default(),
        }
    }
}
