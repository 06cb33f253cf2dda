//! Scroll-reveal timing configuration.

use serde::{Deserialize, Serialize};

/// What happens when a revealed section leaves and re-enters the viewport.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    /// Reveal on first entry and stay visible.
    #[default]
    Once,
    /// Hide again on exit so the next entry replays the reveal.
    Replay,
}

/// Reveal animation timings, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Duration of a whole-section reveal.
    pub section_duration: f64,
    /// Duration of a single list item (skill badge, project card).
    pub item_duration: f64,
    /// Extra delay per list position.
    pub stagger_step: f64,
    pub policy: RevealPolicy,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_duration: 0.8,
            item_duration: 0.5,
            stagger_step: 0.1,
            policy: RevealPolicy::Once,
        }
    }
}
