//! Hero section configuration.

use folio_common::SectionId;
use serde::{Deserialize, Serialize};

/// Hero banner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub name: String,
    /// Typed out one character per `typing_interval_ms`.
    pub tagline: String,
    /// Valid range: 10-2000.
    pub typing_interval_ms: u32,
    pub cta_label: String,
    pub cta_target: SectionId,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            name: "Harsh Kumar".into(),
            tagline: "Cloud Engineer & Full Stack Developer".into(),
            typing_interval_ms: 100,
            cta_label: "Get in touch".into(),
            cta_target: SectionId::Contact,
        }
    }
}
