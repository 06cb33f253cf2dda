//! Navigation bar state.

use folio_common::{NavigationError, SectionId};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated; used for clicks.
    #[default]
    Smooth,
    /// Jump; used when restoring a fragment on load.
    Instant,
}

/// Ask the page to bring an anchor into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub anchor: &'static str,
    pub behavior: ScrollBehavior,
}

/// Tracks the active section and turns selections into scroll requests.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: SectionId,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }

    /// Mark `section` active and request a smooth scroll to its anchor.
    pub fn select(&mut self, section: SectionId) -> ScrollRequest {
        debug!(%section, "navigate");
        self.active = section;
        ScrollRequest {
            anchor: section.anchor(),
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Like [`select`](Self::select), from a section name or `#fragment`.
    /// Unknown names leave the active section unchanged.
    pub fn select_named(&mut self, name: &str) -> Result<ScrollRequest, NavigationError> {
        let section: SectionId = name.parse()?;
        Ok(self.select(section))
    }

    /// Select the section named by a URL fragment such as `#skills`
    /// without animating. Sections render after the browser has already
    /// tried to follow the fragment, so the page has to jump there itself.
    pub fn restore(&mut self, fragment: &str) -> Result<ScrollRequest, NavigationError> {
        let request = self.select_named(fragment)?;
        Ok(ScrollRequest {
            behavior: ScrollBehavior::Instant,
            ..request
        })
    }
}
