//! Per-section reveal state machine.

use folio_config::schema::RevealPolicy;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// Tracks whether a section has been revealed.
///
/// Under [`RevealPolicy::Once`] the only transition is `Hidden -> Visible`,
/// taken on the first intersection. Under [`RevealPolicy::Replay`] leaving
/// the viewport returns to `Hidden`.
#[derive(Debug, Clone)]
pub struct RevealController {
    state: RevealState,
    policy: RevealPolicy,
    reveals: u32,
}

impl RevealController {
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            state: RevealState::Hidden,
            policy,
            reveals: 0,
        }
    }

    /// Feed an intersection change. Returns the new state if it changed.
    pub fn observe(&mut self, intersecting: bool) -> Option<RevealState> {
        let next = match (self.state, intersecting, self.policy) {
            (RevealState::Hidden, true, _) => RevealState::Visible,
            (RevealState::Visible, false, RevealPolicy::Replay) => RevealState::Hidden,
            _ => return None,
        };
        trace!(?next, "reveal transition");
        self.state = next;
        if next == RevealState::Visible {
            self.reveals += 1;
        }
        Some(next)
    }

    /// Reveal without waiting for an intersection (content above the fold).
    pub fn reveal_now(&mut self) -> Option<RevealState> {
        self.observe(true)
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// How many times the reveal animation has started.
    pub fn reveals(&self) -> u32 {
        self.reveals
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(RevealPolicy::Once)
    }
}
