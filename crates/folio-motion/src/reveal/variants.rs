//! Hidden/visible poses and their CSS rendering.

use super::controller::RevealState;

/// Timing curve for a reveal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Fast start, gentle landing. Used for anything that moves.
    #[default]
    EaseOut,
    /// Symmetric curve for opacity-only fades.
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "cubic-bezier(0.16, 1, 0.3, 1)",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Presentation of an element at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in pixels; positive moves down.
    pub offset_y: f64,
}

impl Pose {
    pub const SHOWN: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub fn faded(offset_y: f64) -> Self {
        Self {
            opacity: 0.0,
            offset_y,
        }
    }
}

/// A hidden pose, a visible pose, and how to move between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealVariants {
    pub hidden: Pose,
    pub visible: Pose,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    pub easing: Easing,
}

impl RevealVariants {
    /// Opacity-only fade.
    pub fn fade(duration: f64) -> Self {
        Self {
            easing: Easing::EaseInOut,
            ..Self::fade_up(0.0, duration)
        }
    }

    /// Fade in while rising `offset_y` pixels into place.
    pub fn fade_up(offset_y: f64, duration: f64) -> Self {
        Self {
            hidden: Pose::faded(offset_y),
            visible: Pose::SHOWN,
            duration,
            delay: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn pose(&self, state: RevealState) -> Pose {
        match state {
            RevealState::Hidden => self.hidden,
            RevealState::Visible => self.visible,
        }
    }

    /// Inline CSS for `state`, including the transition into it.
    pub fn style(&self, state: RevealState) -> String {
        let pose = self.pose(state);
        let duration = millis(self.duration);
        let delay = millis(self.delay);
        let easing = self.easing.css();
        format!(
            "opacity: {}; transform: translateY({}px); \
             transition: opacity {duration}ms {easing} {delay}ms, transform {duration}ms {easing} {delay}ms;",
            pose.opacity, pose.offset_y
        )
    }
}

/// Delay for the item at `index` in a staggered list.
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

fn millis(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0).round() as u64
}
