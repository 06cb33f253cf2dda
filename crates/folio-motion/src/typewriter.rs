//! Character-by-character text reveal for the hero tagline.

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterStep {
    /// One more character is shown.
    Typed(char),
    /// The full text is shown; the timer should stop.
    Finished,
}

/// Reveals a fixed string one character per tick.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
            shown: 0,
        }
    }

    /// Advance by one character.
    pub fn tick(&mut self) -> TypewriterStep {
        match self.target.get(self.shown) {
            Some(&c) => {
                self.shown += 1;
                TypewriterStep::Typed(c)
            }
            None => TypewriterStep::Finished,
        }
    }

    /// The currently visible prefix.
    pub fn text(&self) -> String {
        self.target[..self.shown].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.shown == self.target.len()
    }

    /// Characters shown so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Total characters in the target.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}
