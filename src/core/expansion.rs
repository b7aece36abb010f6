//! # Expansion State
//!
//! The two-state machine behind every message row.
//!
//! ```text
//!   ┌───────────┐   toggle   ┌──────────┐
//!   │ Collapsed │ ─────────► │ Expanded │
//!   │ (initial) │ ◄───────── │          │
//!   └───────────┘   toggle   └──────────┘
//! ```
//!
//! There is no terminal state and no guard: every toggle flips the state.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpansionState {
    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            ExpansionState::Collapsed => ExpansionState::Expanded,
            ExpansionState::Expanded => ExpansionState::Collapsed,
        }
    }

    /// Flip in place and return the new state.
    pub fn toggle(&mut self) -> Self {
        *self = self.toggled();
        *self
    }

    pub fn is_expanded(self) -> bool {
        self == ExpansionState::Expanded
    }

    /// Line limit for the body text. `None` means unlimited.
    pub fn max_body_lines(self) -> Option<usize> {
        match self {
            ExpansionState::Collapsed => Some(1),
            ExpansionState::Expanded => None,
        }
    }

    /// Where the background transition should end up: 0.0 is the surface
    /// tone, 1.0 the primary tone.
    pub fn color_target(self) -> f32 {
        match self {
            ExpansionState::Collapsed => 0.0,
            ExpansionState::Expanded => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let state = ExpansionState::default();
        assert_eq!(state, ExpansionState::Collapsed);
        assert_eq!(state.max_body_lines(), Some(1));
        assert_eq!(state.color_target(), 0.0);
    }

    #[test]
    fn single_toggle_expands() {
        let mut state = ExpansionState::default();
        assert_eq!(state.toggle(), ExpansionState::Expanded);
        assert!(state.is_expanded());
        assert_eq!(state.max_body_lines(), None);
        assert_eq!(state.color_target(), 1.0);
    }

    #[test]
    fn double_toggle_restores_original() {
        for original in [ExpansionState::Collapsed, ExpansionState::Expanded] {
            let mut state = original;
            state.toggle();
            state.toggle();
            assert_eq!(state, original);
        }
    }

    #[test]
    fn toggle_is_reversible_indefinitely() {
        let mut state = ExpansionState::Collapsed;
        for i in 1..=101 {
            state.toggle();
            assert_eq!(state.is_expanded(), i % 2 == 1);
        }
    }
}
