//! Capture state machine.
//!
//! Valid transitions:
//! - Idle -> Listening (start capture)
//! - Listening -> Idle (utterance recognized, error, end of input, or stop)

use std::fmt;

use crate::error::SpeechError;

/// Operational state of the speech capture adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaptureState {
    /// No capture in progress.
    #[default]
    Idle,
    /// Waiting for the recognizer to deliver an utterance.
    Listening,
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "Idle"),
            CaptureState::Listening => write!(f, "Listening"),
        }
    }
}

impl CaptureState {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &CaptureState) -> bool {
        matches!(
            (self, target),
            (CaptureState::Idle, CaptureState::Listening)
                | (CaptureState::Listening, CaptureState::Idle)
        )
    }
}

/// Validating wrapper around [`CaptureState`].
///
/// Owned by a single adapter and driven from one task, so no locking.
#[derive(Debug, Clone, Default)]
pub struct StateMachine {
    state: CaptureState,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> CaptureState {
        self.state
    }

    /// Attempt to transition to the target state.
    pub fn transition(&mut self, target: CaptureState) -> Result<(), SpeechError> {
        if self.state.can_transition_to(&target) {
            tracing::debug!("Capture state: {} -> {}", self.state, target);
            self.state = target;
            Ok(())
        } else {
            Err(SpeechError::InvalidTransition {
                from: self.state,
                to: target,
            })
        }
    }

    /// Force the state machine back to Idle. Idempotent.
    pub fn reset(&mut self) {
        if self.state != CaptureState::Idle {
            tracing::debug!("Capture state reset to Idle from {}", self.state);
        }
        self.state = CaptureState::Idle;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(CaptureState::Idle.to_string(), "Idle");
        assert_eq!(CaptureState::Listening.to_string(), "Listening");
    }

    #[test]
    fn test_valid_transitions() {
        assert!(CaptureState::Idle.can_transition_to(&CaptureState::Listening));
        assert!(CaptureState::Listening.can_transition_to(&CaptureState::Idle));
    }

    #[test]
    fn test_self_transitions_are_invalid() {
        assert!(!CaptureState::Idle.can_transition_to(&CaptureState::Idle));
        assert!(!CaptureState::Listening.can_transition_to(&CaptureState::Listening));
    }

    #[test]
    fn test_state_machine_cycles_indefinitely() {
        let mut sm = StateMachine::new();
        for _ in 0..3 {
            sm.transition(CaptureState::Listening).unwrap();
            assert_eq!(sm.current(), CaptureState::Listening);
            sm.transition(CaptureState::Idle).unwrap();
            assert_eq!(sm.current(), CaptureState::Idle);
        }
    }

    #[test]
    fn test_state_machine_invalid_transition_keeps_state() {
        let mut sm = StateMachine::new();
        let result = sm.transition(CaptureState::Idle);
        match result {
            Err(SpeechError::InvalidTransition { from, to }) => {
                assert_eq!(from, CaptureState::Idle);
                assert_eq!(to, CaptureState::Idle);
            }
            _ => panic!("Expected InvalidTransition"),
        }
        assert_eq!(sm.current(), CaptureState::Idle);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut sm = StateMachine::new();
        sm.reset();
        assert_eq!(sm.current(), CaptureState::Idle);

        sm.transition(CaptureState::Listening).unwrap();
        sm.reset();
        assert_eq!(sm.current(), CaptureState::Idle);
    }
}
