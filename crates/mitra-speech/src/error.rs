//! Errors raised by speech recognizers and the capture state machine.

use crate::state::CaptureState;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("recognizer error: {0}")]
    Recognizer(String),
    #[error("invalid capture transition: {from} -> {to}")]
    InvalidTransition { from: CaptureState, to: CaptureState },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_error_display() {
        assert_eq!(
            SpeechError::Recognizer("no microphone".to_string()).to_string(),
            "recognizer error: no microphone"
        );
        assert_eq!(
            SpeechError::InvalidTransition {
                from: CaptureState::Idle,
                to: CaptureState::Idle,
            }
            .to_string(),
            "invalid capture transition: Idle -> Idle"
        );
    }
}
