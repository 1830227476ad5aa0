//! Mitra Speech crate - speech capture adapter over an optional recognizer.
//!
//! The adapter moves between two states, Idle -> Listening -> Idle, and hands
//! a recognized utterance back to its owner. When the platform has no
//! recognizer the adapter is still constructed but every start is a no-op.

pub mod capture;
pub mod error;
pub mod recognizer;
pub mod state;

pub use capture::SpeechCapture;
pub use error::SpeechError;
pub use recognizer::{
    CaptureEvent, RecognitionEvent, RecognitionSink, ScriptedRecognizer, SpeechRecognizer,
};
pub use state::CaptureState;
