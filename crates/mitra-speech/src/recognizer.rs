//! Recognizer seam.
//!
//! A platform recognizer is started with a spoken-language tag and a sink. It
//! reports what it heard through the sink, at any later point, from any
//! thread. Each sink is stamped with the capture generation that created it so
//! the adapter can drop reports from a session it already stopped.

use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::error::SpeechError;

/// What a recognizer reports for one capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Best transcript of a single utterance.
    Transcript(String),
    /// Recognition failed. The reason is for logs only.
    Error(String),
    /// Input ended without a transcript.
    End,
}

/// A [`RecognitionEvent`] tagged with the session that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureEvent {
    pub generation: u64,
    pub event: RecognitionEvent,
}

/// Delivery handle given to a recognizer on `start`.
#[derive(Debug, Clone)]
pub struct RecognitionSink {
    generation: u64,
    tx: mpsc::UnboundedSender<CaptureEvent>,
}

impl RecognitionSink {
    pub(crate) fn new(generation: u64, tx: mpsc::UnboundedSender<CaptureEvent>) -> Self {
        Self { generation, tx }
    }

    /// Deliver an event. Returns false once the adapter has been dropped.
    pub fn send(&self, event: RecognitionEvent) -> bool {
        self.tx
            .send(CaptureEvent {
                generation: self.generation,
                event,
            })
            .is_ok()
    }
}

/// A speech-recognition capability.
pub trait SpeechRecognizer: Send {
    /// Begin capturing one utterance in `language_tag` (BCP 47).
    fn start(&mut self, language_tag: &str, sink: RecognitionSink) -> Result<(), SpeechError>;

    /// Abort the current capture, if any.
    fn stop(&mut self);
}

/// Recognizer that replays a fixed queue of outcomes, one per `start`.
///
/// `Ok(text)` yields a transcript followed by end of input, `Err(reason)`
/// yields a recognition error. An exhausted queue just ends the input.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    script: VecDeque<Result<String, String>>,
    last_language: Option<String>,
}

impl ScriptedRecognizer {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Result<String, String>>,
    {
        Self {
            script: script.into_iter().collect(),
            last_language: None,
        }
    }

    /// Build a script where every line is a successful utterance. Blank lines are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(|l| Ok(l.to_string())),
        )
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn last_language(&self) -> Option<&str> {
        self.last_language.as_deref()
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn start(&mut self, language_tag: &str, sink: RecognitionSink) -> Result<(), SpeechError> {
        self.last_language = Some(language_tag.to_string());
        match self.script.pop_front() {
            Some(Ok(text)) => {
                sink.send(RecognitionEvent::Transcript(text));
                sink.send(RecognitionEvent::End);
            }
            Some(Err(reason)) => {
                sink.send(RecognitionEvent::Error(reason));
            }
            None => {
                sink.send(RecognitionEvent::End);
            }
        }
        Ok(())
    }

    fn stop(&mut self) {}
}
