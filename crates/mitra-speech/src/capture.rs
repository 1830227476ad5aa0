//! Speech capture adapter.
//!
//! Wraps an optional [`SpeechRecognizer`] behind `start`/`stop` and turns its
//! reports into at most one transcript per capture session. Every failure is
//! absorbed here: the adapter logs it and falls back to Idle.

use tokio::sync::mpsc;

use mitra_core::Locale;

use crate::recognizer::{CaptureEvent, RecognitionEvent, RecognitionSink, SpeechRecognizer};
use crate::state::{CaptureState, StateMachine};

pub struct SpeechCapture {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    locale: Locale,
    state: StateMachine,
    /// Bumped on every start so late reports from older sessions can be told apart.
    generation: u64,
    events_tx: mpsc::UnboundedSender<CaptureEvent>,
    events_rx: mpsc::UnboundedReceiver<CaptureEvent>,
}

impl std::fmt::Debug for SpeechCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechCapture")
            .field("available", &self.recognizer.is_some())
            .field("locale", &self.locale)
            .field("state", &self.state.current())
            .field("generation", &self.generation)
            .finish()
    }
}

impl SpeechCapture {
    /// Bind an adapter to `locale`. `None` means the platform has no recognizer.
    pub fn new(recognizer: Option<Box<dyn SpeechRecognizer>>, locale: Locale) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            recognizer,
            locale,
            state: StateMachine::new(),
            generation: 0,
            events_tx,
            events_rx,
        }
    }

    /// Adapter with no capability. Voice controls stay inert.
    pub fn unavailable(locale: Locale) -> Self {
        Self::new(None, locale)
    }

    pub fn is_available(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.state.current() == CaptureState::Listening
    }

    pub fn state(&self) -> CaptureState {
        self.state.current()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Begin a capture session.
    ///
    /// Returns false without doing anything when no recognizer is bound or a
    /// session is already running. A recognizer that refuses to start leaves
    /// the adapter Idle.
    pub fn start(&mut self) -> bool {
        let Some(recognizer) = self.recognizer.as_mut() else {
            tracing::debug!("Speech start ignored: no recognizer");
            return false;
        };
        if self.state.transition(CaptureState::Listening).is_err() {
            tracing::debug!("Speech start ignored: already listening");
            return false;
        }

        self.generation += 1;
        let sink = RecognitionSink::new(self.generation, self.events_tx.clone());
        let tag = self.locale.speech_tag();
        match recognizer.start(tag, sink) {
            Ok(()) => {
                tracing::info!(generation = self.generation, language = tag, "Listening");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, language = tag, "Recognizer failed to start");
                self.state.reset();
                false
            }
        }
    }

    /// Cancel any in-flight capture and return to Idle. No-op when idle.
    pub fn stop(&mut self) {
        if !self.is_listening() {
            return;
        }
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.stop();
        }
        self.state.reset();
        tracing::info!(generation = self.generation, "Listening stopped");
    }

    /// Rebind to a new locale. An active session is stopped first.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale == self.locale {
            return;
        }
        self.stop();
        self.locale = locale;
    }

    /// Apply one recognizer report.
    ///
    /// Returns the transcript when it ends the current session. Reports from a
    /// stopped session, or arriving while Idle, are dropped.
    pub fn handle(&mut self, event: CaptureEvent) -> Option<String> {
        if event.generation != self.generation || !self.is_listening() {
            tracing::trace!(
                generation = event.generation,
                current = self.generation,
                "Dropping stale recognition event"
            );
            return None;
        }

        self.state.reset();
        match event.event {
            RecognitionEvent::Transcript(text) => {
                tracing::debug!(chars = text.chars().count(), "Utterance recognized");
                Some(text)
            }
            RecognitionEvent::Error(reason) => {
                tracing::debug!(reason = %reason, "Recognition failed");
                None
            }
            RecognitionEvent::End => None,
        }
    }

    /// Wait for the next recognizer report.
    ///
    /// Pending forever while nothing is reported, so this is meant for a
    /// `select!` arm.
    pub async fn recv(&mut self) -> Option<CaptureEvent> {
        self.events_rx.recv().await
    }

    /// Apply every report already queued. Returns the transcript, if one ended
    /// the session.
    pub fn poll_transcript(&mut self) -> Option<String> {
        let mut transcript = None;
        while let Ok(event) = self.events_rx.try_recv() {
            if let Some(text) = self.handle(event) {
                transcript = Some(text);
            }
        }
        transcript
    }
}
