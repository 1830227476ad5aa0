//! Draft input and the controller that feeds it from the keyboard or from
//! speech recognition.

use mitra_core::Locale;
use mitra_speech::{CaptureEvent, SpeechCapture};

/// Text waiting to be sent, plus whether speech capture owns it right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
    listening: bool,
}

impl DraftInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// True when there is something worth sending.
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

/// Single writer for the draft: either typed edits or recognized speech.
///
/// Typing is refused while listening, so the two sources never interleave.
#[derive(Debug)]
pub struct InputController {
    draft: DraftInput,
    speech: SpeechCapture,
}

impl InputController {
    pub fn new(speech: SpeechCapture) -> Self {
        Self {
            draft: DraftInput::default(),
            speech,
        }
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn voice_available(&self) -> bool {
        self.speech.is_available()
    }

    pub fn is_listening(&self) -> bool {
        self.draft.listening
    }

    /// Replace the draft with typed text. Returns false while listening.
    pub fn type_text(&mut self, text: impl Into<String>) -> bool {
        if self.draft.listening {
            tracing::debug!("Typed input ignored while listening");
            return false;
        }
        self.draft.text = text.into();
        true
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    pub(crate) fn take(&mut self) -> String {
        self.draft.take()
    }

    /// Start a speech capture session. No-op without a recognizer.
    pub fn start_listening(&mut self) -> bool {
        let started = self.speech.start();
        self.sync();
        started
    }

    pub fn stop_listening(&mut self) {
        self.speech.stop();
        self.sync();
    }

    /// Toggle listening, the way the microphone button behaves.
    pub fn toggle_listening(&mut self) -> bool {
        if self.draft.listening {
            self.stop_listening();
            false
        } else {
            self.start_listening()
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.speech.set_locale(locale);
        self.sync();
    }

    /// Apply one recognizer report. Returns true when it replaced the draft.
    pub fn handle_speech(&mut self, event: CaptureEvent) -> bool {
        let transcript = self.speech.handle(event);
        self.write_transcript(transcript)
    }

    /// Apply every queued recognizer report without waiting.
    pub fn poll_speech(&mut self) -> bool {
        let transcript = self.speech.poll_transcript();
        self.write_transcript(transcript)
    }

    /// Wait for the next recognizer report. Meant for a `select!` arm.
    pub async fn recv_speech(&mut self) -> Option<CaptureEvent> {
        self.speech.recv().await
    }

    fn write_transcript(&mut self, transcript: Option<String>) -> bool {
        self.sync();
        match transcript {
            Some(text) => {
                self.draft.text = text;
                true
            }
            None => false,
        }
    }

    fn sync(&mut self) {
        self.draft.listening = self.speech.is_listening();
    }
}
