//! Chat session: the conversation controller.
//!
//! Owns the conversation, the input controller and the reply timers. All
//! state changes happen through `&mut self` on the owning task; timers only
//! produce messages, and the owner appends them via [`ChatSession::next_reply`]
//! or [`ChatSession::apply_ready`].

use std::time::Duration;

use tokio::task::JoinSet;

use mitra_core::config::ChatConfig;
use mitra_core::{Locale, Message, MessageId};
use mitra_speech::SpeechCapture;

use crate::conversation::Conversation;
use crate::input::InputController;
use crate::responder::{CannedResponder, ReplySource};

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub reply_delay: Duration,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
        }
    }
}

impl From<&ChatConfig> for ChatSettings {
    fn from(config: &ChatConfig) -> Self {
        Self {
            reply_delay: config.reply_delay(),
        }
    }
}

/// Outcome of [`ChatSession::next_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// An assistant reply was appended.
    Reply(MessageId),
    /// Recognized speech replaced the draft.
    DraftFromSpeech,
    /// Listening stopped without a transcript (error or end of input).
    ListeningEnded,
}

pub struct ChatSession {
    locale: Locale,
    conversation: Conversation,
    input: InputController,
    responder: Box<dyn ReplySource>,
    settings: ChatSettings,
    pending: JoinSet<Message>,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("locale", &self.locale)
            .field("messages", &self.conversation.len())
            .field("input", &self.input)
            .field("settings", &self.settings)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl ChatSession {
    /// Start a conversation in `locale`, greeting included.
    pub fn new(
        locale: Locale,
        settings: ChatSettings,
        responder: Box<dyn ReplySource>,
        speech: SpeechCapture,
    ) -> Self {
        tracing::info!(locale = %locale, "Chat session started");
        Self {
            locale,
            conversation: Conversation::new(locale),
            input: InputController::new(speech),
            responder,
            settings,
            pending: JoinSet::new(),
        }
    }

    /// Default settings, OS-seeded canned replies and no speech capability.
    pub fn with_defaults(locale: Locale) -> Self {
        Self::new(
            locale,
            ChatSettings::default(),
            Box::new(CannedResponder::new()),
            SpeechCapture::unavailable(locale),
        )
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the language for future replies and speech capture.
    ///
    /// Existing messages keep their text, and replies already scheduled keep
    /// the locale they were scheduled under.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale == self.locale {
            return;
        }
        tracing::info!(from = %self.locale, to = %locale, "Locale changed");
        self.locale = locale;
        self.input.set_locale(locale);
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputController {
        &mut self.input
    }

    /// Replies scheduled but not yet appended.
    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Submit `text` as the user.
    ///
    /// Blank text is ignored and returns `None`. Otherwise the user message is
    /// appended verbatim, the draft is cleared and one reply is scheduled.
    /// Must be called from within a Tokio runtime.
    pub fn submit(&mut self, text: &str) -> Option<MessageId> {
        if text.trim().is_empty() {
            tracing::trace!("Blank submission ignored");
            return None;
        }

        let message = Message::user(text, self.locale);
        let id = message.id;
        if !self.conversation.push(message) {
            return None;
        }
        self.input.clear();
        self.schedule_reply(text);
        Some(id)
    }

    /// Submit whatever is in the draft.
    pub fn submit_draft(&mut self) -> Option<MessageId> {
        if !self.input.draft().can_send() {
            return None;
        }
        let text = self.input.take();
        self.submit(&text)
    }

    fn schedule_reply(&mut self, input: &str) {
        let locale = self.locale;
        let delay = self.settings.reply_delay;
        let reply = self.responder.reply(input, locale);
        self.pending.spawn(async move {
            tokio::time::sleep(delay).await;
            Message::assistant(reply, locale)
        });
        tracing::debug!(
            locale = %locale,
            delay_ms = delay.as_millis() as u64,
            pending = self.pending.len(),
            "Reply scheduled"
        );
    }

    /// Wait for the next reply to come due and append it.
    ///
    /// Returns `None` immediately when nothing is pending. Cancel-safe.
    pub async fn next_reply(&mut self) -> Option<&Message> {
        loop {
            match self.pending.join_next().await? {
                Ok(message) => {
                    if self.conversation.push(message) {
                        return self.conversation.last();
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Reply task did not complete"),
            }
        }
    }

    /// Wait for whichever comes first: a reply coming due, or a speech report
    /// that changes the input. Pending forever when neither can happen, so
    /// this belongs in a `select!` next to the owner's other event sources.
    pub async fn next_update(&mut self) -> Update {
        loop {
            let has_pending = !self.pending.is_empty();
            tokio::select! {
                Some(result) = self.pending.join_next(), if has_pending => match result {
                    Ok(message) => {
                        let id = message.id;
                        if self.conversation.push(message) {
                            return Update::Reply(id);
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "Reply task did not complete"),
                },
                Some(event) = self.input.recv_speech() => {
                    let was_listening = self.input.is_listening();
                    if self.input.handle_speech(event) {
                        return Update::DraftFromSpeech;
                    }
                    if was_listening && !self.input.is_listening() {
                        return Update::ListeningEnded;
                    }
                }
                else => std::future::pending::<()>().await,
            }
        }
    }

    /// Append every reply already due, without waiting. Returns how many.
    pub fn apply_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Some(result) = self.pending.try_join_next() {
            match result {
                Ok(message) => {
                    if self.conversation.push(message) {
                        applied += 1;
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Reply task did not complete"),
            }
        }
        applied
    }

    /// Tear the session down: stop listening and discard every pending reply.
    ///
    /// Returns how many replies were discarded.
    pub fn shutdown(&mut self) -> usize {
        self.input.stop_listening();
        let discarded = self.pending.len();
        // Dropping the set aborts its tasks.
        drop(std::mem::take(&mut self.pending));
        if discarded > 0 {
            tracing::info!(discarded, "Pending replies discarded");
        }
        discarded
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(
                discarded = self.pending.len(),
                "Chat session dropped with pending replies"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mitra_core::i18n::{canned_replies, text, TextKey};
    use mitra_core::Sender;
    use mitra_speech::ScriptedRecognizer;

    fn session(locale: Locale) -> ChatSession {
        ChatSession::new(
            locale,
            ChatSettings::default(),
            Box::new(CannedResponder::seeded(11)),
            SpeechCapture::unavailable(locale),
        )
    }

    fn is_canned(locale: Locale, text: &str) -> bool {
        canned_replies(locale).iter().any(|r| *r == text)
    }

    #[test]
    fn test_initialize_per_locale() {
        for locale in Locale::ALL {
            let s = session(locale);
            assert_eq!(s.messages().len(), 1);
            assert_eq!(s.messages()[0].sender, Sender::Assistant);
            assert_eq!(s.messages()[0].text, text(locale, TextKey::Greeting));
            assert_eq!(s.pending_replies(), 0);
        }
    }

    #[test]
    fn test_settings_from_config() {
        let config = ChatConfig {
            reply_delay_ms: 250,
            reply_seed: None,
        };
        assert_eq!(
            ChatSettings::from(&config).reply_delay,
            Duration::from_millis(250)
        );
    }

    #[tokio::test]
    async fn test_blank_submissions_ignored() {
        let mut s = session(Locale::En);
        for blank in ["", " ", "\t\n", "   "] {
            assert!(s.submit(blank).is_none());
        }
        assert!(s.submit_draft().is_none());
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_appends_user_then_reply_after_delay() {
        let mut s = session(Locale::En);
        let started = tokio::time::Instant::now();

        let id = s.submit("hello").unwrap();
        assert_eq!(s.messages().len(), 2);
        let user = &s.messages()[1];
        assert_eq!(user.id, id);
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.text, "hello");
        assert_eq!(s.pending_replies(), 1);

        let reply = s.next_reply().await.unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert!(is_canned(Locale::En, &reply.text));
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(s.messages().len(), 3);
        assert_eq!(s.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_not_applied_before_delay() {
        let mut s = session(Locale::En);
        s.submit("hello").unwrap();

        let early = tokio::time::timeout(Duration::from_millis(999), s.next_reply()).await;
        assert!(early.is_err());
        assert_eq!(s.messages().len(), 2);

        assert!(s.next_reply().await.is_some());
        assert_eq!(s.messages().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_text_kept_verbatim() {
        let mut s = session(Locale::En);
        s.submit("  padded  ").unwrap();
        assert_eq!(s.messages()[1].text, "  padded  ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_submit_schedules_its_own_reply() {
        let mut s = session(Locale::En);
        s.submit("one").unwrap();
        s.submit("two").unwrap();
        s.submit("three").unwrap();
        assert_eq!(s.pending_replies(), 3);

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(s.apply_ready(), 3);
        assert_eq!(s.messages().len(), 7);
        let replies = s.messages()[4..]
            .iter()
            .filter(|m| m.sender == Sender::Assistant)
            .count();
        assert_eq!(replies, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_ids_unique() {
        let mut s = session(Locale::Hi);
        for i in 0..5 {
            s.submit(&format!("q{i}")).unwrap();
        }
        while s.next_reply().await.is_some() {}

        let ids: std::collections::HashSet<_> = s.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), s.messages().len());
        assert_eq!(ids.len(), 11);
    }

    #[tokio::test(start_paused = true)]
    async fn test_locale_switch_leaves_history_and_pending_replies() {
        let mut s = session(Locale::En);
        s.submit("hello").unwrap();
        s.set_locale(Locale::Hi);

        assert_eq!(s.messages()[0].text, text(Locale::En, TextKey::Greeting));
        assert_eq!(s.messages()[1].locale, Locale::En);

        let reply = s.next_reply().await.unwrap();
        assert_eq!(reply.locale, Locale::En);
        assert!(is_canned(Locale::En, &reply.text));

        s.submit("namaste").unwrap();
        assert_eq!(s.messages()[3].locale, Locale::Hi);
        let reply = s.next_reply().await.unwrap();
        assert!(is_canned(Locale::Hi, &reply.text));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_discards_pending_replies() {
        let mut s = session(Locale::En);
        s.submit("hello").unwrap();
        s.submit("again").unwrap();

        assert_eq!(s.shutdown(), 2);
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(s.apply_ready(), 0);
        assert!(s.next_reply().await.is_none());
        assert_eq!(s.messages().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_draft_clears_input() {
        let mut s = session(Locale::Or);
        s.input_mut().type_text("jwara");
        let id = s.submit_draft().unwrap();
        assert_eq!(s.input().draft().text(), "");
        assert_eq!(s.conversation().get(id).unwrap().text, "jwara");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_clears_draft_even_for_direct_text() {
        let mut s = session(Locale::En);
        s.input_mut().type_text("half typed");
        s.submit("sent directly").unwrap();
        assert_eq!(s.input().draft().text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_spoken_utterance_submits() {
        let rec = ScriptedRecognizer::new([Ok("I feel feverish".to_string())]);
        let mut s = ChatSession::new(
            Locale::En,
            ChatSettings {
                reply_delay: Duration::from_millis(10),
            },
            Box::new(CannedResponder::seeded(2)),
            SpeechCapture::new(Some(Box::new(rec)), Locale::En),
        );

        assert!(s.input_mut().start_listening());
        assert!(s.input().is_listening());
        assert!(s.input_mut().poll_speech());
        s.submit_draft().unwrap();

        assert_eq!(s.messages()[1].text, "I feel feverish");
        assert!(s.next_reply().await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_update_reports_speech_then_reply() {
        let rec = ScriptedRecognizer::new([Ok("cough".to_string()), Err("aborted".to_string())]);
        let mut s = ChatSession::new(
            Locale::En,
            ChatSettings::default(),
            Box::new(CannedResponder::seeded(5)),
            SpeechCapture::new(Some(Box::new(rec)), Locale::En),
        );

        assert!(s.input_mut().start_listening());
        assert_eq!(s.next_update().await, Update::DraftFromSpeech);
        assert_eq!(s.input().draft().text(), "cough");

        let id = s.submit_draft().unwrap();
        assert_eq!(s.messages()[1].id, id);
        match s.next_update().await {
            Update::Reply(reply_id) => {
                assert_eq!(s.messages()[2].id, reply_id);
                assert_eq!(s.messages()[2].sender, Sender::Assistant);
            }
            other => panic!("Expected a reply, got {other:?}"),
        }

        assert!(s.input_mut().start_listening());
        assert_eq!(s.next_update().await, Update::ListeningEnded);
        assert!(!s.input().is_listening());
    }
}
