//! Append-only message log.

use std::collections::HashSet;

use serde::Serialize;

use mitra_core::i18n::{text, TextKey};
use mitra_core::{Locale, Message, MessageId};

/// Ordered chat history. Insertion order is display order.
///
/// Always starts with the assistant greeting for the creation locale, and
/// only hands out shared references so messages stay immutable.
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    messages: Vec<Message>,
    #[serde(skip)]
    ids: HashSet<MessageId>,
}

impl Conversation {
    pub fn new(locale: Locale) -> Self {
        let greeting = Message::assistant(text(locale, TextKey::Greeting), locale);
        let mut ids = HashSet::new();
        ids.insert(greeting.id);
        Self {
            messages: vec![greeting],
            ids,
        }
    }

    /// Append a message. A message whose id is already present is rejected.
    pub fn push(&mut self, message: Message) -> bool {
        if !self.ids.insert(message.id) {
            tracing::warn!(message_id = %message.id, "Duplicate message id rejected");
            return false;
        }
        tracing::debug!(
            message_id = %message.id,
            sender = %message.sender,
            locale = %message.locale,
            "Message appended"
        );
        self.messages.push(message);
        true
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never true: the greeting is always present.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        if !self.ids.contains(&id) {
            return None;
        }
        self.messages.iter().find(|m| m.id == id)
    }
}
