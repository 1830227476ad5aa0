use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MitraError;

// =============================================================================
// Locale
// =============================================================================

/// Interface language. The set is closed: every string table covers all three.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Or,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Hi, Locale::Or];

    /// Short code used in config files and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Or => "or",
        }
    }

    /// BCP 47 tag handed to speech recognizers.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Hi => "hi-IN",
            Locale::Or => "or-IN",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Hi => "हिन्दी",
            Locale::Or => "ଓଡ଼ିଆ",
        }
    }

    /// Short numeric date in the order the locale's region writes it:
    /// month first for en-US, day first for hi-IN and or-IN.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let pattern = match self {
            Locale::En => "%-m/%-d/%Y",
            Locale::Hi | Locale::Or => "%-d/%-m/%Y",
        };
        date.format(pattern).to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = MitraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "hi" => Ok(Locale::Hi),
            "or" => Ok(Locale::Or),
            _ => Err(MitraError::InvalidLocale(s.to_string())),
        }
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Assistant => write!(f, "assistant"),
        }
    }
}

/// Opaque message identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single chat message.
///
/// Never mutated after construction. `locale` records the language the message
/// was produced in, so a later locale switch leaves it alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub locale: Locale,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>, locale: Locale) -> Self {
        Self {
            id: MessageId::new(),
            sender,
            text: text.into(),
            locale,
            created_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>, locale: Locale) -> Self {
        Self::new(Sender::User, text, locale)
    }

    pub fn assistant(text: impl Into<String>, locale: Locale) -> Self {
        Self::new(Sender::Assistant, text, locale)
    }
}
