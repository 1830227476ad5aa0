//! Reply selection for the simulated assistant.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use mitra_core::i18n::canned_replies;
use mitra_core::Locale;

/// Produces the assistant's answer to one user message.
pub trait ReplySource: Send {
    fn reply(&mut self, input: &str, locale: Locale) -> String;
}

/// Uniform pick from the locale's canned replies. The input is ignored.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    rng: StdRng,
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl CannedResponder {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl ReplySource for CannedResponder {
    fn reply(&mut self, _input: &str, locale: Locale) -> String {
        canned_replies(locale)
            .choose(&mut self.rng)
            .map(|r| r.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_reply_is_member_of_locale_set() {
        let mut responder = CannedResponder::seeded(1);
        for locale in Locale::ALL {
            for _ in 0..20 {
                let reply = responder.reply("anything", locale);
                assert!(canned_replies(locale).iter().any(|r| *r == reply));
            }
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = CannedResponder::seeded(42);
        let mut b = CannedResponder::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.reply("q", Locale::Hi), b.reply("q", Locale::Hi));
        }
    }

    #[test]
    fn test_every_reply_eventually_chosen() {
        let mut responder = CannedResponder::seeded(7);
        let seen: HashSet<String> = (0..200)
            .map(|_| responder.reply("q", Locale::En))
            .collect();
        assert_eq!(seen.len(), canned_replies(Locale::En).len());
    }

    #[test]
    fn test_from_seed() {
        let mut a = CannedResponder::from_seed(Some(3));
        let mut b = CannedResponder::seeded(3);
        assert_eq!(a.reply("", Locale::Or), b.reply("", Locale::Or));

        let mut os = CannedResponder::from_seed(None);
        assert!(!os.reply("", Locale::En).is_empty());
    }
}
