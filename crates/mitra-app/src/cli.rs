//! CLI argument definitions for the Medi Mitra binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use mitra_core::{Locale, MitraConfig, MitraError};

/// Medi Mitra - a multilingual health assistant demo.
#[derive(Parser, Debug)]
#[command(name = "mitra", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Chat with the assistant in the terminal (default).
    Chat(ChatArgs),
    /// Print the outbreak, health-center, vaccination and badge data as JSON.
    Catalog {
        /// Label language: en, hi or or.
        #[arg(long)]
        locale: Option<Locale>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ChatArgs {
    /// Interface language: en, hi or or.
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Delay before the assistant answers, in milliseconds.
    #[arg(long = "reply-delay-ms")]
    pub reply_delay_ms: Option<u64>,

    /// Seed for reply selection, for reproducible sessions.
    #[arg(long)]
    pub seed: Option<u64>,

    /// File of utterances, one per line, replayed as speech input by `/mic`.
    #[arg(long = "dictation-script")]
    pub dictation_script: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > MITRA_CONFIG env var > ~/.mitra/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("MITRA_CONFIG") {
            return PathBuf::from(p);
        }
        MitraConfig::default_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// The subcommand to run, `chat` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Chat(ChatArgs::default()))
    }
}

/// Resolve the interface language.
///
/// Priority: flag > MITRA_LOCALE env var > config file value.
pub fn resolve_locale(flag: Option<Locale>, config_locale: Locale) -> Result<Locale, MitraError> {
    if let Some(locale) = flag {
        return Ok(locale);
    }
    match std::env::var("MITRA_LOCALE") {
        Ok(val) => val.parse(),
        Err(_) => Ok(config_locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_chat() {
        let args = CliArgs::try_parse_from(["mitra"]).unwrap();
        match args.command() {
            Command::Chat(chat) => {
                assert!(chat.locale.is_none());
                assert!(chat.dictation_script.is_none());
            }
            other => panic!("Expected chat, got {other:?}"),
        }
    }

    #[test]
    fn test_chat_flags() {
        let args = CliArgs::try_parse_from([
            "mitra",
            "chat",
            "--locale",
            "hi",
            "--reply-delay-ms",
            "10",
            "--seed",
            "3",
            "--dictation-script",
            "lines.txt",
        ])
        .unwrap();
        match args.command() {
            Command::Chat(chat) => {
                assert_eq!(chat.locale, Some(Locale::Hi));
                assert_eq!(chat.reply_delay_ms, Some(10));
                assert_eq!(chat.seed, Some(3));
                assert_eq!(chat.dictation_script, Some(PathBuf::from("lines.txt")));
            }
            other => panic!("Expected chat, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_with_global_flags_after_subcommand() {
        let args =
            CliArgs::try_parse_from(["mitra", "catalog", "--locale", "or", "-l", "debug"]).unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(
            args.command(),
            Command::Catalog {
                locale: Some(Locale::Or)
            }
        ));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!(CliArgs::try_parse_from(["mitra", "chat", "--locale", "fr"]).is_err());
    }

    #[test]
    fn test_config_flag_wins() {
        let args = CliArgs::try_parse_from(["mitra", "-c", "/tmp/custom.toml"]).unwrap();
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let args = CliArgs::try_parse_from(["mitra"]).unwrap();
        assert_eq!(args.resolve_log_level("info"), "info");
        let args = CliArgs::try_parse_from(["mitra", "--log-level", "trace"]).unwrap();
        assert_eq!(args.resolve_log_level("info"), "trace");
    }

    #[test]
    fn test_locale_flag_wins() {
        assert_eq!(
            resolve_locale(Some(Locale::Or), Locale::En).unwrap(),
            Locale::Or
        );
    }
}
