//! Medi Mitra application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing (stderr, so chat output stays clean)
//! 3. Run the requested subcommand: the terminal chat or the catalog dump

mod cli;
mod repl;

use clap::Parser;

use mitra_chat::{CannedResponder, ChatSession, ChatSettings};
use mitra_core::catalog::CatalogSnapshot;
use mitra_core::{MitraConfig, MitraError};
use mitra_speech::{ScriptedRecognizer, SpeechCapture, SpeechRecognizer};

use cli::{resolve_locale, ChatArgs, CliArgs, Command};

/// Assemble a chat session from config with CLI overrides applied.
fn build_session(config: &MitraConfig, args: &ChatArgs) -> Result<ChatSession, MitraError> {
    let locale = resolve_locale(args.locale, config.general.locale)?;

    let mut chat = config.chat.clone();
    if let Some(ms) = args.reply_delay_ms {
        chat.reply_delay_ms = ms;
    }
    if args.seed.is_some() {
        chat.reply_seed = args.seed;
    }

    let recognizer: Option<Box<dyn SpeechRecognizer>> =
        match (&args.dictation_script, config.speech.enabled) {
            (Some(path), true) => {
                let script = std::fs::read_to_string(path)?;
                let recognizer = ScriptedRecognizer::from_lines(&script);
                tracing::info!(
                    path = %path.display(),
                    utterances = recognizer.remaining(),
                    "Dictation script loaded"
                );
                Some(Box::new(recognizer))
            }
            (Some(path), false) => {
                tracing::warn!(
                    path = %path.display(),
                    "Speech disabled in config, ignoring dictation script"
                );
                None
            }
            (None, _) => None,
        };

    tracing::info!(
        %locale,
        reply_delay_ms = chat.reply_delay_ms,
        voice = recognizer.is_some(),
        "Chat session ready"
    );

    Ok(ChatSession::new(
        locale,
        ChatSettings::from(&chat),
        Box::new(CannedResponder::from_seed(chat.reply_seed)),
        SpeechCapture::new(recognizer, locale),
    ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let config = MitraConfig::load_or_default(&config_file);
    let level = args.resolve_log_level(&config.general.log_level);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .init();

    tracing::info!(path = %config_file.display(), "Configuration loaded");

    match args.command() {
        Command::Catalog { locale } => {
            let locale = resolve_locale(locale, config.general.locale)?;
            let snapshot = CatalogSnapshot::for_locale(locale);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Command::Chat(chat) => {
            let session = build_session(&config, &chat)?;
            repl::run(session).await?;
        }
    }

    tracing::info!("Medi Mitra shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use mitra_core::Locale;

    use super::*;

    #[test]
    fn test_build_session_applies_overrides() {
        let config = MitraConfig::default();
        let args = ChatArgs {
            locale: Some(Locale::Hi),
            reply_delay_ms: Some(5),
            ..Default::default()
        };
        let session = build_session(&config, &args).unwrap();
        assert_eq!(session.locale(), Locale::Hi);
        assert!(!session.input().voice_available());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_build_session_with_dictation_script() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "I have a fever").unwrap();

        let config = MitraConfig::default();
        let args = ChatArgs {
            locale: Some(Locale::En),
            dictation_script: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let session = build_session(&config, &args).unwrap();
        assert!(session.input().voice_available());
    }

    #[test]
    fn test_speech_disabled_ignores_script() {
        let mut config = MitraConfig::default();
        config.speech.enabled = false;
        let args = ChatArgs {
            locale: Some(Locale::Or),
            dictation_script: Some("does-not-exist.txt".into()),
            ..Default::default()
        };
        let session = build_session(&config, &args).unwrap();
        assert!(!session.input().voice_available());
    }

    #[test]
    fn test_missing_dictation_script_is_io_error() {
        let config = MitraConfig::default();
        let args = ChatArgs {
            locale: Some(Locale::En),
            dictation_script: Some("/nonexistent/mitra/script.txt".into()),
            ..Default::default()
        };
        assert!(matches!(
            build_session(&config, &args),
            Err(MitraError::Io(_))
        ));
    }
}
