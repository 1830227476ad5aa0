use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{MitraError, Result};
use crate::types::Locale;

/// Top-level configuration for Medi Mitra.
///
/// Loaded from `~/.mitra/config.toml` by default. Every field has a default,
/// so an empty or partial file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MitraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl MitraConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MitraConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MitraError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Platform default location, `~/.mitra/config.toml`.
    pub fn default_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        if let Ok(home) = std::env::var("USERPROFILE") {
            return PathBuf::from(home).join(".mitra").join("config.toml");
        }
        #[cfg(not(target_os = "windows"))]
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".mitra").join("config.toml");
        }
        PathBuf::from("config.toml")
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Interface language at startup.
    pub locale: Locale,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            locale: Locale::En,
        }
    }
}

/// Simulated assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Delay before the canned reply is appended, in milliseconds.
    pub reply_delay_ms: u64,
    /// Fixed RNG seed for reply selection. `None` seeds from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            reply_seed: None,
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Speech capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// When false, voice input stays disabled even if a recognizer exists.
    pub enabled: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = MitraConfig::default();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.general.locale, Locale::En);
        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert_eq!(config.chat.reply_delay(), Duration::from_secs(1));
        assert!(config.chat.reply_seed.is_none());
        assert!(config.speech.enabled);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"
locale = "or"

[chat]
reply_delay_ms = 250
reply_seed = 7

[speech]
enabled = false
"#;
        let file = create_temp_config(content);
        let config = MitraConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.locale, Locale::Or);
        assert_eq!(config.chat.reply_delay_ms, 250);
        assert_eq!(config.chat.reply_seed, Some(7));
        assert!(!config.speech.enabled);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let file = create_temp_config("[general]\nlocale = \"hi\"\n");
        let config = MitraConfig::load(file.path()).unwrap();
        assert_eq!(config.general.locale, Locale::Hi);
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert!(config.speech.enabled);
    }

    #[test]
    fn test_load_rejects_unknown_locale() {
        let file = create_temp_config("[general]\nlocale = \"fr\"\n");
        let err = MitraConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, MitraError::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is not = [valid");
        assert!(MitraConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = MitraConfig::load_or_default(Path::new("/nonexistent/mitra.toml"));
        assert_eq!(config.chat.reply_delay_ms, 1000);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = MitraConfig::default();
        config.general.locale = Locale::Hi;
        config.chat.reply_seed = Some(42);
        config.save(&path).unwrap();

        let reloaded = MitraConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.locale, Locale::Hi);
        assert_eq!(reloaded.chat.reply_seed, Some(42));
        assert_eq!(reloaded.chat.reply_delay_ms, config.chat.reply_delay_ms);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = MitraConfig::load(file.path()).unwrap();
        assert_eq!(config.general.locale, Locale::En);
        assert!(config.speech.enabled);
    }
}
