//! Runtime configuration.
//!
//! Loaded from `<config_dir>/mdpad/config.json` when present; every field has
//! a default, so a missing file is a valid configuration. `MDPAD_DB_PATH` and
//! `MDPAD_LOCALE` override the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::messages::Locale;
use crate::models::Platform;
use crate::notify::DEFAULT_DISMISS_AFTER;
use crate::shortcuts::ShortcutProfile;
use crate::util::normalize_text_option;

const CONFIG_FILE_NAME: &str = "config.json";
const DATABASE_FILE_NAME: &str = "mdpad.db";
const APP_DIR_NAME: &str = "mdpad";

pub const ENV_DB_PATH: &str = "MDPAD_DB_PATH";
pub const ENV_LOCALE: &str = "MDPAD_LOCALE";

/// Which platform conventions to use for modifier keys
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlatformSetting {
    /// Detect from the compile target
    #[default]
    Auto,
    Mac,
    Other,
}

impl PlatformSetting {
    #[must_use]
    pub const fn resolve(self) -> Platform {
        match self {
            Self::Auto => Platform::current(),
            Self::Mac => Platform::Mac,
            Self::Other => Platform::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub platform: PlatformSetting,
    pub locale: Locale,
    pub profile: ShortcutProfile,
    /// How long a notification stays visible, in milliseconds
    pub notification_ms: u64,
    /// Database file; defaults to the platform data directory
    pub database_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: PlatformSetting::Auto,
            locale: Locale::default(),
            profile: ShortcutProfile::standard(),
            notification_ms: u64::try_from(DEFAULT_DISMISS_AFTER.as_millis()).unwrap_or(3000),
            database_path: None,
        }
    }
}

impl Config {
    /// Load from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match default_config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(error) => return Err(error.into()),
        };

        let config: Self = serde_json::from_str(&raw)
            .map_err(|error| Error::Config(format!("{}: {error}", path.display())))?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(path) = normalize_text_option(lookup(ENV_DB_PATH)) {
            self.database_path = Some(PathBuf::from(path));
        }
        if let Some(locale) = normalize_text_option(lookup(ENV_LOCALE)) {
            self.locale = locale.parse()?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.notification_ms == 0 {
            return Err(Error::Config(
                "notification_ms must be greater than zero".to_string(),
            ));
        }
        let keys = [
            self.profile.copy_key,
            self.profile.clear_key,
            self.profile.theme_key,
        ];
        if keys.iter().any(|c| !c.is_ascii_alphanumeric()) {
            return Err(Error::Config(
                "shortcut keys must be ASCII letters or digits".to_string(),
            ));
        }
        let lower: Vec<char> = keys.iter().map(char::to_ascii_lowercase).collect();
        if lower[0] == lower[1] || lower[0] == lower[2] || lower[1] == lower[2] {
            return Err(Error::Config(
                "copy, clear and theme shortcuts must use distinct keys".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform.resolve()
    }

    #[must_use]
    pub const fn notification_delay(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// Configured database path, or `<data_dir>/mdpad/mdpad.db`
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(DATABASE_FILE_NAME))
            .ok_or_else(|| Error::Config("could not resolve a data directory".to_string()))
    }
}

/// `<config_dir>/mdpad/config.json`, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::{CloseBinding, SecondaryModifier};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempdir().unwrap();
        let config = Config::load_from(&tmp.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.notification_delay(), Duration::from_secs(3));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
              "platform": "mac",
              "profile": { "secondary": "shift", "close": "primary_escape", "confirm_clear": false }
            }"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.platform(), Platform::Mac);
        assert_eq!(config.locale, Locale::Ja);
        assert_eq!(config.profile.secondary, SecondaryModifier::Shift);
        assert_eq!(config.profile.close, CloseBinding::PrimaryEscape);
        assert!(!config.profile.confirm_clear);
        assert_eq!(config.profile.theme_key, 't');
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "colour": "red" }"#).unwrap();

        let error = Config::load_from(&path).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn duplicate_shortcut_keys_are_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "profile": { "clear_key": "C" } }"#).unwrap();

        let error = Config::load_from(&path).unwrap_err();
        assert!(error.to_string().contains("distinct"));
    }

    #[test]
    fn env_overrides_database_and_locale() {
        let mut config = Config::default();
        config
            .apply_env(|key| match key {
                ENV_DB_PATH => Some(" /tmp/notes.db ".to_string()),
                ENV_LOCALE => Some("en".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/notes.db"));
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = Config::default();
        config.apply_env(|_| Some("   ".to_string())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_env_locale_is_an_error() {
        let mut config = Config::default();
        let result = config.apply_env(|key| (key == ENV_LOCALE).then(|| "xx".to_string()));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
