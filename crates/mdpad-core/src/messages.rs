//! User-facing message catalog

use serde::{Deserialize, Serialize};

use crate::models::ThemeMode;

/// Language of notifications and prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl std::str::FromStr for Locale {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            other => Err(crate::Error::Config(format!("unsupported locale: {other}"))),
        }
    }
}

impl Locale {
    #[must_use]
    pub const fn nothing_to_copy(self) -> &'static str {
        match self {
            Self::Ja => "コピーするテキストがありません",
            Self::En => "Nothing to copy",
        }
    }

    #[must_use]
    pub const fn copied(self) -> &'static str {
        match self {
            Self::Ja => "クリップボードにコピーしました",
            Self::En => "Copied to clipboard",
        }
    }

    #[must_use]
    pub const fn copy_failed(self) -> &'static str {
        match self {
            Self::Ja => "コピーに失敗しました",
            Self::En => "Failed to copy",
        }
    }

    #[must_use]
    pub const fn confirm_clear(self) -> &'static str {
        match self {
            Self::Ja => "エディタの内容をクリアしますか？",
            Self::En => "Clear the editor contents?",
        }
    }

    #[must_use]
    pub const fn cleared(self) -> &'static str {
        match self {
            Self::Ja => "エディタをクリアしました",
            Self::En => "Editor cleared",
        }
    }

    #[must_use]
    pub const fn save_failed(self) -> &'static str {
        match self {
            Self::Ja => "保存に失敗しました",
            Self::En => "Failed to save",
        }
    }

    #[must_use]
    pub const fn theme_name(self, mode: ThemeMode) -> &'static str {
        match (self, mode) {
            (Self::Ja, ThemeMode::Auto) => "システム連動",
            (Self::Ja, ThemeMode::Light) => "ライトモード",
            (Self::Ja, ThemeMode::Dark) => "ダークモード",
            (Self::En, ThemeMode::Auto) => "system theme",
            (Self::En, ThemeMode::Light) => "light mode",
            (Self::En, ThemeMode::Dark) => "dark mode",
        }
    }

    #[must_use]
    pub fn theme_changed(self, mode: ThemeMode) -> String {
        let name = self.theme_name(mode);
        match self {
            Self::Ja => format!("テーマを{name}に変更しました"),
            Self::En => format!("Theme changed to {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_theme_changed_message() {
        assert_eq!(
            Locale::Ja.theme_changed(ThemeMode::Light),
            "テーマをライトモードに変更しました"
        );
        assert_eq!(
            Locale::En.theme_changed(ThemeMode::Auto),
            "Theme changed to system theme"
        );
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
