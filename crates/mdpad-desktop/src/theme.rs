//! Theme resolution and palettes for the popup

use std::sync::OnceLock;

pub use mdpad_core::models::ThemeMode;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    resolve_with_system(mode, is_system_dark_mode())
}

const fn resolve_with_system(mode: ThemeMode, system_dark: bool) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::Auto => {
            if system_dark {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode_impl)
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode_impl() -> bool {
    use std::process::Command;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => {
            let is_dark = String::from_utf8_lossy(&output.stdout).contains("0x0");
            tracing::debug!("System theme detected: dark={}", is_dark);
            is_dark
        }
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Defaulting to light.", e);
            false
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode_impl() -> bool {
    use std::process::Command;
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => {
            let is_dark = String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark");
            tracing::debug!("System theme detected: dark={}", is_dark);
            is_dark
        }
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Defaulting to light.", e);
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode_impl() -> bool {
    std::env::var("GTK_THEME").map_or_else(
        |_| {
            tracing::debug!("GTK_THEME not set, defaulting to light mode");
            false
        },
        |theme| theme.to_lowercase().contains("dark"),
    )
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_system_dark_mode_impl() -> bool {
    false
}

/// Color palette for the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    text_primary: "#1a1a1a",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#4f46e5",
};

pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1a1a1a",
    bg_secondary: "#242424",
    text_primary: "#e8eaed",
    text_muted: "#5f6368",
    border: "#3c4043",
    accent: "#818cf8",
};

impl ResolvedTheme {
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}
