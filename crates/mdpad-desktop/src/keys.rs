//! Translate Dioxus keyboard events into core key inputs

use dioxus::prelude::*;
use mdpad_core::models::{Key as PadKey, KeyInput};

/// Build a [`KeyInput`] from a keyboard event
///
/// Letters follow the active keyboard layout. The physical key code is only
/// used when Option/Alt composed a non-ASCII character (e.g. `ç` for C on
/// macOS).
pub fn key_input(evt: &KeyboardData) -> KeyInput {
    let key = match evt.key() {
        Key::Escape => PadKey::Escape,
        Key::Tab => PadKey::Tab,
        Key::Character(text) => {
            character_key(&text, &evt.code().to_string()).map_or(PadKey::Other, PadKey::Character)
        }
        _ => PadKey::Other,
    };

    let modifiers = evt.modifiers();
    KeyInput::new(key)
        .with_meta(modifiers.meta())
        .with_ctrl(modifiers.ctrl())
        .with_alt(modifiers.alt())
        .with_shift(modifiers.shift())
}

fn character_key(text: &str, code: &str) -> Option<char> {
    match single_char(text) {
        Some(c) if c.is_ascii() => Some(c),
        _ => letter_from_code(code).or_else(|| single_char(text)),
    }
}

fn letter_from_code(code: &str) -> Option<char> {
    let rest = code.strip_prefix("Key")?;
    let mut chars = rest.chars();
    let letter = chars.next()?;
    (chars.next().is_none() && letter.is_ascii_alphabetic()).then(|| letter.to_ascii_lowercase())
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_codes_map_to_lowercase() {
        assert_eq!(letter_from_code("KeyC"), Some('c'));
        assert_eq!(letter_from_code("KeyT"), Some('t'));
        assert_eq!(letter_from_code("Digit1"), None);
        assert_eq!(letter_from_code("Keyboard"), None);
    }

    #[test]
    fn single_char_rejects_multi_char_text() {
        assert_eq!(single_char("ç"), Some('ç'));
        assert_eq!(single_char("ab"), None);
        assert_eq!(single_char(""), None);
    }

    #[test]
    fn produced_letter_wins_over_physical_key() {
        // AZERTY: the physical A key produces `q`
        assert_eq!(character_key("q", "KeyA"), Some('q'));
        // Dvorak: the physical I key produces `c`
        assert_eq!(character_key("c", "KeyI"), Some('c'));
    }

    #[test]
    fn alt_composed_character_falls_back_to_code() {
        assert_eq!(character_key("ç", "KeyC"), Some('c'));
        assert_eq!(character_key("é", "Digit2"), Some('é'));
    }
}
