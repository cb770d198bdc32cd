//! Host-independent keyboard event model

use super::Platform;

/// Identity of the key that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Character(char),
    Escape,
    Tab,
    /// Modifier keys, arrows, function keys and anything else
    Other,
}

/// A key-down or key-up event as reported by the host
///
/// Modifier fields are optional: a host that cannot report a flag leaves it
/// `None`, which reads as "not held".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub meta: Option<bool>,
    pub ctrl: Option<bool>,
    pub alt: Option<bool>,
    pub shift: Option<bool>,
}

impl KeyInput {
    /// Event with no modifier information
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            meta: None,
            ctrl: None,
            alt: None,
            shift: None,
        }
    }

    #[must_use]
    pub const fn with_meta(mut self, held: bool) -> Self {
        self.meta = Some(held);
        self
    }

    #[must_use]
    pub const fn with_ctrl(mut self, held: bool) -> Self {
        self.ctrl = Some(held);
        self
    }

    #[must_use]
    pub const fn with_alt(mut self, held: bool) -> Self {
        self.alt = Some(held);
        self
    }

    #[must_use]
    pub const fn with_shift(mut self, held: bool) -> Self {
        self.shift = Some(held);
        self
    }

    /// Whether the platform's primary modifier is held (meta on Mac, ctrl otherwise)
    #[must_use]
    pub fn primary_held(&self, platform: Platform) -> bool {
        let field = if platform.is_mac() { self.meta } else { self.ctrl };
        field.unwrap_or(false)
    }

    /// Either meta or ctrl held, regardless of platform
    #[must_use]
    pub fn any_accelerator_held(&self) -> bool {
        self.meta.unwrap_or(false) || self.ctrl.unwrap_or(false)
    }

    #[must_use]
    pub fn alt_held(&self) -> bool {
        self.alt.unwrap_or(false)
    }

    #[must_use]
    pub fn shift_held(&self) -> bool {
        self.shift.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_depends_on_platform() {
        let input = KeyInput::new(Key::Other).with_meta(true).with_ctrl(false);
        assert!(input.primary_held(Platform::Mac));
        assert!(!input.primary_held(Platform::Other));
    }

    #[test]
    fn test_missing_fields_read_as_released() {
        let input = KeyInput::new(Key::Character('c'));
        assert!(!input.primary_held(Platform::Mac));
        assert!(!input.primary_held(Platform::Other));
        assert!(!input.any_accelerator_held());
        assert!(!input.alt_held());
    }
}
