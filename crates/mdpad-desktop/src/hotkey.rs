//! Global hotkey that brings the popup back after it was closed

use global_hotkey::{
    hotkey::{Code, HotKey, Modifiers},
    GlobalHotKeyManager,
};

/// Default hotkey: Ctrl+Shift+M (Windows/Linux) or Cmd+Shift+M (macOS)
pub fn default_hotkey() -> HotKey {
    #[cfg(target_os = "macos")]
    let modifiers = Modifiers::META | Modifiers::SHIFT;
    #[cfg(not(target_os = "macos"))]
    let modifiers = Modifiers::CONTROL | Modifiers::SHIFT;

    HotKey::new(Some(modifiers), Code::KeyM)
}

/// Manages global hotkey registration
pub struct HotkeyManager {
    _manager: GlobalHotKeyManager,
}

impl HotkeyManager {
    /// Create and register the global hotkey
    pub fn new() -> Result<Self, global_hotkey::Error> {
        let manager = GlobalHotKeyManager::new()?;
        let hotkey = default_hotkey();

        manager.register(hotkey)?;
        tracing::info!("Registered global hotkey: {:?}", hotkey);

        Ok(Self { _manager: manager })
    }
}
