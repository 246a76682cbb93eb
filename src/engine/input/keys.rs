// Stable key codes for configuration files
//
// Key bindings are persisted as integers, so the codes must stay stable
// across winit upgrades. Each supported physical key gets a fixed u32 code
// (its index in the table below); anything outside the table is rejected.

use winit::keyboard::KeyCode;

/// Every key a controller can be bound to, in stable code order.
///
/// A key's persistent code is its index in this table. Appending new keys is
/// safe; reordering existing entries would break saved configurations.
const SUPPORTED_KEYS: &[KeyCode] = &[
    // Letters: codes 0..=25
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
    // Digits: codes 26..=35
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
    // Modifiers and punctuation: codes 36..=56
    KeyCode::Escape,
    KeyCode::ControlLeft,
    KeyCode::ShiftLeft,
    KeyCode::AltLeft,
    KeyCode::SuperLeft,
    KeyCode::ControlRight,
    KeyCode::ShiftRight,
    KeyCode::AltRight,
    KeyCode::SuperRight,
    KeyCode::ContextMenu,
    KeyCode::BracketLeft,
    KeyCode::BracketRight,
    KeyCode::Semicolon,
    KeyCode::Comma,
    KeyCode::Period,
    KeyCode::Quote,
    KeyCode::Slash,
    KeyCode::Backslash,
    KeyCode::Backquote,
    KeyCode::Equal,
    KeyCode::Minus,
    // Whitespace and editing: codes 57..=66
    KeyCode::Space,
    KeyCode::Enter,
    KeyCode::Backspace,
    KeyCode::Tab,
    KeyCode::PageUp,
    KeyCode::PageDown,
    KeyCode::End,
    KeyCode::Home,
    KeyCode::Insert,
    KeyCode::Delete,
    // Numpad operators: codes 67..=70
    KeyCode::NumpadAdd,
    KeyCode::NumpadSubtract,
    KeyCode::NumpadMultiply,
    KeyCode::NumpadDivide,
    // Arrows: codes 71..=74
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
];

/// Resolve a persisted code to its physical key, if the code is in range.
pub fn from_code(code: u32) -> Option<KeyCode> {
    SUPPORTED_KEYS.get(code as usize).copied()
}

/// The persistent code for a key, if the key is supported.
pub fn code_of(key: KeyCode) -> Option<u32> {
    SUPPORTED_KEYS.iter().position(|k| *k == key).map(|i| i as u32)
}

/// Whether a key can appear in a binding.
pub fn is_supported(key: KeyCode) -> bool {
    SUPPORTED_KEYS.contains(&key)
}
