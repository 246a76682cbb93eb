// Bijective key-to-button mapping

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use super::button::Button;

/// A 1:1 table between physical keys and logical buttons.
///
/// Two hash maps are kept in sync by [`KeyMapping::remap`], giving O(1)
/// lookup in both directions. The invariant is that the two maps always
/// mirror each other: no key maps to two buttons and no button has two keys.
#[derive(Debug, Default, Clone)]
pub struct KeyMapping {
    key_to_button: HashMap<KeyCode, Button>,
    button_to_key: HashMap<Button, KeyCode>,
}

impl KeyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `button`, evicting whatever either side was previously
    /// paired with. Reassigning a key can therefore leave another button
    /// unmapped until the caller rebinds it; completeness is checked
    /// separately via [`KeyMapping::is_complete`].
    pub fn remap(&mut self, key: KeyCode, button: Button) {
        if let Some(old_button) = self.key_to_button.remove(&key) {
            self.button_to_key.remove(&old_button);
        }
        if let Some(old_key) = self.button_to_key.remove(&button) {
            self.key_to_button.remove(&old_key);
        }

        self.key_to_button.insert(key, button);
        self.button_to_key.insert(button, key);
    }

    /// The button `key` is bound to, if any.
    pub fn button_for(&self, key: KeyCode) -> Option<Button> {
        self.key_to_button.get(&key).copied()
    }

    /// The key bound to `button`, if any.
    pub fn key_for(&self, button: Button) -> Option<KeyCode> {
        self.button_to_key.get(&button).copied()
    }

    /// True when every button has a key. With the 1:1 invariant this reduces
    /// to comparing pair count against the number of button variants.
    pub fn is_complete(&self) -> bool {
        self.button_to_key.len() == Button::ALL.len()
    }

    pub fn len(&self) -> usize {
        self.button_to_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.button_to_key.is_empty()
    }

    /// All current pairs, for serialization.
    pub fn pairs(&self) -> impl Iterator<Item = (KeyCode, Button)> + '_ {
        self.button_to_key.iter().map(|(b, k)| (*k, *b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_bijective(mapping: &KeyMapping) {
        let keys: HashSet<_> = mapping.pairs().map(|(k, _)| k).collect();
        let buttons: HashSet<_> = mapping.pairs().map(|(_, b)| b).collect();
        assert_eq!(keys.len(), mapping.len());
        assert_eq!(buttons.len(), mapping.len());
        for (key, button) in mapping.pairs() {
            assert_eq!(mapping.button_for(key), Some(button));
            assert_eq!(mapping.key_for(button), Some(key));
        }
    }

    #[test]
    fn test_remap_inserts_pair() {
        let mut mapping = KeyMapping::new();
        mapping.remap(KeyCode::KeyA, Button::Left);
        assert_eq!(mapping.button_for(KeyCode::KeyA), Some(Button::Left));
        assert_eq!(mapping.key_for(Button::Left), Some(KeyCode::KeyA));
        assert_bijective(&mapping);
    }

    #[test]
    fn test_remap_evicts_old_button() {
        let mut mapping = KeyMapping::new();
        mapping.remap(KeyCode::KeyA, Button::Left);
        mapping.remap(KeyCode::KeyA, Button::Right);

        assert_eq!(mapping.button_for(KeyCode::KeyA), Some(Button::Right));
        assert_eq!(mapping.key_for(Button::Left), None);
        assert_eq!(mapping.len(), 1);
        assert_bijective(&mapping);
    }

    #[test]
    fn test_remap_evicts_old_key() {
        let mut mapping = KeyMapping::new();
        mapping.remap(KeyCode::KeyA, Button::Left);
        mapping.remap(KeyCode::KeyJ, Button::Left);

        assert_eq!(mapping.key_for(Button::Left), Some(KeyCode::KeyJ));
        assert_eq!(mapping.button_for(KeyCode::KeyA), None);
        assert_eq!(mapping.len(), 1);
        assert_bijective(&mapping);
    }

    #[test]
    fn test_bijection_survives_arbitrary_remaps() {
        let mut mapping = KeyMapping::new();
        let keys = [
            KeyCode::KeyA,
            KeyCode::KeyB,
            KeyCode::KeyC,
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyB,
        ];
        let buttons = [
            Button::Left,
            Button::Up,
            Button::Left,
            Button::Down,
            Button::Up,
            Button::Pause,
        ];
        for (key, button) in keys.iter().zip(buttons.iter()) {
            mapping.remap(*key, *button);
            assert_bijective(&mapping);
        }
    }

    #[test]
    fn test_is_complete() {
        let mut mapping = KeyMapping::new();
        assert!(!mapping.is_complete());

        for (key, button) in crate::engine::input::button::default_bindings() {
            mapping.remap(key, button);
        }
        assert!(mapping.is_complete());

        // Stealing Left's key for Up leaves Left unmapped.
        let left_key = mapping.key_for(Button::Left).unwrap();
        mapping.remap(left_key, Button::Up);
        assert!(!mapping.is_complete());
    }

    #[test]
    fn test_lookup_missing_returns_none() {
        let mapping = KeyMapping::new();
        assert_eq!(mapping.button_for(KeyCode::KeyZ), None);
        assert_eq!(mapping.key_for(Button::Select), None);
        assert!(mapping.is_empty());
    }
}
