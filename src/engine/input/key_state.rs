// Shared pressed-key registry

use std::cell::RefCell;
use std::rc::Rc;

use winit::keyboard::KeyCode;

/// Registry of every physical key currently held down, in press order.
///
/// One instance exists per process, owned by the application root. Every
/// controller holds a [`SharedKeyState`] clone of it, so a key press is
/// visible to all controllers at once. The most recently pressed key sits at
/// the back; queries that care about recency walk the registry in reverse.
#[derive(Debug, Default)]
pub struct KeyState {
    pressed: Vec<KeyCode>,
}

/// Handle to the process-wide registry. The event loop and all controllers
/// run on one thread, so plain shared ownership is enough.
pub type SharedKeyState = Rc<RefCell<KeyState>>;

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the shared handle the application root hands to controllers.
    pub fn shared() -> SharedKeyState {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Record a key press. Repeated presses of a held key are ignored, so
    /// OS key-repeat events cannot duplicate an entry or bump its recency.
    pub fn press(&mut self, key: KeyCode) {
        if !self.pressed.contains(&key) {
            self.pressed.push(key);
            log::debug!("Key {:?} pressed", key);
        }
    }

    /// Record a key release. Releasing a key that was never pressed is a
    /// no-op.
    pub fn release(&mut self, key: KeyCode) {
        if let Some(index) = self.pressed.iter().position(|k| *k == key) {
            self.pressed.remove(index);
            log::debug!("Key {:?} released", key);
        }
    }

    /// Whether a key is currently held.
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Held keys, most recently pressed first.
    pub fn iter_recent(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.pressed.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_registers_key() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::KeyA);
        assert!(keys.is_pressed(KeyCode::KeyA));
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_press_is_idempotent() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyA);
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_repeat_press_does_not_bump_recency() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyD);
        keys.press(KeyCode::KeyA); // key-repeat while D is newest
        assert_eq!(keys.iter_recent().next(), Some(KeyCode::KeyD));
    }

    #[test]
    fn test_release_removes_exactly_one() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyD);
        keys.release(KeyCode::KeyA);
        assert!(!keys.is_pressed(KeyCode::KeyA));
        assert!(keys.is_pressed(KeyCode::KeyD));
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_release_unpressed_is_noop() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::KeyA);
        keys.release(KeyCode::KeyZ);
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_press_release_restores_prior_state() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyB);
        keys.release(KeyCode::KeyB);
        assert_eq!(keys.len(), 1);
        assert_eq!(keys.iter_recent().next(), Some(KeyCode::KeyA));
    }

    #[test]
    fn test_iter_recent_orders_newest_first() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyS);
        keys.press(KeyCode::KeyD);
        let order: Vec<_> = keys.iter_recent().collect();
        assert_eq!(order, vec![KeyCode::KeyD, KeyCode::KeyS, KeyCode::KeyA]);
    }

    #[test]
    fn test_shared_handle_sees_same_presses() {
        let shared = KeyState::shared();
        let other = Rc::clone(&shared);
        shared.borrow_mut().press(KeyCode::Space);
        assert!(other.borrow().is_pressed(KeyCode::Space));
    }
}
