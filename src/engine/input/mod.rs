// Keyboard input system
//
// The window layer reports every physical key transition to a single shared
// [`KeyState`] registry, which remembers held keys in press order. Each
// controller owns a bijective key-to-button [`KeyMapping`] (persisted as
// JSON per role) and resolves "what is the user commanding" by walking the
// registry newest-first through its mapping, so when two mapped keys are
// held at once the last one pressed wins.
//
// - `button`: the closed set of logical buttons + default bindings
// - `keys`: stable integer codes for persisting physical keys
// - `key_state`: the shared pressed-key registry
// - `mapping`: the per-controller key-to-button bijection
// - `controller`: query resolution, remapping, and config load/save

pub mod button;
pub mod controller;
pub mod key_state;
pub mod keys;
pub mod mapping;

// Re-export commonly used types
pub use button::Button;
pub use controller::Controller;
pub use key_state::{KeyState, SharedKeyState};
pub use mapping::KeyMapping;
