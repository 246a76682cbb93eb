// Keyboard controller: mapping + shared registry + persistence

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::engine::assets;

use super::button::{default_bindings, Button};
use super::key_state::SharedKeyState;
use super::keys;
use super::mapping::KeyMapping;

/// Resolves the shared pressed-key registry into logical buttons through a
/// per-instance key mapping.
///
/// A controller built with a configuration path loads its mapping from that
/// file (falling back to the defaults on any problem) and writes the mapping
/// back when dropped, so remappings made during a session persist. A
/// controller built without a path never touches the filesystem.
pub struct Controller {
    keys: SharedKeyState,
    mapping: KeyMapping,
    config_path: Option<PathBuf>,
}

impl Controller {
    /// Controller with the built-in default mapping and no persistence.
    pub fn new(keys: SharedKeyState) -> Self {
        let mut controller = Self {
            keys,
            mapping: KeyMapping::new(),
            config_path: None,
        };
        controller.use_default_mapping();
        controller
    }

    /// Controller configured from a JSON file of `ButtonName: key_code`
    /// entries. The mapping is saved back to `path` on drop, whether or not
    /// the load succeeded.
    pub fn from_file(keys: SharedKeyState, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut controller = Self {
            keys,
            mapping: KeyMapping::new(),
            config_path: Some(path.clone()),
        };

        let Some(config) = assets::read_json(&path) else {
            controller.use_default_mapping();
            return controller;
        };
        let Some(entries) = config.as_object() else {
            warn!("{} is not a JSON object", path.display());
            controller.use_default_mapping();
            return controller;
        };

        for (field, value) in entries {
            let Some(button) = Button::from_name(field) else {
                warn!("Unknown button {:?} in {}", field, path.display());
                continue;
            };
            let Some(code) = value.as_u64().and_then(|c| u32::try_from(c).ok()) else {
                warn!("Bad key code {} for {:?} in {}", value, field, path.display());
                continue;
            };
            if !controller.change_key_mapping(code, button) {
                warn!("Skipped mapping {:?} to key code {}", field, code);
            }
        }

        if !controller.is_valid() {
            warn!("Incomplete mapping in {}, using defaults", path.display());
            controller.use_default_mapping();
            return controller;
        }

        info!("Loaded controller mapping from {}", path.display());
        controller
    }

    /// The player character's controller, persisted under the asset root.
    pub fn player(keys: SharedKeyState) -> Self {
        Self::from_file(keys, assets::controller_dir().join("player.json"))
    }

    /// An enemy controller with its own mapping file. Same resolution
    /// logic as the player's; only the persistence target differs.
    #[allow(dead_code)]
    pub fn enemy(keys: SharedKeyState) -> Self {
        Self::from_file(keys, assets::controller_dir().join("enemy.json"))
    }

    fn use_default_mapping(&mut self) {
        self.mapping = KeyMapping::new();
        for (key, button) in default_bindings() {
            self.mapping.remap(key, button);
        }

        // The defaults live in source; an incomplete set is a bug, not a
        // runtime condition callers can do anything about.
        if !self.mapping.is_complete() {
            error!("Built-in default key mapping is incomplete");
        }
        info!("Using default key mapping");
    }

    /// The most recently pressed held key that maps to a button in `filter`,
    /// if any. An empty filter accepts every button.
    ///
    /// Walking the registry newest-first makes simultaneous presses
    /// deterministic: holding Left and then pressing Right yields Right
    /// until one of them is released. Keys without a mapping, and keys whose
    /// button falls outside a non-empty filter, are passed over entirely.
    pub fn pressed_button(&self, filter: &[Button]) -> Option<Button> {
        let keys = self.keys.borrow();
        for key in keys.iter_recent() {
            let Some(button) = self.mapping.button_for(key) else {
                continue;
            };
            if !filter.is_empty() && !filter.contains(&button) {
                continue;
            }
            return Some(button);
        }
        None
    }

    /// The currently commanded movement button, if any.
    pub fn pressed_direction(&self) -> Option<Button> {
        self.pressed_button(&Button::DIRECTIONS)
    }

    /// The currently commanded menu/meta button, if any.
    pub fn pressed_selection(&self) -> Option<Button> {
        self.pressed_button(&Button::SELECTIONS)
    }

    /// Rebind `button` to the key with stable code `code`.
    ///
    /// Returns false and leaves the mapping untouched when the code is
    /// outside the supported range. A successful rebind may leave another
    /// button unmapped; check [`Controller::is_valid`] before relying on a
    /// bulk-edited mapping.
    pub fn change_key_mapping(&mut self, code: u32, button: Button) -> bool {
        let Some(key) = keys::from_code(code) else {
            warn!("Invalid key code {}", code);
            return false;
        };
        self.mapping.remap(key, button);
        true
    }

    /// Whether every button currently has a key.
    pub fn is_valid(&self) -> bool {
        self.mapping.is_complete()
    }

    /// Write the current mapping to `path` as `ButtonName: key_code` JSON,
    /// creating missing parent directories. Best effort: failures are logged
    /// and reported as `false`, and a failure partway through the write
    /// leaves the file contents undefined.
    pub fn save_key_mappings(&self, path: &Path) -> bool {
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!("Failed to create {}: {}", parent.display(), err);
                return false;
            }
        }

        let mut config = serde_json::Map::new();
        for (key, button) in self.mapping.pairs() {
            // Every key in the mapping came through the stable-code check.
            let Some(code) = keys::code_of(key) else {
                debug_assert!(false, "mapped key {key:?} has no stable code");
                continue;
            };
            config.insert(button.name().to_string(), code.into());
        }

        let text = match serde_json::to_string_pretty(&serde_json::Value::Object(config)) {
            Ok(text) => text,
            Err(err) => {
                warn!("Failed to serialize mapping: {}", err);
                return false;
            }
        };
        match fs::write(path, text) {
            Ok(()) => {
                info!("Saved controller mapping to {}", path.display());
                true
            }
            Err(err) => {
                warn!("Failed to write {}: {}", path.display(), err);
                false
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn mapping(&self) -> &KeyMapping {
        &self.mapping
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(path) = self.config_path.take() {
            self.save_key_mappings(&path);
        }
    }
}
