// Asset directory layout and config-file reading

use std::fs;
use std::path::{Path, PathBuf};

use log::error;

/// Root of the game's on-disk assets, relative to the working directory.
pub fn asset_dir() -> PathBuf {
    PathBuf::from("asset")
}

/// Directory holding per-role controller configuration files.
pub fn controller_dir() -> PathBuf {
    asset_dir().join("controller")
}

/// Directory holding world map files.
pub fn world_dir() -> PathBuf {
    asset_dir().join("world")
}

/// Read and parse a JSON document, absorbing every failure mode.
///
/// Returns `None` if the file is missing, unreadable, or not valid JSON;
/// the cause is logged. Callers treat all three identically and fall back
/// to built-in defaults.
pub fn read_json(path: &Path) -> Option<serde_json::Value> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            error!("Failed to read {}: {}", path.display(), err);
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            error!("Failed to parse {}: {}", path.display(), err);
            None
        }
    }
}
