// World map loading and queries

use std::fs;
use std::path::Path;

use glam::Vec2;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use super::tile::Tile;
use super::tileset::Tileset;
use crate::core::grid::{GridPos, TILE_SIZE};
use crate::engine::assets;
use crate::engine::renderer::QuadBatch;

/// Errors raised while loading a world map file.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse map file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown tileset '{0}'")]
    UnknownTileset(String),
    #[error("tile ({row}, {col}) is outside the {rows}x{cols} map")]
    TileOutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
}

/// On-disk map format.
#[derive(Debug, Deserialize)]
struct MapFile {
    /// Grid dimensions as `[rows, cols]`.
    size: [usize; 2],
    tileset: String,
    tiles: Vec<MapTile>,
}

#[derive(Debug, Deserialize)]
struct MapTile {
    /// Grid cell as `[row, col]`.
    world: [i64; 2],
    /// Tileset sprite index as `[row, col]`.
    sprite: [i64; 2],
    walkable: bool,
}

/// The tile map: a dense row-major grid of [`Tile`]s plus the tileset they
/// draw from.
///
/// Positions outside the grid are never walkable, which keeps entities
/// inside the map without any separate boundary check.
#[derive(Debug)]
pub struct World {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
    tileset: Tileset,
}

impl World {
    fn empty(rows: usize, cols: usize, tileset: Tileset) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![Tile::new(); rows * cols],
            tileset,
        }
    }

    /// Load a map from a JSON file.
    ///
    /// A tile may appear multiple times in the file; later entries stack
    /// extra sprite layers on the same cell, and the last entry's
    /// `walkable` flag wins.
    pub fn from_file(path: &Path) -> Result<Self, WorldError> {
        let text = fs::read_to_string(path)?;
        let map: MapFile = serde_json::from_str(&text)?;

        let tileset = Tileset::from_name(&map.tileset)
            .ok_or_else(|| WorldError::UnknownTileset(map.tileset.clone()))?;
        let mut world = Self::empty(map.size[0], map.size[1], tileset);

        for entry in &map.tiles {
            let (row, col) = (entry.world[0], entry.world[1]);
            if row < 0 || col < 0 || row as usize >= world.rows || col as usize >= world.cols {
                return Err(WorldError::TileOutOfBounds {
                    row,
                    col,
                    rows: world.rows,
                    cols: world.cols,
                });
            }
            let index = row as usize * world.cols + col as usize;
            let tile = &mut world.tiles[index];
            tile.push_layer(GridPos::new(entry.sprite[0] as i32, entry.sprite[1] as i32));
            tile.set_walkable(entry.walkable);
        }

        info!(
            "Loaded {}x{} {} world from {}",
            world.rows,
            world.cols,
            tileset.name(),
            path.display()
        );
        Ok(world)
    }

    /// Load the tutorial map, falling back to a built-in one if the file
    /// is missing or invalid.
    pub fn tutorial() -> Self {
        let path = assets::world_dir().join("tutorial.json");
        match Self::from_file(&path) {
            Ok(world) => world,
            Err(err) => {
                warn!(
                    "Could not load {}: {}. Using the built-in map.",
                    path.display(),
                    err
                );
                Self::built_in()
            }
        }
    }

    /// A small hand-built map: open forest floor ringed by blocking trees.
    pub fn built_in() -> Self {
        const ROWS: usize = 12;
        const COLS: usize = 16;

        let mut world = Self::empty(ROWS, COLS, Tileset::Forest);
        for row in 0..ROWS {
            for col in 0..COLS {
                let tile = &mut world.tiles[row * COLS + col];
                let border = row == 0 || col == 0 || row == ROWS - 1 || col == COLS - 1;
                if border {
                    tile.push_layer(GridPos::new(0, 3));
                    tile.set_walkable(false);
                } else {
                    // Alternate the two grass shades in a checker pattern.
                    tile.push_layer(GridPos::new(0, ((row + col) % 2) as i32));
                    tile.set_walkable(true);
                }
            }
        }
        world
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tileset(&self) -> Tileset {
        self.tileset
    }

    /// The tile at a grid position, if it is inside the map.
    pub fn tile(&self, pos: GridPos) -> Option<&Tile> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&self.tiles[row * self.cols + col])
    }

    /// Whether an entity may stand on this grid position. Out-of-bounds
    /// positions are blocked.
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.tile(pos).is_some_and(Tile::is_walkable)
    }

    /// Queue every tile layer for drawing, bottom layers first.
    pub fn draw(&self, batch: &mut QuadBatch) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = GridPos::new(row as i32, col as i32);
                let tile = &self.tiles[row * self.cols + col];
                for sprite in tile.layers() {
                    batch.push(
                        pos.world_center(),
                        Vec2::splat(TILE_SIZE),
                        self.tileset.color(*sprite),
                        0.0,
                    );
                }
            }
        }
    }
}
