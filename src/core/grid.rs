// Tile grid geometry
//
// World space uses pixels with +y pointing down, matching the row-major map
// layout: row 0 is the top of the map, column 0 the left edge.

use glam::Vec2;

/// Side length of one square tile, in world pixels.
pub const TILE_SIZE: f32 = 16.0;

/// Row/column address of a tile in the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// World coordinates of this tile's center.
    pub fn world_center(self) -> Vec2 {
        Vec2::new(
            (self.col as f32 + 0.5) * TILE_SIZE,
            (self.row as f32 + 0.5) * TILE_SIZE,
        )
    }

    /// The tile containing a world-space point.
    pub fn from_world(point: Vec2) -> Self {
        Self {
            row: (point.y / TILE_SIZE).floor() as i32,
            col: (point.x / TILE_SIZE).floor() as i32,
        }
    }
}
