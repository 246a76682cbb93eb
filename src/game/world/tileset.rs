// Tileset palettes

use crate::core::grid::GridPos;

/// Which palette a world draws its tiles from.
///
/// A map names its tileset in its JSON file; the sprite index stored on each
/// tile layer selects a color out of that palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tileset {
    Urban,
    Forest,
}

/// Palette width. Sprite indices address a conceptual grid of this many
/// columns per row.
const PALETTE_COLS: i32 = 4;

const URBAN_PALETTE: [[f32; 4]; 8] = [
    [0.55, 0.55, 0.58, 1.0], // pavement
    [0.40, 0.40, 0.44, 1.0], // road
    [0.70, 0.68, 0.62, 1.0], // sidewalk
    [0.30, 0.32, 0.38, 1.0], // wall
    [0.62, 0.30, 0.26, 1.0], // brick
    [0.25, 0.45, 0.55, 1.0], // glass
    [0.20, 0.50, 0.25, 1.0], // park grass
    [0.15, 0.15, 0.18, 1.0], // shadow
];

const FOREST_PALETTE: [[f32; 4]; 8] = [
    [0.22, 0.48, 0.24, 1.0], // grass
    [0.16, 0.38, 0.18, 1.0], // dark grass
    [0.45, 0.35, 0.22, 1.0], // dirt path
    [0.30, 0.24, 0.14, 1.0], // tree trunk
    [0.12, 0.30, 0.14, 1.0], // canopy
    [0.25, 0.45, 0.60, 1.0], // water
    [0.55, 0.52, 0.48, 1.0], // rock
    [0.60, 0.55, 0.30, 1.0], // reeds
];

impl Tileset {
    /// Look a tileset up by the name used in map files. Matching is
    /// case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "urban" => Some(Tileset::Urban),
            "forest" => Some(Tileset::Forest),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tileset::Urban => "urban",
            Tileset::Forest => "forest",
        }
    }

    /// Color of the sprite at the given index. Indices are laid out
    /// row-major over the palette grid and wrap past its end, so a map may
    /// reference any index without failing.
    pub fn color(self, sprite: GridPos) -> [f32; 4] {
        let palette = match self {
            Tileset::Urban => &URBAN_PALETTE,
            Tileset::Forest => &FOREST_PALETTE,
        };
        let flat = sprite.row.max(0) * PALETTE_COLS + sprite.col.max(0);
        palette[flat as usize % palette.len()]
    }
}
