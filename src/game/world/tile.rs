// A single map tile

use crate::core::grid::GridPos;

/// One cell of the world grid.
///
/// A tile stacks one or more tileset sprite indices; they draw in insertion
/// order, so the last index added is the topmost sprite. Tiles start out
/// blocked and become walkable only when the map says so.
#[derive(Debug, Clone, Default)]
pub struct Tile {
    walkable: bool,
    layers: Vec<GridPos>,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack another tileset sprite on this tile. Duplicate indices are
    /// ignored rather than drawn twice.
    pub fn push_layer(&mut self, sprite: GridPos) {
        if !self.layers.contains(&sprite) {
            self.layers.push(sprite);
        }
    }

    pub fn set_walkable(&mut self, walkable: bool) {
        self.walkable = walkable;
    }

    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    /// Sprite layers, bottom to top.
    pub fn layers(&self) -> &[GridPos] {
        &self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_blocked() {
        assert!(!Tile::new().is_walkable());
    }

    #[test]
    fn test_set_walkable() {
        let mut tile = Tile::new();
        tile.set_walkable(true);
        assert!(tile.is_walkable());
    }

    #[test]
    fn test_layers_keep_insertion_order() {
        let mut tile = Tile::new();
        tile.push_layer(GridPos::new(0, 0));
        tile.push_layer(GridPos::new(1, 2));
        assert_eq!(tile.layers(), &[GridPos::new(0, 0), GridPos::new(1, 2)]);
    }

    #[test]
    fn test_duplicate_layer_ignored() {
        let mut tile = Tile::new();
        tile.push_layer(GridPos::new(0, 0));
        tile.push_layer(GridPos::new(0, 0));
        assert_eq!(tile.layers().len(), 1);
    }
}
