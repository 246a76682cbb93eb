// Tile world: map format, tilesets, walkability

mod tile;
mod tileset;
mod world;

pub use tile::Tile;
pub use tileset::Tileset;
pub use world::{World, WorldError};
