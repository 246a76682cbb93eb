// Entities and their brains

mod brain;
mod entity;

pub use brain::{Brain, Direction, Gait, PlayerBrain, Steering, WanderBrain};
pub use entity::{Entity, MoveSpeed};
