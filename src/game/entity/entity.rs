// Moving things in the world

use glam::Vec2;

use super::brain::{Brain, Gait, PlayerBrain, Steering, WanderBrain};
use crate::core::grid::GridPos;
use crate::engine::input::SharedKeyState;
use crate::engine::renderer::QuadBatch;
use crate::game::world::World;

/// Movement speeds in world pixels per second.
#[derive(Debug, Clone, Copy)]
pub struct MoveSpeed {
    pub walking: f32,
    pub running: f32,
}

const DEFAULT_SPEED: MoveSpeed = MoveSpeed {
    walking: 120.0,
    running: 240.0,
};

const PLAYER_COLOR: [f32; 4] = [0.90, 0.80, 0.25, 1.0];
const PEDESTRIAN_COLOR: [f32; 4] = [0.75, 0.35, 0.55, 1.0];

/// A character in the world. A brain decides how it wants to move each
/// fixed step; the entity applies that intent against the map's
/// walkability.
pub struct Entity {
    position: Vec2,
    size: Vec2,
    color: [f32; 4],
    speed: MoveSpeed,
    brain: Box<dyn Brain>,
}

impl Entity {
    pub fn new(brain: Box<dyn Brain>, position: Vec2, color: [f32; 4]) -> Self {
        Self {
            position,
            size: Vec2::new(12.0, 14.0),
            color,
            speed: DEFAULT_SPEED,
            brain,
        }
    }

    /// The player character, controlled through the shared key state.
    pub fn player(keys: SharedKeyState, spawn: GridPos) -> Self {
        Self::new(
            Box::new(PlayerBrain::new(keys)),
            spawn.world_center(),
            PLAYER_COLOR,
        )
    }

    /// A wandering pedestrian.
    pub fn pedestrian(spawn: GridPos) -> Self {
        Self::new(
            Box::new(WanderBrain::new()),
            spawn.world_center(),
            PEDESTRIAN_COLOR,
        )
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn grid_pos(&self) -> GridPos {
        GridPos::from_world(self.position)
    }

    /// Advance one fixed step: ask the brain for a steering decision and
    /// move as far as walkable tiles allow.
    pub fn update(&mut self, world: &World, dt: f32) {
        let Steering::Move(direction, gait) = self.brain.decide() else {
            return;
        };
        let speed = match gait {
            Gait::Walk => self.speed.walking,
            Gait::Run => self.speed.running,
        };
        let delta = direction.unit_vector() * speed * dt;

        // Axes resolve separately so the entity slides along walls instead
        // of sticking to them.
        let step_x = Vec2::new(self.position.x + delta.x, self.position.y);
        if world.is_walkable(GridPos::from_world(step_x)) {
            self.position = step_x;
        }
        let step_y = Vec2::new(self.position.x, self.position.y + delta.y);
        if world.is_walkable(GridPos::from_world(step_y)) {
            self.position = step_y;
        }
    }

    pub fn draw(&self, batch: &mut QuadBatch) {
        batch.push(self.position, self.size, self.color, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::TILE_SIZE;

    /// Replays a scripted list of steering decisions.
    struct Scripted {
        script: Vec<Steering>,
        next: usize,
    }

    impl Scripted {
        fn new(script: Vec<Steering>) -> Self {
            Self { script, next: 0 }
        }
    }

    impl Brain for Scripted {
        fn decide(&mut self) -> Steering {
            let step = self
                .script
                .get(self.next)
                .copied()
                .unwrap_or(Steering::Hold);
            self.next += 1;
            step
        }
    }

    use crate::game::entity::brain::Direction;

    fn scripted_entity(script: Vec<Steering>, spawn: GridPos) -> Entity {
        Entity::new(Box::new(Scripted::new(script)), spawn.world_center(), [1.0; 4])
    }

    #[test]
    fn test_hold_does_not_move() {
        let world = World::built_in();
        let mut entity = scripted_entity(vec![Steering::Hold], GridPos::new(2, 2));
        let before = entity.position();
        entity.update(&world, 1.0 / 30.0);
        assert_eq!(entity.position(), before);
    }

    #[test]
    fn test_walk_moves_at_walking_speed() {
        let world = World::built_in();
        let mut entity = scripted_entity(
            vec![Steering::Move(Direction::Right, Gait::Walk)],
            GridPos::new(5, 5),
        );
        let before = entity.position();
        entity.update(&world, 0.01);
        assert_eq!(entity.position().x, before.x + DEFAULT_SPEED.walking * 0.01);
        assert_eq!(entity.position().y, before.y);
    }

    #[test]
    fn test_run_is_faster_than_walk() {
        let world = World::built_in();
        let mut walker = scripted_entity(
            vec![Steering::Move(Direction::Down, Gait::Walk)],
            GridPos::new(5, 5),
        );
        let mut runner = scripted_entity(
            vec![Steering::Move(Direction::Down, Gait::Run)],
            GridPos::new(5, 5),
        );
        walker.update(&world, 0.01);
        runner.update(&world, 0.01);
        assert!(runner.position().y > walker.position().y);
    }

    #[test]
    fn test_blocked_tile_stops_movement() {
        let world = World::built_in();
        // Tile (1, 1) is the walkable corner; everything left of column 1
        // is border wall.
        let script = vec![Steering::Move(Direction::Left, Gait::Run); 60];
        let mut entity = scripted_entity(script, GridPos::new(1, 1));
        for _ in 0..60 {
            entity.update(&world, 1.0 / 30.0);
        }
        assert_eq!(entity.grid_pos(), GridPos::new(1, 1));
        assert!(world.is_walkable(entity.grid_pos()));
    }

    #[test]
    fn test_walls_never_entered_while_wandering() {
        let world = World::built_in();
        let mut entity = Entity::pedestrian(GridPos::new(3, 3));
        for _ in 0..600 {
            entity.update(&world, 1.0 / 30.0);
            assert!(world.is_walkable(entity.grid_pos()));
        }
    }

    #[test]
    fn test_draw_emits_one_quad() {
        let entity = scripted_entity(vec![], GridPos::new(2, 2));
        let mut batch = QuadBatch::new();
        entity.draw(&mut batch);
        assert_eq!(batch.quad_count(), 1);
        // Entities render above the tile layer.
        assert!(batch.vertices().iter().all(|v| v.position[2] == 1.0));
    }

    #[test]
    fn test_spawn_is_tile_center() {
        let entity = scripted_entity(vec![], GridPos::new(4, 7));
        assert_eq!(entity.position(), GridPos::new(4, 7).world_center());
        assert_eq!(entity.position().x, 7.5 * TILE_SIZE);
    }
}
