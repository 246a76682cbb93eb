// Game session: world, entities, pause state

pub mod entity;
pub mod world;

use glam::Vec2;
use log::info;

use crate::core::grid::GridPos;
use crate::engine::input::SharedKeyState;
use crate::engine::renderer::QuadBatch;
use entity::Entity;
use world::World;

/// One running play session.
///
/// Owns the world and everything moving in it. Updates are driven by the
/// fixed-step loop in `main`; a paused session ignores updates but still
/// draws.
pub struct Game {
    world: World,
    player: Entity,
    pedestrians: Vec<Entity>,
    playing: bool,
}

impl Game {
    /// Start a session on the tutorial map.
    pub fn new(keys: SharedKeyState) -> Self {
        let world = World::tutorial();
        let mut spawns = walkable_tiles(&world);

        let player_spawn = spawns.next().unwrap_or(GridPos::new(0, 0));
        let player = Entity::player(keys, player_spawn);

        // Drop the pedestrian off away from the player.
        let pedestrian_spawn = spawns.last().unwrap_or(player_spawn);
        let pedestrians = vec![Entity::pedestrian(pedestrian_spawn)];

        info!(
            "Session started: {}x{} world, player at {:?}",
            world.rows(),
            world.cols(),
            player_spawn
        );

        Self {
            world,
            player,
            pedestrians,
            playing: true,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_parts(world: World, player: Entity, pedestrians: Vec<Entity>) -> Self {
        Self {
            world,
            player,
            pedestrians,
            playing: true,
        }
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if !self.playing {
            self.playing = true;
            info!("Game resumed");
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance one fixed step. Does nothing while paused.
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        self.player.update(&self.world, dt);
        for pedestrian in &mut self.pedestrians {
            pedestrian.update(&self.world, dt);
        }
    }

    /// Queue the frame: tiles first, then entities on top.
    pub fn draw(&self, batch: &mut QuadBatch) {
        self.world.draw(batch);
        self.player.draw(batch);
        for pedestrian in &self.pedestrians {
            pedestrian.draw(batch);
        }
    }

    /// Where the camera should look.
    pub fn camera_target(&self) -> Vec2 {
        self.player.position()
    }
}

/// Walkable tiles in row-major order.
fn walkable_tiles(world: &World) -> impl Iterator<Item = GridPos> + '_ {
    let (rows, cols) = (world.rows() as i32, world.cols() as i32);
    (0..rows)
        .flat_map(move |row| (0..cols).map(move |col| GridPos::new(row, col)))
        .filter(move |pos| world.is_walkable(*pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::{Brain, Direction, Gait, Steering};

    struct AlwaysRight;

    impl Brain for AlwaysRight {
        fn decide(&mut self) -> Steering {
            Steering::Move(Direction::Right, Gait::Walk)
        }
    }

    fn test_game() -> Game {
        let world = World::built_in();
        let player = Entity::new(
            Box::new(AlwaysRight),
            GridPos::new(2, 2).world_center(),
            [1.0; 4],
        );
        Game::with_parts(world, player, vec![])
    }

    #[test]
    fn test_update_moves_entities() {
        let mut game = test_game();
        let before = game.camera_target();
        game.update(1.0 / 30.0);
        assert!(game.camera_target().x > before.x);
    }

    #[test]
    fn test_paused_game_does_not_update() {
        let mut game = test_game();
        game.pause();
        let before = game.camera_target();
        game.update(1.0 / 30.0);
        assert_eq!(game.camera_target(), before);
        assert!(!game.is_playing());
    }

    #[test]
    fn test_resume_after_pause() {
        let mut game = test_game();
        game.pause();
        game.resume();
        assert!(game.is_playing());
        let before = game.camera_target();
        game.update(1.0 / 30.0);
        assert!(game.camera_target().x > before.x);
    }

    #[test]
    fn test_draw_layers_world_below_entities() {
        let game = test_game();
        let mut batch = QuadBatch::new();
        game.draw(&mut batch);

        // The last quad queued is the player, above the tile layer.
        let last = &batch.vertices()[batch.vertices().len() - 4..];
        assert!(last.iter().all(|v| v.position[2] == 1.0));
        assert!(batch.quad_count() > 1);
    }

    #[test]
    fn test_walkable_tiles_skip_border() {
        let world = World::built_in();
        let first = walkable_tiles(&world).next().unwrap();
        assert_eq!(first, GridPos::new(1, 1));
    }
}
