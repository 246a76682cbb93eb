// Entity decision making

use glam::Vec2;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::input::{Button, Controller, SharedKeyState};

/// Cardinal movement direction in the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Unit vector in world space. +y points down, so `Up` is negative y.
    pub fn unit_vector(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// How fast a steering decision moves the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gait {
    Walk,
    Run,
}

/// One tick's worth of movement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steering {
    Hold,
    Move(Direction, Gait),
}

/// Decides, once per fixed step, how an entity wants to move. Implementors
/// never touch the entity itself; the entity applies the returned steering
/// against the world.
pub trait Brain {
    fn decide(&mut self) -> Steering;
}

/// Player control: direction comes from the controller's most recently
/// pressed direction key, and holding Cancel switches the gait to a run.
pub struct PlayerBrain {
    controller: Controller,
}

impl PlayerBrain {
    pub fn new(keys: SharedKeyState) -> Self {
        Self {
            controller: Controller::player(keys),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_controller(controller: Controller) -> Self {
        Self { controller }
    }
}

impl Brain for PlayerBrain {
    fn decide(&mut self) -> Steering {
        let Some(button) = self.controller.pressed_direction() else {
            return Steering::Hold;
        };
        let direction = match button {
            Button::Left => Direction::Left,
            Button::Up => Direction::Up,
            Button::Right => Direction::Right,
            Button::Down => Direction::Down,
            _ => return Steering::Hold,
        };
        let gait = if self.controller.pressed_button(&[Button::Cancel]).is_some() {
            Gait::Run
        } else {
            Gait::Walk
        };
        Steering::Move(direction, gait)
    }
}

/// Odds (out of [`WANDER_ODDS_OUT_OF`]) that a pedestrian moves on a given
/// step.
const WANDER_ODDS: u32 = 2;
const WANDER_ODDS_OUT_OF: u32 = 10;

/// Aimless pedestrian: each step it has a 20% chance of walking one step in
/// a random direction, otherwise it stands still.
pub struct WanderBrain {
    rng: StdRng,
}

impl WanderBrain {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for WanderBrain {
    fn default() -> Self {
        Self::new()
    }
}

impl Brain for WanderBrain {
    fn decide(&mut self) -> Steering {
        if self.rng.gen_range(0..WANDER_ODDS_OUT_OF) >= WANDER_ODDS {
            return Steering::Hold;
        }
        let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        debug!("Pedestrian wanders {:?}", direction);
        Steering::Move(direction, Gait::Walk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::KeyState;
    use winit::keyboard::KeyCode;

    fn player_brain() -> (SharedKeyState, PlayerBrain) {
        let keys = KeyState::shared();
        let brain = PlayerBrain::with_controller(Controller::new(keys.clone()));
        (keys, brain)
    }

    #[test]
    fn test_player_holds_without_input() {
        let (_keys, mut brain) = player_brain();
        assert_eq!(brain.decide(), Steering::Hold);
    }

    #[test]
    fn test_player_walks_toward_pressed_direction() {
        let (keys, mut brain) = player_brain();
        keys.borrow_mut().press(KeyCode::KeyD);
        assert_eq!(brain.decide(), Steering::Move(Direction::Right, Gait::Walk));
    }

    #[test]
    fn test_player_runs_while_cancel_held() {
        let (keys, mut brain) = player_brain();
        keys.borrow_mut().press(KeyCode::KeyW);
        keys.borrow_mut().press(KeyCode::KeyQ);
        assert_eq!(brain.decide(), Steering::Move(Direction::Up, Gait::Run));
    }

    #[test]
    fn test_player_cancel_alone_does_not_move() {
        let (keys, mut brain) = player_brain();
        keys.borrow_mut().press(KeyCode::KeyQ);
        assert_eq!(brain.decide(), Steering::Hold);
    }

    #[test]
    fn test_player_newest_direction_wins() {
        let (keys, mut brain) = player_brain();
        keys.borrow_mut().press(KeyCode::KeyA);
        keys.borrow_mut().press(KeyCode::KeyS);
        assert_eq!(brain.decide(), Steering::Move(Direction::Down, Gait::Walk));
    }

    #[test]
    fn test_wander_is_mostly_idle() {
        let mut brain = WanderBrain::from_seed(7);
        let moves = (0..1000)
            .filter(|_| matches!(brain.decide(), Steering::Move(..)))
            .count();
        // 20% odds per step; a fixed seed keeps this deterministic.
        assert!(moves > 100 && moves < 350, "moved {moves} times");
    }

    #[test]
    fn test_wander_never_runs() {
        let mut brain = WanderBrain::from_seed(11);
        for _ in 0..1000 {
            if let Steering::Move(_, gait) = brain.decide() {
                assert_eq!(gait, Gait::Walk);
            }
        }
    }

    #[test]
    fn test_wander_covers_all_directions() {
        let mut brain = WanderBrain::from_seed(3);
        let mut seen = Vec::new();
        for _ in 0..1000 {
            if let Steering::Move(direction, _) = brain.decide() {
                if !seen.contains(&direction) {
                    seen.push(direction);
                }
            }
        }
        assert_eq!(seen.len(), Direction::ALL.len());
    }

    #[test]
    fn test_unit_vectors_are_axis_aligned() {
        for direction in Direction::ALL {
            let v = direction.unit_vector();
            assert_eq!(v.length(), 1.0);
            assert!(v.x == 0.0 || v.y == 0.0);
        }
    }
}
