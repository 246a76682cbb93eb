// Engine modules: assets, frame pacing, input, rendering

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
