// Core types shared by the engine and the game

pub mod grid;
