pub mod config;
pub mod game;
pub mod recognizer;
pub mod target;
pub mod types;
