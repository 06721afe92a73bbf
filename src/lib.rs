pub mod config;
pub mod core;
pub mod grid;
pub mod puzzles;
