//! Seeded room-and-corridor dungeon generation.
//!
//! One seed and one pair of playable dimensions produce exactly one
//! [`GeneratedWorld`]: a tile grid, the accepted rooms in placement order,
//! and the spanning-tree corridors that connect them.

pub mod error;
pub mod mapgen;
pub mod types;

pub use error::GenerationError;
pub use mapgen::{
    Edge, GeneratedWorld, GeneratorConfig, Grid, Room, WorldGenerator, WorldRng, generate_world,
};
pub use types::*;
