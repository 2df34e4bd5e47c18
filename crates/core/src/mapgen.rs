//! Procedural map generation split into placement, connectivity, and carving.

pub mod config;
pub mod model;

mod carve;
mod generator;
mod graph;
mod grid;
mod placement;
mod rng;
mod room;

pub use carve::carve;
pub use config::GeneratorConfig;
pub use generator::WorldGenerator;
pub use graph::{Edge, build_mst};
pub use grid::Grid;
pub use model::GeneratedWorld;
pub use placement::generate_rooms;
pub use rng::WorldRng;
pub use room::Room;

use crate::error::Result;

pub fn generate_world(seed: u64, width: usize, height: usize) -> Result<GeneratedWorld> {
    WorldGenerator::new(seed, width, height).generate()
}
