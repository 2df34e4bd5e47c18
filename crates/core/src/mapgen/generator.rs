//! Generation pipeline: room count, placement, spanning tree, carving, markers.

use log::info;

use crate::error::{GenerationError, Result};
use crate::types::TileKind;

use super::carve::carve;
use super::config::GeneratorConfig;
use super::graph::build_mst;
use super::grid::Grid;
use super::model::GeneratedWorld;
use super::placement::generate_rooms;
use super::rng::WorldRng;
use super::room::Room;

pub struct WorldGenerator {
    seed: u64,
    width: usize,
    height: usize,
    config: GeneratorConfig,
}

impl WorldGenerator {
    pub fn new(seed: u64, width: usize, height: usize) -> Self {
        Self::with_config(seed, width, height, GeneratorConfig::default())
    }

    pub fn with_config(seed: u64, width: usize, height: usize, config: GeneratorConfig) -> Self {
        Self { seed, width, height, config }
    }

    /// Builds the world for this seed. Pure: calling it twice yields equal
    /// worlds, and nothing is shared between calls.
    pub fn generate(&self) -> Result<GeneratedWorld> {
        self.config.validate()?;
        self.check_dimensions()?;

        let mut rng = WorldRng::new(self.seed);
        let room_count = rng
            .uniform(self.config.min_room_count as i32, self.config.max_room_count as i32)?
            as usize;

        let mut grid = Grid::new(self.width, self.height);
        let rooms = generate_rooms(&mut rng, &mut grid, room_count, &self.config)?;
        // A validated config draws at least one room, and placement either
        // reaches the drawn count or fails.
        let start_position = rooms[0].center();

        let corridors = build_mst(&rooms);
        let mut dropped = 0;
        for edge in &corridors {
            dropped += carve(&mut grid, rooms[edge.from].center(), rooms[edge.to].center());
        }
        debug_assert_eq!(dropped, 0, "corridor writes fell outside the map");
        place_markers(&mut grid, &rooms);

        info!(
            "generated seed {} at {}x{}: {} rooms, {} corridors",
            self.seed,
            self.width,
            self.height,
            rooms.len(),
            corridors.len()
        );

        Ok(GeneratedWorld { seed: self.seed, grid, rooms, corridors, start_position })
    }

    /// Rejects maps that cannot hold one minimum-size room, whose sides do
    /// not fit tile coordinates, or whose cell count overflows.
    fn check_dimensions(&self) -> Result<()> {
        let min_side = self.config.min_room_side as usize;
        let fits = self.width >= min_side
            && self.height >= min_side
            && i32::try_from(self.width).is_ok()
            && i32::try_from(self.height).is_ok()
            && self.width.checked_mul(self.height).is_some();
        if !fits {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
                min_side: self.config.min_room_side,
            });
        }
        Ok(())
    }
}

fn place_markers(grid: &mut Grid, rooms: &[Room]) {
    for room in rooms {
        grid.set(room.center(), TileKind::Marker);
    }
}
