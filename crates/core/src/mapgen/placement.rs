//! Rejection sampling of non-overlapping rooms.

use log::{debug, trace, warn};

use crate::error::{GenerationError, Result};
use crate::types::{Pos, TileKind};

use super::config::GeneratorConfig;
use super::grid::Grid;
use super::rng::WorldRng;
use super::room::Room;

/// Samples candidates until `target_count` rooms are accepted, painting each
/// accepted room into `grid` immediately.
///
/// Rooms are returned in acceptance order. Fails with
/// [`GenerationError::UnreachableRoomCount`] once `max_placement_attempts`
/// candidates have been drawn without reaching the target.
pub fn generate_rooms(
    rng: &mut WorldRng,
    grid: &mut Grid,
    target_count: usize,
    config: &GeneratorConfig,
) -> Result<Vec<Room>> {
    let map_width = dimension(grid.width(), grid, config)?;
    let map_height = dimension(grid.height(), grid, config)?;
    if map_width < config.min_room_side as i32 || map_height < config.min_room_side as i32 {
        return Err(invalid_dimensions(grid, config));
    }

    let mut rooms: Vec<Room> = Vec::with_capacity(target_count);
    let mut attempts = 0_u32;
    while rooms.len() < target_count {
        if attempts == config.max_placement_attempts {
            warn!(
                "room placement gave up with {} of {target_count} rooms after {attempts} attempts",
                rooms.len()
            );
            return Err(GenerationError::UnreachableRoomCount {
                placed: rooms.len(),
                target: target_count,
                attempts,
            });
        }
        attempts += 1;

        let candidate = Room::sample(rng, map_width, map_height, config)?;
        if rooms.iter().any(|existing| existing.overlaps(&candidate)) {
            trace!("rejected candidate {candidate:?}");
            continue;
        }

        let dropped = paint_room(grid, &candidate);
        debug_assert_eq!(dropped, 0, "room {candidate:?} extends past the map");
        debug!("accepted room {} at {candidate:?} after {attempts} attempts", rooms.len());
        rooms.push(candidate);
    }

    Ok(rooms)
}

/// Perimeter cells become `Wall`, interior cells `Floor`. Returns the number
/// of cells that fell outside the grid.
pub(super) fn paint_room(grid: &mut Grid, room: &Room) -> usize {
    let mut dropped = 0;
    for x in room.left()..=room.right() {
        for y in room.bottom()..=room.top() {
            let pos = Pos { y, x };
            let tile = if room.is_perimeter(pos) { TileKind::Wall } else { TileKind::Floor };
            if !grid.set(pos, tile) {
                dropped += 1;
            }
        }
    }
    dropped
}

fn dimension(value: usize, grid: &Grid, config: &GeneratorConfig) -> Result<i32> {
    i32::try_from(value).map_err(|_| invalid_dimensions(grid, config))
}

fn invalid_dimensions(grid: &Grid, config: &GeneratorConfig) -> GenerationError {
    GenerationError::InvalidDimensions {
        width: grid.width(),
        height: grid.height(),
        min_side: config.min_room_side,
    }
}
