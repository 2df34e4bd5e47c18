//! The finished world handed to callers.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Pos, TileKind};

use super::graph::Edge;
use super::grid::Grid;
use super::room::Room;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedWorld {
    pub seed: u64,
    pub grid: Grid,
    /// Placement order; room 0 is where play starts.
    pub rooms: Vec<Room>,
    /// Spanning-tree edges in the order they were carved.
    pub corridors: Vec<Edge>,
    pub start_position: Pos,
}

impl GeneratedWorld {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn marker_count(&self) -> usize {
        self.grid.count(TileKind::Marker)
    }

    /// Cells outside the map read as `Empty`.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.grid.get(pos).unwrap_or(TileKind::Empty)
    }

    /// Stable little-endian encoding of everything a seed determines.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.grid.tiles().len() + 16 * self.rooms.len() + 32);
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.height() as u32).to_le_bytes());
        bytes.extend(self.grid.tiles().iter().map(|tile| tile.code()));

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend(room.left().to_le_bytes());
            bytes.extend(room.right().to_le_bytes());
            bytes.extend(room.bottom().to_le_bytes());
            bytes.extend(room.top().to_le_bytes());
        }

        bytes.extend((self.corridors.len() as u32).to_le_bytes());
        for edge in &self.corridors {
            bytes.extend((edge.from as u32).to_le_bytes());
            bytes.extend((edge.to as u32).to_le_bytes());
        }

        bytes.extend(self.start_position.x.to_le_bytes());
        bytes.extend(self.start_position.y.to_le_bytes());
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_world() -> GeneratedWorld {
        let mut grid = Grid::new(6, 6);
        let room = Room::new(0, 0, 5, 5);
        grid.set(room.center(), TileKind::Marker);
        GeneratedWorld {
            seed: 9,
            grid,
            rooms: vec![room],
            corridors: Vec::new(),
            start_position: room.center(),
        }
    }

    #[test]
    fn canonical_bytes_cover_header_tiles_and_rooms() {
        let world = tiny_world();
        let bytes = world.canonical_bytes();
        // seed + dims + 36 tiles + room count + one room + corridor count + start
        assert_eq!(bytes.len(), 8 + 8 + 36 + 4 + 16 + 4 + 8);
        assert_eq!(&bytes[..8], &9_u64.to_le_bytes());
    }

    #[test]
    fn fingerprint_tracks_tile_changes() {
        let world = tiny_world();
        let mut changed = world.clone();
        changed.grid.set(Pos::new(5, 5), TileKind::Wall);

        assert_eq!(world.fingerprint(), tiny_world().fingerprint());
        assert_ne!(world.fingerprint(), changed.fingerprint());
    }

    #[test]
    fn tile_at_outside_map_is_empty() {
        let world = tiny_world();
        assert_eq!(world.tile_at(Pos::new(-1, 2)), TileKind::Empty);
        assert_eq!(world.tile_at(Pos::new(2, 2)), TileKind::Marker);
        assert_eq!(world.marker_count(), 1);
    }
}
