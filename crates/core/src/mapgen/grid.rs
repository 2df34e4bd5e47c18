//! Row-major tile buffer written by placement and carving.

use serde::{Deserialize, Serialize};

use crate::types::{Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Every cell starts out `Empty`.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![TileKind::Empty; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<TileKind> {
        self.index(pos).map(|index| self.tiles[index])
    }

    /// Out-of-bounds writes are dropped and reported as `false`.
    pub fn set(&mut self, pos: Pos, tile: TileKind) -> bool {
        match self.index(pos) {
            Some(index) => {
                self.tiles[index] = tile;
                true
            }
            None => false,
        }
    }

    /// Writes `tile` only over an `Empty` cell; returns whether it wrote.
    pub fn set_if_empty(&mut self, pos: Pos, tile: TileKind) -> bool {
        match self.index(pos) {
            Some(index) if self.tiles[index].is_empty() => {
                self.tiles[index] = tile;
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, tile: TileKind) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    pub fn positions_of(&self, tile: TileKind) -> Vec<Pos> {
        self.iter().filter(|&(_, candidate)| candidate == tile).map(|(pos, _)| pos).collect()
    }

    /// Cells in row-major order starting from `(0, 0)`.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, TileKind)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(index, &tile)| {
            (Pos { y: (index / width) as i32, x: (index % width) as i32 }, tile)
        })
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }
}
