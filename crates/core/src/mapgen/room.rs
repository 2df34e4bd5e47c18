//! Axis-aligned rooms and their random sampling.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Pos;

use super::config::GeneratorConfig;
use super::rng::WorldRng;

/// Inclusive tile bounds of a room; the perimeter is wall, the rest floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    left: i32,
    right: i32,
    bottom: i32,
    top: i32,
}

impl Room {
    /// `(x, y)` is the bottom-left corner.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { left: x, right: x + width - 1, bottom: y, top: y + height - 1 }
    }

    /// Draws width, height, x, then y, in that order.
    ///
    /// Side draws are capped at the map dimension so the position ranges are
    /// never inverted; callers reject maps narrower than `min_room_side`.
    pub fn sample(
        rng: &mut WorldRng,
        map_width: i32,
        map_height: i32,
        config: &GeneratorConfig,
    ) -> Result<Self> {
        let min_side = config.min_room_side as i32;
        let max_side = config.max_room_side as i32;
        let width = rng.uniform(min_side, max_side.min(map_width))?;
        let height = rng.uniform(min_side, max_side.min(map_height))?;
        let x = rng.uniform(0, map_width - width)?;
        let y = rng.uniform(0, map_height - height)?;
        Ok(Self::new(x, y, width, height))
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.top - self.bottom + 1
    }

    pub fn center(&self) -> Pos {
        Pos { y: (self.bottom + self.top) / 2, x: (self.left + self.right) / 2 }
    }

    /// True when the inclusive footprints share at least one cell.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.bottom <= other.top
            && self.top >= other.bottom
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.bottom && pos.y <= self.top
    }

    pub fn is_perimeter(&self, pos: Pos) -> bool {
        self.contains(pos)
            && (pos.x == self.left
                || pos.x == self.right
                || pos.y == self.bottom
                || pos.y == self.top)
    }

    /// Squared distance between centers.
    pub(super) fn center_distance_squared(&self, other: &Self) -> i64 {
        let a = self.center();
        let b = other.center();
        let dx = i64::from(a.x - b.x);
        let dy = i64::from(a.y - b.y);
        dx * dx + dy * dy
    }
}
