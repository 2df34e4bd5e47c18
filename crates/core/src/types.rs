use serde::{Deserialize, Serialize};

/// Grid coordinate. `y` grows upward: row 0 is the bottom of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty,
    Floor,
    Wall,
    /// Collectible placed on every room center once carving is done.
    Marker,
}

impl TileKind {
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::Marker)
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Floor => 1,
            Self::Wall => 2,
            Self::Marker => 3,
        }
    }
}
