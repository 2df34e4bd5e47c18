//! L-shaped corridor carving between two room centers.

use crate::types::{Pos, TileKind};

use super::grid::Grid;

/// Carves a corridor from `from` to `to`: horizontally first, then
/// vertically.
///
/// Corridor floor is written unconditionally, so a corridor opens any room
/// wall it crosses. Flanking walls are only written over `Empty` cells and
/// never replace earlier floor or wall. The endpoint itself is left as is;
/// it is a room center that is already floor.
///
/// Returns how many writes fell outside the grid and were dropped. Corridors
/// between room centers of a generated world never produce any.
pub fn carve(grid: &mut Grid, from: Pos, to: Pos) -> usize {
    Digger::new(from, to).dig(grid)
}

struct Digger {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    dx: i32,
    dy: i32,
    dropped: usize,
}

impl Digger {
    fn new(from: Pos, to: Pos) -> Self {
        Self {
            x: from.x,
            y: from.y,
            end_x: to.x,
            end_y: to.y,
            dx: if from.x > to.x { -1 } else { 1 },
            dy: if from.y > to.y { -1 } else { 1 },
            dropped: 0,
        }
    }

    fn dig(mut self, grid: &mut Grid) -> usize {
        while self.x != self.end_x {
            self.step_horizontal(grid);
        }
        while self.y != self.end_y {
            self.step_vertical(grid);
        }
        self.dropped
    }

    fn step_horizontal(&mut self, grid: &mut Grid) {
        self.floor(grid, self.x, self.y);
        self.wall_if_empty(grid, self.x, self.y - 1);
        self.wall_if_empty(grid, self.x, self.y + 1);

        let next_x = self.x + self.dx;
        if next_x == self.end_x {
            // Close the turn before heading vertically; otherwise the outer
            // corner is left as a diagonal gap.
            self.floor(grid, next_x, self.y);
            self.wall_if_empty(grid, next_x, self.y - 1);
            self.wall_if_empty(grid, next_x, self.y + 1);
            self.wall_if_empty(grid, next_x + self.dx, self.y - 1);
            self.wall_if_empty(grid, next_x + self.dx, self.y + 1);
        }
        self.x = next_x;
    }

    fn step_vertical(&mut self, grid: &mut Grid) {
        self.wall_if_empty(grid, self.x - 1, self.y);
        self.wall_if_empty(grid, self.x + 1, self.y);
        self.floor(grid, self.x, self.y);
        self.y += self.dy;
    }

    fn floor(&mut self, grid: &mut Grid, x: i32, y: i32) {
        if !grid.set(Pos { y, x }, TileKind::Floor) {
            self.dropped += 1;
        }
    }

    fn wall_if_empty(&mut self, grid: &mut Grid, x: i32, y: i32) {
        let pos = Pos { y, x };
        if !grid.in_bounds(pos) {
            self.dropped += 1;
            return;
        }
        grid.set_if_empty(pos, TileKind::Wall);
    }
}
