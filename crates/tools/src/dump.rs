//! Plain-text dump of a generated world for eyeballing seeds.

use cavern_core::{GeneratedWorld, Pos, TileKind};

pub const START_GLYPH: char = '@';

pub fn glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Empty => ' ',
        TileKind::Floor => '.',
        TileKind::Wall => '#',
        TileKind::Marker => '0',
    }
}

/// One line per row, highest `y` first, so the dump reads with north up.
pub fn render_text(world: &GeneratedWorld, show_start: bool) -> String {
    let mut out = String::with_capacity((world.width() + 1) * world.height());
    for y in (0..world.height() as i32).rev() {
        for x in 0..world.width() as i32 {
            let pos = Pos { y, x };
            let glyph = if show_start && pos == world.start_position {
                START_GLYPH
            } else {
                glyph(world.tile_at(pos))
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

pub fn summary(world: &GeneratedWorld) -> String {
    format!(
        "seed:        {}\n\
         size:        {}x{}\n\
         rooms:       {}\n\
         marker goal: {}\n\
         start:       ({}, {})\n\
         fingerprint: {:016x}\n",
        world.seed,
        world.width(),
        world.height(),
        world.room_count(),
        world.room_count().saturating_sub(1),
        world.start_position.x,
        world.start_position.y,
        world.fingerprint()
    )
}
