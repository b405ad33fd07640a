//! Corridor placement
//!
//! Corridors are one cell wide and run from the anchor in the given
//! direction; unlike rooms they are not centred.

use log::trace;

use dm_rng::{Direction, RandomSource};

use super::{TileGrid, TileRect, TileType};

/// Shortest corridor length drawn
pub const MIN_CORRIDOR_LEN: i32 = 2;

/// Rectangle covered by a corridor of `len` starting at `(x, y)`
pub fn corridor_rect(x: i32, y: i32, len: i32, direction: Direction) -> TileRect {
    let (dx, dy) = direction.delta();
    TileRect::new(x, y, x + dx * len, y + dy * len)
}

/// Try to stamp a corridor starting at `(x, y)`.
///
/// Draws the length from `[2, max_len]`. Same all-or-nothing rule as rooms.
pub fn place_corridor<R: RandomSource + ?Sized>(
    grid: &mut TileGrid,
    rng: &mut R,
    x: i32,
    y: i32,
    max_len: i32,
    direction: Direction,
) -> Option<TileRect> {
    let len = rng.next_int(MIN_CORRIDOR_LEN, max_len);
    let rect = corridor_rect(x, y, len, direction);

    if !grid.rect_in_bounds(&rect) || !grid.is_rect_unused(&rect) {
        trace!("corridor of {len} from ({x}, {y}) heading {direction} rejected");
        return None;
    }

    grid.set_rect(&rect, TileType::Corridor);
    trace!("corridor placed at {rect:?}");
    Some(rect)
}
