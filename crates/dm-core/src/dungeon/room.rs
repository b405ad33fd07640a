//! Room placement
//!
//! A room is a walled rectangle with a floor interior. It is anchored on the
//! cell just beyond the door and extends away from it: rooms entered from the
//! south lie north of the anchor, centred on it horizontally, and so on.

use log::trace;

use dm_rng::{Direction, RandomSource};

use super::{TileGrid, TileRect, TileType};

/// Smallest room side: a 2x2 floor ringed by walls
pub const MIN_ROOM_SIDE: i32 = 4;

/// Rectangle covered by a room of the given lengths anchored at `(x, y)`.
///
/// On the centred axis the low side gets `len / 2` cells and the high side
/// `(len + 1) / 2`, so odd lengths lean east or south.
pub fn room_rect(x: i32, y: i32, x_len: i32, y_len: i32, direction: Direction) -> TileRect {
    match direction {
        Direction::North => TileRect::new(x - x_len / 2, y - y_len, x + (x_len + 1) / 2, y),
        Direction::South => TileRect::new(x - x_len / 2, y, x + (x_len + 1) / 2, y + y_len),
        Direction::East => TileRect::new(x, y - y_len / 2, x + x_len, y + (y_len + 1) / 2),
        Direction::West => TileRect::new(x - x_len, y - y_len / 2, x, y + (y_len + 1) / 2),
    }
}

/// Try to stamp a room anchored at `(x, y)`.
///
/// Draws the lengths from `[4, x_max]` and `[4, y_max]`. The whole rectangle
/// must be on the grid and unused; otherwise nothing is written and `None`
/// is returned.
pub fn place_room<R: RandomSource + ?Sized>(
    grid: &mut TileGrid,
    rng: &mut R,
    x: i32,
    y: i32,
    x_max: i32,
    y_max: i32,
    direction: Direction,
) -> Option<TileRect> {
    let x_len = rng.next_int(MIN_ROOM_SIDE, x_max);
    let y_len = rng.next_int(MIN_ROOM_SIDE, y_max);
    let rect = room_rect(x, y, x_len, y_len, direction);

    if !grid.rect_in_bounds(&rect) || !grid.is_rect_unused(&rect) {
        trace!("room {x_len}x{y_len} at ({x}, {y}) facing {direction} rejected");
        return None;
    }

    grid.set_rect(&rect, TileType::DirtWall);
    if let Some(interior) = rect.shrink(1) {
        grid.set_rect(&interior, TileType::DirtFloor);
    }
    trace!("{}x{} room placed at {rect:?}", rect.width(), rect.height());
    Some(rect)
}
