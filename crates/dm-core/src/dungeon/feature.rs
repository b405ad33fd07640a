//! Feature growth: attach a new room or corridor to existing space through a door

use log::trace;
use serde::{Deserialize, Serialize};
use strum::Display;

use dm_rng::{Direction, RandomSource};

use super::corridor::place_corridor;
use super::room::place_room;
use super::{TileGrid, TileRect, TileType};
use crate::config::GeneratorConfig;

/// Growth directions in the order candidate cells are tested.
///
/// A direction applies when the neighbour *behind* it (its opposite) is
/// walkable, so the new feature grows away from existing space.
const GROWTH_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum FeatureKind {
    Room,
    Corridor,
}

/// A feature added by the growth loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub kind: FeatureKind,
    /// Cell converted to a door
    pub door: (i32, i32),
    pub direction: Direction,
    /// Cells stamped by the room or corridor
    pub area: TileRect,
}

/// Grow one feature out of the door candidate `(x, y)`.
///
/// `(dx, dy)` points away from the existing structure. Rolls `[0, 100]`
/// against the room chance; a room also clears the wall cell just past the
/// door. Nothing is written when the placement fails.
#[allow(clippy::too_many_arguments)]
pub fn grow_from<R: RandomSource + ?Sized>(
    grid: &mut TileGrid,
    rng: &mut R,
    config: &GeneratorConfig,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    direction: Direction,
) -> Option<Feature> {
    let (ax, ay) = (x + dx, y + dy);
    let chance = rng.next_int(0, 100);

    // a room chance of zero never yields a room, even on a roll of 0
    let (kind, area) = if config.room_chance > 0 && chance <= config.room_chance {
        let area = place_room(
            grid,
            rng,
            ax,
            ay,
            config.room_max_width,
            config.room_max_height,
            direction,
        )?;
        grid.set(ax, ay, TileType::DirtFloor);
        (FeatureKind::Room, area)
    } else {
        let area = place_corridor(grid, rng, ax, ay, config.corridor_max_len, direction)?;
        (FeatureKind::Corridor, area)
    };

    grid.set(x, y, TileType::Door);
    trace!("{kind} grown {direction} through door at ({x}, {y})");
    Some(Feature {
        kind,
        door: (x, y),
        direction,
        area,
    })
}

/// Direction a feature may grow from `(x, y)`, if any neighbour is walkable
fn growth_direction(grid: &TileGrid, x: i32, y: i32) -> Option<Direction> {
    GROWTH_ORDER.into_iter().find(|direction| {
        let (bx, by) = direction.opposite().delta();
        grid.try_get(x + bx, y + by)
            .is_some_and(|tile| tile.is_walkable_space())
    })
}

/// Pick random wall or corridor cells until one grows a feature.
///
/// Candidates come from the interior (the outer ring is never picked), must
/// not touch a door, and get exactly one growth attempt. Gives up after
/// `config.feature_tries` candidates.
pub fn grow_feature<R: RandomSource + ?Sized>(
    grid: &mut TileGrid,
    rng: &mut R,
    config: &GeneratorConfig,
) -> Option<Feature> {
    if grid.width() < 3 || grid.height() < 3 {
        return None;
    }

    for _ in 0..config.feature_tries {
        let x = rng.next_int(1, grid.width() - 2);
        let y = rng.next_int(1, grid.height() - 2);

        if !grid.get(x, y).is_door_candidate() {
            continue;
        }
        if grid.is_adjacent(x, y, TileType::Door) {
            continue;
        }

        let Some(direction) = growth_direction(grid, x, y) else {
            continue;
        };
        let (dx, dy) = direction.delta();
        if let Some(feature) = grow_from(grid, rng, config, x, y, dx, dy, direction) {
            return Some(feature);
        }
    }

    None
}
