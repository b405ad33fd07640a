//! Stairs placement

use log::trace;

use dm_rng::RandomSource;

use super::{TileGrid, TileType};

/// Stamp `tile` on a random interior cell next to walkable space.
///
/// A cell qualifies when it touches `DirtFloor` or `Corridor` and touches no
/// `Door`. The cell itself may be wall, floor or corridor, never a door or
/// stairs, so doors stay intact and each staircase appears at most once.
///
/// Returns the position, or `None` once `tries` candidates have been
/// rejected; the grid is then unchanged.
pub fn place_stairs<R: RandomSource + ?Sized>(
    grid: &mut TileGrid,
    rng: &mut R,
    tile: TileType,
    tries: u32,
) -> Option<(i32, i32)> {
    assert!(tile.is_stairs(), "place_stairs called with {tile}");
    if grid.width() < 3 || grid.height() < 3 {
        return None;
    }

    for _ in 0..tries {
        let x = rng.next_int(1, grid.width() - 2);
        let y = rng.next_int(1, grid.height() - 2);

        if !grid.is_adjacent(x, y, TileType::DirtFloor) && !grid.is_adjacent(x, y, TileType::Corridor)
        {
            continue;
        }
        if grid.is_adjacent(x, y, TileType::Door) {
            continue;
        }
        let current = grid.get(x, y);
        if current == TileType::Door || current.is_stairs() {
            continue;
        }

        grid.set(x, y, tile);
        trace!("{tile} placed at ({x}, {y})");
        return Some((x, y));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::TileRect;
    use dm_rng::{GameRng, ScriptedRng};

    fn grid_with_room() -> TileGrid {
        let mut grid = TileGrid::new(12, 10);
        grid.set_rect(&TileRect::new(2, 2, 7, 7), TileType::DirtWall);
        grid.set_rect(&TileRect::new(3, 3, 6, 6), TileType::DirtFloor);
        grid
    }

    #[test]
    fn test_places_next_to_floor() {
        let mut grid = grid_with_room();
        let mut rng = ScriptedRng::new([
            10, 8, // nowhere near the room
            7, 4, // east wall
        ]);

        let pos = place_stairs(&mut grid, &mut rng, TileType::UpStairs, 10);
        assert_eq!(pos, Some((7, 4)));
        assert_eq!(grid.get(7, 4), TileType::UpStairs);
    }

    #[test]
    fn test_avoids_doors() {
        let mut grid = grid_with_room();
        grid.set(7, 5, TileType::Door);
        let mut rng = ScriptedRng::new([7, 4, 7, 6, 2, 4]);

        let pos = place_stairs(&mut grid, &mut rng, TileType::DownStairs, 10);
        assert_eq!(pos, Some((2, 4)));
        assert_eq!(grid.count(TileType::DownStairs), 1);
    }

    #[test]
    fn test_does_not_replace_stairs() {
        let mut grid = grid_with_room();
        grid.set(4, 2, TileType::UpStairs);
        let mut rng = ScriptedRng::new([4, 2, 5, 2]);

        let pos = place_stairs(&mut grid, &mut rng, TileType::DownStairs, 10);
        assert_eq!(pos, Some((5, 2)));
        assert_eq!(grid.get(4, 2), TileType::UpStairs);
    }

    #[test]
    fn test_does_not_replace_door() {
        let mut grid = grid_with_room();
        grid.set(7, 4, TileType::Door);
        let mut rng = ScriptedRng::new([7, 4, 4, 7]);

        let pos = place_stairs(&mut grid, &mut rng, TileType::UpStairs, 10);
        assert_eq!(pos, Some((4, 7)));
        assert_eq!(grid.get(7, 4), TileType::Door);
    }

    #[test]
    fn test_budget_exhaustion_leaves_grid_unchanged() {
        let mut grid = TileGrid::new(12, 10);
        let before = grid.clone();
        let mut rng = GameRng::new(3);

        assert_eq!(place_stairs(&mut grid, &mut rng, TileType::UpStairs, 500), None);
        assert_eq!(grid, before);
        assert_eq!(rng.draws(), 1000);
    }

    #[test]
    #[should_panic(expected = "place_stairs called with Door")]
    fn test_rejects_non_stairs_tile() {
        let mut grid = grid_with_room();
        let mut rng = ScriptedRng::default();
        place_stairs(&mut grid, &mut rng, TileType::Door, 1);
    }
}
