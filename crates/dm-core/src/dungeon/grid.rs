//! Fixed-size tile grid

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{TileMeta, TileRect, TileType};
use crate::error::GridParseError;

/// `width × height` tiles plus a parallel metadata plane.
///
/// Coordinates are `x` in `[0, width)` and `y` in `[0, height)`. Reading or
/// writing outside that range is a caller bug and panics; use the bounds
/// checks first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GridRows", try_from = "GridRows")]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<TileType>,
    meta: Vec<TileMeta>,
}

impl TileGrid {
    /// All-`Unused` grid. Dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            tiles: vec![TileType::Unused; size],
            meta: vec![TileMeta::default(); size],
        }
    }

    /// Set every cell back to `Unused` and clear metadata
    pub fn reset(&mut self) {
        self.tiles.fill(TileType::Unused);
        self.meta.fill(TileMeta::default());
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_x_bounds(&self, x: i32) -> bool {
        x >= 0 && x < self.width
    }

    pub fn in_y_bounds(&self, y: i32) -> bool {
        y >= 0 && y < self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.in_x_bounds(x) && self.in_y_bounds(y)
    }

    /// Both corners of `rect` lie on the grid
    pub fn rect_in_bounds(&self, rect: &TileRect) -> bool {
        self.in_x_bounds(rect.x0)
            && self.in_x_bounds(rect.x1)
            && self.in_y_bounds(rect.y0)
            && self.in_y_bounds(rect.y1)
    }

    fn idx(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "tile ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        (x + self.width * y) as usize
    }

    pub fn get(&self, x: i32, y: i32) -> TileType {
        self.tiles[self.idx(x, y)]
    }

    /// `None` instead of a panic for off-grid coordinates
    pub fn try_get(&self, x: i32, y: i32) -> Option<TileType> {
        self.in_bounds(x, y).then(|| self.get(x, y))
    }

    pub fn set(&mut self, x: i32, y: i32, tile: TileType) {
        let idx = self.idx(x, y);
        self.tiles[idx] = tile;
    }

    /// Stamp every cell of `rect` with `tile`
    pub fn set_rect(&mut self, rect: &TileRect, tile: TileType) {
        for (x, y) in rect.cells() {
            self.set(x, y, tile);
        }
    }

    /// True iff every cell in `rect` is `Unused`
    pub fn is_rect_unused(&self, rect: &TileRect) -> bool {
        rect.cells().all(|(x, y)| self.get(x, y) == TileType::Unused)
    }

    /// True iff one of the four orthogonal neighbours is `tile`.
    ///
    /// Neighbours off the grid never match.
    pub fn is_adjacent(&self, x: i32, y: i32, tile: TileType) -> bool {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .iter()
            .any(|(dx, dy)| self.try_get(x + dx, y + dy) == Some(tile))
    }

    /// Always `TileMeta::default()` for generated grids
    pub fn meta(&self, x: i32, y: i32) -> TileMeta {
        self.meta[self.idx(x, y)]
    }

    pub fn set_meta(&mut self, x: i32, y: i32, meta: TileMeta) {
        let idx = self.idx(x, y);
        self.meta[idx] = meta;
    }

    /// `(x, y, tile)` for every cell of `rect`
    pub fn tiles_in(&self, rect: TileRect) -> impl Iterator<Item = (i32, i32, TileType)> + '_ {
        rect.cells().map(move |(x, y)| (x, y, self.get(x, y)))
    }

    /// `(x, y, tile)` for the whole grid, row by row
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, TileType)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (i as i32 % width, i as i32 / width, *tile))
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    pub fn positions_of(&self, tile: TileType) -> Vec<(i32, i32)> {
        self.iter()
            .filter(|(_, _, t)| *t == tile)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// One string of tile symbols per row
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width as usize)
            .map(|row| row.iter().map(TileType::symbol).collect())
            .collect()
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

/// Serialized form of a grid: dimensions plus symbol rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRows {
    pub width: i32,
    pub height: i32,
    pub rows: Vec<String>,
}

impl From<TileGrid> for GridRows {
    fn from(grid: TileGrid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            rows: grid.rows(),
        }
    }
}

impl TryFrom<GridRows> for TileGrid {
    type Error = GridParseError;

    fn try_from(value: GridRows) -> Result<Self, Self::Error> {
        if value.width <= 0 || value.height <= 0 {
            return Err(GridParseError::Dimensions {
                width: value.width,
                height: value.height,
            });
        }
        if value.rows.len() != value.height as usize {
            return Err(GridParseError::RowCount {
                expected: value.height as usize,
                found: value.rows.len(),
            });
        }

        for (y, row) in value.rows.iter().enumerate() {
            let found = row.chars().count();
            if found != value.width as usize {
                return Err(GridParseError::RowWidth {
                    row: y,
                    expected: value.width as usize,
                    found,
                });
            }
        }

        let mut grid = TileGrid::new(value.width, value.height);
        for (y, row) in value.rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                let tile = TileType::from_symbol(symbol)
                    .ok_or(GridParseError::UnknownSymbol { symbol, x, y })?;
                grid.set(x as i32, y as i32, tile);
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unused() {
        let grid = TileGrid::new(5, 4);
        assert_eq!(grid.count(TileType::Unused), 20);
        assert!(grid.is_rect_unused(&TileRect::new(0, 0, 4, 3)));
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_width_panics() {
        TileGrid::new(0, 4);
    }

    #[test]
    fn test_bounds() {
        let grid = TileGrid::new(5, 4);
        assert!(grid.in_x_bounds(0) && grid.in_x_bounds(4));
        assert!(!grid.in_x_bounds(-1) && !grid.in_x_bounds(5));
        assert!(grid.in_y_bounds(3) && !grid.in_y_bounds(4));
        assert!(grid.rect_in_bounds(&TileRect::new(0, 0, 4, 3)));
        assert!(!grid.rect_in_bounds(&TileRect::new(0, 0, 5, 3)));
    }

    #[test]
    #[should_panic(expected = "outside 5x4 grid")]
    fn test_out_of_range_get_panics() {
        TileGrid::new(5, 4).get(5, 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = TileGrid::new(5, 4);
        grid.set(2, 3, TileType::Door);
        assert_eq!(grid.get(2, 3), TileType::Door);
        assert_eq!(grid.try_get(2, 3), Some(TileType::Door));
        assert_eq!(grid.try_get(-1, 3), None);
    }

    #[test]
    fn test_set_rect_inclusive() {
        let mut grid = TileGrid::new(6, 6);
        grid.set_rect(&TileRect::new(1, 1, 3, 2), TileType::DirtFloor);
        assert_eq!(grid.count(TileType::DirtFloor), 6);
        assert_eq!(grid.get(3, 2), TileType::DirtFloor);
        assert_eq!(grid.get(4, 2), TileType::Unused);
        assert!(!grid.is_rect_unused(&TileRect::new(3, 2, 5, 5)));
        assert!(grid.is_rect_unused(&TileRect::new(4, 0, 5, 5)));
    }

    #[test]
    fn test_is_adjacent_is_orthogonal_only() {
        let mut grid = TileGrid::new(5, 5);
        grid.set(2, 2, TileType::Door);
        assert!(grid.is_adjacent(2, 1, TileType::Door));
        assert!(grid.is_adjacent(3, 2, TileType::Door));
        assert!(!grid.is_adjacent(3, 3, TileType::Door));
        assert!(!grid.is_adjacent(2, 2, TileType::Door));
    }

    #[test]
    fn test_is_adjacent_at_edges() {
        let mut grid = TileGrid::new(3, 3);
        grid.set(1, 0, TileType::Corridor);
        assert!(grid.is_adjacent(0, 0, TileType::Corridor));
        assert!(!grid.is_adjacent(0, 2, TileType::Corridor));
        assert!(!grid.is_adjacent(2, 2, TileType::Door));
    }

    #[test]
    fn test_meta_defaults() {
        let mut grid = TileGrid::new(3, 3);
        assert_eq!(grid.meta(1, 1), TileMeta::default());
        grid.set_meta(
            1,
            1,
            TileMeta {
                direction: Some(dm_rng::Direction::East),
            },
        );
        grid.reset();
        assert_eq!(grid.meta(1, 1), TileMeta::default());
    }

    #[test]
    fn test_iter_and_positions() {
        let mut grid = TileGrid::new(4, 3);
        grid.set(3, 2, TileType::UpStairs);
        assert_eq!(grid.positions_of(TileType::UpStairs), vec![(3, 2)]);
        let last = grid.iter().last().unwrap();
        assert_eq!(last, (3, 2, TileType::UpStairs));
        let in_rect: Vec<_> = grid.tiles_in(TileRect::new(2, 2, 3, 2)).collect();
        assert_eq!(
            in_rect,
            vec![(2, 2, TileType::Unused), (3, 2, TileType::UpStairs)]
        );
    }

    #[test]
    fn test_display_trims_rows() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(0, 0, TileType::DirtWall);
        grid.set(1, 1, TileType::DirtFloor);
        assert_eq!(grid.to_string(), "#\n .\n");
    }

    #[test]
    fn test_json_form() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(2, 1, TileType::DownStairs);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["width"], 3);
        assert_eq!(json["rows"][1], "  >");

        let back: TileGrid = serde_json::from_value(json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_rejects_bad_rows() {
        let rows = GridRows {
            width: 2,
            height: 1,
            rows: vec!["#?".to_string()],
        };
        assert!(matches!(
            TileGrid::try_from(rows),
            Err(GridParseError::UnknownSymbol { symbol: '?', x: 1, y: 0 })
        ));

        let rows = GridRows {
            width: 2,
            height: 2,
            rows: vec!["##".to_string()],
        };
        assert!(matches!(
            TileGrid::try_from(rows),
            Err(GridParseError::RowCount { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_row_width_checked_before_allocating() {
        let rows = GridRows {
            width: i32::MAX,
            height: 1,
            rows: vec!["##".to_string()],
        };
        assert_eq!(
            TileGrid::try_from(rows),
            Err(GridParseError::RowWidth {
                row: 0,
                expected: i32::MAX as usize,
                found: 2
            })
        );
    }
}
