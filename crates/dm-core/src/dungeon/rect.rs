//! Inclusive tile rectangles used for placement checks

use serde::{Deserialize, Serialize};

/// A rectangle of cells, inclusive on both ends.
///
/// Constructors order the corners so `x0 <= x1` and `y0 <= y1` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileRect {
    /// Left x coordinate
    pub x0: i32,
    /// Top y coordinate
    pub y0: i32,
    /// Right x coordinate
    pub x1: i32,
    /// Bottom y coordinate
    pub y1: i32,
}

impl TileRect {
    /// Rectangle spanning the two corners, in any order
    pub fn new(xa: i32, ya: i32, xb: i32, yb: i32) -> Self {
        Self {
            x0: xa.min(xb),
            y0: ya.min(yb),
            x1: xa.max(xb),
            y1: ya.max(yb),
        }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// The rectangle shrunk by `n` cells on every side, if anything is left
    pub fn shrink(&self, n: i32) -> Option<TileRect> {
        let (x0, y0, x1, y1) = (self.x0 + n, self.y0 + n, self.x1 - n, self.y1 - n);
        (x0 <= x1 && y0 <= y1).then_some(TileRect { x0, y0, x1, y1 })
    }

    /// Every cell, rows top to bottom, each row left to right
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let (x0, x1) = (self.x0, self.x1);
        (self.y0..=self.y1).flat_map(move |y| (x0..=x1).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_ordered() {
        let rect = TileRect::new(10, 2, 4, 8);
        assert_eq!((rect.x0, rect.y0, rect.x1, rect.y1), (4, 2, 10, 8));
        assert_eq!(rect.width(), 7);
        assert_eq!(rect.height(), 7);
    }

    #[test]
    fn test_single_cell_rect() {
        let rect = TileRect::new(3, 3, 3, 3);
        assert_eq!((rect.width(), rect.height()), (1, 1));
        assert_eq!(rect.cells().collect::<Vec<_>>(), vec![(3, 3)]);
    }

    #[test]
    fn test_shrink() {
        let rect = TileRect::new(0, 0, 4, 3);
        assert_eq!(rect.shrink(1), Some(TileRect::new(1, 1, 3, 2)));
        assert_eq!(TileRect::new(0, 0, 1, 5).shrink(1), None);
    }

    #[test]
    fn test_cells_row_major() {
        let cells: Vec<_> = TileRect::new(0, 0, 1, 1).cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
