//! Tile types and per-tile metadata

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use dm_rng::Direction;

/// Classification of one grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Unused = 0,
    DirtWall = 1,
    DirtFloor = 2,
    Corridor = 3,
    Door = 4,
    UpStairs = 5,
    DownStairs = 6,
}

impl TileType {
    /// Already-built space a new feature may grow out of
    pub const fn is_walkable_space(&self) -> bool {
        matches!(self, TileType::DirtFloor | TileType::Corridor)
    }

    /// Cells the growth loop may turn into a door
    pub const fn is_door_candidate(&self) -> bool {
        matches!(self, TileType::DirtWall | TileType::Corridor)
    }

    pub const fn is_stairs(&self) -> bool {
        matches!(self, TileType::UpStairs | TileType::DownStairs)
    }

    /// Kinds the instancing collaborator builds meshes for
    pub const fn is_instanced(&self) -> bool {
        matches!(
            self,
            TileType::DirtWall | TileType::DirtFloor | TileType::Corridor
        )
    }

    /// Get the display character for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Unused => ' ',
            TileType::DirtWall => '#',
            TileType::DirtFloor => '.',
            TileType::Corridor => ',',
            TileType::Door => '+',
            TileType::UpStairs => '<',
            TileType::DownStairs => '>',
        }
    }

    /// Inverse of [`TileType::symbol`]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(TileType::Unused),
            '#' => Some(TileType::DirtWall),
            '.' => Some(TileType::DirtFloor),
            ',' => Some(TileType::Corridor),
            '+' => Some(TileType::Door),
            '<' => Some(TileType::UpStairs),
            '>' => Some(TileType::DownStairs),
            _ => None,
        }
    }
}

/// Per-cell metadata.
///
/// Carried alongside every cell but never written by generation, so reads
/// always return the default (no direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileMeta {
    pub direction: Option<Direction>,
}
