//! Dungeon system
//!
//! Contains the tile grid, room and corridor placement, feature growth,
//! stairs placement and the generator that sequences them.

mod corridor;
mod feature;
mod generation;
mod grid;
mod rect;
mod room;
mod stairs;
mod tile;

pub use corridor::{MIN_CORRIDOR_LEN, corridor_rect, place_corridor};
pub use feature::{Feature, FeatureKind, grow_feature, grow_from};
pub use generation::{
    Dungeon, DungeonGenerator, GenerationPhase, GenerationReport, generate_dungeon,
};
pub use grid::{GridRows, TileGrid};
pub use rect::TileRect;
pub use room::{MIN_ROOM_SIDE, place_room, room_rect};
pub use stairs::place_stairs;
pub use tile::{TileMeta, TileType};
