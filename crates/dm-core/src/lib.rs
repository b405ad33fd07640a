//! dm-core: seeded rooms-and-corridors dungeon generation
//!
//! Builds a rectangular grid of typed tiles from a seed: one room in the
//! centre, then rooms and corridors grown outward through doors, then a pair
//! of staircases. The crate does no I/O beyond reading a config file; the
//! [`instancing`] module hands the finished grid to a renderer.

pub mod config;
pub mod dungeon;
pub mod error;
pub mod instancing;

mod consts;

pub use config::GeneratorConfig;
pub use consts::*;
pub use dm_rng::{Direction, GameRng, RandomSource};
pub use dungeon::{
    Dungeon, DungeonGenerator, GenerationReport, TileGrid, TileType, generate_dungeon,
};
pub use error::{ConfigError, GridParseError};
