//! Mesh instancing for a finished grid
//!
//! A renderer registers one instance per floor, corridor and wall cell. This
//! module computes the world-space transforms and feeds them to an
//! [`InstanceSink`]; it only reads the grid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dungeon::{TileGrid, TileType};

/// Uniform scale applied to every tile mesh
pub const DEFAULT_TILE_SCALE: f32 = 10.0;

/// Placement of one mesh instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: [f32; 3],
    pub scale: [f32; 3],
}

/// Footprint of each instanced tile mesh, before scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshDefinitions {
    pub dirt_wall: [f32; 3],
    pub dirt_floor: [f32; 3],
    pub corridor: [f32; 3],
    pub scale: f32,
}

impl Default for MeshDefinitions {
    fn default() -> Self {
        Self {
            dirt_wall: [1.0, 1.0, 1.0],
            dirt_floor: [1.0, 1.0, 0.1],
            corridor: [1.0, 1.0, 0.1],
            scale: DEFAULT_TILE_SCALE,
        }
    }
}

impl MeshDefinitions {
    /// Grid pitch `(x, y)` used for `tile`, `None` for tiles never instanced.
    ///
    /// Walls advance along x by the floor footprint so they line up with the
    /// floor columns.
    pub fn pitch(&self, tile: TileType) -> Option<(f32, f32)> {
        let (x, y) = match tile {
            TileType::DirtFloor => (self.dirt_floor[0], self.dirt_floor[1]),
            TileType::Corridor => (self.corridor[0], self.corridor[1]),
            TileType::DirtWall => (self.dirt_floor[0], self.dirt_wall[1]),
            TileType::Unused | TileType::Door | TileType::UpStairs | TileType::DownStairs => {
                return None;
            }
        };
        Some((x * self.scale, y * self.scale))
    }
}

/// Receiver of instances, typically one mesh batch per tile type
pub trait InstanceSink {
    /// Drop every previously registered instance
    fn clear(&mut self);

    fn add_instance(&mut self, tile: TileType, transform: Transform);
}

/// In-memory sink keeping one transform list per tile type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstanceBatches {
    batches: BTreeMap<u8, (TileType, Vec<Transform>)>,
}

impl InstanceBatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instances registered for `tile`
    pub fn get(&self, tile: TileType) -> &[Transform] {
        self.batches
            .get(&(tile as u8))
            .map(|(_, transforms)| transforms.as_slice())
            .unwrap_or(&[])
    }

    /// Total instances across all batches
    pub fn len(&self) -> usize {
        self.batches.values().map(|(_, t)| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(tile, count)` per non-empty batch
    pub fn counts(&self) -> Vec<(TileType, usize)> {
        self.batches
            .values()
            .map(|(tile, transforms)| (*tile, transforms.len()))
            .collect()
    }
}

impl InstanceSink for InstanceBatches {
    fn clear(&mut self) {
        self.batches.clear();
    }

    fn add_instance(&mut self, tile: TileType, transform: Transform) {
        self.batches
            .entry(tile as u8)
            .or_insert_with(|| (tile, Vec::new()))
            .1
            .push(transform);
    }
}

/// Rebuild `sink` from `grid`.
///
/// Clears the sink first, then walks rows top to bottom and registers every
/// instanced tile at `origin + (x · pitch_x, y · pitch_y, 0)`.
pub fn build_instances<S: InstanceSink + ?Sized>(
    grid: &TileGrid,
    origin: [f32; 3],
    defs: &MeshDefinitions,
    sink: &mut S,
) {
    sink.clear();
    let scale = [defs.scale; 3];

    for (x, y, tile) in grid.iter() {
        let Some((pitch_x, pitch_y)) = defs.pitch(tile) else {
            continue;
        };
        let translation = [
            origin[0] + x as f32 * pitch_x,
            origin[1] + y as f32 * pitch_y,
            origin[2],
        ];
        sink.add_instance(tile, Transform { translation, scale });
    }
}
