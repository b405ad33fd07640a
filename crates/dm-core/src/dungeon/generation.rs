//! Dungeon generation
//!
//! One run goes `Init → SeedRoom → GrowFeatures → PlaceUpStairs →
//! PlaceDownStairs → Done`. Every run rebuilds the grid from scratch and
//! reseeds the RNG from the held seed, so regenerating with an unchanged
//! configuration reproduces the same dungeon.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use strum::Display;

use dm_rng::{GameRng, RandomSource};

use super::feature::{Feature, FeatureKind, grow_feature};
use super::room::place_room;
use super::stairs::place_stairs;
use super::{TileGrid, TileRect, TileType};
use crate::config::GeneratorConfig;
use crate::error::ConfigError;

/// Step of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GenerationPhase {
    Init,
    SeedRoom,
    GrowFeatures,
    PlaceUpStairs,
    PlaceDownStairs,
    Done,
}

/// What a run actually managed to build
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    /// Seed room area, if it fit
    pub seed_room: Option<TileRect>,
    /// Features grown after the seed room, in order
    pub features: Vec<Feature>,
    pub up_stairs: Option<(i32, i32)>,
    pub down_stairs: Option<(i32, i32)>,
}

impl GenerationReport {
    pub fn seed_room_placed(&self) -> bool {
        self.seed_room.is_some()
    }

    /// Rooms including the seed room
    pub fn rooms(&self) -> usize {
        usize::from(self.seed_room_placed()) + self.count(FeatureKind::Room)
    }

    pub fn corridors(&self) -> usize {
        self.count(FeatureKind::Corridor)
    }

    pub fn doors(&self) -> Vec<(i32, i32)> {
        self.features.iter().map(|feature| feature.door).collect()
    }

    /// Both staircases were placed
    pub fn has_stairs(&self) -> bool {
        self.up_stairs.is_some() && self.down_stairs.is_some()
    }

    fn count(&self, kind: FeatureKind) -> usize {
        self.features.iter().filter(|f| f.kind == kind).count()
    }
}

/// A finished dungeon: the grid and how it was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub grid: TileGrid,
    pub report: GenerationReport,
}

/// Owns the configuration, RNG and grid of one dungeon
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    config: GeneratorConfig,
    rng: GameRng,
    grid: TileGrid,
    phase: GenerationPhase,
    report: GenerationReport,
}

impl DungeonGenerator {
    /// Validate `config` and fix the seed.
    ///
    /// Without a configured seed one is drawn from entropy here and kept for
    /// every later [`generate`](Self::generate).
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let grid = TileGrid::new(config.width, config.height);
        let report = GenerationReport {
            seed: rng.seed(),
            ..GenerationReport::default()
        };
        Ok(Self {
            config,
            rng,
            grid,
            phase: GenerationPhase::Init,
            report,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Seed every run starts from
    pub fn seed(&self) -> u64 {
        self.report.seed
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    /// `Init` before the first run, `Done` after
    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// Access to the RNG, e.g. to enable draw tracing
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Build a dungeon from scratch, discarding the previous one
    pub fn generate(&mut self) -> &TileGrid {
        let seed = self.report.seed;
        self.enter(GenerationPhase::Init);
        self.grid.reset();
        self.rng.reseed(seed);
        self.report = GenerationReport {
            seed,
            ..GenerationReport::default()
        };

        self.enter(GenerationPhase::SeedRoom);
        let direction = self.rng.next_direction();
        self.report.seed_room = place_room(
            &mut self.grid,
            &mut self.rng,
            self.config.width / 2,
            self.config.height / 2,
            self.config.room_max_width,
            self.config.room_max_height,
            direction,
        );
        if self.report.seed_room.is_none() {
            debug!(
                "seed room does not fit a {}x{} grid",
                self.config.width, self.config.height
            );
        }

        self.enter(GenerationPhase::GrowFeatures);
        for _ in 1..self.config.max_features {
            match grow_feature(&mut self.grid, &mut self.rng, &self.config) {
                Some(feature) => self.report.features.push(feature),
                None => {
                    debug!(
                        "no room for more features after {}",
                        self.report.features.len()
                    );
                    break;
                }
            }
        }

        self.enter(GenerationPhase::PlaceUpStairs);
        self.report.up_stairs = place_stairs(
            &mut self.grid,
            &mut self.rng,
            TileType::UpStairs,
            self.config.stairs_tries,
        );

        self.enter(GenerationPhase::PlaceDownStairs);
        self.report.down_stairs = place_stairs(
            &mut self.grid,
            &mut self.rng,
            TileType::DownStairs,
            self.config.stairs_tries,
        );

        self.enter(GenerationPhase::Done);
        if !self.report.has_stairs() {
            warn!(
                "dungeon for seed {seed} is missing stairs (up: {:?}, down: {:?})",
                self.report.up_stairs, self.report.down_stairs
            );
        }
        info!(
            "generated {}x{} dungeon from seed {seed}: {} rooms, {} corridors",
            self.config.width,
            self.config.height,
            self.report.rooms(),
            self.report.corridors()
        );

        &self.grid
    }

    /// Consume the generator, keeping the last dungeon built
    pub fn into_dungeon(self) -> Dungeon {
        Dungeon {
            grid: self.grid,
            report: self.report,
        }
    }

    fn enter(&mut self, phase: GenerationPhase) {
        debug!("{} -> {}", self.phase, phase);
        self.phase = phase;
    }
}

/// Validate `config`, build one dungeon and return it
pub fn generate_dungeon(config: GeneratorConfig) -> Result<Dungeon, ConfigError> {
    let mut generator = DungeonGenerator::new(config)?;
    generator.generate();
    Ok(generator.into_dungeon())
}
