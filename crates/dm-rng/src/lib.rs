//! dm-rng: seeded random number service for dungeon generation
//!
//! Every random decision made by the generator goes through a [`RandomSource`].
//! The production source is [`GameRng`], a ChaCha8 stream keyed by a `u64`
//! seed, so the same seed and the same sequence of calls always yield the
//! same dungeon. Tests substitute a [`ScriptedRng`] to force exact draws.

mod scripted;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use scripted::ScriptedRng;

/// Cardinal direction used to anchor new features.
///
/// `North` is decreasing `y`, `East` is increasing `x`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Direction {
    #[default]
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    /// Map a draw in `0..=3` to a direction
    pub const fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Direction::North,
            1 => Direction::South,
            2 => Direction::East,
            _ => Direction::West,
        }
    }

    /// Unit step `(dx, dy)` moving one cell in this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Source of bounded random draws.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Callers guarantee `min <= max`.
    fn next_int(&mut self, min: i32, max: i32) -> i32;

    /// One of the four directions with equal probability
    fn next_direction(&mut self) -> Direction {
        Direction::from_index(self.next_int(0, 3))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).next_int(min, max)
    }

    fn next_direction(&mut self) -> Direction {
        (**self).next_direction()
    }
}

/// One recorded draw, kept while tracing is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngTraceEntry {
    /// Sequence number (0-indexed)
    pub seq: u64,
    /// Kind of draw ("next_int", "next_direction")
    pub func: &'static str,
    pub min: i32,
    pub max: i32,
    pub result: i32,
}

/// Seeded generator for dungeon building
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Only the seed is serialized; deserializing restarts the stream.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
    draws: u64,
    tracing: bool,
    trace: Vec<RngTraceEntry>,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            draws: 0,
            tracing: false,
            trace: Vec::new(),
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the stream from `seed`.
    ///
    /// The draw counter and any recorded trace are reset too; tracing stays
    /// enabled if it was.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
        self.draws = 0;
        self.trace.clear();
    }

    /// Number of draws since the last (re)seed
    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn enable_tracing(&mut self) {
        self.tracing = true;
        self.trace.clear();
    }

    pub fn disable_tracing(&mut self) {
        self.tracing = false;
    }

    /// Draws recorded since tracing was enabled
    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }

    fn record(&mut self, func: &'static str, min: i32, max: i32, result: i32) {
        if self.tracing {
            self.trace.push(RngTraceEntry {
                seq: self.draws,
                func,
                min,
                max,
                result,
            });
        }
        self.draws += 1;
    }
}

impl RandomSource for GameRng {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "next_int called with min {min} > max {max}");
        let result = self.rng.gen_range(min..=max);
        self.record("next_int", min, max, result);
        result
    }

    fn next_direction(&mut self) -> Direction {
        let index = self.rng.gen_range(0..=3);
        self.record("next_direction", 0, 3, index);
        Direction::from_index(index)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
