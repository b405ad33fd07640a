//! Generator configuration
//!
//! Loaded from JSON or built in code; every field has a default so partial
//! files work. [`GeneratorConfig::validate`] runs before any generation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{
    DEFAULT_CORRIDOR_MAX_LEN, DEFAULT_FEATURE_TRIES, DEFAULT_HEIGHT, DEFAULT_MAX_FEATURES,
    DEFAULT_ROOM_CHANCE, DEFAULT_ROOM_MAX_HEIGHT, DEFAULT_ROOM_MAX_WIDTH, DEFAULT_STAIRS_TRIES,
    DEFAULT_WIDTH, MAX_GRID_SIDE,
};
use crate::dungeon::{MIN_CORRIDOR_LEN, MIN_ROOM_SIDE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed; drawn once from entropy when absent
    pub seed: Option<u64>,
    pub width: i32,
    pub height: i32,
    /// Upper bound on features, the seed room included
    pub max_features: i32,
    /// Percentage (0..=100) of growth attempts that try a room
    pub room_chance: i32,
    /// Largest room length drawn along x
    pub room_max_width: i32,
    /// Largest room length drawn along y
    pub room_max_height: i32,
    pub corridor_max_len: i32,
    /// Candidate cells tried per feature before giving up
    pub feature_tries: u32,
    /// Candidate cells tried per staircase before giving up
    pub stairs_tries: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_features: DEFAULT_MAX_FEATURES,
            room_chance: DEFAULT_ROOM_CHANCE,
            room_max_width: DEFAULT_ROOM_MAX_WIDTH,
            room_max_height: DEFAULT_ROOM_MAX_HEIGHT,
            corridor_max_len: DEFAULT_CORRIDOR_MAX_LEN,
            feature_tries: DEFAULT_FEATURE_TRIES,
            stairs_tries: DEFAULT_STAIRS_TRIES,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Read a JSON config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Chance of a corridor instead of a room, implied by `room_chance`
    pub fn corridor_chance(&self) -> i32 {
        100 - self.room_chance
    }

    /// Reject values the generator cannot run with.
    ///
    /// Sides and extents are capped at [`MAX_GRID_SIDE`] so cell counts and
    /// placement coordinates stay well inside `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_GRID_SIDE || self.height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_GRID_SIDE,
            });
        }
        if !(0..=100).contains(&self.room_chance) {
            return Err(ConfigError::InvalidRoomChance(self.room_chance));
        }
        if self.max_features < 1 {
            return Err(ConfigError::InvalidMaxFeatures(self.max_features));
        }

        let limits = [
            ("room_max_width", MIN_ROOM_SIDE, self.room_max_width),
            ("room_max_height", MIN_ROOM_SIDE, self.room_max_height),
            ("corridor_max_len", MIN_CORRIDOR_LEN, self.corridor_max_len),
        ];
        for (name, min, value) in limits {
            if !(min..=MAX_GRID_SIDE).contains(&value) {
                return Err(ConfigError::InvalidLimit {
                    name,
                    min,
                    max: MAX_GRID_SIDE,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!((config.width, config.height), (80, 25));
        assert_eq!(config.max_features, 100);
        assert_eq!(config.room_chance, 75);
        assert_eq!(config.corridor_chance(), 25);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GeneratorConfig::from_json(r#"{ "seed": 42, "width": 40 }"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.width, 40);
        assert_eq!(config.height, 25);
        assert_eq!(config.stairs_tries, 10_000);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let config = GeneratorConfig {
            width: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 0, height: 25 })
        ));
    }

    #[test]
    fn test_rejects_bad_room_chance() {
        let config = GeneratorConfig {
            room_chance: 101,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRoomChance(101))
        ));
    }

    #[test]
    fn test_rejects_bad_max_features() {
        let config = GeneratorConfig {
            max_features: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxFeatures(0))
        ));
    }

    #[test]
    fn test_rejects_tiny_extents() {
        let config = GeneratorConfig {
            room_max_height: 3,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLimit {
                name: "room_max_height",
                min: 4,
                value: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let config = GeneratorConfig {
            width: 65_536,
            height: 65_536,
            ..GeneratorConfig::with_seed(1)
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooLarge {
                width: 65_536,
                height: 65_536,
                max: MAX_GRID_SIDE
            })
        ));
        assert!(matches!(
            crate::generate_dungeon(config),
            Err(ConfigError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_largest_grid_side_is_accepted() {
        let config = GeneratorConfig {
            width: MAX_GRID_SIDE,
            height: 1,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = GeneratorConfig {
            height: MAX_GRID_SIDE + 1,
            ..config
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_huge_extents() {
        let config = GeneratorConfig {
            room_max_width: i32::MAX,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLimit {
                name: "room_max_width",
                value: i32::MAX,
                ..
            })
        ));

        let config = GeneratorConfig {
            corridor_max_len: MAX_GRID_SIDE + 1,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLimit {
                name: "corridor_max_len",
                ..
            })
        ));
    }

    #[test]
    fn test_extents_may_exceed_small_grids() {
        let config = GeneratorConfig {
            width: 6,
            height: 6,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            GeneratorConfig::from_json("{ width: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            GeneratorConfig::load_from_file("/nonexistent/dungeon.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
