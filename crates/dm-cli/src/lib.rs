//! Command-line front end for the dungeon generator
//!
//! Argument parsing and rendering live here so the `dungeon` binary stays a
//! thin wrapper.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use serde_json::json;
use strum::IntoEnumIterator;

use dm_core::instancing::{InstanceBatches, MeshDefinitions, build_instances};
use dm_core::{Dungeon, DungeonGenerator, GeneratorConfig, TileType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line of tile symbols per row
    #[default]
    Ascii,
    /// Grid rows and generation report as JSON
    Json,
}

/// Seeded rooms-and-corridors dungeon generator
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about = "Generate a dungeon from a seed", long_about = None)]
pub struct Args {
    /// Seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Grid width in tiles
    #[arg(short = 'W', long = "width")]
    pub width: Option<i32>,

    /// Grid height in tiles
    #[arg(short = 'H', long = "height")]
    pub height: Option<i32>,

    /// Maximum number of features, the seed room included
    #[arg(short = 'f', long = "max-features")]
    pub max_features: Option<i32>,

    /// Percentage of growth attempts that try a room
    #[arg(short = 'r', long = "room-chance")]
    pub room_chance: Option<i32>,

    /// JSON config file; flags override its values
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Ascii)]
    pub format: OutputFormat,

    /// Also report mesh instance counts per tile
    #[arg(short = 'i', long = "instances")]
    pub instances: bool,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by the `-v` count
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(max_features) = self.max_features {
            config.max_features = max_features;
        }
        if let Some(room_chance) = self.room_chance {
            config.room_chance = room_chance;
        }
        Ok(config)
    }
}

/// Generate a dungeon for `args` and render it for stdout
pub fn run(args: &Args) -> Result<String> {
    let config = args.resolve_config()?;
    let mut generator = DungeonGenerator::new(config).context("invalid configuration")?;
    generator.generate();
    render(&generator.into_dungeon(), args.format, args.instances)
}

/// `(tile, count)` for every instanced tile type, zero counts included
pub fn instance_counts(dungeon: &Dungeon) -> Vec<(TileType, usize)> {
    let mut batches = InstanceBatches::new();
    build_instances(&dungeon.grid, [0.0; 3], &MeshDefinitions::default(), &mut batches);
    TileType::iter()
        .filter(|tile| tile.is_instanced())
        .map(|tile| (tile, batches.get(tile).len()))
        .collect()
}

pub fn render(dungeon: &Dungeon, format: OutputFormat, instances: bool) -> Result<String> {
    let counts = instances.then(|| instance_counts(dungeon));

    match format {
        OutputFormat::Ascii => {
            let mut out = dungeon.grid.to_string();
            let report = &dungeon.report;
            writeln!(
                out,
                "seed {}: {} rooms, {} corridors, stairs {}",
                report.seed,
                report.rooms(),
                report.corridors(),
                if report.has_stairs() { "placed" } else { "missing" }
            )?;
            if let Some(counts) = counts {
                for (tile, count) in counts {
                    writeln!(out, "{tile}: {count} instances")?;
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(dungeon)?;
            if let Some(counts) = counts {
                let map: serde_json::Map<_, _> = counts
                    .into_iter()
                    .map(|(tile, count)| (tile.to_string(), json!(count)))
                    .collect();
                value["instances"] = serde_json::Value::Object(map);
            }
            let mut out = serde_json::to_string_pretty(&value)?;
            out.push('\n');
            Ok(out)
        }
    }
}
