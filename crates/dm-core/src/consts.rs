//! Generator defaults

/// Map dimensions
pub const DEFAULT_WIDTH: i32 = 80;
pub const DEFAULT_HEIGHT: i32 = 25;

/// Largest accepted grid side, and largest room or corridor extent
pub const MAX_GRID_SIDE: i32 = 4096;

/// Features per dungeon, seed room included
pub const DEFAULT_MAX_FEATURES: i32 = 100;

/// Percentage of growth attempts that try a room
pub const DEFAULT_ROOM_CHANCE: i32 = 75;

/// Room length limits for the seed room and grown rooms
pub const DEFAULT_ROOM_MAX_WIDTH: i32 = 8;
pub const DEFAULT_ROOM_MAX_HEIGHT: i32 = 6;

pub const DEFAULT_CORRIDOR_MAX_LEN: i32 = 6;

/// Retry budgets
pub const DEFAULT_FEATURE_TRIES: u32 = 1000;
pub const DEFAULT_STAIRS_TRIES: u32 = 10_000;
