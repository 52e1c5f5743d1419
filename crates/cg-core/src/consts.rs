//! Generation constants and host parameter defaults

/// Narrowest road the generator will accept as a nominal width.
/// Also the fixpoint of the per-level road decay, so nested roads never
/// shrink below it.
pub const MIN_ROAD_SIZE: f64 = 1.0;

/// Extra recursion levels allowed on top of the derived ceiling before the
/// subdivider reports a runaway recursion.
pub const DEPTH_HEADROOM: u32 = 8;

/// Minimum road length (along its long axis) required before cars are
/// placed, and the lower bound of a car's patrol distance.
pub const CAR_MIN_DIST: f64 = 10.0;

/// Host parameter defaults
pub const DEFAULT_CITY_X_SIZE: f64 = 30.0;
pub const DEFAULT_CITY_Y_SIZE: f64 = 30.0;
pub const DEFAULT_MIN_BLOCK_SIZE: f64 = 3.0;
pub const DEFAULT_MAX_BLOCK_SIZE: f64 = 10.0;
pub const DEFAULT_ROAD_SIZE: f64 = 2.0;

/// Host parameter ranges (panel limits, not algorithmic bounds)
pub const CITY_SIZE_RANGE: (f64, f64) = (1.0, 200.0);
pub const MIN_BLOCK_RANGE: (f64, f64) = (2.0, 10.0);
pub const MAX_BLOCK_RANGE: (f64, f64) = (3.0, 30.0);
pub const ROAD_SIZE_RANGE: (f64, f64) = (MIN_ROAD_SIZE, 5.0);
