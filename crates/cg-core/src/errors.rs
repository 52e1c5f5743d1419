//! Error types for layout generation
//!
//! Two distinct failure classes: configuration errors are user-fixable and
//! refused before any recursion starts; invariant errors signal a bug in
//! the splitting policy and should never occur for accepted parameters.

use thiserror::Error;

use crate::layout::Axis;

/// Rejected generation parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error(
        "city extent {extent} along {axis} is smaller than the minimum block size {min_block_size}"
    )]
    CityTooSmall {
        axis: Axis,
        extent: f64,
        min_block_size: f64,
    },

    #[error(
        "max block size {max_block_size} cannot fit two minimum blocks and a road (needs at least {required})"
    )]
    MaxBlockTooSmall { max_block_size: f64, required: f64 },

    #[error("road size {road_size} is narrower than the minimum road size {minimum}")]
    RoadTooNarrow { road_size: f64, minimum: f64 },
}

/// Internal invariant violations during subdivision
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantError {
    #[error("cut range along {axis} is empty ({lo} .. {hi})")]
    EmptyCutRange { axis: Axis, lo: f64, hi: f64 },

    #[error("subdivision exceeded the recursion depth ceiling of {limit}")]
    DepthLimitExceeded { limit: u32 },
}

/// Any failure the layout driver can report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),
}
