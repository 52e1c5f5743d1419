//! City layout driver
//!
//! Validates the generation parameters, seeds the root rectangle and runs
//! the subdivider to completion. Validation happens before any recursion:
//! bad parameters are refused instead of producing degenerate rectangles.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CITY_X_SIZE, DEFAULT_CITY_Y_SIZE, DEFAULT_MAX_BLOCK_SIZE, DEFAULT_MIN_BLOCK_SIZE,
    DEFAULT_ROAD_SIZE, DEPTH_HEADROOM, MIN_ROAD_SIZE,
};
use crate::errors::{ConfigError, GenerateError};
use crate::rng::RandomSource;

use super::block::Block;
use super::network::RoadNetwork;
use super::rect::{Axis, Rect};
use super::subdivide::subdivide;

/// Generation parameters, as accepted from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityParams {
    pub x_size: f64,
    pub y_size: f64,
    pub min_block_size: f64,
    pub max_block_size: f64,
    pub road_size: f64,
}

impl Default for CityParams {
    fn default() -> Self {
        Self {
            x_size: DEFAULT_CITY_X_SIZE,
            y_size: DEFAULT_CITY_Y_SIZE,
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
            max_block_size: DEFAULT_MAX_BLOCK_SIZE,
            road_size: DEFAULT_ROAD_SIZE,
        }
    }
}

impl CityParams {
    /// Check the preconditions the subdivider relies on.
    ///
    /// The lot must hold at least one minimum block per axis, the road must
    /// not be narrower than the supported minimum, and the maximum block
    /// size must leave room for two minimum blocks plus a road, or no cut
    /// could ever succeed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x_size < self.min_block_size {
            return Err(ConfigError::CityTooSmall {
                axis: Axis::X,
                extent: self.x_size,
                min_block_size: self.min_block_size,
            });
        }
        if self.y_size < self.min_block_size {
            return Err(ConfigError::CityTooSmall {
                axis: Axis::Y,
                extent: self.y_size,
                min_block_size: self.min_block_size,
            });
        }
        if self.road_size < MIN_ROAD_SIZE {
            return Err(ConfigError::RoadTooNarrow {
                road_size: self.road_size,
                minimum: MIN_ROAD_SIZE,
            });
        }
        let required = 2.0 * self.min_block_size + MIN_ROAD_SIZE;
        if self.max_block_size < required {
            return Err(ConfigError::MaxBlockTooSmall {
                max_block_size: self.max_block_size,
                required,
            });
        }
        Ok(())
    }

    /// Hard ceiling on recursion depth.
    ///
    /// Every cut consumes at least `min_block_size + MIN_ROAD_SIZE` of one
    /// axis, so the deepest possible chain is bounded by the summed extents
    /// over that consumption. Valid runs stay well below this; reaching it
    /// means the splitting policy stopped shrinking rectangles.
    pub fn depth_limit(&self) -> u32 {
        let per_cut = self.min_block_size + MIN_ROAD_SIZE;
        ((self.x_size + self.y_size) / per_cut).ceil() as u32 + DEPTH_HEADROOM
    }
}

/// A finished city: leaf blocks plus the road network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLayout {
    pub blocks: Vec<Block>,
    pub roads: RoadNetwork,
}

impl CityLayout {
    /// Total surface of the leaf blocks
    pub fn block_area(&self) -> f64 {
        self.blocks.iter().map(|b| b.rect.area()).sum()
    }

    /// Total surface accounted for by blocks and roads together
    pub fn covered_area(&self) -> f64 {
        self.block_area() + self.roads.paved_area()
    }
}

/// Generate a city layout from validated parameters.
///
/// The root rectangle sits at the origin with the configured extents. The
/// same parameters and seed always produce the same layout.
pub fn generate<R: RandomSource>(
    params: &CityParams,
    rng: &mut R,
) -> Result<CityLayout, GenerateError> {
    params.validate()?;

    let root = Rect::new(0.0, params.x_size, 0.0, params.y_size);
    let (blocks, roads) = subdivide(
        root,
        params.road_size,
        params.min_block_size,
        params.max_block_size,
        params.depth_limit(),
        rng,
    )?;

    Ok(CityLayout {
        blocks,
        roads: RoadNetwork::new(roads),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::LayoutRng;

    #[test]
    fn test_default_params_pass_validation() {
        assert!(CityParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_undersized_city() {
        let params = CityParams {
            x_size: 2.0,
            ..CityParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::CityTooSmall { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_rejects_small_max_block() {
        // 2 * 3 + 1 = 7 is the least workable maximum for min block 3
        let params = CityParams {
            max_block_size: 6.5,
            ..CityParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::MaxBlockTooSmall { .. })
        ));
    }

    #[test]
    fn test_rejects_narrow_road() {
        let params = CityParams {
            road_size: 0.5,
            ..CityParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::RoadTooNarrow { .. })
        ));
    }

    #[test]
    fn test_generate_refuses_bad_config() {
        let params = CityParams {
            y_size: 1.0,
            ..CityParams::default()
        };
        let mut rng = LayoutRng::new(0);
        assert!(matches!(
            generate(&params, &mut rng),
            Err(GenerateError::Config(_))
        ));
    }

    #[test]
    fn test_generate_default_city() {
        let mut rng = LayoutRng::new(99);
        let layout = generate(&CityParams::default(), &mut rng).unwrap();
        assert!(!layout.blocks.is_empty());
        assert!(!layout.roads.is_empty());
        assert!((layout.covered_area() - 900.0).abs() < 1e-6);
    }

    #[test]
    fn test_depth_limit_scales_with_extent() {
        let small = CityParams::default().depth_limit();
        let large = CityParams {
            x_size: 200.0,
            y_size: 200.0,
            ..CityParams::default()
        }
        .depth_limit();
        assert!(large > small);
    }
}
