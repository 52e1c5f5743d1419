//! Road segments
//!
//! A road is the strip left between the two children of a cut. Its
//! orientation is fixed when the cut is made and never recomputed: cutting
//! along Y leaves a strip running parallel to the x-axis, and vice versa.
//! Consumers use the orientation to pick texture direction and lanes.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::rect::Rect;

/// The axis a road runs parallel to (its long axis at emission time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Orientation {
    /// Runs along the x-axis (produced by a cut along y)
    #[strum(serialize = "parallel-to-x")]
    ParallelX,
    /// Runs along the y-axis (produced by a cut along x)
    #[strum(serialize = "parallel-to-y")]
    ParallelY,
}

/// A road segment of the generated network
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub rect: Rect,
    pub orientation: Orientation,
}

impl Road {
    /// Create a road from its footprint and the axis it runs along
    pub fn new(rect: Rect, orientation: Orientation) -> Self {
        Self { rect, orientation }
    }

    /// Length along the road's long axis
    pub fn long_extent(&self) -> f64 {
        match self.orientation {
            Orientation::ParallelX => self.rect.x_size,
            Orientation::ParallelY => self.rect.y_size,
        }
    }

    /// Width across the road (the corrected road size it was cut with)
    pub fn width(&self) -> f64 {
        match self.orientation {
            Orientation::ParallelX => self.rect.y_size,
            Orientation::ParallelY => self.rect.x_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_extents() {
        let road = Road::new(Rect::new(0.0, 30.0, 12.0, 2.0), Orientation::ParallelX);
        assert_eq!(road.long_extent(), 30.0);
        assert_eq!(road.width(), 2.0);

        let road = Road::new(Rect::new(12.0, 2.0, 0.0, 30.0), Orientation::ParallelY);
        assert_eq!(road.long_extent(), 30.0);
        assert_eq!(road.width(), 2.0);
    }

    #[test]
    fn test_orientation_display() {
        assert_eq!(Orientation::ParallelX.to_string(), "parallel-to-x");
        assert_eq!(Orientation::ParallelY.to_string(), "parallel-to-y");
    }
}
