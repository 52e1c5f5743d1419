//! City blocks
//!
//! Only leaves of the subdivision become blocks: a rectangle whose extents
//! both fit under the maximum block size. Intermediate rectangles are
//! transient recursion state and are never materialized.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A finished city block, with the subdivision parameters it was created with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    /// Road width in effect at this block's nesting level
    pub road_size: f64,
    pub min_block_size: f64,
    pub max_block_size: f64,
}

impl Block {
    pub fn new(rect: Rect, road_size: f64, min_block_size: f64, max_block_size: f64) -> Self {
        Self {
            rect,
            road_size,
            min_block_size,
            max_block_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_keeps_parameters() {
        let b = Block::new(Rect::new(0.0, 5.0, 0.0, 6.0), 1.5, 3.0, 10.0);
        assert_eq!(b.rect.area(), 30.0);
        assert_eq!(b.road_size, 1.5);
        assert_eq!(b.min_block_size, 3.0);
        assert_eq!(b.max_block_size, 10.0);
    }
}
