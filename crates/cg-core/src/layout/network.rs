//! Finalized road network
//!
//! Collects the roads emitted during subdivision, in emission order, and
//! hands them to rendering or decoration consumers as-is. Orientation was
//! fixed at cut time; nothing is merged, deduplicated or recomputed here,
//! so two geometrically adjacent cuts keep their own segments.

use serde::{Deserialize, Serialize};

use super::road::{Orientation, Road};

/// The road set of a generated city
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadNetwork {
    roads: Vec<Road>,
}

impl RoadNetwork {
    /// Wrap the roads emitted by the subdivider
    pub fn new(roads: Vec<Road>) -> Self {
        Self { roads }
    }

    /// All road segments, in emission order
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Number of segments with the given orientation
    pub fn count(&self, orientation: Orientation) -> usize {
        self.roads
            .iter()
            .filter(|r| r.orientation == orientation)
            .count()
    }

    /// Total paved surface
    pub fn paved_area(&self) -> f64 {
        self.roads.iter().map(|r| r.rect.area()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Road> {
        self.roads.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;

    fn sample() -> RoadNetwork {
        RoadNetwork::new(vec![
            Road::new(Rect::new(0.0, 10.0, 4.0, 2.0), Orientation::ParallelX),
            Road::new(Rect::new(3.0, 1.0, 0.0, 4.0), Orientation::ParallelY),
            Road::new(Rect::new(3.0, 1.0, 6.0, 4.0), Orientation::ParallelY),
        ])
    }

    #[test]
    fn test_counts_per_orientation() {
        let net = sample();
        assert_eq!(net.len(), 3);
        assert_eq!(net.count(Orientation::ParallelX), 1);
        assert_eq!(net.count(Orientation::ParallelY), 2);
    }

    #[test]
    fn test_paved_area() {
        let net = sample();
        assert_eq!(net.paved_area(), 20.0 + 4.0 + 4.0);
    }

    #[test]
    fn test_keeps_emission_order_and_geometry() {
        let net = sample();
        assert_eq!(net.roads()[0].orientation, Orientation::ParallelX);
        assert_eq!(net.roads()[1].rect.y_start, 0.0);
        assert_eq!(net.roads()[2].rect.y_start, 6.0);
    }
}
