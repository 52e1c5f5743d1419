//! Traffic decoration
//!
//! Places car markers along finished roads. This is a consumer of the road
//! network, run by the caller after generation; the subdivider knows
//! nothing about it. Markers are plain data for the rendering collaborator:
//! a position on the road surface, a heading along the road's long axis and
//! a patrol distance.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::consts::CAR_MIN_DIST;
use crate::rng::RandomSource;

use super::network::RoadNetwork;
use super::road::{Orientation, Road};

/// Driving direction of a car marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Heading {
    /// Toward +y
    North,
    /// Toward -y
    South,
    /// Toward +x
    East,
    /// Toward -x
    West,
}

/// A car placed on a road
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarMarker {
    pub x: f64,
    pub y: f64,
    pub heading: Heading,
    /// Distance the car patrols along the road before turning back
    pub travel: f64,
}

/// Decorate every sufficiently long road with one car per direction.
///
/// Roads shorter than `CAR_MIN_DIST + 2` along their long axis stay empty.
/// Cars sit one unit in from each end, offset to the quarter and
/// three-quarter lanes so opposing directions keep to their side.
pub fn place_cars<R: RandomSource>(network: &RoadNetwork, rng: &mut R) -> Vec<CarMarker> {
    let mut cars = Vec::new();
    for road in network.iter() {
        add_cars(road, rng, &mut cars);
    }
    cars
}

fn add_cars<R: RandomSource>(road: &Road, rng: &mut R, cars: &mut Vec<CarMarker>) {
    let rect = &road.rect;
    if road.long_extent() < CAR_MIN_DIST + 2.0 {
        return;
    }
    let travel_cap = (road.long_extent() - 2.0).min(3.0 * CAR_MIN_DIST);

    match road.orientation {
        Orientation::ParallelY => {
            let travel = rng.uniform(CAR_MIN_DIST, travel_cap);
            cars.push(CarMarker {
                x: rect.x_start + 3.0 * rect.x_size / 4.0,
                y: rect.y_start + 1.0,
                heading: Heading::North,
                travel,
            });
            let travel = rng.uniform(CAR_MIN_DIST, travel_cap);
            cars.push(CarMarker {
                x: rect.x_start + rect.x_size / 4.0,
                y: rect.y_end() - 1.0,
                heading: Heading::South,
                travel,
            });
        }
        Orientation::ParallelX => {
            let travel = rng.uniform(CAR_MIN_DIST, travel_cap);
            cars.push(CarMarker {
                x: rect.x_start + 1.0,
                y: rect.y_start + rect.y_size / 4.0,
                heading: Heading::East,
                travel,
            });
            let travel = rng.uniform(CAR_MIN_DIST, travel_cap);
            cars.push(CarMarker {
                x: rect.x_end() - 1.0,
                y: rect.y_start + 3.0 * rect.y_size / 4.0,
                heading: Heading::West,
                travel,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::rng::LayoutRng;

    fn network(roads: Vec<Road>) -> RoadNetwork {
        RoadNetwork::new(roads)
    }

    #[test]
    fn test_short_roads_stay_empty() {
        let net = network(vec![Road::new(
            Rect::new(0.0, 11.0, 4.0, 2.0),
            Orientation::ParallelX,
        )]);
        let mut rng = LayoutRng::new(3);
        assert!(place_cars(&net, &mut rng).is_empty());
    }

    #[test]
    fn test_one_car_per_direction_on_long_roads() {
        let net = network(vec![Road::new(
            Rect::new(5.0, 2.0, 0.0, 20.0),
            Orientation::ParallelY,
        )]);
        let mut rng = LayoutRng::new(3);
        let cars = place_cars(&net, &mut rng);

        assert_eq!(cars.len(), 2);
        let north = &cars[0];
        let south = &cars[1];

        assert_eq!(north.heading, Heading::North);
        assert_eq!(north.x, 6.5); // three-quarter lane
        assert_eq!(north.y, 1.0); // one unit in from the near end
        assert_eq!(south.heading, Heading::South);
        assert_eq!(south.x, 5.5); // quarter lane
        assert_eq!(south.y, 19.0);
    }

    #[test]
    fn test_travel_within_bounds() {
        let net = network(vec![
            Road::new(Rect::new(0.0, 50.0, 0.0, 2.0), Orientation::ParallelX),
            Road::new(Rect::new(0.0, 2.0, 0.0, 13.0), Orientation::ParallelY),
        ]);
        let mut rng = LayoutRng::new(11);
        for car in place_cars(&net, &mut rng) {
            assert!(car.travel >= CAR_MIN_DIST);
            assert!(car.travel <= 3.0 * CAR_MIN_DIST);
        }
    }

    #[test]
    fn test_horizontal_cars_head_along_x() {
        let net = network(vec![Road::new(
            Rect::new(0.0, 30.0, 10.0, 2.0),
            Orientation::ParallelX,
        )]);
        let mut rng = LayoutRng::new(5);
        let cars = place_cars(&net, &mut rng);

        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].heading, Heading::East);
        assert_eq!(cars[0].x, 1.0);
        assert_eq!(cars[1].heading, Heading::West);
        assert_eq!(cars[1].x, 29.0);
    }
}
