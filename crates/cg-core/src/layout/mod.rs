//! City layout system
//!
//! Recursive lot subdivision into blocks and roads, plus the traffic
//! decoration pass that runs over the finished road network.

mod block;
mod city;
mod network;
mod policy;
mod rect;
mod road;
mod subdivide;
mod traffic;

pub use block::Block;
pub use city::{generate, CityLayout, CityParams};
pub use network::RoadNetwork;
pub use policy::{corrected_road_size, decayed};
pub use rect::{Axis, Rect};
pub use road::{Orientation, Road};
pub use subdivide::subdivide;
pub use traffic::{place_cars, CarMarker, Heading};
