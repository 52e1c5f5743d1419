//! cg-core: Core logic for the city layout generator
//!
//! This crate contains the whole layout computation with no I/O dependencies.
//! It is designed to be pure and testable: given a seed and a parameter set,
//! generation always produces the same city.
//!
//! A city is a rectangular lot recursively partitioned into blocks separated
//! by roads. The partition, road orientations and optional traffic markers
//! are plain data; drawing them is the consumer's job (see the `cg-cli`
//! crate for a terminal preview).

pub mod layout;

mod consts;
mod errors;
mod rng;

pub use consts::*;
pub use errors::{ConfigError, GenerateError, InvariantError};
pub use rng::{LayoutRng, RandomSource};
