//! Terminal host for the city layout generator
//!
//! Plays the role the host application's panel plays in a full
//! integration: collects the generation parameters, runs the driver and
//! hands the finished layout to a renderer - here an ASCII preview.

use std::process;

use clap::Parser;

use cg_core::layout::{generate, place_cars, CityParams, Orientation};
use cg_core::{
    GenerateError, LayoutRng, CITY_SIZE_RANGE, DEFAULT_CITY_X_SIZE, DEFAULT_CITY_Y_SIZE,
    DEFAULT_MAX_BLOCK_SIZE, DEFAULT_MIN_BLOCK_SIZE, DEFAULT_ROAD_SIZE, MAX_BLOCK_RANGE,
    MIN_BLOCK_RANGE, ROAD_SIZE_RANGE,
};

mod render;

#[derive(Debug, Parser)]
#[command(name = "citygen", about = "Procedural 2-D city layout generator")]
struct Cli {
    /// City extent along x
    #[arg(long, default_value_t = DEFAULT_CITY_X_SIZE, value_parser = parse_city_size)]
    x_size: f64,

    /// City extent along y
    #[arg(long, default_value_t = DEFAULT_CITY_Y_SIZE, value_parser = parse_city_size)]
    y_size: f64,

    /// Smallest admissible block extent
    #[arg(long, default_value_t = DEFAULT_MIN_BLOCK_SIZE, value_parser = parse_min_block)]
    min_block: f64,

    /// Largest admissible block extent
    #[arg(long, default_value_t = DEFAULT_MAX_BLOCK_SIZE, value_parser = parse_max_block)]
    max_block: f64,

    /// Nominal road width at the outermost cuts
    #[arg(long, default_value_t = DEFAULT_ROAD_SIZE, value_parser = parse_road_size)]
    road: f64,

    /// Seed for the layout RNG (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Place car markers on the finished roads
    #[arg(long)]
    cars: bool,

    /// Skip the ASCII map and print the summary only
    #[arg(long)]
    no_map: bool,

    /// Raster cells per city unit in the map
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

fn parse_in_range(s: &str, (lo, hi): (f64, f64)) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (lo..=hi).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside {lo}..={hi}"))
    }
}

fn parse_city_size(s: &str) -> Result<f64, String> {
    parse_in_range(s, CITY_SIZE_RANGE)
}

fn parse_min_block(s: &str) -> Result<f64, String> {
    parse_in_range(s, MIN_BLOCK_RANGE)
}

fn parse_max_block(s: &str) -> Result<f64, String> {
    parse_in_range(s, MAX_BLOCK_RANGE)
}

fn parse_road_size(s: &str) -> Result<f64, String> {
    parse_in_range(s, ROAD_SIZE_RANGE)
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("citygen: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), GenerateError> {
    let params = CityParams {
        x_size: cli.x_size,
        y_size: cli.y_size,
        min_block_size: cli.min_block,
        max_block_size: cli.max_block,
        road_size: cli.road,
    };

    let mut rng = match cli.seed {
        Some(seed) => LayoutRng::new(seed),
        None => LayoutRng::from_entropy(),
    };
    let seed = rng.seed();

    let layout = generate(&params, &mut rng)?;
    let cars = if cli.cars {
        place_cars(&layout.roads, &mut rng)
    } else {
        Vec::new()
    };

    println!("seed: {seed}");
    println!(
        "blocks: {} (area {:.1})",
        layout.blocks.len(),
        layout.block_area()
    );
    println!(
        "roads: {} ({} {}, {} {}; area {:.1})",
        layout.roads.len(),
        layout.roads.count(Orientation::ParallelX),
        Orientation::ParallelX,
        layout.roads.count(Orientation::ParallelY),
        Orientation::ParallelY,
        layout.roads.paved_area()
    );
    println!(
        "coverage: {:.1} of {:.1}",
        layout.covered_area(),
        params.x_size * params.y_size
    );
    if cli.cars {
        println!("cars: {}", cars.len());
    }

    if !cli.no_map {
        println!();
        print!("{}", render::render_map(&layout, &cars, cli.scale));
    }

    Ok(())
}
