//! ASCII preview of a generated layout
//!
//! Rasterizes blocks, roads and cars into a character grid by sampling
//! cell centers against the layout rectangles. Row order is top-down so
//! +y points up on screen.

use cg_core::layout::{CarMarker, CityLayout, Orientation};

const BLOCK_SYM: char = '#';
const ROAD_X_SYM: char = '-';
const ROAD_Y_SYM: char = '|';
const CAR_SYM: char = 'c';
const EMPTY_SYM: char = '.';

/// Render the layout as `scale` cells per city unit
pub fn render_map(layout: &CityLayout, cars: &[CarMarker], scale: f64) -> String {
    let width = layout
        .blocks
        .iter()
        .map(|b| b.rect.x_end())
        .chain(layout.roads.iter().map(|r| r.rect.x_end()))
        .fold(0.0f64, f64::max);
    let height = layout
        .blocks
        .iter()
        .map(|b| b.rect.y_end())
        .chain(layout.roads.iter().map(|r| r.rect.y_end()))
        .fold(0.0f64, f64::max);

    let cols = (width * scale).ceil() as usize;
    let rows = (height * scale).ceil() as usize;
    let mut grid = vec![vec![EMPTY_SYM; cols]; rows];

    for (row, line) in grid.iter_mut().enumerate() {
        let y = height - (row as f64 + 0.5) / scale;
        for (col, cell) in line.iter_mut().enumerate() {
            let x = (col as f64 + 0.5) / scale;
            *cell = sample(layout, x, y);
        }
    }

    for car in cars {
        let col = (car.x * scale) as usize;
        let row_from_bottom = (car.y * scale) as usize;
        if col < cols && row_from_bottom < rows {
            grid[rows - 1 - row_from_bottom][col] = CAR_SYM;
        }
    }

    let mut out = String::with_capacity(rows * (cols + 1));
    for line in &grid {
        out.extend(line.iter());
        out.push('\n');
    }
    out
}

fn sample(layout: &CityLayout, x: f64, y: f64) -> char {
    for road in layout.roads.iter() {
        if road.rect.contains(x, y) {
            return match road.orientation {
                Orientation::ParallelX => ROAD_X_SYM,
                Orientation::ParallelY => ROAD_Y_SYM,
            };
        }
    }
    if layout.blocks.iter().any(|b| b.rect.contains(x, y)) {
        return BLOCK_SYM;
    }
    EMPTY_SYM
}
