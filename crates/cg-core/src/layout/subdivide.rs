//! Recursive block subdivision
//!
//! The core of the generator. A rectangle either fits under the maximum
//! block size on both axes and becomes a leaf block, or it is cut along
//! whichever axis is still too large (both, for a double cut) and the
//! recursion continues on the children with a decayed road width.
//!
//! The recursion produces plain values: blocks and roads accumulate into
//! collections owned by the top-level call and are returned to the caller.
//! Nothing here draws, registers itself anywhere, or touches global state;
//! randomness comes only from the injected source.

use crate::errors::InvariantError;
use crate::rng::RandomSource;

use super::block::Block;
use super::policy::{corrected_road_size, decayed};
use super::rect::{Axis, Rect};
use super::road::{Orientation, Road};

/// Size bounds threaded unchanged through the recursion
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_block_size: f64,
    max_block_size: f64,
    depth_limit: u32,
}

/// Subdivide a rectangle into leaf blocks and the roads separating them.
///
/// `road_size` is the nominal road width at the root; nested cuts use a
/// decayed width. `depth_limit` is a hard ceiling on recursion depth,
/// unreachable under a correct policy (see `CityParams::depth_limit`).
pub fn subdivide<R: RandomSource>(
    rect: Rect,
    road_size: f64,
    min_block_size: f64,
    max_block_size: f64,
    depth_limit: u32,
    rng: &mut R,
) -> Result<(Vec<Block>, Vec<Road>), InvariantError> {
    let bounds = Bounds {
        min_block_size,
        max_block_size,
        depth_limit,
    };
    let mut blocks = Vec::new();
    let mut roads = Vec::new();
    split(rect, road_size, &bounds, 0, &mut blocks, &mut roads, rng)?;
    Ok((blocks, roads))
}

/// One recursion step: terminate, cut along one axis, or cut along both
fn split<R: RandomSource>(
    rect: Rect,
    road_size: f64,
    bounds: &Bounds,
    depth: u32,
    blocks: &mut Vec<Block>,
    roads: &mut Vec<Road>,
    rng: &mut R,
) -> Result<(), InvariantError> {
    if depth > bounds.depth_limit {
        return Err(InvariantError::DepthLimitExceeded {
            limit: bounds.depth_limit,
        });
    }

    let x_fits = rect.x_size <= bounds.max_block_size;
    let y_fits = rect.y_size <= bounds.max_block_size;

    if x_fits && y_fits {
        // the only case producing a permanent block
        blocks.push(Block::new(
            rect,
            road_size,
            bounds.min_block_size,
            bounds.max_block_size,
        ));
        Ok(())
    } else if x_fits {
        cut_y_axis(rect, road_size, bounds, depth, blocks, roads, rng)
    } else if y_fits {
        cut_x_axis(rect, road_size, bounds, depth, blocks, roads, rng)
    } else {
        double_cut(rect, road_size, bounds, depth, blocks, roads, rng)
    }
}

/// Draw a cut position along `axis`.
///
/// The first child keeps `cut`, the second keeps `span - cut - road`. The
/// preferred range leaves the far child two minimum blocks of headroom;
/// spans too tight for that fall back to the widest range keeping both
/// children at or above the minimum block size, which the road correction
/// guarantees to exist. A still-inverted range means the correction was
/// bypassed and is reported, never clamped.
fn draw_cut<R: RandomSource>(
    axis: Axis,
    span: f64,
    road: f64,
    bounds: &Bounds,
    rng: &mut R,
) -> Result<f64, InvariantError> {
    let lo = bounds.min_block_size;
    let roomy = span - 2.0 * bounds.min_block_size - road;
    let hi = if roomy >= lo {
        roomy
    } else {
        span - bounds.min_block_size - road
    };
    if hi < lo {
        return Err(InvariantError::EmptyCutRange { axis, lo, hi });
    }
    Ok(rng.uniform(lo, hi))
}

/// Cut along y: two children stacked in y, one road running parallel to x
fn cut_y_axis<R: RandomSource>(
    rect: Rect,
    road_size: f64,
    bounds: &Bounds,
    depth: u32,
    blocks: &mut Vec<Block>,
    roads: &mut Vec<Road>,
    rng: &mut R,
) -> Result<(), InvariantError> {
    let road = corrected_road_size(road_size, rect.y_size, bounds.min_block_size);
    let cut = draw_cut(Axis::Y, rect.y_size, road, bounds, rng)?;
    let next = decayed(road);

    let lower = Rect::new(rect.x_start, rect.x_size, rect.y_start, cut);
    split(lower, next, bounds, depth + 1, blocks, roads, rng)?;

    roads.push(Road::new(
        Rect::new(rect.x_start, rect.x_size, rect.y_start + cut, road),
        Orientation::ParallelX,
    ));

    let upper = Rect::new(
        rect.x_start,
        rect.x_size,
        rect.y_start + cut + road,
        rect.y_size - cut - road,
    );
    split(upper, next, bounds, depth + 1, blocks, roads, rng)
}

/// Cut along x: two children side by side, one road running parallel to y
fn cut_x_axis<R: RandomSource>(
    rect: Rect,
    road_size: f64,
    bounds: &Bounds,
    depth: u32,
    blocks: &mut Vec<Block>,
    roads: &mut Vec<Road>,
    rng: &mut R,
) -> Result<(), InvariantError> {
    let road = corrected_road_size(road_size, rect.x_size, bounds.min_block_size);
    let cut = draw_cut(Axis::X, rect.x_size, road, bounds, rng)?;
    let next = decayed(road);

    let left = Rect::new(rect.x_start, cut, rect.y_start, rect.y_size);
    split(left, next, bounds, depth + 1, blocks, roads, rng)?;

    roads.push(Road::new(
        Rect::new(rect.x_start + cut, road, rect.y_start, rect.y_size),
        Orientation::ParallelY,
    ));

    let right = Rect::new(
        rect.x_start + cut + road,
        rect.x_size - cut - road,
        rect.y_start,
        rect.y_size,
    );
    split(right, next, bounds, depth + 1, blocks, roads, rng)
}

/// Cut along both axes into four quadrants.
///
/// Road widths are corrected per axis from the uncut rectangle; the smaller
/// correction drives the decay for all four children so the width cannot
/// diverge between axes. The vertical road is emitted as two segments that
/// stop at the horizontal road, so the five road/block rectangles tile the
/// parent exactly with no overlapping cross at the center.
fn double_cut<R: RandomSource>(
    rect: Rect,
    road_size: f64,
    bounds: &Bounds,
    depth: u32,
    blocks: &mut Vec<Block>,
    roads: &mut Vec<Road>,
    rng: &mut R,
) -> Result<(), InvariantError> {
    let x_road = corrected_road_size(road_size, rect.x_size, bounds.min_block_size);
    let y_road = corrected_road_size(road_size, rect.y_size, bounds.min_block_size);
    let next = decayed(x_road.min(y_road));

    let x_cut = draw_cut(Axis::X, rect.x_size, x_road, bounds, rng)?;
    let y_cut = draw_cut(Axis::Y, rect.y_size, y_road, bounds, rng)?;

    let right_start = rect.x_start + x_cut + x_road;
    let right_size = rect.x_size - x_cut - x_road;
    let upper_start = rect.y_start + y_cut + y_road;
    let upper_size = rect.y_size - y_cut - y_road;

    let lower_left = Rect::new(rect.x_start, x_cut, rect.y_start, y_cut);
    split(lower_left, next, bounds, depth + 1, blocks, roads, rng)?;

    roads.push(Road::new(
        Rect::new(rect.x_start + x_cut, x_road, rect.y_start, y_cut),
        Orientation::ParallelY,
    ));

    let lower_right = Rect::new(right_start, right_size, rect.y_start, y_cut);
    split(lower_right, next, bounds, depth + 1, blocks, roads, rng)?;

    roads.push(Road::new(
        Rect::new(rect.x_start, rect.x_size, rect.y_start + y_cut, y_road),
        Orientation::ParallelX,
    ));

    let upper_left = Rect::new(rect.x_start, x_cut, upper_start, upper_size);
    split(upper_left, next, bounds, depth + 1, blocks, roads, rng)?;

    roads.push(Road::new(
        Rect::new(rect.x_start + x_cut, x_road, upper_start, upper_size),
        Orientation::ParallelY,
    ));

    let upper_right = Rect::new(right_start, right_size, upper_start, upper_size);
    split(upper_right, next, bounds, depth + 1, blocks, roads, rng)
}
