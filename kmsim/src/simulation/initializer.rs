//! Random seeding of the point set and the initial centroids
//!
//! The generator is `rand_chacha::ChaCha8Rng` seeded with
//! `seed_from_u64(seed)`. Every coordinate is `next_u32() % window_dimension`,
//! the same modulo reduction as a C `rand() % w`. Draw order is fixed:
//! all points first (x then y for each), then all centroids (x then y).
//! Changing the generator or the order changes every run for a given seed.

use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::simulation::error::Result;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Centroid, NVec2i, Point};

/// Validate the sizes, then seed points and centroids from `seed`
pub fn initialize(
    window_dimension: i64,
    points_number: i64,
    clusters_number: i64,
    seed: u64,
) -> Result<(Vec<Point>, Vec<Centroid>)> {
    let params = Parameters::new(window_dimension, points_number, clusters_number, seed)?;
    Ok(initialize_from(&params))
}

/// Seed points and centroids for already validated parameters
pub fn initialize_from(params: &Parameters) -> (Vec<Point>, Vec<Centroid>) {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    seed_points(params, &mut rng)
}

/// Draw points then centroids from `rng`
pub fn seed_points<R: RngCore>(params: &Parameters, rng: &mut R) -> (Vec<Point>, Vec<Centroid>) {
    let w = params.window_dimension;

    let points: Vec<Point> = (0..params.points_number)
        .map(|_| Point { pos: draw(rng, w) })
        .collect();

    let centroids: Vec<Centroid> = (0..params.clusters_number)
        .map(|_| Centroid { pos: draw(rng, w) })
        .collect();

    for (j, c) in centroids.iter().enumerate() {
        tracing::debug!(cluster = j, x = c.x(), y = c.y(), "initial centroid");
    }

    (points, centroids)
}

// x first, then y
fn draw<R: RngCore>(rng: &mut R, w: u32) -> NVec2i {
    let x = (rng.next_u32() % w) as i64;
    let y = (rng.next_u32() % w) as i64;
    NVec2i::new(x, y)
}
