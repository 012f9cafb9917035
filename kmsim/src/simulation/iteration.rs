//! One Lloyd iteration: nearest-centroid assignment, reduction, centroid update
//!
//! Both phases run on the current rayon pool.
//!
//! Phase 1 maps every point to its nearest centroid, then folds the points
//! into per-worker `ClusterAccumulator` vectors that are merged with
//! `reduce`. Integer sums are associative and commutative, so the merged
//! result does not depend on how rayon splits the work.
//!
//! Phase 2 recomputes each centroid from its accumulator independently and
//! ORs the per-cluster "moved" flags with a parallel `any`.
//!
//! Distances are compared squared. `sqrt` is monotonic, so the arg-min is the
//! same as with true Euclidean distance, and the comparison stays exact.

use rayon::prelude::*;

use crate::simulation::states::{Centroid, ClusterAccumulator, Point};

/// Result of a single [`step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub centroids: Vec<Centroid>, // updated centroids
    pub cardinalities: Vec<u64>,  // members per cluster in this step
    pub labels: Vec<usize>,       // cluster index of every point in this step
    pub changed: bool,            // true if any centroid moved
}

/// Index of the centroid nearest to `p`
///
/// Scans `0..k` with a strict `<`, so on a tie the lowest index wins.
/// `centroids` must not be empty.
pub fn nearest_centroid(p: &Point, centroids: &[Centroid]) -> usize {
    let mut nearest = 0;
    let mut min_d2 = centroids[0].distance2(p);

    for (j, c) in centroids.iter().enumerate().skip(1) {
        let d2 = c.distance2(p);
        if d2 < min_d2 {
            nearest = j;
            min_d2 = d2;
        }
    }
    nearest
}

/// Assign every point to its nearest centroid (parallel)
pub fn assign(points: &[Point], centroids: &[Centroid]) -> Vec<usize> {
    points
        .par_iter()
        .map(|p| nearest_centroid(p, centroids))
        .collect()
}

/// Sum member coordinates and counts per cluster (parallel fold + reduce)
pub fn accumulate(points: &[Point], labels: &[usize], k: usize) -> Vec<ClusterAccumulator> {
    points
        .par_iter()
        .zip(labels.par_iter())
        .fold(
            || vec![ClusterAccumulator::default(); k],
            |mut local, (p, &j)| {
                local[j].add(p);
                local
            },
        )
        .reduce(
            || vec![ClusterAccumulator::default(); k],
            |mut acc, local| {
                for (a, l) in acc.iter_mut().zip(local.iter()) {
                    a.merge(l);
                }
                acc
            },
        )
}

/// New centroid positions from the accumulators (parallel)
///
/// An empty cluster keeps its previous centroid.
pub fn update(centroids: &[Centroid], accumulators: &[ClusterAccumulator]) -> Vec<Centroid> {
    centroids
        .par_iter()
        .zip(accumulators.par_iter())
        .enumerate()
        .map(|(j, (old, acc))| match acc.mean() {
            Some(pos) => Centroid { pos },
            None => {
                tracing::debug!(cluster = j, x = old.x(), y = old.y(), "empty cluster, centroid kept");
                *old
            }
        })
        .collect()
}

/// Execute one assignment + update pass over `points`
///
/// `points` and `centroids` must both be non-empty.
pub fn step(points: &[Point], centroids: &[Centroid]) -> StepResult {
    let k = centroids.len();

    // Phase 1: assignment + reduction
    let labels = assign(points, centroids);
    let accumulators = accumulate(points, &labels, k);

    // Phase 2: centroid update + convergence check
    let new_centroids = update(centroids, &accumulators);
    let changed = new_centroids
        .par_iter()
        .zip(centroids.par_iter())
        .any(|(new, old)| new.pos != old.pos);

    StepResult {
        centroids: new_centroids,
        cardinalities: accumulators.iter().map(|a| a.count).collect(),
        labels,
        changed,
    }
}
