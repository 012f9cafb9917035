//! Core state types for the clustering engine.
//!
//! Defines the integral 2D coordinate type and the records built on it:
//! - `Point`    an input coordinate, seeded once and never moved
//! - `Centroid` the current mean of one cluster, rewritten every step
//! - `ClusterAccumulator` running sums for one cluster within one step

use nalgebra::Vector2;
pub type NVec2i = Vector2<i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub pos: NVec2i, // position
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { pos: NVec2i::new(x, y) }
    }

    pub fn x(&self) -> i64 {
        self.pos.x
    }

    pub fn y(&self) -> i64 {
        self.pos.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Centroid {
    pub pos: NVec2i, // current mean position
}

impl Centroid {
    pub fn new(x: i64, y: i64) -> Self {
        Self { pos: NVec2i::new(x, y) }
    }

    pub fn x(&self) -> i64 {
        self.pos.x
    }

    pub fn y(&self) -> i64 {
        self.pos.y
    }

    /// Squared Euclidean distance to `p`, exact in integer arithmetic
    /// for coordinates inside a window of at most [`MAX_WINDOW_DIMENSION`](crate::simulation::params::MAX_WINDOW_DIMENSION)
    pub fn distance2(&self, p: &Point) -> i64 {
        let r = p.pos - self.pos;
        r.dot(&r)
    }
}

/// Per-cluster sums for one step. Zeroed at the start of every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterAccumulator {
    pub sum: NVec2i, // sum of member coordinates
    pub count: u64,  // number of members
}

impl Default for ClusterAccumulator {
    fn default() -> Self {
        Self {
            sum: NVec2i::zeros(),
            count: 0,
        }
    }
}

impl ClusterAccumulator {
    pub fn add(&mut self, p: &Point) {
        self.sum += p.pos;
        self.count += 1;
    }

    pub fn merge(&mut self, other: &ClusterAccumulator) {
        self.sum += other.sum;
        self.count += other.count;
    }

    /// Truncated mean of the members, `None` for an empty cluster
    pub fn mean(&self) -> Option<NVec2i> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as i64;
        Some(NVec2i::new(self.sum.x / n, self.sum.y / n))
    }
}
