use std::time::Instant;

use rayon::ThreadPoolBuilder;

use crate::simulation::initializer::initialize_from;
use crate::simulation::iteration::step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Centroid, Point};

/// Helper to seed a problem with `n` points
fn make_problem(n: usize, k: usize) -> (Vec<Point>, Vec<Centroid>) {
    let params = Parameters {
        window_dimension: 600,
        points_number: n,
        clusters_number: k,
        seed: 42,
    };
    initialize_from(&params)
}

pub fn bench_step() {
    // Different problem sizes to test
    let ns = [1_000, 10_000, 70_000, 200_000, 1_000_000];
    let k = 10;
    let steps = 5;

    for n in ns {
        let (points, centroids) = make_problem(n, k);

        // Warm up
        let _ = step(&points, &centroids);

        let t0 = Instant::now();
        let mut current = centroids;
        for _ in 0..steps {
            current = step(&points, &current).centroids;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:8}, k = {k}, step = {:8.6} s", per_step);
    }
}

/// Step time per worker count at a fixed size
/// Paste output directly into a spreadsheet to graph
pub fn bench_threads() {
    let n = 1_000_000;
    let k = 10;
    let steps = 3;
    let max_threads = std::thread::available_parallelism().map_or(1, |p| p.get());

    let (points, centroids) = make_problem(n, k);

    println!("threads,step_ms");

    for threads in 1..=max_threads {
        let pool = match ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool,
            Err(e) => {
                eprintln!("threads = {threads}: {e}");
                continue;
            }
        };

        let t0 = Instant::now();
        pool.install(|| {
            for _ in 0..steps {
                let _ = step(&points, &centroids);
            }
        });
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", threads, ms);
    }
}
