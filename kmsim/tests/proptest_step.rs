//! Property-based tests for the parallel iteration step.
//!
//! Points and centroids are drawn from a small window so that ties and
//! empty clusters show up often.

use proptest::prelude::*;

use kmsim::simulation::iteration::step;
use kmsim::simulation::states::{Centroid, Point};
use kmsim::{Engine, Parameters, Scenario};

// ---- Proptest Strategies ----

fn arb_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0i64..40, 0i64..40).prop_map(|(x, y)| Point::new(x, y)), 1..300)
}

fn arb_centroids() -> impl Strategy<Value = Vec<Centroid>> {
    prop::collection::vec((0i64..40, 0i64..40).prop_map(|(x, y)| Centroid::new(x, y)), 1..8)
}

fn params_for(points: &[Point], centroids: &[Centroid]) -> Parameters {
    Parameters {
        window_dimension: 40,
        points_number: points.len(),
        clusters_number: centroids.len(),
        seed: 0,
    }
}

// ---- Property Tests ----

proptest! {
    #[test]
    fn every_point_lands_in_exactly_one_cluster(points in arb_points(), centroids in arb_centroids()) {
        let r = step(&points, &centroids);

        prop_assert_eq!(r.cardinalities.len(), centroids.len());
        prop_assert_eq!(r.cardinalities.iter().sum::<u64>(), points.len() as u64);
        for j in 0..centroids.len() {
            let members = r.labels.iter().filter(|&&l| l == j).count() as u64;
            prop_assert_eq!(members, r.cardinalities[j]);
        }
    }

    #[test]
    fn labels_point_at_the_first_nearest_centroid(points in arb_points(), centroids in arb_centroids()) {
        let r = step(&points, &centroids);

        for (p, &label) in points.iter().zip(&r.labels) {
            let best = centroids.iter().map(|c| c.distance2(p)).min().unwrap();
            let first = centroids.iter().position(|c| c.distance2(p) == best).unwrap();
            prop_assert_eq!(label, first);
        }
    }

    #[test]
    fn changed_is_false_only_when_nothing_moved(points in arb_points(), centroids in arb_centroids()) {
        let r = step(&points, &centroids);
        prop_assert_eq!(r.changed, r.centroids != centroids);
    }

    #[test]
    fn converged_state_is_a_fixed_point(points in arb_points(), centroids in arb_centroids()) {
        let mut current = centroids;
        let mut converged = false;
        for _ in 0..200 {
            let r = step(&points, &current);
            current = r.centroids;
            if !r.changed {
                converged = true;
                break;
            }
        }

        if converged {
            let again = step(&points, &current);
            prop_assert!(!again.changed);
            prop_assert_eq!(again.centroids, current);
        }
    }

    #[test]
    fn thread_count_does_not_change_the_run(points in arb_points(), centroids in arb_centroids()) {
        let params = params_for(&points, &centroids);
        let engine = |threads| Engine { max_iterations: 50, threads: Some(threads) };

        let mut one = Scenario::from_state(engine(1), params.clone(), points.clone(), centroids.clone()).unwrap();
        let mut many = Scenario::from_state(engine(4), params, points, centroids).unwrap();

        prop_assert_eq!(one.run(), many.run());
        prop_assert_eq!(one.iterations(), many.iterations());
        prop_assert_eq!(one.centroids(), many.centroids());
        prop_assert_eq!(one.labels(), many.labels());
    }
}
