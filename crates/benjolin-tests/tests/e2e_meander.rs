//! End-to-end meander properties over a realistic synthetic cloud.

use std::collections::HashSet;
use std::sync::Arc;

use benjolin_space::DEFAULT_MAX_STEPS;
use benjolin_tests::fixtures;

#[test]
fn meander_starts_at_start_and_never_repeats() {
    let space = fixtures::space(300);

    for (start, goal) in [(0, 299), (12, 250), (100, 3)] {
        let path = space.meander_between(start, goal).unwrap();
        assert_eq!(path.indices[0], start, "path must begin at its start");

        let mut seen = HashSet::new();
        for &index in &path.indices {
            assert!(seen.insert(index), "index {} repeated in path", index);
        }
        assert!(path.len() <= DEFAULT_MAX_STEPS + 1);
    }
}

#[test]
fn meander_queries_are_memoized() {
    let space = fixtures::space(200);

    let first = space.meander_between(5, 180).unwrap();
    let second = space.meander_between(5, 180).unwrap();
    assert!(Arc::ptr_eq(&first, &second), "cache hit must be identical");
    assert_eq!(space.cached_paths(), 1);

    // The reverse direction is an independent computation.
    space.meander_between(180, 5).unwrap();
    assert_eq!(space.cached_paths(), 2);
}

#[test]
fn facade_projections_agree_with_the_path() {
    let space = fixtures::space(150);
    let a = space.dataset().coordinate_of(10).unwrap();
    let b = space.dataset().coordinate_of(140).unwrap();

    let path = space.meander_at(&a, &b).unwrap();
    let params = space.meander_parameters(&a, &b);
    let coords = space.meander_coordinates(&a, &b);

    assert_eq!(params.len(), path.len());
    assert_eq!(coords.len(), path.len());
    for (i, &index) in path.indices.iter().enumerate() {
        assert_eq!(params[i], space.dataset().parameters_of(index).unwrap());
        assert_eq!(coords[i], space.dataset().coordinate_of(index).unwrap());
    }
}

#[test]
fn unresolved_coordinates_yield_empty_results() {
    let space = fixtures::space(50);
    let known = space.dataset().coordinate_of(0).unwrap();
    let unknown = [7.0, 7.0, 7.0];

    assert!(space.meander_parameters(&known, &unknown).is_empty());
    assert!(space.meander_coordinates(&unknown, &known).is_empty());
    assert!(space.crossfade_parameters(&known, &unknown, 10).is_empty());
    assert_eq!(space.parameters_at(&unknown), None);
}
