//! Facade over the dataset, spatial index, pathfinder, and path cache.
//!
//! This is the surface the installation's controller and visualization
//! layers call into: coordinate and parameter lookups, cached meander
//! queries, and crossfade interpolation. Coordinate-keyed operations
//! never raise for unresolved inputs; they return an empty result and
//! the caller treats it as "nothing to do".

use std::sync::Arc;

use crate::cache::PathCache;
use crate::dataset::{LatentCoord, ParamVector, PointDataset, PARAM_DIM};
use crate::error::SpaceResult;
use crate::path::{MeanderPath, PathConfig, PathFinder};
use crate::spatial::SpatialIndex;

/// Composed latent-space service: one dataset, one spatial index, one
/// path cache, for the lifetime of a session.
pub struct LatentSpace {
    dataset: PointDataset,
    index: SpatialIndex,
    config: PathConfig,
    cache: PathCache,
}

impl LatentSpace {
    /// Builds the service with the default path configuration.
    pub fn new(dataset: PointDataset) -> Self {
        Self::with_config(dataset, PathConfig::default())
    }

    /// Builds the service with an explicit path configuration.
    pub fn with_config(dataset: PointDataset, config: PathConfig) -> Self {
        let index = SpatialIndex::build(&dataset.coordinates());
        Self {
            dataset,
            index,
            config,
            cache: PathCache::new(),
        }
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &PointDataset {
        &self.dataset
    }

    /// The active path configuration.
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Number of meander paths memoized so far this session.
    pub fn cached_paths(&self) -> usize {
        self.cache.len()
    }

    /// Parameter vector of the point at `coord`, or `None` if the
    /// coordinate does not correspond to a sampled point.
    pub fn parameters_at(&self, coord: &LatentCoord) -> Option<ParamVector> {
        let index = self.dataset.index_of_coordinate(coord)?;
        self.dataset.parameters_of(index).ok()
    }

    /// Cached meander between two point indices.
    ///
    /// This is the index-keyed entry point for callers that already
    /// hold dataset indices and do not want to round-trip through
    /// coordinate values. Out-of-range indices are an error; a path
    /// that could not reach its goal is a normal result carrying its
    /// [`crate::StopReason`].
    pub fn meander_between(&self, start: usize, goal: usize) -> SpaceResult<Arc<MeanderPath>> {
        // Validate endpoints before touching the cache so misuse cannot
        // trigger a computation that would always fail.
        self.dataset.coordinate_of(start)?;
        self.dataset.coordinate_of(goal)?;
        self.cache.get_or_compute(start, goal, || {
            PathFinder::new(&self.dataset, &self.index, self.config.clone())
                .calculate_meander(start, goal)
        })
    }

    /// Cached meander between two coordinates, or `None` when either
    /// coordinate is unresolved.
    pub fn meander_at(&self, a: &LatentCoord, b: &LatentCoord) -> Option<Arc<MeanderPath>> {
        let start = self.dataset.index_of_coordinate(a)?;
        let goal = self.dataset.index_of_coordinate(b)?;
        self.meander_between(start, goal).ok()
    }

    /// Parameter vectors along the meander from `a` to `b`.
    ///
    /// Empty when either coordinate is unresolved.
    pub fn meander_parameters(&self, a: &LatentCoord, b: &LatentCoord) -> Vec<ParamVector> {
        match self.meander_at(a, b) {
            Some(path) => path
                .indices
                .iter()
                .filter_map(|&i| self.dataset.parameters_of(i).ok())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Coordinates along the meander from `a` to `b`, for path
    /// visualization. Empty when either coordinate is unresolved.
    pub fn meander_coordinates(&self, a: &LatentCoord, b: &LatentCoord) -> Vec<LatentCoord> {
        match self.meander_at(a, b) {
            Some(path) => path
                .indices
                .iter()
                .filter_map(|&i| self.dataset.coordinate_of(i).ok())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Element-wise linear interpolation of parameters from `a` to `b`
    /// in `steps + 1` vectors: entry `i` is
    /// `params_a * (1 - i/steps) + params_b * (i/steps)`.
    ///
    /// Empty when either coordinate is unresolved, or when `steps` is 0
    /// and the endpoint contract cannot hold.
    pub fn crossfade_parameters(
        &self,
        a: &LatentCoord,
        b: &LatentCoord,
        steps: usize,
    ) -> Vec<ParamVector> {
        if steps == 0 {
            return Vec::new();
        }
        let (Some(params_a), Some(params_b)) = (self.parameters_at(a), self.parameters_at(b))
        else {
            return Vec::new();
        };

        (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                let mut params = [0.0; PARAM_DIM];
                for (j, slot) in params.iter_mut().enumerate() {
                    *slot = params_a[j] * (1.0 - t) + params_b[j] * t;
                }
                params
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::line_columns;
    use pretty_assertions::assert_eq;

    fn space_fixture(n: usize) -> LatentSpace {
        let dataset = PointDataset::new(line_columns(n)).unwrap();
        LatentSpace::with_config(
            dataset,
            PathConfig {
                neighbors: 6,
                ..PathConfig::default()
            },
        )
    }

    #[test]
    fn test_parameters_at_known_coordinate() {
        let space = space_fixture(5);
        let coord = space.dataset().coordinate_of(2).unwrap();
        let params = space.parameters_at(&coord).unwrap();
        assert_eq!(params, space.dataset().parameters_of(2).unwrap());
    }

    #[test]
    fn test_parameters_at_unknown_coordinate() {
        let space = space_fixture(5);
        assert_eq!(space.parameters_at(&[50.0, 0.0, 0.0]), None);
    }

    #[test]
    fn test_meander_parameters_cache_idempotence() {
        let space = space_fixture(12);
        let a = space.dataset().coordinate_of(0).unwrap();
        let b = space.dataset().coordinate_of(11).unwrap();

        let first = space.meander_parameters(&a, &b);
        let second = space.meander_parameters(&a, &b);
        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(space.cached_paths(), 1);
    }

    #[test]
    fn test_meander_between_returns_shared_entry() {
        let space = space_fixture(12);
        let first = space.meander_between(0, 11).unwrap();
        let second = space.meander_between(0, 11).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_meander_with_unresolved_coordinate_is_empty() {
        let space = space_fixture(6);
        let a = space.dataset().coordinate_of(0).unwrap();
        assert!(space.meander_parameters(&a, &[99.0, 0.0, 0.0]).is_empty());
        assert!(space.meander_coordinates(&[99.0, 0.0, 0.0], &a).is_empty());
    }

    #[test]
    fn test_meander_coordinates_start_at_a() {
        let space = space_fixture(8);
        let a = space.dataset().coordinate_of(1).unwrap();
        let b = space.dataset().coordinate_of(6).unwrap();
        let coords = space.meander_coordinates(&a, &b);
        assert_eq!(coords[0], a);
    }

    #[test]
    fn test_crossfade_count_and_endpoints() {
        let space = space_fixture(5);
        let a = space.dataset().coordinate_of(0).unwrap();
        let b = space.dataset().coordinate_of(4).unwrap();
        let steps = 10;

        let fade = space.crossfade_parameters(&a, &b, steps);
        assert_eq!(fade.len(), steps + 1);
        assert_eq!(fade[0], space.parameters_at(&a).unwrap());
        assert_eq!(fade[steps], space.parameters_at(&b).unwrap());
    }

    #[test]
    fn test_crossfade_follows_lerp_law() {
        let space = space_fixture(5);
        let a = space.dataset().coordinate_of(0).unwrap();
        let b = space.dataset().coordinate_of(4).unwrap();
        let params_a = space.parameters_at(&a).unwrap();
        let params_b = space.parameters_at(&b).unwrap();
        let steps = 4;

        let fade = space.crossfade_parameters(&a, &b, steps);
        for (i, params) in fade.iter().enumerate() {
            let t = i as f64 / steps as f64;
            for j in 0..PARAM_DIM {
                let expected = params_a[j] * (1.0 - t) + params_b[j] * t;
                assert!((params[j] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_crossfade_zero_steps_is_empty() {
        let space = space_fixture(5);
        let a = space.dataset().coordinate_of(0).unwrap();
        let b = space.dataset().coordinate_of(4).unwrap();
        assert!(space.crossfade_parameters(&a, &b, 0).is_empty());
    }

    #[test]
    fn test_crossfade_unresolved_coordinate_is_empty() {
        let space = space_fixture(5);
        let a = space.dataset().coordinate_of(0).unwrap();
        assert!(space
            .crossfade_parameters(&a, &[123.0, 0.0, 0.0], 10)
            .is_empty());
    }
}
