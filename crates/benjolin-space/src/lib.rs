//! Benjolin Latent-Space Core
//!
//! This crate is the algorithmic heart of the Benjolin installation: a
//! precomputed cloud of latent-space positions, each tied to an 8-value
//! synthesizer parameter vector, and a greedy "meander" pathfinder that
//! walks the cloud from one state to another.
//!
//! # Overview
//!
//! A session builds one [`LatentSpace`] from a [`PointDataset`] and
//! queries it for:
//!
//! - **Lookups** - parameters for a clicked latent coordinate
//! - **Meanders** - bounded greedy paths that move toward a goal point
//!   while keeping parameter jumps small, memoized per `(start, goal)`
//! - **Crossfades** - element-wise linear parameter interpolation
//!
//! The meander search is a heuristic, not a shortest-path algorithm: it
//! never backtracks, it may fail to reach its goal, and a truncated
//! path is a normal, playable result (see [`StopReason`]).
//!
//! # Example
//!
//! ```ignore
//! use benjolin_space::{LatentSpace, PointDataset};
//!
//! let dataset = PointDataset::load("dataset.json")?;
//! let space = LatentSpace::new(dataset);
//!
//! let path = space.meander_between(17, 230)?;
//! if !path.reached_goal() {
//!     eprintln!("partial path: {} points", path.len());
//! }
//! ```
//!
//! # Crate Structure
//!
//! - [`dataset`] - column storage and exact coordinate lookup
//! - [`spatial`] - static nearest-neighbour index (k-d tree)
//! - [`path`] - the greedy meander search and its configuration
//! - [`cache`] - per-session path memoization
//! - [`space`] - the composed facade external callers use
//! - [`hash`] - dataset fingerprinting
//! - [`distance`] - Euclidean distance helpers
//! - [`error`] - error types

pub mod cache;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod hash;
pub mod path;
pub mod space;
pub mod spatial;

// Re-export main types at crate root
pub use cache::PathCache;
pub use dataset::{
    DatasetColumns, LatentCoord, ParamVector, PointDataset, LATENT_DIM, PARAM_DIM,
};
pub use error::{SpaceError, SpaceResult};
pub use hash::dataset_fingerprint;
pub use path::{
    MeanderPath, PathConfig, PathFinder, StopReason, DEFAULT_MAX_STEPS, DEFAULT_NEIGHBORS,
    DEFAULT_PARAM_WEIGHT,
};
pub use space::LatentSpace;
pub use spatial::{Neighbor, SpatialIndex};


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::testutil::line_columns;

    #[test]
    fn test_load_query_cycle() {
        let dataset = PointDataset::new(line_columns(30)).unwrap();
        let space = LatentSpace::with_config(
            dataset,
            PathConfig {
                neighbors: 8,
                ..PathConfig::default()
            },
        );

        let a = space.dataset().coordinate_of(0).unwrap();
        let b = space.dataset().coordinate_of(29).unwrap();

        let params = space.meander_parameters(&a, &b);
        let coords = space.meander_coordinates(&a, &b);
        assert_eq!(params.len(), coords.len());
        assert_eq!(coords[0], a);

        // Both projections come from the same memoized path.
        assert_eq!(space.cached_paths(), 1);
    }

    #[test]
    fn test_facade_and_finder_agree() {
        let dataset = PointDataset::new(line_columns(15)).unwrap();
        let config = PathConfig {
            neighbors: 5,
            ..PathConfig::default()
        };
        let index = SpatialIndex::build(&dataset.coordinates());
        let direct = PathFinder::new(&dataset, &index, config.clone())
            .calculate_meander(0, 14)
            .unwrap();

        let space = LatentSpace::with_config(
            PointDataset::new(line_columns(15)).unwrap(),
            config,
        );
        let cached = space.meander_between(0, 14).unwrap();
        assert_eq!(direct.indices, cached.indices);
        assert_eq!(direct.stop, cached.stop);
    }
}
