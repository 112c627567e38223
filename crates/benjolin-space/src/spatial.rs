//! Static nearest-neighbour index over the latent coordinates.
//!
//! Built once per session from the full coordinate list; there is no
//! incremental insert or delete. Queries return coordinates, not point
//! indices; callers map a hit back to its index through
//! [`crate::PointDataset::index_of_coordinate`].

use kiddo::{KdTree, SquaredEuclidean};

use crate::dataset::LatentCoord;

/// A single nearest-neighbour hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Coordinate of the hit point.
    pub coord: LatentCoord,
    /// Euclidean distance from the query.
    pub distance: f64,
}

/// k-d tree over the full coordinate list.
pub struct SpatialIndex {
    tree: KdTree<f64, 3>,
    coords: Vec<LatentCoord>,
}

impl SpatialIndex {
    /// One-time construction over all coordinates.
    pub fn build(coords: &[LatentCoord]) -> Self {
        let mut tree = KdTree::with_capacity(coords.len());
        for (i, coord) in coords.iter().enumerate() {
            tree.add(coord, i as u64);
        }
        Self {
            tree,
            coords: coords.to_vec(),
        }
    }

    /// Number of indexed coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if no coordinates are indexed.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The `k` nearest neighbours to `query`, ascending by Euclidean
    /// distance.
    ///
    /// When the query is itself an indexed coordinate, entry 0 is the
    /// query at distance 0; step iteration starts at entry 1. If `k`
    /// exceeds the number of indexed points, all points are returned.
    pub fn k_nearest(&self, query: &LatentCoord, k: usize) -> Vec<Neighbor> {
        self.tree
            .nearest_n::<SquaredEuclidean>(query, k)
            .into_iter()
            .map(|hit| Neighbor {
                coord: self.coords[hit.item as usize],
                distance: hit.distance.sqrt(),
            })
            .collect()
    }
}
