//! Shared fixtures for the integration scenarios.

use benjolin_cli::commands::template::synthetic_columns;
use benjolin_composition::{Composition, Element};
use benjolin_space::{DatasetColumns, LatentSpace, PathConfig, PointDataset};

/// Default fixture seed.
pub const SEED: u32 = 42;

/// Synthetic columns of `points` points with the default seed.
pub fn columns(points: usize) -> DatasetColumns {
    synthetic_columns(points, SEED)
}

/// A ready-to-query latent space over a synthetic dataset.
///
/// The neighbour count is held well below the default so small fixture
/// clouds still exercise the candidate filtering.
pub fn space(points: usize) -> LatentSpace {
    let dataset = PointDataset::new(columns(points)).expect("fixture dataset must validate");
    LatentSpace::with_config(
        dataset,
        PathConfig {
            neighbors: 16,
            ..PathConfig::default()
        },
    )
}

/// A state element pinned to dataset point `index`.
pub fn state_at(space: &LatentSpace, index: usize) -> Element {
    let coord = space
        .dataset()
        .coordinate_of(index)
        .expect("fixture index must exist");
    Element::State {
        x: coord[0],
        y: coord[1],
        z: coord[2],
        duration_ms: benjolin_composition::DEFAULT_ELEMENT_MS,
        point_index: Some(index),
    }
}

/// A playable composition: state, meander, state, crossfade, state.
pub fn full_composition(space: &LatentSpace) -> Composition {
    let last = space.dataset().len() - 1;
    let mid = space.dataset().len() / 2;
    let mut composition = Composition::new();
    composition.push(state_at(space, 0)).unwrap();
    composition.push(Element::meander()).unwrap();
    composition.push(state_at(space, mid)).unwrap();
    composition.push(Element::crossfade()).unwrap();
    composition.push(state_at(space, last)).unwrap();
    composition
}
