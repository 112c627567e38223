//! Greedy meander pathfinding between latent-space points.
//!
//! A meander is a bounded sequence of discrete states that travels
//! toward a goal point in latent space while preferring steps that keep
//! the synthesizer-parameter change small. The search is greedy and
//! non-backtracking: it trades guaranteed reachability for
//! O(steps x k) simplicity, and a path that cannot reach its goal is
//! returned truncated rather than failed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dataset::PointDataset;
use crate::distance::euclidean;
use crate::error::SpaceResult;
use crate::spatial::SpatialIndex;

/// Default neighbour count consulted per step.
pub const DEFAULT_NEIGHBORS: usize = 150;

/// Default hard cap on the number of steps in one path.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Default scale applied to parameter-space distance when costing a
/// step. Parameter values live in a 0..127 range while latent
/// coordinates are unit-scale, so the raw distances differ by orders of
/// magnitude.
pub const DEFAULT_PARAM_WEIGHT: f64 = 1.0 / 400.0;

/// Tuning knobs for the meander search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    /// How many nearest neighbours to consider at each step. Entry 0 of
    /// every query is the current point itself, so at most
    /// `neighbors - 1` candidates are costed.
    #[serde(default = "default_neighbors")]
    pub neighbors: usize,

    /// Hard cap on the number of steps in one path.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Scale reconciling parameter-space and latent-space distance
    /// ranges. Raising it favours parameter smoothness; lowering it
    /// favours direct latent progress.
    #[serde(default = "default_param_weight")]
    pub param_weight: f64,
}

fn default_neighbors() -> usize {
    DEFAULT_NEIGHBORS
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

fn default_param_weight() -> f64 {
    DEFAULT_PARAM_WEIGHT
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
            max_steps: DEFAULT_MAX_STEPS,
            param_weight: DEFAULT_PARAM_WEIGHT,
        }
    }
}

/// Why a meander stopped where it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The path ends at the requested goal.
    ReachedGoal,
    /// No forward step existed; the path is truncated.
    Stuck,
    /// The step cap was reached before the goal.
    StepLimit,
}

/// An ordered sequence of point indices from a start point toward a
/// goal.
///
/// `indices[0]` is always the start. The path contains no repeated
/// index, and its length is at most `max_steps + 1`. When `stop` is not
/// [`StopReason::ReachedGoal`] the final index is not the goal; callers
/// play the partial path as far as it got.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanderPath {
    /// Point indices in traversal order.
    pub indices: Vec<usize>,
    /// Why the traversal ended.
    pub stop: StopReason,
}

impl MeanderPath {
    /// Returns true if the path ends at its goal.
    pub fn reached_goal(&self) -> bool {
        self.stop == StopReason::ReachedGoal
    }

    /// Number of points on the path (at least 1).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// A path always contains at least its start point.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Greedy step search over a dataset and its spatial index.
pub struct PathFinder<'a> {
    dataset: &'a PointDataset,
    index: &'a SpatialIndex,
    config: PathConfig,
}

impl<'a> PathFinder<'a> {
    /// Creates a finder over `dataset` and `index` with the given
    /// configuration.
    pub fn new(dataset: &'a PointDataset, index: &'a SpatialIndex, config: PathConfig) -> Self {
        Self {
            dataset,
            index,
            config,
        }
    }

    /// One greedy step from `current` toward `goal`.
    ///
    /// Candidates are the configured number of nearest neighbours of
    /// `current`, in ascending distance order, skipping the self hit,
    /// unresolvable coordinates, `current`, and anything in `visited`.
    /// A candidate equal to `goal` wins outright regardless of cost.
    /// Otherwise each candidate is costed as
    /// `param_distance * param_weight + latent_distance_to_goal`, where
    /// the latent term becomes infinite for candidates farther from the
    /// goal than `current` already is; the strict `<` comparison keeps
    /// the first minimum, so ties resolve by neighbour order.
    ///
    /// Returns `Ok(None)` when every candidate is filtered out, which
    /// callers treat as the end of the path.
    pub fn find_next_point(
        &self,
        current: usize,
        goal: usize,
        visited: &HashSet<usize>,
    ) -> SpaceResult<Option<usize>> {
        let current_coord = self.dataset.coordinate_of(current)?;
        let current_params = self.dataset.parameters_of(current)?;
        let goal_coord = self.dataset.coordinate_of(goal)?;

        // A step may never move farther from the goal than the current
        // point already is.
        let reference_distance = euclidean(&current_coord, &goal_coord);

        let neighbors = self.index.k_nearest(&current_coord, self.config.neighbors);

        let mut best: Option<usize> = None;
        let mut best_cost = f64::INFINITY;

        // Entry 0 is the query point itself.
        for neighbor in neighbors.iter().skip(1) {
            let Some(candidate) = self.dataset.index_of_coordinate(&neighbor.coord) else {
                continue;
            };
            if candidate == goal {
                return Ok(Some(goal));
            }
            if candidate == current || visited.contains(&candidate) {
                continue;
            }

            let candidate_coord = self.dataset.coordinate_of(candidate)?;
            let candidate_params = self.dataset.parameters_of(candidate)?;

            let param_cost = euclidean(&candidate_params, &current_params);
            let mut latent_cost = euclidean(&candidate_coord, &goal_coord);
            if latent_cost > reference_distance {
                latent_cost = f64::INFINITY;
            }

            let cost = param_cost * self.config.param_weight + latent_cost;
            if cost < best_cost {
                best_cost = cost;
                best = Some(candidate);
            }
        }

        Ok(best)
    }

    /// Assembles a meander from `start` toward `goal`.
    ///
    /// The walk advances one greedy step at a time, carrying a visited
    /// set so no index repeats, until the goal is reached, no forward
    /// step exists, or the step cap is hit. `start == goal` yields the
    /// single-point path immediately. Only out-of-range endpoints are an
    /// error; truncation is reported through [`MeanderPath::stop`].
    pub fn calculate_meander(&self, start: usize, goal: usize) -> SpaceResult<MeanderPath> {
        self.dataset.coordinate_of(start)?;
        self.dataset.coordinate_of(goal)?;

        let mut indices = vec![start];
        let mut visited = HashSet::from([start]);
        let mut current = start;
        let mut steps = 0;

        let stop = loop {
            if current == goal {
                break StopReason::ReachedGoal;
            }
            if steps >= self.config.max_steps {
                break StopReason::StepLimit;
            }
            steps += 1;

            match self.find_next_point(current, goal, &visited)? {
                Some(next) => {
                    indices.push(next);
                    visited.insert(next);
                    current = next;
                }
                None => break StopReason::Stuck,
            }
        };

        Ok(MeanderPath { indices, stop })
    }
}
