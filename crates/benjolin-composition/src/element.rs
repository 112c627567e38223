//! Composition timeline elements.
//!
//! A composition is a sequence of timed elements: held states at latent
//! coordinates, and transitions (crossfades and meanders) between the
//! states that enclose them.

use benjolin_space::LatentCoord;
use serde::{Deserialize, Serialize};

/// Duration given to a freshly created element.
pub const DEFAULT_ELEMENT_MS: u64 = 5000;

/// Minimum element duration.
pub const MIN_ELEMENT_MS: u64 = 1000;

/// Maximum element duration.
pub const MAX_ELEMENT_MS: u64 = 10_000;

/// Maximum total composition duration (two minutes).
pub const MAX_COMPOSITION_MS: u64 = 120_000;

/// Clamps a duration into the allowed per-element range.
pub fn clamp_duration_ms(duration_ms: u64) -> u64 {
    duration_ms.clamp(MIN_ELEMENT_MS, MAX_ELEMENT_MS)
}

/// One entry on the composition timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// A fixed synthesizer state, held at a latent coordinate for the
    /// element's duration.
    State {
        /// Latent x coordinate.
        x: f64,
        /// Latent y coordinate.
        y: f64,
        /// Latent z coordinate.
        z: f64,
        /// How long the state is held, in milliseconds.
        duration_ms: u64,
        /// Dataset index of the point, when known (used by the
        /// visualization to highlight the point cloud).
        #[serde(skip_serializing_if = "Option::is_none")]
        point_index: Option<usize>,
    },

    /// A linear parameter interpolation between the enclosing states.
    Crossfade {
        /// Transition length in milliseconds.
        duration_ms: u64,
    },

    /// A pathfinder traversal between the enclosing states.
    Meander {
        /// Transition length in milliseconds.
        duration_ms: u64,
    },
}

impl Element {
    /// Creates a state element with the default duration.
    pub fn state(x: f64, y: f64, z: f64) -> Self {
        Self::State {
            x,
            y,
            z,
            duration_ms: DEFAULT_ELEMENT_MS,
            point_index: None,
        }
    }

    /// Creates a crossfade with the default duration.
    pub fn crossfade() -> Self {
        Self::Crossfade {
            duration_ms: DEFAULT_ELEMENT_MS,
        }
    }

    /// Creates a meander with the default duration.
    pub fn meander() -> Self {
        Self::Meander {
            duration_ms: DEFAULT_ELEMENT_MS,
        }
    }

    /// The element's duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        match self {
            Element::State { duration_ms, .. }
            | Element::Crossfade { duration_ms }
            | Element::Meander { duration_ms } => *duration_ms,
        }
    }

    /// Replaces the element's duration, clamped to the allowed range.
    pub fn set_duration_ms(&mut self, new_duration_ms: u64) {
        let clamped = clamp_duration_ms(new_duration_ms);
        match self {
            Element::State { duration_ms, .. }
            | Element::Crossfade { duration_ms }
            | Element::Meander { duration_ms } => *duration_ms = clamped,
        }
    }

    /// Returns true for crossfades and meanders.
    pub fn is_transition(&self) -> bool {
        matches!(self, Element::Crossfade { .. } | Element::Meander { .. })
    }

    /// The latent coordinate of a state element.
    pub fn coordinate(&self) -> Option<LatentCoord> {
        match self {
            Element::State { x, y, z, .. } => Some([*x, *y, *z]),
            _ => None,
        }
    }
}
