//! Benjolin Composition Timeline
//!
//! A composition is the user-built sequence of synthesizer states and
//! transitions that the installation plays back: held states at latent
//! coordinates, crossfades that interpolate parameters linearly, and
//! meanders that traverse the latent point cloud via the pathfinder.
//!
//! This crate owns the timeline model, its structural validation, the
//! JSON dump users download, and the rendering of a composition into a
//! timed parameter schedule against a
//! [`LatentSpace`](benjolin_space::LatentSpace).
//!
//! # Crate Structure
//!
//! - [`element`] - timeline entries and duration limits
//! - [`composition`] - the timeline and its JSON dump
//! - [`validation`] - structural rules with stable issue codes
//! - [`schedule`] - rendering into timed parameter updates
//! - [`error`] - issue and error types

pub mod composition;
pub mod element;
pub mod error;
pub mod schedule;
pub mod validation;

// Re-export commonly used types at the crate root
pub use composition::Composition;
pub use element::{
    clamp_duration_ms, Element, DEFAULT_ELEMENT_MS, MAX_COMPOSITION_MS, MAX_ELEMENT_MS,
    MIN_ELEMENT_MS,
};
pub use error::{CompositionError, IssueCode, ScheduleError, ValidationIssue};
pub use schedule::{render, Schedule, ScheduledUpdate, CROSSFADE_STEPS};
pub use validation::validate;
