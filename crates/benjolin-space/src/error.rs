//! Error types for the latent-space core.

use thiserror::Error;

/// Result type for latent-space operations.
pub type SpaceResult<T> = Result<T, SpaceError>;

/// Errors raised by dataset construction and path queries.
///
/// Expected, recoverable conditions are not represented here: a
/// coordinate with no matching point is `None` from
/// [`crate::PointDataset::index_of_coordinate`], and a meander that
/// cannot reach its goal is a truncated path carrying a
/// [`crate::StopReason`]. Only structural misuse and I/O surface as
/// errors.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// Point index outside `[0, N)`.
    #[error("point index {index} out of range for dataset of {len} points")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of points in the dataset.
        len: usize,
    },

    /// A dataset column does not match the length of the `x` column.
    #[error("dataset column '{column}' has {found} entries, expected {expected}")]
    ColumnLengthMismatch {
        /// Name of the mismatched column.
        column: &'static str,
        /// Expected entry count.
        expected: usize,
        /// Actual entry count.
        found: usize,
    },

    /// The dataset contains no points.
    #[error("dataset contains no points")]
    EmptyDataset,

    /// Two points share a coordinate, which would make the exact-match
    /// reverse lookup ambiguous.
    #[error("points {first} and {second} share the coordinate ({x}, {y}, {z})")]
    DuplicateCoordinate {
        /// Index of the first point with this coordinate.
        first: usize,
        /// Index of the colliding point.
        second: usize,
        /// Shared x value.
        x: f64,
        /// Shared y value.
        y: f64,
        /// Shared z value.
        z: f64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpaceError {
    /// Creates an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
