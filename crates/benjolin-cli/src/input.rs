//! Dataset and composition file loading.
//!
//! Wraps file reading, JSON parsing, and dataset construction behind
//! one error type so every command reports load failures with the same
//! codes.

use std::path::Path;

use benjolin_composition::Composition;
use benjolin_space::{DatasetColumns, PointDataset, SpaceError};
use thiserror::Error;

/// Errors raised while loading input files.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The columns parsed but do not form a valid dataset.
    #[error("invalid dataset: {source}")]
    Dataset {
        /// The underlying dataset error.
        source: SpaceError,
    },
}

impl InputError {
    /// Stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        use crate::commands::json_output::error_codes;
        match self {
            InputError::Read { .. } => error_codes::FILE_READ,
            InputError::Parse { .. } => error_codes::JSON_PARSE,
            InputError::Dataset { .. } => error_codes::INVALID_DATASET,
        }
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Loads dataset columns from a JSON file.
pub fn load_columns(path: &Path) -> Result<DatasetColumns, InputError> {
    let json = read_file(path)?;
    DatasetColumns::from_json(&json).map_err(|source| InputError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Loads and validates a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<PointDataset, InputError> {
    let columns = load_columns(path)?;
    PointDataset::new(columns).map_err(|source| InputError::Dataset { source })
}

/// Loads a composition dump from a JSON file.
pub fn load_composition(path: &Path) -> Result<Composition, InputError> {
    let json = read_file(path)?;
    Composition::from_json(&json).map_err(|source| InputError::Parse {
        path: path.display().to_string(),
        source,
    })
}
