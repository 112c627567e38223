//! Point dataset: column storage and exact coordinate lookup.
//!
//! The dataset is built once per session from eleven parallel columns
//! (three latent coordinates, eight synthesizer parameters) and never
//! mutated afterward. Alongside the columns it keeps a reverse map from
//! coordinate to point index, so callers holding a coordinate that came
//! out of the dataset can recover its index in O(1).

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SpaceError, SpaceResult};

/// Dimensionality of the latent coordinate space.
pub const LATENT_DIM: usize = 3;

/// Number of synthesizer control parameters per point.
pub const PARAM_DIM: usize = 8;

/// A position in latent space.
pub type LatentCoord = [f64; LATENT_DIM];

/// A full set of synthesizer control values for one point.
pub type ParamVector = [f64; PARAM_DIM];

/// External dataset format: parallel columns of equal length.
///
/// `x`, `y`, `z` hold the latent coordinates; `p1`..`p8` hold the
/// synthesizer parameters. Entry `i` of every column belongs to point
/// `i`. This is the shape the sampling pipeline exports and the only
/// persistence format the core consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetColumns {
    /// Latent x coordinates.
    pub x: Vec<f64>,
    /// Latent y coordinates.
    pub y: Vec<f64>,
    /// Latent z coordinates.
    pub z: Vec<f64>,
    /// Oscillator 1 frequency.
    pub p1: Vec<f64>,
    /// Oscillator 2 frequency.
    pub p2: Vec<f64>,
    /// Oscillator 1 rungler amount.
    pub p3: Vec<f64>,
    /// Oscillator 2 rungler amount.
    pub p4: Vec<f64>,
    /// Filter frequency.
    pub p5: Vec<f64>,
    /// Filter resonance.
    pub p6: Vec<f64>,
    /// Filter rungler amount.
    pub p7: Vec<f64>,
    /// Filter sweep amount.
    pub p8: Vec<f64>,
}

impl DatasetColumns {
    /// Parses columns from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the columns to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reads columns from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SpaceResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Writes the columns to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> SpaceResult<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Number of points, taken from the `x` column.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the columns hold no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    fn check_lengths(&self) -> SpaceResult<()> {
        let expected = self.x.len();
        let columns: [(&'static str, &Vec<f64>); 10] = [
            ("y", &self.y),
            ("z", &self.z),
            ("p1", &self.p1),
            ("p2", &self.p2),
            ("p3", &self.p3),
            ("p4", &self.p4),
            ("p5", &self.p5),
            ("p6", &self.p6),
            ("p7", &self.p7),
            ("p8", &self.p8),
        ];
        for (name, column) in columns {
            if column.len() != expected {
                return Err(SpaceError::ColumnLengthMismatch {
                    column: name,
                    expected,
                    found: column.len(),
                });
            }
        }
        Ok(())
    }
}

/// Immutable store of N latent points with O(1) lookups in both
/// directions.
///
/// Construction validates the column lengths and rejects duplicate
/// coordinates; a collision would make the reverse lookup ambiguous, so
/// it is surfaced as a load-time error rather than resolved arbitrarily.
#[derive(Debug)]
pub struct PointDataset {
    columns: DatasetColumns,
    reverse: HashMap<[u64; LATENT_DIM], usize>,
}

impl PointDataset {
    /// Builds a dataset from validated columns.
    pub fn new(columns: DatasetColumns) -> SpaceResult<Self> {
        if columns.is_empty() {
            return Err(SpaceError::EmptyDataset);
        }
        columns.check_lengths()?;

        let mut reverse = HashMap::with_capacity(columns.len());
        for i in 0..columns.len() {
            let coord = [columns.x[i], columns.y[i], columns.z[i]];
            if let Some(&first) = reverse.get(&coord_key(&coord)) {
                return Err(SpaceError::DuplicateCoordinate {
                    first,
                    second: i,
                    x: coord[0],
                    y: coord[1],
                    z: coord[2],
                });
            }
            reverse.insert(coord_key(&coord), i);
        }

        Ok(Self { columns, reverse })
    }

    /// Reads and validates a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SpaceResult<Self> {
        Self::new(DatasetColumns::load(path)?)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the dataset holds no points. Construction rejects
    /// empty columns, so this is false for any built dataset.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The underlying columns.
    pub fn columns(&self) -> &DatasetColumns {
        &self.columns
    }

    /// Latent coordinate of the point at `index`.
    pub fn coordinate_of(&self, index: usize) -> SpaceResult<LatentCoord> {
        if index >= self.len() {
            return Err(SpaceError::out_of_range(index, self.len()));
        }
        Ok([
            self.columns.x[index],
            self.columns.y[index],
            self.columns.z[index],
        ])
    }

    /// Parameter vector of the point at `index`.
    pub fn parameters_of(&self, index: usize) -> SpaceResult<ParamVector> {
        if index >= self.len() {
            return Err(SpaceError::out_of_range(index, self.len()));
        }
        Ok([
            self.columns.p1[index],
            self.columns.p2[index],
            self.columns.p3[index],
            self.columns.p4[index],
            self.columns.p5[index],
            self.columns.p6[index],
            self.columns.p7[index],
            self.columns.p8[index],
        ])
    }

    /// Exact-match reverse lookup from coordinate to point index.
    ///
    /// Matching is bit-level: the query must be the same value that came
    /// out of the dataset columns. Coordinates that do not correspond to
    /// a sampled point return `None`; callers check before proceeding.
    pub fn index_of_coordinate(&self, coord: &LatentCoord) -> Option<usize> {
        self.reverse.get(&coord_key(coord)).copied()
    }

    /// All coordinates in index order, for spatial-index construction.
    pub fn coordinates(&self) -> Vec<LatentCoord> {
        (0..self.len())
            .map(|i| [self.columns.x[i], self.columns.y[i], self.columns.z[i]])
            .collect()
    }
}

fn coord_key(coord: &LatentCoord) -> [u64; LATENT_DIM] {
    [
        coord[0].to_bits(),
        coord[1].to_bits(),
        coord[2].to_bits(),
    ]
}
