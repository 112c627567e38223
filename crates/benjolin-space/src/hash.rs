//! Dataset fingerprinting.
//!
//! A fingerprint identifies the dataset a composition or schedule was
//! computed against, so stale artifacts can be detected when the
//! installation is rebuilt with fresh sampling data.

use crate::dataset::DatasetColumns;

/// Computes the BLAKE3 fingerprint of a dataset.
///
/// The hash covers every column in a fixed order (`x`, `y`, `z`,
/// `p1`..`p8`), each prefixed with its length, with all values encoded
/// as little-endian IEEE 754 bytes. The result is a 64-character
/// lowercase hexadecimal string.
pub fn dataset_fingerprint(columns: &DatasetColumns) -> String {
    let ordered: [&Vec<f64>; 11] = [
        &columns.x,
        &columns.y,
        &columns.z,
        &columns.p1,
        &columns.p2,
        &columns.p3,
        &columns.p4,
        &columns.p5,
        &columns.p6,
        &columns.p7,
        &columns.p8,
    ];

    let mut hasher = blake3::Hasher::new();
    for column in ordered {
        hasher.update(&(column.len() as u64).to_le_bytes());
        for value in column {
            hasher.update(&value.to_le_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}
