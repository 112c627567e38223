//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag.
//! Every command prints one envelope with a `success` flag, a
//! command-specific `result` on success, and coded errors on failure,
//! so tools and scripts can parse CLI output programmatically.

use benjolin_composition::ValidationIssue;
use benjolin_space::StopReason;
use serde::Serialize;
use std::process::ExitCode;

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error
/// handling.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Dataset columns are inconsistent or degenerate
    pub const INVALID_DATASET: &str = "CLI_003";
    /// Point index outside the dataset
    pub const INVALID_INDEX: &str = "CLI_004";
    /// Invalid command argument
    pub const INVALID_ARGUMENT: &str = "CLI_005";
    /// Composition failed structural validation
    pub const INVALID_COMPOSITION: &str = "CLI_006";
    /// Schedule rendering failed
    pub const RENDER_FAILED: &str = "CLI_007";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_008";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonError {
    /// Stable error code (see [`error_codes`]).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl JsonError {
    /// Creates a new JSON error.
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Converts an input-loading error to a coded JSON error.
pub fn input_error_to_json(err: &InputError) -> JsonError {
    JsonError::new(err.code(), err.to_string())
}

/// The common output envelope printed by every `--json` command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput<T: Serialize> {
    /// Whether the command succeeded.
    pub success: bool,
    /// Command-specific payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Coded errors, present on failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
    /// Non-fatal notes (e.g., a meander that stopped short).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<T: Serialize> CommandOutput<T> {
    /// A successful output with no warnings.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A successful output carrying warnings.
    pub fn success_with_warnings(result: T, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: Vec::new(),
            warnings,
        }
    }

    /// A failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            result: None,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Prints the envelope as pretty JSON and returns the matching exit
    /// code.
    pub fn print(&self) -> ExitCode {
        let json = serde_json::to_string_pretty(self)
            .expect("CommandOutput serialization should not fail");
        println!("{}", json);
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}

/// Payload of `inspect --json`.
#[derive(Debug, Clone, Serialize)]
pub struct InspectResult {
    /// Number of points in the dataset.
    pub points: usize,
    /// BLAKE3 fingerprint of the columns.
    pub fingerprint: String,
    /// Minimum (x, y, z) over all coordinates.
    pub min: [f64; 3],
    /// Maximum (x, y, z) over all coordinates.
    pub max: [f64; 3],
}

/// Payload of `template --json`.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateResult {
    /// Path of the written dataset file.
    pub path: String,
    /// Number of generated points.
    pub points: usize,
    /// Seed the generator was run with.
    pub seed: u32,
    /// BLAKE3 fingerprint of the generated columns.
    pub fingerprint: String,
}

/// Payload of `meander --json`.
#[derive(Debug, Clone, Serialize)]
pub struct MeanderResult {
    /// Start point index.
    pub from: usize,
    /// Goal point index.
    pub to: usize,
    /// Why the path ended.
    pub stop: StopReason,
    /// Whether the path ends at the goal.
    pub reached_goal: bool,
    /// Point indices in traversal order.
    pub indices: Vec<usize>,
    /// Coordinate path, present when requested with `--coords`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<[f64; 3]>>,
}

/// Payload of `crossfade --json`.
#[derive(Debug, Clone, Serialize)]
pub struct CrossfadeResult {
    /// Start point index.
    pub from: usize,
    /// End point index.
    pub to: usize,
    /// Number of interpolation steps.
    pub steps: usize,
    /// The `steps + 1` interpolated parameter vectors.
    pub parameters: Vec<[f64; 8]>,
}

/// One validation issue in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonIssue {
    /// Stable issue code (C001..).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Index of the offending element, when local to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<usize>,
}

/// Converts a composition validation issue to its JSON form.
pub fn issue_to_json(issue: &ValidationIssue) -> JsonIssue {
    JsonIssue {
        code: issue.code.code().to_string(),
        message: issue.message.clone(),
        element: issue.element,
    }
}

/// Payload of `validate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResult {
    /// Number of elements on the timeline.
    pub elements: usize,
    /// Total composition duration in milliseconds.
    pub total_ms: u64,
    /// Issues found (empty when valid).
    pub issues: Vec<JsonIssue>,
}

/// Payload of `render --json`.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    /// Number of scheduled parameter updates.
    pub updates: usize,
    /// Total composition duration in milliseconds.
    pub total_ms: u64,
    /// Path of the written schedule file, when `--output` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// The schedule itself, inlined when no output file was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<benjolin_composition::Schedule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let output = CommandOutput::success(InspectResult {
            points: 3,
            fingerprint: "abc".to_string(),
            min: [0.0; 3],
            max: [1.0; 3],
        });
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["result"]["points"], 3);
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_failure_envelope_shape() {
        let output: CommandOutput<InspectResult> = CommandOutput::failure(vec![JsonError::new(
            error_codes::FILE_READ,
            "no such file",
        )]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["code"], "CLI_001");
        assert!(json.get("result").is_none());
    }
}
