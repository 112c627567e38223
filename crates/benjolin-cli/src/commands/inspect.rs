//! Inspect command implementation
//!
//! Reports the size, coordinate bounds, and fingerprint of a dataset.

use anyhow::{Context, Result};
use benjolin_space::dataset_fingerprint;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{input_error_to_json, CommandOutput, InspectResult};
use crate::input::load_dataset;

/// Run the inspect command.
pub fn run(dataset_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(dataset_path)
    } else {
        run_human(dataset_path)
    }
}

fn run_human(dataset_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), dataset_path);

    let dataset = load_dataset(Path::new(dataset_path))
        .with_context(|| format!("Failed to load dataset: {}", dataset_path))?;
    let summary = summarize(&dataset);

    println!("{} {}", "Points:".dimmed(), summary.points);
    println!(
        "{} x [{:.4}, {:.4}]  y [{:.4}, {:.4}]  z [{:.4}, {:.4}]",
        "Bounds:".dimmed(),
        summary.min[0],
        summary.max[0],
        summary.min[1],
        summary.max[1],
        summary.min[2],
        summary.max[2],
    );
    println!("{} {}", "Fingerprint:".dimmed(), summary.fingerprint);

    Ok(ExitCode::SUCCESS)
}

fn run_json(dataset_path: &str) -> Result<ExitCode> {
    let dataset = match load_dataset(Path::new(dataset_path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            let output: CommandOutput<InspectResult> =
                CommandOutput::failure(vec![input_error_to_json(&e)]);
            return Ok(output.print());
        }
    };
    Ok(CommandOutput::success(summarize(&dataset)).print())
}

fn summarize(dataset: &benjolin_space::PointDataset) -> InspectResult {
    let columns = dataset.columns();
    InspectResult {
        points: dataset.len(),
        fingerprint: dataset_fingerprint(columns),
        min: [
            axis_min(&columns.x),
            axis_min(&columns.y),
            axis_min(&columns.z),
        ],
        max: [
            axis_max(&columns.x),
            axis_max(&columns.y),
            axis_max(&columns.z),
        ],
    }
}

fn axis_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn axis_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::template::synthetic_columns;

    #[test]
    fn test_inspect_generated_dataset() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dataset.json");
        synthetic_columns(20, 7).save(&path).unwrap();

        let code = run(path.to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_inspect_missing_file_json_mode() {
        let code = run("/nonexistent/dataset.json", true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_bounds_helpers() {
        let values = [0.5, -1.5, 2.0];
        assert_eq!(axis_min(&values), -1.5);
        assert_eq!(axis_max(&values), 2.0);
    }
}
