//! Crossfade command implementation
//!
//! Prints the linear parameter interpolation between two dataset
//! points.

use anyhow::{Context, Result};
use benjolin_space::LatentSpace;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    error_codes, input_error_to_json, CommandOutput, CrossfadeResult, JsonError,
};
use crate::input::load_dataset;

/// Run the crossfade command.
pub fn run(
    dataset_path: &str,
    from: usize,
    to: usize,
    steps: usize,
    json_output: bool,
) -> Result<ExitCode> {
    if steps == 0 {
        if json_output {
            let output: CommandOutput<CrossfadeResult> = CommandOutput::failure(vec![
                JsonError::new(error_codes::INVALID_ARGUMENT, "--steps must be at least 1"),
            ]);
            return Ok(output.print());
        }
        anyhow::bail!("--steps must be at least 1");
    }

    if json_output {
        run_json(dataset_path, from, to, steps)
    } else {
        run_human(dataset_path, from, to, steps)
    }
}

fn compute(
    space: &LatentSpace,
    from: usize,
    to: usize,
    steps: usize,
) -> benjolin_space::SpaceResult<Vec<[f64; 8]>> {
    let a = space.dataset().coordinate_of(from)?;
    let b = space.dataset().coordinate_of(to)?;
    Ok(space.crossfade_parameters(&a, &b, steps))
}

fn run_human(dataset_path: &str, from: usize, to: usize, steps: usize) -> Result<ExitCode> {
    let dataset = load_dataset(Path::new(dataset_path))
        .with_context(|| format!("Failed to load dataset: {}", dataset_path))?;
    let space = LatentSpace::new(dataset);

    println!(
        "{} {} -> {} in {} steps",
        "Crossfade:".cyan().bold(),
        from,
        to,
        steps
    );

    let fade = compute(&space, from, to, steps).context("crossfade query failed")?;
    for (i, params) in fade.iter().enumerate() {
        let rendered: Vec<String> = params.iter().map(|p| format!("{:7.3}", p)).collect();
        println!("  {:>4}  [{}]", i, rendered.join(", "));
    }

    println!(
        "\n{} {} parameter vectors",
        "SUCCESS".green().bold(),
        fade.len()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(dataset_path: &str, from: usize, to: usize, steps: usize) -> Result<ExitCode> {
    let dataset = match load_dataset(Path::new(dataset_path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            let output: CommandOutput<CrossfadeResult> =
                CommandOutput::failure(vec![input_error_to_json(&e)]);
            return Ok(output.print());
        }
    };
    let space = LatentSpace::new(dataset);

    let fade = match compute(&space, from, to, steps) {
        Ok(fade) => fade,
        Err(e) => {
            let output: CommandOutput<CrossfadeResult> = CommandOutput::failure(vec![
                JsonError::new(error_codes::INVALID_INDEX, e.to_string()),
            ]);
            return Ok(output.print());
        }
    };

    let result = CrossfadeResult {
        from,
        to,
        steps,
        parameters: fade,
    };
    Ok(CommandOutput::success(result).print())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::template::synthetic_columns;

    fn write_dataset(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("dataset.json");
        synthetic_columns(10, 3).save(&path).unwrap();
        path
    }

    #[test]
    fn test_crossfade_valid_indices() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_dataset(&tmp);
        let code = run(path.to_str().unwrap(), 0, 9, 4, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_crossfade_zero_steps_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_dataset(&tmp);
        assert!(run(path.to_str().unwrap(), 0, 9, 0, false).is_err());

        let code = run(path.to_str().unwrap(), 0, 9, 0, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_crossfade_bad_index_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_dataset(&tmp);
        let code = run(path.to_str().unwrap(), 0, 99, 4, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
