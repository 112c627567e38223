//! Meander command implementation
//!
//! Runs the greedy pathfinder between two point indices and prints the
//! resulting path. A path that stops short of its goal is a warning,
//! not a failure.

use anyhow::{Context, Result};
use benjolin_space::{LatentSpace, PathConfig, StopReason};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    error_codes, input_error_to_json, CommandOutput, JsonError, MeanderResult,
};
use crate::input::load_dataset;

/// Options accepted by the meander command.
pub struct MeanderOptions {
    /// Start point index.
    pub from: usize,
    /// Goal point index.
    pub to: usize,
    /// Override for the neighbour count.
    pub neighbors: Option<usize>,
    /// Override for the step cap.
    pub max_steps: Option<usize>,
    /// Override for the parameter-cost weight.
    pub weight: Option<f64>,
    /// Also emit the coordinate path.
    pub coords: bool,
}

fn build_config(options: &MeanderOptions) -> PathConfig {
    let mut config = PathConfig::default();
    if let Some(neighbors) = options.neighbors {
        config.neighbors = neighbors;
    }
    if let Some(max_steps) = options.max_steps {
        config.max_steps = max_steps;
    }
    if let Some(weight) = options.weight {
        config.param_weight = weight;
    }
    config
}

fn stop_warning(stop: StopReason, points: usize) -> Option<String> {
    match stop {
        StopReason::ReachedGoal => None,
        StopReason::Stuck => Some(format!(
            "path stranded after {} points: no forward step existed",
            points
        )),
        StopReason::StepLimit => Some(format!(
            "path hit the step cap after {} points",
            points
        )),
    }
}

/// Run the meander command.
pub fn run(dataset_path: &str, options: &MeanderOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(dataset_path, options)
    } else {
        run_human(dataset_path, options)
    }
}

fn run_human(dataset_path: &str, options: &MeanderOptions) -> Result<ExitCode> {
    let dataset = load_dataset(Path::new(dataset_path))
        .with_context(|| format!("Failed to load dataset: {}", dataset_path))?;
    let space = LatentSpace::with_config(dataset, build_config(options));

    println!(
        "{} {} -> {} ({} points, {} neighbours per step)",
        "Meander:".cyan().bold(),
        options.from,
        options.to,
        space.dataset().len(),
        space.config().neighbors
    );

    let path = space
        .meander_between(options.from, options.to)
        .context("meander query failed")?;

    if let Some(warning) = stop_warning(path.stop, path.len()) {
        println!("  {} {}", "!".yellow(), warning.yellow());
    }

    let rendered: Vec<String> = path.indices.iter().map(|i| i.to_string()).collect();
    println!("{} {}", "Path:".dimmed(), rendered.join(" -> "));

    if options.coords {
        for &index in &path.indices {
            let [x, y, z] = space.dataset().coordinate_of(index)?;
            println!("  [{}] ({:.6}, {:.6}, {:.6})", index, x, y, z);
        }
    }

    println!(
        "\n{} {} points, {}",
        if path.reached_goal() {
            "SUCCESS".green().bold()
        } else {
            "PARTIAL".yellow().bold()
        },
        path.len(),
        if path.reached_goal() {
            "goal reached".to_string()
        } else {
            format!("stopped before index {}", options.to)
        }
    );

    // A truncated path still plays; only misuse fails the command.
    Ok(ExitCode::SUCCESS)
}

fn run_json(dataset_path: &str, options: &MeanderOptions) -> Result<ExitCode> {
    let dataset = match load_dataset(Path::new(dataset_path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            let output: CommandOutput<MeanderResult> =
                CommandOutput::failure(vec![input_error_to_json(&e)]);
            return Ok(output.print());
        }
    };
    let space = LatentSpace::with_config(dataset, build_config(options));

    let path = match space.meander_between(options.from, options.to) {
        Ok(path) => path,
        Err(e) => {
            let output: CommandOutput<MeanderResult> = CommandOutput::failure(vec![
                JsonError::new(error_codes::INVALID_INDEX, e.to_string()),
            ]);
            return Ok(output.print());
        }
    };

    let coordinates = if options.coords {
        let mut coords = Vec::with_capacity(path.len());
        for &index in &path.indices {
            coords.push(space.dataset().coordinate_of(index)?);
        }
        Some(coords)
    } else {
        None
    };

    let result = MeanderResult {
        from: options.from,
        to: options.to,
        stop: path.stop,
        reached_goal: path.reached_goal(),
        indices: path.indices.clone(),
        coordinates,
    };

    let output = match stop_warning(path.stop, path.len()) {
        Some(warning) => CommandOutput::success_with_warnings(result, vec![warning]),
        None => CommandOutput::success(result),
    };
    Ok(output.print())
}
