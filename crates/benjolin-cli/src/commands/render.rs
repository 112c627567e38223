//! Render command implementation
//!
//! Renders a composition against a dataset into a timed parameter
//! schedule, written as JSON.

use anyhow::{Context, Result};
use benjolin_composition::{render, ScheduleError};
use benjolin_space::LatentSpace;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    error_codes, input_error_to_json, issue_to_json, CommandOutput, JsonError, RenderResult,
};
use crate::input::{load_composition, load_dataset};

/// Run the render command.
pub fn run(
    composition_path: &str,
    dataset_path: &str,
    output: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(composition_path, dataset_path, output)
    } else {
        run_human(composition_path, dataset_path, output)
    }
}

fn schedule_error_to_json(err: &ScheduleError) -> Vec<JsonError> {
    match err {
        ScheduleError::Invalid { issues } => issues
            .iter()
            .map(|issue| {
                let json = issue_to_json(issue);
                JsonError::new(
                    error_codes::INVALID_COMPOSITION,
                    format!("[{}] {}", json.code, json.message),
                )
            })
            .collect(),
        other => vec![JsonError::new(error_codes::RENDER_FAILED, other.to_string())],
    }
}

fn run_human(
    composition_path: &str,
    dataset_path: &str,
    output: Option<&str>,
) -> Result<ExitCode> {
    println!(
        "{} {} against {}",
        "Rendering:".cyan().bold(),
        composition_path,
        dataset_path
    );

    let composition = load_composition(Path::new(composition_path))
        .with_context(|| format!("Failed to load composition: {}", composition_path))?;
    let dataset = load_dataset(Path::new(dataset_path))
        .with_context(|| format!("Failed to load dataset: {}", dataset_path))?;
    let space = LatentSpace::new(dataset);

    let schedule = match render(&composition, &space) {
        Ok(schedule) => schedule,
        Err(ScheduleError::Invalid { issues }) => {
            println!("\n{}", "Issues:".red().bold());
            for issue in &issues {
                println!("  {} {}", "x".red(), issue);
            }
            println!("\n{} Composition is not renderable", "FAILED".red().bold());
            return Ok(ExitCode::from(1));
        }
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(ExitCode::from(1));
        }
    };

    println!(
        "{} {} updates over {}ms",
        "Schedule:".dimmed(),
        schedule.updates.len(),
        schedule.total_ms
    );

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&schedule)?;
            std::fs::write(path, json).with_context(|| format!("Failed to write {}", path))?;
            println!("{} {}", "Written to:".dimmed(), path);
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
    }

    println!("\n{} Schedule rendered", "SUCCESS".green().bold());
    Ok(ExitCode::SUCCESS)
}

fn run_json(
    composition_path: &str,
    dataset_path: &str,
    output: Option<&str>,
) -> Result<ExitCode> {
    let composition = match load_composition(Path::new(composition_path)) {
        Ok(composition) => composition,
        Err(e) => {
            let envelope: CommandOutput<RenderResult> =
                CommandOutput::failure(vec![input_error_to_json(&e)]);
            return Ok(envelope.print());
        }
    };
    let dataset = match load_dataset(Path::new(dataset_path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            let envelope: CommandOutput<RenderResult> =
                CommandOutput::failure(vec![input_error_to_json(&e)]);
            return Ok(envelope.print());
        }
    };
    let space = LatentSpace::new(dataset);

    let schedule = match render(&composition, &space) {
        Ok(schedule) => schedule,
        Err(e) => {
            let envelope: CommandOutput<RenderResult> =
                CommandOutput::failure(schedule_error_to_json(&e));
            return Ok(envelope.print());
        }
    };

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&schedule)?;
        if let Err(e) = std::fs::write(path, json) {
            let envelope: CommandOutput<RenderResult> = CommandOutput::failure(vec![
                JsonError::new(error_codes::FILE_WRITE, e.to_string()),
            ]);
            return Ok(envelope.print());
        }
    }

    let result = RenderResult {
        updates: schedule.updates.len(),
        total_ms: schedule.total_ms,
        output: output.map(|s| s.to_string()),
        schedule: if output.is_none() {
            Some(schedule)
        } else {
            None
        },
    };
    Ok(CommandOutput::success(result).print())
}
