//! Validate command implementation
//!
//! Checks a composition dump structurally without rendering it.

use anyhow::{Context, Result};
use benjolin_composition::{validate, Composition};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{input_error_to_json, issue_to_json, CommandOutput, ValidateResult};
use crate::input::load_composition;

/// Run the validate command.
pub fn run(composition_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(composition_path)
    } else {
        run_human(composition_path)
    }
}

fn run_human(composition_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), composition_path);

    let composition = load_composition(Path::new(composition_path))
        .with_context(|| format!("Failed to load composition: {}", composition_path))?;
    let issues = validate(&composition);

    println!(
        "{} {} element(s), {}ms total",
        "Timeline:".dimmed(),
        composition.len(),
        composition.total_duration_ms()
    );

    if issues.is_empty() {
        println!("\n{} Composition is valid", "SUCCESS".green().bold());
        return Ok(ExitCode::SUCCESS);
    }

    println!("\n{}", "Issues:".red().bold());
    for issue in &issues {
        let element_info = issue
            .element
            .map(|i| format!(" at element {}", i))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            issue.code.to_string().red(),
            element_info.dimmed(),
            issue.message
        );
    }
    println!(
        "\n{} Composition has {} issue(s)",
        "FAILED".red().bold(),
        issues.len()
    );
    Ok(ExitCode::from(1))
}

fn run_json(composition_path: &str) -> Result<ExitCode> {
    let composition = match load_composition(Path::new(composition_path)) {
        Ok(composition) => composition,
        Err(e) => {
            let output: CommandOutput<ValidateResult> =
                CommandOutput::failure(vec![input_error_to_json(&e)]);
            return Ok(output.print());
        }
    };

    let issues = validate(&composition);
    let result = ValidateResult {
        elements: composition.len(),
        total_ms: composition.total_duration_ms(),
        issues: issues.iter().map(issue_to_json).collect(),
    };

    // Validation issues are a structured result, not command errors;
    // the exit code still reflects them.
    let json = serde_json::to_string_pretty(&CommandOutput {
        success: issues.is_empty(),
        result: Some(result),
        errors: Vec::new(),
        warnings: Vec::new(),
    })
    .expect("CommandOutput serialization should not fail");
    println!("{}", json);

    if issues.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
