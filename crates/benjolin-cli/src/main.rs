//! Benjolin CLI - Command-line interface for the latent-space meander
//! engine
//!
//! This binary provides commands for inspecting datasets, computing
//! meanders and crossfades, and validating and rendering compositions.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use benjolin_cli::cli_args::{Cli, Commands};
use benjolin_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(1)
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Inspect { dataset, json } => commands::inspect::run(&dataset, json),
        Commands::Template {
            output,
            points,
            seed,
            json,
        } => commands::template::run(&output, points, seed, json),
        Commands::Meander {
            dataset,
            from,
            to,
            neighbors,
            max_steps,
            weight,
            coords,
            json,
        } => {
            let options = commands::meander::MeanderOptions {
                from,
                to,
                neighbors,
                max_steps,
                weight,
                coords,
            };
            commands::meander::run(&dataset, &options, json)
        }
        Commands::Crossfade {
            dataset,
            from,
            to,
            steps,
            json,
        } => commands::crossfade::run(&dataset, from, to, steps, json),
        Commands::Validate { composition, json } => commands::validate::run(&composition, json),
        Commands::Render {
            composition,
            dataset,
            output,
            json,
        } => commands::render::run(&composition, &dataset, output.as_deref(), json),
    }
}
