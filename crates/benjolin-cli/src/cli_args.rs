//! CLI argument definitions for the Benjolin command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Benjolin - Latent-Space Meander Engine
#[derive(Parser)]
#[command(name = "benjolin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a dataset file: size, coordinate bounds, fingerprint
    Inspect {
        /// Path to the dataset file (JSON columns)
        #[arg(short, long)]
        dataset: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Emit a synthetic dataset for demos and tests
    Template {
        /// Path of the dataset file to write
        #[arg(short, long)]
        output: String,

        /// Number of points to generate
        #[arg(long, default_value_t = 500)]
        points: usize,

        /// RNG seed for deterministic generation
        #[arg(long, default_value_t = 42)]
        seed: u32,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compute a meander path between two point indices
    Meander {
        /// Path to the dataset file (JSON columns)
        #[arg(short, long)]
        dataset: String,

        /// Start point index
        #[arg(long)]
        from: usize,

        /// Goal point index
        #[arg(long)]
        to: usize,

        /// Neighbours considered per step (default 150)
        #[arg(long)]
        neighbors: Option<usize>,

        /// Hard cap on path steps (default 1000)
        #[arg(long)]
        max_steps: Option<usize>,

        /// Parameter-cost weight (default 1/400); larger values favour
        /// parameter smoothness over latent progress
        #[arg(long)]
        weight: Option<f64>,

        /// Also print the coordinate path (for visualization)
        #[arg(long)]
        coords: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compute a parameter crossfade between two point indices
    Crossfade {
        /// Path to the dataset file (JSON columns)
        #[arg(short, long)]
        dataset: String,

        /// Start point index
        #[arg(long)]
        from: usize,

        /// End point index
        #[arg(long)]
        to: usize,

        /// Number of interpolation steps (emits steps + 1 vectors)
        #[arg(long, default_value_t = 100)]
        steps: usize,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a composition dump without rendering it
    Validate {
        /// Path to the composition file (JSON)
        #[arg(short, long)]
        composition: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a composition into a timed parameter schedule
    Render {
        /// Path to the composition file (JSON)
        #[arg(short, long)]
        composition: String,

        /// Path to the dataset file (JSON columns)
        #[arg(short, long)]
        dataset: String,

        /// Path of the schedule file to write (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}
