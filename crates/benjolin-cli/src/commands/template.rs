//! Template command implementation
//!
//! Emits a synthetic dataset for demos and tests: coordinates uniform
//! in [-1, 1]^3, parameters uniform in the synthesizer's 0..127 range.
//! Output is deterministic per seed.

use anyhow::{Context, Result};
use benjolin_space::{dataset_fingerprint, DatasetColumns, PointDataset};
use colored::Colorize;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, JsonError, TemplateResult};

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in
/// both halves of the generator state.
fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Generates synthetic dataset columns.
///
/// Values are drawn point by point in a fixed order (x, y, z, p1..p8),
/// so the same `points` and `seed` always produce the same columns.
pub fn synthetic_columns(points: usize, seed: u32) -> DatasetColumns {
    let mut rng = create_rng(seed);
    let mut columns = DatasetColumns {
        x: Vec::with_capacity(points),
        y: Vec::with_capacity(points),
        z: Vec::with_capacity(points),
        p1: Vec::with_capacity(points),
        p2: Vec::with_capacity(points),
        p3: Vec::with_capacity(points),
        p4: Vec::with_capacity(points),
        p5: Vec::with_capacity(points),
        p6: Vec::with_capacity(points),
        p7: Vec::with_capacity(points),
        p8: Vec::with_capacity(points),
    };

    for _ in 0..points {
        columns.x.push(rng.gen_range(-1.0..1.0));
        columns.y.push(rng.gen_range(-1.0..1.0));
        columns.z.push(rng.gen_range(-1.0..1.0));
        columns.p1.push(rng.gen_range(0.0..127.0));
        columns.p2.push(rng.gen_range(0.0..127.0));
        columns.p3.push(rng.gen_range(0.0..127.0));
        columns.p4.push(rng.gen_range(0.0..127.0));
        columns.p5.push(rng.gen_range(0.0..127.0));
        columns.p6.push(rng.gen_range(0.0..127.0));
        columns.p7.push(rng.gen_range(0.0..127.0));
        columns.p8.push(rng.gen_range(0.0..127.0));
    }

    columns
}

/// Run the template command.
pub fn run(output: &str, points: usize, seed: u32, json_output: bool) -> Result<ExitCode> {
    if points == 0 {
        if json_output {
            let envelope: CommandOutput<TemplateResult> = CommandOutput::failure(vec![
                JsonError::new(error_codes::INVALID_ARGUMENT, "--points must be at least 1"),
            ]);
            return Ok(envelope.print());
        }
        anyhow::bail!("--points must be at least 1");
    }

    let columns = synthetic_columns(points, seed);
    // Validate before writing; a coordinate collision would make the
    // file unloadable later.
    PointDataset::new(columns.clone())
        .context("generated columns failed dataset validation")?;
    let fingerprint = dataset_fingerprint(&columns);

    if let Err(e) = columns.save(output) {
        if json_output {
            let envelope: CommandOutput<TemplateResult> = CommandOutput::failure(vec![
                JsonError::new(error_codes::FILE_WRITE, e.to_string()),
            ]);
            return Ok(envelope.print());
        }
        return Err(anyhow::Error::new(e).context(format!("Failed to write {}", output)));
    }

    let result = TemplateResult {
        path: output.to_string(),
        points,
        seed,
        fingerprint,
    };

    if json_output {
        return Ok(CommandOutput::success(result).print());
    }

    println!(
        "{} {} points (seed {}) written to {}",
        "Template:".cyan().bold(),
        result.points,
        result.seed,
        result.path
    );
    println!("{} {}", "Fingerprint:".dimmed(), result.fingerprint);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_synthetic_columns_deterministic() {
        let a = synthetic_columns(50, 42);
        let b = synthetic_columns(50, 42);
        assert_eq!(a, b);

        let c = synthetic_columns(50, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_synthetic_columns_ranges() {
        let columns = synthetic_columns(100, 1);
        assert!(columns.x.iter().all(|v| (-1.0..1.0).contains(v)));
        assert!(columns.p1.iter().all(|v| (0.0..127.0).contains(v)));
        assert_eq!(columns.len(), 100);
    }

    #[test]
    fn test_generated_columns_build_a_dataset() {
        let columns = synthetic_columns(200, 9);
        let dataset = PointDataset::new(columns).unwrap();
        assert_eq!(dataset.len(), 200);
    }

    #[test]
    fn test_run_writes_loadable_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("template.json");

        let code = run(path.to_str().unwrap(), 30, 5, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let dataset = crate::input::load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 30);
    }

    #[test]
    fn test_run_rejects_zero_points() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("never.json");
        assert!(run(path.to_str().unwrap(), 0, 5, false).is_err());

        let code = run(path.to_str().unwrap(), 0, 5, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
