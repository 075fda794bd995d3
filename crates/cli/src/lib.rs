//! Step Feature Extraction Driver
//!
//! Loads extractor settings, reads a recording and step table from a JSON job
//! file, and writes one feature row per step.

use anyhow::{Context, Result};
use clap::Parser;
use feature_engine::{FeatureColumns, FeatureRow, StepFeatureExtractor};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod job;
mod settings;

pub use job::Job;
pub use settings::{load_settings, ENV_PREFIX};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "step-features", version, about = "Extract per-step speed features from an accelerometer recording")]
pub struct Args {
    /// JSON job file with `samples` and `steps`
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write feature rows here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Settings file (toml, yaml, json, ...)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialize logging to stderr
pub fn init_logging(verbose: bool) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Run one extraction job
pub fn run(args: &Args) -> Result<()> {
    let config = load_settings(args.config.as_deref(), ENV_PREFIX)?;
    let extractor = StepFeatureExtractor::new(config).context("Invalid extractor settings")?;

    let job = Job::from_path(&args.input)?;
    let recording = job.recording();
    info!(
        "Loaded {} samples and {} steps from {}",
        recording.len(),
        job.steps.len(),
        args.input.display()
    );

    let (rows, summary) = extractor
        .extract_with_summary(&recording, &job.steps)
        .context("Feature extraction failed")?;

    let columns = FeatureColumns::from_rows(&rows);
    info!(
        "FMeanE over {} steps: mean={:.3} sd={:.3} range=[{:.3}, {:.3}]; {} rows missing",
        columns.mean_energy.count,
        columns.mean_energy.mean,
        columns.mean_energy.std_dev,
        columns.mean_energy.min,
        columns.mean_energy.max,
        summary.missing()
    );

    write_rows(&rows, args.output.as_deref())
}

/// Write feature rows as a JSON array
pub fn write_rows(rows: &[FeatureRow], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create output file {}", path.display()))?;
            write_json(rows, BufWriter::new(file))?;
            info!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => write_json(rows, std::io::stdout().lock())?,
    }
    Ok(())
}

fn write_json<W: Write>(rows: &[FeatureRow], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows).context("Could not serialize feature rows")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "step-features",
            "--input",
            "job.json",
            "-o",
            "rows.json",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("job.json"));
        assert_eq!(args.output, Some(PathBuf::from("rows.json")));
        assert!(args.config.is_none());
        assert!(args.verbose);
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["step-features"]).is_err());
    }

    #[test]
    fn test_run_writes_rows() {
        let dir = std::env::temp_dir().join(format!("step-features-run-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("job.json");
        let output = dir.join("rows.json");

        let samples = vec![[0, 0, 0]; 50];
        let job = serde_json::json!({
            "samples": samples,
            "steps": [
                {"time": 20, "duration": 5},
                {"time": 20, "duration": null},
                {"time": 45, "duration": 5}
            ]
        });
        std::fs::write(&input, job.to_string()).unwrap();

        let args = Args {
            input,
            output: Some(output.clone()),
            config: None,
            verbose: false,
        };
        run(&args).unwrap();

        let rows: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        let mean = rows[0]["FMeanE.mean"].as_f64().unwrap();
        assert!((mean - 336.0).abs() < 1e-9);
        assert_eq!(rows[0]["FSumAbsX.mean"].as_f64(), Some(0.0));
        assert!(rows[1]["FMeanE.mean"].is_null());
        assert!(rows[2]["FSumAbsZ.mean"].is_null());

        std::fs::remove_dir_all(&dir).ok();
    }
}
