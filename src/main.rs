//! Command-line entry point for generating a Klipper power-loss resume file.
//!
//! Invoked by the printer's recovery macro with the values it saved at the
//! last checkpoint:
//!
//! ```bash
//! plrkit 12.4 "benchy.gcode" 210
//! ```
//!
//! On success the resume file is written into the G-code directory
//! (atomically, so the front end never sees a partial file) and a
//! confirmation naming the output path goes to stdout. Any failure exits
//! non-zero with a diagnostic on stderr.

use std::path::PathBuf;
use std::thread;

use anyhow::{bail, Result};
use clap::Parser;

use plrkit::init_logging;
use plrkit_core::{RecoveryConfig, RecoveryJob, ResumeRequest};

/// Generate a Klipper power-loss resume G-code file
#[derive(Parser)]
#[command(name = "plrkit")]
#[command(about = "Rebuilds a resumable G-code file after a power loss")]
#[command(version)]
struct Cli {
    /// Z height where the print was logged (power_resume_z), written exactly
    /// as it appears in the job file
    height: String,

    /// Name of the original G-code file (last_file)
    gcode_file: String,

    /// Saved extruder target temperature (print_temp)
    print_temp: f64,

    /// Directory holding the printer's G-code files
    /// [default: ~/printer_data/gcodes]
    #[arg(long)]
    gcode_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let height_text = cli.height.trim().to_string();
    let height: f64 = match height_text.parse() {
        Ok(value) => value,
        Err(_) => bail!("height '{}' is not a number", cli.height),
    };

    let mut config = RecoveryConfig::default();
    if let Some(dir) = cli.gcode_dir {
        config.gcode_dir = dir;
    }

    let request = ResumeRequest {
        height_text,
        height,
        file_name: cli.gcode_file,
        tool_temp: cli.print_temp.to_string(),
    };

    let job = RecoveryJob::new(config);
    let output_path = job.generate(&request)?;

    // Give the front end's file watcher time to see the finished file before
    // the recovery macro carries on.
    thread::sleep(job.config().settle_delay);

    println!(
        "Success: Resume file '{}' created at {}",
        job.config().output_file,
        output_path.display()
    );
    Ok(())
}
