//! The recovery pipeline: load, locate, extract, assemble, write.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::assembler::{assemble_resume_script, ResumeTargets};
use crate::config::RecoveryConfig;
use crate::document::GcodeDocument;
use crate::error::{RecoveryError, Result};
use crate::marker::find_resume_marker;

/// What the operator knows about the interrupted print.
#[derive(Debug, Clone)]
pub struct ResumeRequest {
    /// Z height at the last checkpoint, exactly as logged. Kept textual so
    /// the marker search matches the file's own formatting.
    pub height_text: String,
    /// The same height as a number, for the first-layer threshold.
    pub height: f64,
    /// Name of the original job file inside the G-code directory. Surrounding
    /// quote characters are tolerated and stripped.
    pub file_name: String,
    /// Saved extruder target temperature, as text.
    pub tool_temp: String,
}

/// Binds a configuration to recovery runs.
pub struct RecoveryJob {
    config: RecoveryConfig,
}

impl RecoveryJob {
    /// Create a job with the given configuration.
    pub fn new(config: RecoveryConfig) -> Self {
        Self { config }
    }

    /// The configuration this job runs with.
    pub fn config(&self) -> &RecoveryConfig {
        &self.config
    }

    /// Generate the resume file and return its path.
    ///
    /// The script is staged in a temporary file beside the target and renamed
    /// into place, so a half-written file is never visible to the front end.
    ///
    /// # Errors
    /// Fails when the job file is missing or unreadable, when the
    /// interruption marker is absent, or when the output cannot be written.
    /// No output file is produced on failure.
    pub fn generate(&self, request: &ResumeRequest) -> Result<PathBuf> {
        let file_name = request
            .file_name
            .trim_matches(|c| c == '\'' || c == '"');
        let input_path = self.config.gcode_dir.join(file_name);
        info!(path = %input_path.display(), height = %request.height_text, "rebuilding resume file");

        let document = GcodeDocument::load(&input_path)?;
        let marker = find_resume_marker(&document, &request.height_text)?;

        let targets = ResumeTargets {
            height: request.height,
            tool_temp: request.tool_temp.clone(),
            bed_fallback_temp: self.config.bed_fallback_temp.to_string(),
        };
        let script = assemble_resume_script(&document, &marker, &targets);

        let output_path = self.config.output_path();
        write_atomic(&output_path, &script)?;
        info!(path = %output_path.display(), "resume file written");
        Ok(output_path)
    }
}

/// Write `contents` to `path` through a temp file in the same directory and
/// an atomic rename. Concurrent runs can still race on the final name, but a
/// reader never observes a partial file.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_failure = |source: std::io::Error| RecoveryError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir).map_err(write_failure)?;
    staged.write_all(contents.as_bytes()).map_err(write_failure)?;
    staged
        .persist(path)
        .map_err(|persist| write_failure(persist.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    fn config_in(dir: &Path) -> RecoveryConfig {
        RecoveryConfig {
            gcode_dir: dir.to_path_buf(),
            output_file: "plr.gcode".to_string(),
            bed_fallback_temp: 60.0,
            settle_delay: Duration::ZERO,
        }
    }

    fn request(height_text: &str, file_name: &str) -> ResumeRequest {
        ResumeRequest {
            height_text: height_text.to_string(),
            height: height_text.parse().unwrap(),
            file_name: file_name.to_string(),
            tool_temp: "200".to_string(),
        }
    }

    #[test]
    fn test_quoted_file_name_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("job.gcode"), "G1 Z2.0\nLOG Z2.0\nG1 X1\n").unwrap();

        let job = RecoveryJob::new(config_in(dir.path()));
        let output = job.generate(&request("2.0", "'job.gcode'")).unwrap();
        assert_eq!(output, dir.path().join("plr.gcode"));
        assert!(output.is_file());
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let job = RecoveryJob::new(config_in(dir.path()));
        let err = job.generate(&request("2.0", "absent.gcode")).unwrap_err();
        assert!(matches!(err, RecoveryError::InputNotFound { .. }));
    }

    #[test]
    fn test_missing_marker_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("job.gcode"), "G28\nG1 X1 Y1\n").unwrap();

        let job = RecoveryJob::new(config_in(dir.path()));
        let err = job.generate(&request("2.0", "job.gcode")).unwrap_err();
        assert!(matches!(err, RecoveryError::MarkerNotFound { .. }));
        assert!(!dir.path().join("plr.gcode").exists());
    }
}
