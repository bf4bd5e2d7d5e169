//! Error handling for resume-file generation.
//!
//! Only the steps that make a resume file meaningless are fatal: a missing
//! or unreadable job file, a missing interruption marker, or a failed write.
//! Every other extraction degrades softly by omitting its output line or
//! falling back to a saved value.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a recovery run.
#[derive(Error, Debug)]
pub enum RecoveryError {
    /// The original job file does not exist in the G-code directory.
    #[error("Original G-code file not found at {}", .path.display())]
    InputNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The original job file exists but could not be read.
    #[error("Error reading {}: {source}", .path.display())]
    ReadFailure {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// No line in the document records the interruption height.
    #[error("Could not find Z log position ({pattern}) in original file")]
    MarkerNotFound {
        /// The textual pattern that was searched for.
        pattern: String,
    },

    /// The resume file could not be staged or renamed into place.
    #[error("Error writing resume file {}: {source}", .path.display())]
    WriteFailure {
        /// The intended output path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Result type using [`RecoveryError`].
pub type Result<T> = std::result::Result<T, RecoveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_display() {
        let err = RecoveryError::InputNotFound {
            path: PathBuf::from("/srv/gcodes/benchy.gcode"),
        };
        assert_eq!(
            err.to_string(),
            "Original G-code file not found at /srv/gcodes/benchy.gcode"
        );
    }

    #[test]
    fn test_marker_not_found_display() {
        let err = RecoveryError::MarkerNotFound {
            pattern: "Z12.4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not find Z log position (Z12.4) in original file"
        );
    }

    #[test]
    fn test_read_failure_keeps_source() {
        let err = RecoveryError::ReadFailure {
            path: PathBuf::from("job.gcode"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Error reading job.gcode"));
    }
}
