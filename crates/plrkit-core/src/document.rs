//! Loading the original job file into line form.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RecoveryError, Result};

/// The original print job, split into lines in execution order.
///
/// Loaded once and never mutated; every extraction step borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcodeDocument {
    lines: Vec<String>,
}

impl GcodeDocument {
    /// Read a job file from disk.
    ///
    /// # Errors
    /// Returns [`RecoveryError::InputNotFound`] if the path is not a regular
    /// file and [`RecoveryError::ReadFailure`] if it cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RecoveryError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path).map_err(|source| RecoveryError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_text(&text);
        debug!(
            path = %path.display(),
            lines = document.len(),
            "job file loaded"
        );
        Ok(document)
    }

    /// Build a document from in-memory text. Line endings are stripped.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// All lines in execution order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The whole document re-joined with `\n`, for whole-text scans.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_text_splits_lines() {
        let doc = GcodeDocument::from_text("G28\nG1 Z0.2\nM104 S200\n");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.lines()[1], "G1 Z0.2");
    }

    #[test]
    fn test_from_text_handles_crlf() {
        let doc = GcodeDocument::from_text("G28\r\nG90\r\n");
        assert_eq!(doc.lines(), &["G28".to_string(), "G90".to_string()]);
    }

    #[test]
    fn test_empty_text() {
        let doc = GcodeDocument::from_text("");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GcodeDocument::load(&dir.path().join("absent.gcode")).unwrap_err();
        assert!(matches!(err, RecoveryError::InputNotFound { .. }));
    }

    #[test]
    fn test_load_reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.gcode");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "G28").unwrap();
        writeln!(file, "G1 Z5").unwrap();

        let doc = GcodeDocument::load(&path).unwrap();
        assert_eq!(doc.lines(), &["G28".to_string(), "G1 Z5".to_string()]);
    }
}
