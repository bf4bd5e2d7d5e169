//! Locating the line where the interrupted print stopped.

use tracing::debug;

use crate::document::GcodeDocument;
use crate::error::{RecoveryError, Result};

/// The last line recording the interruption height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeMarker {
    /// Index of the marker line within the document.
    pub line_index: usize,
    /// The height text the marker was matched against.
    pub height_text: String,
}

impl ResumeMarker {
    /// Index of the first line of the remaining, not-yet-executed job.
    pub fn resume_start(&self) -> usize {
        self.line_index + 1
    }
}

/// Find the last line containing `Z<height>` with the height written exactly
/// as the operator supplied it.
///
/// The logging macro can fire more than once, and the same text can show up
/// in comments; the final occurrence is the authoritative stop point. The
/// match is purely textual, so the height has to be spelled the way the job
/// file spells it (`0.6` will not find `Z0.60`).
///
/// # Errors
/// Returns [`RecoveryError::MarkerNotFound`] when no line matches.
pub fn find_resume_marker(document: &GcodeDocument, height_text: &str) -> Result<ResumeMarker> {
    let pattern = format!("Z{height_text}");

    let mut last_match = None;
    for (index, line) in document.lines().iter().enumerate() {
        if line.contains(&pattern) {
            last_match = Some(index);
        }
    }

    match last_match {
        Some(line_index) => {
            debug!(line_index, pattern = %pattern, "resume marker located");
            Ok(ResumeMarker {
                line_index,
                height_text: height_text.to_string(),
            })
        }
        None => Err(RecoveryError::MarkerNotFound { pattern }),
    }
}
