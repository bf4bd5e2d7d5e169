//! Fan state recovery.

use crate::document::GcodeDocument;

const FAN_COMMAND_PREFIX: &str = "M106";

/// Return the first `M106` fan command issued before the resume point,
/// trimmed of surrounding whitespace.
///
/// Taking the first command rather than the most recent mirrors the shell
/// macro this replaces: a job that ramps the fan over several commands is
/// restored to its first setting. Returns `None` when the job never touched
/// the fan before the interruption.
pub fn first_fan_command_before(document: &GcodeDocument, resume_start: usize) -> Option<String> {
    let end = resume_start.min(document.len());
    document.lines()[..end]
        .iter()
        .map(|line| line.trim())
        .find(|line| line.starts_with(FAN_COMMAND_PREFIX))
        .map(str::to_string)
}
