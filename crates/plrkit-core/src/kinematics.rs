//! Recovering the physical Z position active at the stop point.

use regex::Regex;

use crate::document::GcodeDocument;

/// Scan backward from the marker for the most recent motion command carrying
/// a Z coordinate, and return that coordinate exactly as written.
///
/// The coordinate is kept as text rather than round-tripped through a float,
/// so the emitted `SET_KINEMATIC_POSITION` matches the file's own precision
/// (`Z12.5` comes back as `"12.5"`, never `"12.50"`). Returns `None` when no
/// motion command precedes the marker; the restore line is simply omitted in
/// that case.
pub fn last_z_before(document: &GcodeDocument, marker_index: usize) -> Option<String> {
    let end = marker_index.min(document.len());
    for line in document.lines()[..end].iter().rev() {
        if let Some(captures) = motion_z_regex().captures(line) {
            return Some(captures[1].to_string());
        }
    }
    None
}

/// G0/G1 followed by a Z coordinate anywhere later on the line.
fn motion_z_regex() -> &'static Regex {
    static MOTION_Z: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    MOTION_Z.get_or_init(|| {
        Regex::new(r"[Gg][01].*Z([-+]?\d*\.?\d+)").expect("invalid regex pattern")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_motion_wins() {
        let doc = GcodeDocument::from_text("G1 Z0.2 F300\nG1 X5 Y5\nG1 Z12.5 F300\nLOG Z12.5\n");
        assert_eq!(last_z_before(&doc, 3), Some("12.5".to_string()));
    }

    #[test]
    fn test_preserves_original_formatting() {
        let doc = GcodeDocument::from_text("G1 Z12.50 F300\nLOG Z12.50\n");
        assert_eq!(last_z_before(&doc, 1), Some("12.50".to_string()));
    }

    #[test]
    fn test_lowercase_command_and_signed_coordinate() {
        let doc = GcodeDocument::from_text("g1 X2 Z-0.4\nmarker\n");
        assert_eq!(last_z_before(&doc, 1), Some("-0.4".to_string()));
    }

    #[test]
    fn test_no_motion_before_marker() {
        let doc = GcodeDocument::from_text("M104 S200\nM140 S60\nmarker\n");
        assert_eq!(last_z_before(&doc, 2), None);
    }

    #[test]
    fn test_marker_line_itself_is_excluded() {
        let doc = GcodeDocument::from_text("G1 Z3.0 F300\n");
        assert_eq!(last_z_before(&doc, 0), None);
    }
}
