//! Thumbnail header detection.
//!
//! Slicers can embed a base64 preview image as a comment block at the top of
//! the file, and some front ends treat that block as proof of a valid file
//! before they will run it. The resume file has to carry the block over.

use crate::document::GcodeDocument;

const THUMBNAIL_MARKER: &str = "thumbnail";
const THUMBNAIL_END: &str = "thumbnail end";

/// An embedded preview block at the top of a sliced file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailHeader {
    /// True when any line mentions a thumbnail.
    pub present: bool,
    /// Index of the first line containing the end sentinel, when found.
    pub end_line: Option<usize>,
}

impl ThumbnailHeader {
    /// Lines to copy verbatim into the output: `0..=end_line`, or nothing
    /// when the block never closes.
    pub fn header_range(&self) -> Option<std::ops::RangeInclusive<usize>> {
        self.end_line.map(|end| 0..=end)
    }
}

/// Detect an embedded thumbnail block.
///
/// A file that mentions thumbnails but never closes the block still counts
/// as present; only the mode comment is emitted for it, no copied lines.
pub fn detect_thumbnail_header(document: &GcodeDocument) -> ThumbnailHeader {
    let present = document
        .lines()
        .iter()
        .any(|line| line.contains(THUMBNAIL_MARKER));
    if !present {
        return ThumbnailHeader {
            present: false,
            end_line: None,
        };
    }

    let end_line = document
        .lines()
        .iter()
        .position(|line| line.contains(THUMBNAIL_END));
    ThumbnailHeader { present, end_line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent() {
        let doc = GcodeDocument::from_text("G28\nG1 Z0.2\n");
        let header = detect_thumbnail_header(&doc);
        assert!(!header.present);
        assert_eq!(header.header_range(), None);
    }

    #[test]
    fn test_present_with_end() {
        let doc = GcodeDocument::from_text(
            "; thumbnail begin 16x16\n; aGVsbG8=\n; thumbnail end\nG28\n",
        );
        let header = detect_thumbnail_header(&doc);
        assert!(header.present);
        assert_eq!(header.end_line, Some(2));
        assert_eq!(header.header_range(), Some(0..=2));
    }

    #[test]
    fn test_present_without_end_copies_nothing() {
        let doc = GcodeDocument::from_text("; thumbnail begin 16x16\nG28\n");
        let header = detect_thumbnail_header(&doc);
        assert!(header.present);
        assert_eq!(header.end_line, None);
        assert_eq!(header.header_range(), None);
    }

    #[test]
    fn test_first_end_sentinel_wins() {
        let doc = GcodeDocument::from_text(
            "; thumbnail end\n; thumbnail end\nG28\n",
        );
        assert_eq!(detect_thumbnail_header(&doc).end_line, Some(0));
    }
}
