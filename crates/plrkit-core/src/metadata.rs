//! Bed-temperature recovery from slicer metadata.
//!
//! Slicers append the job parameters as `key = value` comment lines after an
//! `;End of Gcode` terminator. The bed temperature to restore is read from
//! there rather than from the executed commands, because the executed `M140`
//! lines may belong to a priming sequence rather than the steady state.

use regex::Regex;
use tracing::debug;

use crate::document::GcodeDocument;

/// Heights below this are treated as still being on the first layer.
pub const FIRST_LAYER_HEIGHT: f64 = 0.6;

/// Terminator between the printable body and the trailing metadata.
const METADATA_DELIMITER: &str = ";End of Gcode";

/// Where a restored bed temperature came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedTempSource {
    /// `hot_plate_temp_initial_layer` in the slicer metadata.
    InitialLayerMetadata,
    /// `hot_plate_temp` or `material_bed_temperature` in the slicer metadata.
    StandardMetadata,
    /// The saved value supplied by the caller.
    SavedFallback,
}

/// A bed temperature together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedTempReading {
    /// Temperature value, kept as the metadata's own text.
    pub value: String,
    /// Which field (or fallback) produced the value.
    pub source: BedTempSource,
}

impl BedTempReading {
    /// Wrap a caller-supplied saved value.
    pub fn saved_fallback(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: BedTempSource::SavedFallback,
        }
    }
}

/// Search the trailing metadata block for a bed temperature.
///
/// Only text after the final `;End of Gcode` is searched; when the
/// terminator is missing the whole document is treated as metadata. Below
/// [`FIRST_LAYER_HEIGHT`] the initial-layer field is preferred with the
/// standard field as fallback; at or above it only the standard field is
/// consulted. Returns `None` when the selected policy matches nothing — the
/// caller substitutes its saved value.
pub fn bed_temp_from_metadata(document: &GcodeDocument, height: f64) -> Option<BedTempReading> {
    let joined = document.joined();
    let metadata = match joined.rsplit_once(METADATA_DELIMITER) {
        Some((_, tail)) => tail,
        None => joined.as_str(),
    };

    let initial_layer = initial_layer_regex()
        .captures(metadata)
        .map(|captures| captures[2].to_string());
    let standard = standard_regex()
        .captures(metadata)
        .map(|captures| captures[2].to_string());

    let reading = if height < FIRST_LAYER_HEIGHT {
        initial_layer
            .map(|value| BedTempReading {
                value,
                source: BedTempSource::InitialLayerMetadata,
            })
            .or(standard.map(|value| BedTempReading {
                value,
                source: BedTempSource::StandardMetadata,
            }))
    } else {
        standard.map(|value| BedTempReading {
            value,
            source: BedTempSource::StandardMetadata,
        })
    };

    if let Some(ref reading) = reading {
        debug!(value = %reading.value, source = ?reading.source, "bed temperature recovered");
    }
    reading
}

fn initial_layer_regex() -> &'static Regex {
    static INITIAL_LAYER: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    INITIAL_LAYER.get_or_init(|| {
        Regex::new(r"(hot_plate_temp_initial_layer)\s*=\s*(\d*\.?\d+)")
            .expect("invalid regex pattern")
    })
}

fn standard_regex() -> &'static Regex {
    static STANDARD: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    STANDARD.get_or_init(|| {
        Regex::new(r"(hot_plate_temp|material_bed_temperature)\s*=\s*(\d*\.?\d+)")
            .expect("invalid regex pattern")
    })
}
