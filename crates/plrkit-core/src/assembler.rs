//! Assembly of the resume script.
//!
//! The output is a fixed sequence of sections: header, state restoration,
//! homing, temperature waits, fan, Z lowering, then the remaining job gated
//! by the command filter. The section order matters to the machine — the
//! header must come first for front ends that validate file structure, and
//! temperatures are set before homing so the heaters soak while the axes
//! move.

use tracing::debug;

use crate::document::GcodeDocument;
use crate::fan::first_fan_command_before;
use crate::filter::is_restored_setup_command;
use crate::kinematics::last_z_before;
use crate::marker::ResumeMarker;
use crate::metadata::{bed_temp_from_metadata, BedTempReading, BedTempSource};
use crate::thumbnail::detect_thumbnail_header;

/// Caller-supplied values the document itself cannot provide.
#[derive(Debug, Clone)]
pub struct ResumeTargets {
    /// Interruption height as a number, for the first-layer threshold.
    pub height: f64,
    /// Saved extruder target temperature, as text.
    pub tool_temp: String,
    /// Bed temperature to fall back to when the metadata has no usable field.
    pub bed_fallback_temp: String,
}

/// Build the complete resume script as one string with a trailing newline.
///
/// Re-running with identical inputs produces byte-identical output.
pub fn assemble_resume_script(
    document: &GcodeDocument,
    marker: &ResumeMarker,
    targets: &ResumeTargets,
) -> String {
    let resume_start = marker.resume_start();
    let mut out: Vec<String> = Vec::with_capacity(document.len() + 32);

    push_header(&mut out, document);

    // Temperatures are commanded (not waited on) before anything moves.
    out.push("; --- Bed Temperature Restoration (from metadata) ---".into());
    let bed = bed_temp_from_metadata(document, targets.height)
        .unwrap_or_else(|| BedTempReading::saved_fallback(targets.bed_fallback_temp.clone()));
    match bed.source {
        BedTempSource::SavedFallback => out.push(format!(
            "M140 S{} ; Set Bed Temp (from saved variable)",
            bed.value
        )),
        _ => out.push(format!(
            "M140 S{} ; Set Bed Temp (from metadata logic)",
            bed.value
        )),
    }
    out.push(format!("M104 S{} ; Set for Extruder Temp", targets.tool_temp));

    // Re-seed the controller's Z before homing X and Y.
    if let Some(z) = last_z_before(document, marker.line_index) {
        out.push(format!("SET_KINEMATIC_POSITION Z={z}"));
    } else {
        debug!("no motion command before marker, kinematic restore omitted");
    }

    out.push("; --- Universal Homing and Setup ---".into());
    out.push(r#"BED_MESH_PROFILE LOAD="default""#.into());
    out.push("G91 ; Set relative positioning".into());
    out.push("G1 Z15 ; Move Z up 5mm".into());
    out.push("G90 ; Set absolute positioning".into());
    out.push("G28 X Y ; Home X and Y axes".into());
    out.push("M83 ; Set extruder to relative mode".into());

    out.push("; --- wait for bed & Extruder Temperature ---".into());
    out.push(format!("M190 S{} ; wait bed Temp", bed.value));
    out.push(format!(
        "M109 S{} ; wait for Extruder Temp",
        targets.tool_temp
    ));

    out.push("; --- Fan Speed Restoration ---".into());
    if let Some(fan) = first_fan_command_before(document, resume_start) {
        out.push(format!("{fan} ; Restore Fan Speed"));
    }

    out.push("; --- Z-Axis Restore ---".into());
    out.push("G91 ; Relative positioning".into());
    out.push("G1 Z-15 ; Move Z back down 5mm".into());
    out.push("G90 ; Absolute positioning".into());

    out.push("; --- Remaining Print G-code ---".into());
    for line in &document.lines()[resume_start..] {
        if !is_restored_setup_command(line) {
            out.push(line.clone());
        }
    }

    debug!(lines = out.len(), resume_start, "resume script assembled");

    let mut script = out.join("\n");
    script.push('\n');
    script
}

fn push_header(out: &mut Vec<String>, document: &GcodeDocument) {
    let header = detect_thumbnail_header(document);
    if header.present {
        out.push("; --- Resuming Print (Thumbnail Path) ---".into());
        if let Some(range) = header.header_range() {
            out.extend(document.lines()[range].iter().cloned());
        }
        out.push(";".into());
    } else {
        out.push("; --- Resuming Print (No Thumbnail Path) ---".into());
    }
}
