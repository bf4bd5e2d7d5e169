//! # PlrKit
//!
//! Power-loss recovery for Klipper printers. After an unplanned shutdown,
//! `plrkit` takes the Z height the printer logged, the original job file,
//! and the saved extruder target, and rebuilds a `plr.gcode` that restores
//! machine state and continues the job from the interruption point.
//!
//! All of the reconstruction logic lives in the `plrkit-core` crate; this
//! crate is the thin command-line surface around it.

pub use plrkit_core::{
    assemble_resume_script, bed_temp_from_metadata, default_gcode_dir, detect_thumbnail_header,
    find_resume_marker, first_fan_command_before, is_restored_setup_command, last_z_before,
    BedTempReading, BedTempSource, GcodeDocument, RecoveryConfig, RecoveryError, RecoveryJob,
    ResumeMarker, ResumeRequest, ResumeTargets, Result, ThumbnailHeader, FIRST_LAYER_HEIGHT,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for the confirmation message
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
