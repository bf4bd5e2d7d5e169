//! # PlrKit Core
//!
//! Resume-point reconstruction for interrupted Klipper print jobs.
//!
//! Given the Z height logged at the moment of a power loss, the original job
//! file, and the saved extruder target, this crate locates where execution
//! stopped, recovers the kinematic, thermal, and fan state that was active
//! there, and assembles a new G-code file that restores that state from cold
//! and continues the job without repeating already-issued setup commands.
//!
//! The pipeline is linear and pure until the final write: each extractor
//! takes the immutable [`GcodeDocument`] (plus earlier results it depends
//! on) and returns a value; [`assembler::assemble_resume_script`] is the
//! only sequencing step and [`recovery::RecoveryJob`] the only one that
//! touches the filesystem.

pub mod assembler;
pub mod config;
pub mod document;
pub mod error;
pub mod fan;
pub mod filter;
pub mod kinematics;
pub mod marker;
pub mod metadata;
pub mod recovery;
pub mod thumbnail;

pub use assembler::{assemble_resume_script, ResumeTargets};
pub use config::{default_gcode_dir, RecoveryConfig};
pub use document::GcodeDocument;
pub use error::{RecoveryError, Result};
pub use fan::first_fan_command_before;
pub use filter::is_restored_setup_command;
pub use kinematics::last_z_before;
pub use marker::{find_resume_marker, ResumeMarker};
pub use metadata::{
    bed_temp_from_metadata, BedTempReading, BedTempSource, FIRST_LAYER_HEIGHT,
};
pub use recovery::{RecoveryJob, ResumeRequest};
pub use thumbnail::{detect_thumbnail_header, ThumbnailHeader};
