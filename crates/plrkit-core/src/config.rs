//! Recovery run configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// File-system and fallback settings for a recovery run.
///
/// The defaults mirror a stock Klipper install, but the whole struct is
/// carried as a value so tests and other deployments can point it elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Directory holding the printer's G-code files.
    pub gcode_dir: PathBuf,
    /// Name of the generated resume file inside `gcode_dir`.
    pub output_file: String,
    /// Bed temperature (°C) used when the metadata has no usable field.
    pub bed_fallback_temp: f64,
    /// Pause after the resume file lands, giving the front end's file
    /// watcher time to notice it before the caller proceeds.
    pub settle_delay: Duration,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            gcode_dir: default_gcode_dir(),
            output_file: "plr.gcode".to_string(),
            bed_fallback_temp: 60.0,
            settle_delay: Duration::from_secs(5),
        }
    }
}

impl RecoveryConfig {
    /// Full path of the generated resume file.
    pub fn output_path(&self) -> PathBuf {
        self.gcode_dir.join(&self.output_file)
    }
}

/// `~/printer_data/gcodes`, or the current directory when `HOME` is unset.
pub fn default_gcode_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join("printer_data").join("gcodes"),
        None => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_file() {
        let config = RecoveryConfig::default();
        assert_eq!(config.output_file, "plr.gcode");
        assert_eq!(config.bed_fallback_temp, 60.0);
        assert_eq!(config.settle_delay, Duration::from_secs(5));
    }

    #[test]
    fn test_output_path_joins_dir_and_file() {
        let config = RecoveryConfig {
            gcode_dir: PathBuf::from("/srv/gcodes"),
            ..RecoveryConfig::default()
        };
        assert_eq!(config.output_path(), PathBuf::from("/srv/gcodes/plr.gcode"));
    }
}
