//! Suppressing setup commands the resume preamble already issues.

/// Command prefixes the assembler emits its own authoritative versions of:
/// homing, position reset, fan, and temperature set/wait.
const RESTORED_PREFIXES: [&str; 7] = ["G28", "G92", "M106", "M104", "M140", "M190", "M109"];

/// True when the line duplicates a command class the resume preamble has
/// already issued and must not be copied into the remaining script.
pub fn is_restored_setup_command(line: &str) -> bool {
    let trimmed = line.trim();
    RESTORED_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_every_restored_prefix() {
        for line in [
            "G28 X Y",
            "G92 E0",
            "M106 S255",
            "M104 S200",
            "M140 S60",
            "M190 S60",
            "M109 S200",
        ] {
            assert!(is_restored_setup_command(line), "{line} should be rejected");
        }
    }

    #[test]
    fn test_rejects_indented_commands() {
        assert!(is_restored_setup_command("   M104 S210"));
    }

    #[test]
    fn test_passes_ordinary_lines() {
        assert!(!is_restored_setup_command("G1 X10 Y10 E1"));
        assert!(!is_restored_setup_command("; a comment"));
        assert!(!is_restored_setup_command("M83"));
        assert!(!is_restored_setup_command(""));
    }
}
