//! Compiler configuration.
//!
//! Configuration is a small JSON document. Every field is optional and falls
//! back to its default:
//!
//! ```json
//! { "enhanced": false, "min_line_length": 5, "min_step_length": 5 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result, ResultExt};

/// File name looked up under `$XDG_CONFIG_HOME/storyplan/`.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Tunables of the compilation pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompilerConfig {
    /// Use the enhanced annotator for user-story inference
    pub enhanced: bool,

    /// Candidate lines shorter than this are discarded as noise
    pub min_line_length: usize,

    /// Step texts shorter than this are rejected
    pub min_step_length: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            enhanced: false,
            min_line_length: 5,
            min_step_length: 5,
        }
    }
}

impl CompilerConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if the file cannot be read,
    /// `PlanError::Configuration` if it is not valid JSON for this structure,
    /// and `PlanError::InvalidInput` if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| PlanError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(format!("Invalid configuration file '{}'", path.display()))?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Returns the XDG configuration file path if one exists.
    pub fn discover() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("storyplan").find_config_file(CONFIG_FILE_NAME)
    }

    /// Checks that thresholds are usable.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.min_line_length == 0 {
            return Err(
                PlanError::invalid_input("min_line_length").with_reason("must be at least 1"),
            );
        }
        if self.min_step_length == 0 {
            return Err(
                PlanError::invalid_input("min_step_length").with_reason("must be at least 1"),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_defaults() {
        let config = CompilerConfig::default();
        assert!(!config.enhanced);
        assert_eq!(config.min_line_length, 5);
        assert_eq!(config.min_step_length, 5);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{ "enhanced": true }"#);
        let config = CompilerConfig::from_file(file.path()).expect("Failed to load config");
        assert!(config.enhanced);
        assert_eq!(config.min_step_length, 5);
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let file = write_config("{ enhanced: ");
        let err = CompilerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PlanError::Configuration { .. }));
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        let file = write_config(r#"{ "min_step_length": 0 }"#);
        let err = CompilerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { ref field, .. } if field == "min_step_length"));
    }

    #[test]
    fn test_missing_file_is_file_system_error() {
        let err = CompilerConfig::from_file(Path::new("/nonexistent/storyplan.json")).unwrap_err();
        assert!(matches!(err, PlanError::FileSystem { .. }));
    }
}
