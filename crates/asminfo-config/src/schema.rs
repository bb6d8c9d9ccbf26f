//! Configuration schema.

use asminfo_core::DEFAULT_TEMP_EXTENSION;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Switches applied as if given on the command line.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Write-back options.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary extension is empty or contains a
    /// path separator.
    pub fn validate(&self) -> ConfigResult<()> {
        let ext = &self.output.temp_extension;
        if ext.is_empty() {
            return Err(ConfigError::Invalid(
                "output.temp_extension must not be empty".to_string(),
            ));
        }
        if ext.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "output.temp_extension must not contain a path separator: {ext}"
            )));
        }
        Ok(())
    }
}

/// Default switches.
///
/// Each one is OR-ed with the matching command-line flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Update `AssemblyVersion`.
    #[serde(default)]
    pub assembly_version: bool,

    /// Update `AssemblyFileVersion`.
    #[serde(default)]
    pub file_version: bool,

    /// Update the copyright year range.
    #[serde(default)]
    pub copyright_year: bool,

    /// Skip processing unless neighbouring files changed.
    #[serde(default)]
    pub only_when_modified: bool,
}

/// Write-back configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Extension appended to the target path for the temporary copy.
    #[serde(default = "default_temp_extension")]
    pub temp_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            temp_extension: default_temp_extension(),
        }
    }
}

fn default_temp_extension() -> String {
    DEFAULT_TEMP_EXTENSION.to_string()
}
