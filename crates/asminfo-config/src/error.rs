//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Problems with the `asminfo.toml` file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly named file does not exist.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// The file is not valid TOML or does not match the schema.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// A value parsed fine but cannot be used.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Reading the file, or locating where to search, failed.
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
