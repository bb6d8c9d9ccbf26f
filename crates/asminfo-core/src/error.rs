//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or replacing the target file.
#[derive(Debug, Error)]
pub enum FileError {
    /// File not found.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The file is not valid UTF-8.
    #[error("{0} is not valid UTF-8")]
    NotUtf8(PathBuf),

    /// The path has no parent directory to inspect.
    #[error("{0} has no parent directory")]
    NoParent(PathBuf),

    /// IO error during a named step.
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
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

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = FileError::NotFound(PathBuf::from("/tmp/AssemblyInfo.cs"));
        assert_eq!(err.to_string(), "file not found: /tmp/AssemblyInfo.cs");
    }

    #[test]
    fn test_no_parent_display() {
        let err = FileError::NoParent(PathBuf::from("/"));
        assert_eq!(err.to_string(), "/ has no parent directory");
    }

    #[test]
    fn test_io_display() {
        let to_error = FileError::io("rename", "/tmp/AssemblyInfo.cs.out");
        let err = to_error(std::io::Error::other("denied"));
        assert_eq!(
            err.to_string(),
            "failed to rename /tmp/AssemblyInfo.cs.out: denied"
        );
    }
}
