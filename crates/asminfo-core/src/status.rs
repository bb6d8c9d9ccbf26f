//! Process exit statuses.

use std::fmt;

/// Final status of a run, mapped one-to-one onto process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitStatus {
    /// Everything went fine.
    #[default]
    Success,
    /// An unexpected failure, typically I/O.
    Runtime,
    /// No file name was given.
    NoFilename,
    /// The named file does not exist.
    FileNotFound,
    /// The increment position is not a number.
    IncrementMustBeNumeric,
    /// The increment position is outside 1 to 4.
    IncrementOutOfRange,
    /// A version component to increment is not a number.
    InvalidVersionSubstring,
}

impl ExitStatus {
    /// Returns the process exit code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Runtime => 1,
            Self::NoFilename => 2,
            Self::FileNotFound => 3,
            Self::IncrementMustBeNumeric => 4,
            Self::IncrementOutOfRange => 5,
            Self::InvalidVersionSubstring => 6,
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Success => "success",
            Self::Runtime => "runtime error",
            Self::NoFilename => "no file name",
            Self::FileNotFound => "file not found",
            Self::IncrementMustBeNumeric => "increment must be numeric",
            Self::IncrementOutOfRange => "increment out of range",
            Self::InvalidVersionSubstring => "invalid version substring",
        };
        write!(f, "{text} ({})", self.code())
    }
}
