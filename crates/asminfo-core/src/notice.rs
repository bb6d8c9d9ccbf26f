//! Human-readable transcript entries produced while rewriting.

use std::fmt;

use crate::dialect::Attribute;
use crate::mutator::SkipReason;
use crate::version::ComponentPosition;

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A version attribute was rewritten.
    VersionChanged {
        attribute: Attribute,
        old_line: String,
        new_line: String,
    },
    /// A version attribute was found and left alone.
    VersionUnchanged {
        attribute: Attribute,
        line: String,
        reason: SkipReason,
    },
    /// The component targeted for increment is not an integer.
    InvalidComponent {
        attribute: Attribute,
        position: ComponentPosition,
        component: String,
    },
    /// The copyright end year was brought up to date.
    CopyrightChanged { old_line: String, new_line: String },
    /// The copyright range already ends in the current year.
    CopyrightUnchanged { line: String },
    /// The copyright notice carries a single year.
    CopyrightSingleYear { line: String },
    /// The copyright year range could not be parsed.
    CopyrightUnrecognized { line: String },
    /// An existing informational version was overwritten.
    InformationalUpdated { line: String },
    /// An informational version was appended.
    InformationalAdded { line: String },
    /// The new file version does not have four components.
    MalformedFileVersion { version: String, components: usize },
}

impl Notice {
    /// Returns true for entries that make the run fail.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::InvalidComponent { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionChanged {
                attribute,
                old_line,
                new_line,
            } => write!(
                f,
                "{attribute} changed: old value = {old_line}\n{:width$}new value = {new_line}",
                "",
                width = attribute.name().len() + 10,
            ),
            Self::VersionUnchanged {
                attribute,
                line,
                reason,
            } => {
                let why = match reason {
                    SkipReason::NoStrategy => "no new version requested",
                    SkipReason::MissingComponent => "no component at the requested position",
                    SkipReason::Wildcard => "requested component is a wildcard",
                };
                write!(f, "{attribute} unchanged ({why}): current value = {line}")
            }
            Self::InvalidComponent {
                attribute,
                position,
                component,
            } => write!(
                f,
                "error: the {attribute} component at position {position} is invalid\n       version substring = {component}"
            ),
            Self::CopyrightChanged { old_line, new_line } => write!(
                f,
                "copyright year changed: old value = {old_line}\n                        new value = {new_line}"
            ),
            Self::CopyrightUnchanged { line } => {
                write!(f, "copyright year unchanged: current value = {line}")
            }
            Self::CopyrightSingleYear { line } => {
                write!(f, "the copyright year is a single year: {line}")
            }
            Self::CopyrightUnrecognized { line } => {
                write!(f, "the copyright year range is not recognized: {line}")
            }
            Self::InformationalUpdated { line } => {
                write!(f, "AssemblyInformationalVersion updated: {line}")
            }
            Self::InformationalAdded { line } => {
                write!(f, "AssemblyInformationalVersion added: {line}")
            }
            Self::MalformedFileVersion {
                version,
                components,
            } => write!(
                f,
                "error: cannot derive a semantic version from {version}: expected 4 components, found {components}"
            ),
        }
    }
}
