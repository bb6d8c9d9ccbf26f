//! Locates an attribute's quoted value on a line and rewrites it.

use crate::options::Strategy;
use crate::version::{ComponentPosition, Increment, increment_component};

const QUOTE: char = '"';

/// Why a located value was left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No mutation strategy is configured.
    NoStrategy,
    /// The version has no component at the requested position.
    MissingComponent,
    /// The requested component is the wildcard.
    Wildcard,
}

/// Outcome of [`mutate_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMutation {
    /// The attribute is not on this line, or carries no quoted value.
    Absent,
    /// The attribute was found and left alone.
    Unchanged {
        /// Current value.
        value: String,
        /// Why nothing changed.
        reason: SkipReason,
    },
    /// The value was rewritten.
    Changed {
        /// The rewritten line.
        line: String,
        /// Value before the rewrite.
        old_value: String,
        /// Value after the rewrite.
        new_value: String,
    },
    /// The targeted component is not an integer.
    InvalidComponent {
        /// Requested position.
        position: ComponentPosition,
        /// Offending component text.
        component: String,
    },
}

impl LineMutation {
    /// Returns true if the line was rewritten.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Byte range of the quoted value following `prefix`, excluding the quotes.
fn locate_value(line: &str, prefix: &str) -> Option<(usize, usize)> {
    let after_prefix = line.find(prefix)? + prefix.len();
    let start = line[after_prefix..].find(QUOTE)? + after_prefix + QUOTE.len_utf8();
    let end = line[start..].find(QUOTE)? + start;
    Some((start, end))
}

/// Applies `strategy` to the quoted value of the attribute introduced by `prefix`.
///
/// Matching is a plain substring search, so the prefix may appear anywhere
/// on the line. Everything outside the quotes is preserved byte for byte.
#[must_use]
pub fn mutate_line(line: &str, prefix: &str, strategy: &Strategy) -> LineMutation {
    let Some((start, end)) = locate_value(line, prefix) else {
        return LineMutation::Absent;
    };
    let old_value = &line[start..end];

    let new_value = match strategy {
        Strategy::Keep => return unchanged(old_value, SkipReason::NoStrategy),
        Strategy::Set(value) => value.clone(),
        Strategy::Increment(position) => match increment_component(old_value, *position) {
            Increment::Bumped(value) => value,
            Increment::Missing => return unchanged(old_value, SkipReason::MissingComponent),
            Increment::Wildcard => return unchanged(old_value, SkipReason::Wildcard),
            Increment::Invalid(component) => {
                return LineMutation::InvalidComponent {
                    position: *position,
                    component,
                };
            }
        },
    };

    let mut rewritten = String::with_capacity(line.len() - old_value.len() + new_value.len());
    rewritten.push_str(&line[..start]);
    rewritten.push_str(&new_value);
    rewritten.push_str(&line[end..]);

    LineMutation::Changed {
        line: rewritten,
        old_value: old_value.to_owned(),
        new_value,
    }
}

fn unchanged(value: &str, reason: SkipReason) -> LineMutation {
    LineMutation::Unchanged {
        value: value.to_owned(),
        reason,
    }
}
