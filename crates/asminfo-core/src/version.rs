//! Dot-delimited version strings.

use std::fmt;

/// Separator between version components.
pub const COMPONENT_DELIMITER: char = '.';

/// Placeholder for a component the compiler assigns automatically.
pub const WILDCARD: &str = "*";

/// Number of components in a full assembly version.
pub const FULL_COMPONENT_COUNT: usize = 4;

/// Number of leading components kept in a semantic version.
pub const SEMVER_COMPONENT_COUNT: usize = 3;

/// A 1-based position within a full version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ComponentPosition(usize);

impl ComponentPosition {
    /// Smallest accepted position.
    pub const MIN: usize = 1;
    /// Largest accepted position.
    pub const MAX: usize = FULL_COMPONENT_COUNT;

    /// Creates a position, returning `None` outside `MIN..=MAX`.
    #[must_use]
    pub fn new(position: i64) -> Option<Self> {
        let position = usize::try_from(position).ok()?;
        (Self::MIN..=Self::MAX)
            .contains(&position)
            .then_some(Self(position))
    }

    /// Returns the 1-based position.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for ComponentPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Result of incrementing one component of a version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Increment {
    /// The component was bumped; holds the reassembled version.
    Bumped(String),
    /// The version has no component at the position.
    Missing,
    /// The component is the wildcard and is left alone.
    Wildcard,
    /// The component is not an integer.
    Invalid(String),
}

/// Increments the component at `position`, keeping every other component verbatim.
///
/// Only enough components to reach `position` are required; the total count
/// is not checked.
#[must_use]
pub fn increment_component(version: &str, position: ComponentPosition) -> Increment {
    let mut components: Vec<String> = version
        .split(COMPONENT_DELIMITER)
        .map(str::to_owned)
        .collect();

    let Some(component) = components.get_mut(position.index()) else {
        return Increment::Missing;
    };

    if component == WILDCARD {
        return Increment::Wildcard;
    }

    match component
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|value| value.checked_add(1))
    {
        Some(value) => {
            *component = value.to_string();
            Increment::Bumped(components.join(&COMPONENT_DELIMITER.to_string()))
        }
        None => Increment::Invalid(component.clone()),
    }
}

/// Derives the semantic version from a full four-component version.
///
/// Returns `None` unless `version` has exactly four components.
#[must_use]
pub fn semantic_version(version: &str) -> Option<String> {
    let components: Vec<&str> = version.split(COMPONENT_DELIMITER).collect();
    if components.len() != FULL_COMPONENT_COUNT {
        return None;
    }
    Some(components[..SEMVER_COMPONENT_COUNT].join(&COMPONENT_DELIMITER.to_string()))
}

/// Counts the components of a version string.
#[must_use]
pub fn component_count(version: &str) -> usize {
    version.split(COMPONENT_DELIMITER).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: i64) -> ComponentPosition {
        ComponentPosition::new(n).unwrap()
    }

    #[test]
    fn test_position_range() {
        assert!(ComponentPosition::new(0).is_none());
        assert!(ComponentPosition::new(-1).is_none());
        assert!(ComponentPosition::new(5).is_none());
        assert_eq!(ComponentPosition::new(1).map(ComponentPosition::get), Some(1));
        assert_eq!(ComponentPosition::new(4).map(ComponentPosition::get), Some(4));
    }

    #[test]
    fn test_increment_each_position() {
        assert_eq!(increment_component("1.2.3.4", pos(1)), Increment::Bumped("2.2.3.4".into()));
        assert_eq!(increment_component("1.2.3.4", pos(2)), Increment::Bumped("1.3.3.4".into()));
        assert_eq!(increment_component("1.2.3.4", pos(3)), Increment::Bumped("1.2.4.4".into()));
        assert_eq!(increment_component("1.2.3.4", pos(4)), Increment::Bumped("1.2.3.5".into()));
    }

    #[test]
    fn test_increment_carries_digits() {
        assert_eq!(
            increment_component("1.0.99.1999", pos(4)),
            Increment::Bumped("1.0.99.2000".into())
        );
    }

    #[test]
    fn test_increment_wildcard() {
        assert_eq!(increment_component("1.0.*", pos(3)), Increment::Wildcard);
    }

    #[test]
    fn test_increment_missing() {
        assert_eq!(increment_component("1.0.*", pos(4)), Increment::Missing);
    }

    #[test]
    fn test_increment_short_version_within_reach() {
        assert_eq!(increment_component("1.0", pos(2)), Increment::Bumped("1.1".into()));
    }

    #[test]
    fn test_increment_invalid() {
        assert_eq!(
            increment_component("1.0.beta.0", pos(3)),
            Increment::Invalid("beta".into())
        );
        assert_eq!(increment_component("1..0.0", pos(2)), Increment::Invalid(String::new()));
    }

    #[test]
    fn test_increment_overflow_is_invalid() {
        let max = i64::MAX.to_string();
        let version = format!("1.0.0.{max}");
        assert_eq!(increment_component(&version, pos(4)), Increment::Invalid(max));
    }

    #[test]
    fn test_semantic_version() {
        assert_eq!(semantic_version("2.1.0.7"), Some("2.1.0".into()));
        assert_eq!(semantic_version("2.1.0"), None);
        assert_eq!(semantic_version("2.1.0.7.1"), None);
    }

    #[test]
    fn test_component_count() {
        assert_eq!(component_count("1.0.*"), 3);
        assert_eq!(component_count("1.0.0.0"), 4);
    }
}
