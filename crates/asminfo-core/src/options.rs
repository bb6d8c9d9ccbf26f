//! Run configuration.

use crate::version::ComponentPosition;

/// How a located version value is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Replace the whole value with a literal.
    Set(String),
    /// Increment one component.
    Increment(ComponentPosition),
    /// Leave version values alone.
    #[default]
    Keep,
}

impl Strategy {
    /// Picks the strategy from the optional literal and increment position.
    ///
    /// A literal wins over an increment when both are supplied.
    #[must_use]
    pub fn resolve(set: Option<String>, increment: Option<ComponentPosition>) -> Self {
        match (set, increment) {
            (Some(value), _) => Self::Set(value),
            (None, Some(position)) => Self::Increment(position),
            (None, None) => Self::Keep,
        }
    }
}

/// Settings for one rewrite of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Rewrite `AssemblyVersion`.
    pub fix_assembly_version: bool,
    /// Rewrite `AssemblyFileVersion`.
    pub fix_file_version: bool,
    /// Bump the end year of the copyright range.
    pub fix_copyright_year: bool,
    /// Version mutation strategy.
    pub strategy: Strategy,
}

impl RunConfig {
    /// Creates a configuration.
    ///
    /// When neither version attribute is selected, both are.
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn new(
        fix_assembly_version: bool,
        fix_file_version: bool,
        fix_copyright_year: bool,
        strategy: Strategy,
    ) -> Self {
        let both = !fix_assembly_version && !fix_file_version;
        Self {
            fix_assembly_version: fix_assembly_version || both,
            fix_file_version: fix_file_version || both,
            fix_copyright_year,
            strategy,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(false, false, false, Strategy::Keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neither_selects_both() {
        let config = RunConfig::new(false, false, false, Strategy::Keep);
        assert!(config.fix_assembly_version);
        assert!(config.fix_file_version);
    }

    #[test]
    fn test_single_selection_kept() {
        let config = RunConfig::new(false, true, false, Strategy::Keep);
        assert!(!config.fix_assembly_version);
        assert!(config.fix_file_version);
    }

    #[test]
    fn test_set_wins_over_increment() {
        let position = ComponentPosition::new(4);
        assert_eq!(
            Strategy::resolve(Some("2.0.0.0".into()), position),
            Strategy::Set("2.0.0.0".into())
        );
        assert_eq!(
            Strategy::resolve(None, position),
            Strategy::Increment(ComponentPosition::new(4).unwrap())
        );
        assert_eq!(Strategy::resolve(None, None), Strategy::Keep);
    }
}
