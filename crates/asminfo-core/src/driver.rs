//! Single pass over the lines of an assembly metadata file.

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::copyright::{CopyrightOutcome, fix_copyright_year};
use crate::dialect::{Attribute, Dialect};
use crate::mutator::{LineMutation, mutate_line};
use crate::notice::Notice;
use crate::options::RunConfig;
use crate::version::{component_count, semantic_version};

/// Result of rewriting a whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    /// Output lines, in order.
    pub lines: Vec<String>,
    /// The file version written during the pass, if any.
    pub file_version: Option<String>,
    /// Index of the informational version line, if one was found or added.
    pub informational_index: Option<usize>,
    /// Transcript of everything examined.
    pub notices: Vec<Notice>,
    /// Set when a version component could not be incremented.
    pub invalid_component: bool,
}

impl Rewrite {
    /// Returns true if any output line differs from `original`.
    #[must_use]
    pub fn differs_from<S: AsRef<str>>(&self, original: &[S]) -> bool {
        self.lines.len() != original.len()
            || self
                .lines
                .iter()
                .zip(original)
                .any(|(new, old)| new != old.as_ref())
    }
}

/// Rewrites `lines` according to `config`.
///
/// `AssemblyVersion` is tried first; `AssemblyFileVersion` only on lines the
/// first attempt left alone. When a new file version was written, the
/// informational version is set to its first three components, either in
/// place or as a new last line.
pub fn rewrite_lines<S: AsRef<str>>(
    lines: &[S],
    dialect: Dialect,
    config: &RunConfig,
    clock: &dyn Clock,
) -> Rewrite {
    let mut rewrite = Rewrite {
        lines: Vec::with_capacity(lines.len() + 1),
        ..Rewrite::default()
    };
    let current_year = clock.current_year();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        if line.is_empty() || dialect.is_comment(line) {
            rewrite.lines.push(line.to_owned());
            continue;
        }

        let mut output = None;

        if config.fix_assembly_version {
            output = apply(&mut rewrite, line, dialect, Attribute::Version, config);
        }

        if output.is_none() && config.fix_file_version {
            output = apply(&mut rewrite, line, dialect, Attribute::FileVersion, config);
        }

        if output.is_none()
            && rewrite.informational_index.is_none()
            && line
                .trim_start()
                .starts_with(dialect.prefix(Attribute::InformationalVersion))
        {
            debug!(index, "found informational version");
            rewrite.informational_index = Some(index);
        }

        let mut output = output.unwrap_or_else(|| line.to_owned());

        if config.fix_copyright_year {
            output = check_copyright(&mut rewrite.notices, output, current_year);
        }

        rewrite.lines.push(output);
    }

    reconcile_informational_version(&mut rewrite, dialect);

    rewrite
}

/// Tries one attribute on one line, returning the rewritten line on change.
fn apply(
    rewrite: &mut Rewrite,
    line: &str,
    dialect: Dialect,
    attribute: Attribute,
    config: &RunConfig,
) -> Option<String> {
    match mutate_line(line, dialect.prefix(attribute), &config.strategy) {
        LineMutation::Absent => None,
        LineMutation::Unchanged { reason, .. } => {
            debug!(%attribute, ?reason, "version left as is");
            rewrite.notices.push(Notice::VersionUnchanged {
                attribute,
                line: line.to_owned(),
                reason,
            });
            None
        }
        LineMutation::InvalidComponent {
            position,
            component,
        } => {
            warn!(%attribute, %position, %component, "version component is not numeric");
            rewrite.invalid_component = true;
            rewrite.notices.push(Notice::InvalidComponent {
                attribute,
                position,
                component,
            });
            None
        }
        LineMutation::Changed {
            line: new_line,
            old_value,
            new_value,
        } => {
            info!(%attribute, old = %old_value, new = %new_value, "version changed");
            if attribute == Attribute::FileVersion {
                rewrite.file_version = Some(new_value);
            }
            rewrite.notices.push(Notice::VersionChanged {
                attribute,
                old_line: line.to_owned(),
                new_line: new_line.clone(),
            });
            Some(new_line)
        }
    }
}

fn check_copyright(notices: &mut Vec<Notice>, line: String, current_year: i32) -> String {
    match fix_copyright_year(&line, current_year) {
        CopyrightOutcome::NotCopyright => line,
        CopyrightOutcome::SingleYear => {
            notices.push(Notice::CopyrightSingleYear { line: line.clone() });
            line
        }
        CopyrightOutcome::Unrecognized => {
            notices.push(Notice::CopyrightUnrecognized { line: line.clone() });
            line
        }
        CopyrightOutcome::Current => {
            notices.push(Notice::CopyrightUnchanged { line: line.clone() });
            line
        }
        CopyrightOutcome::Changed {
            line: new_line,
            old_year,
            new_year,
        } => {
            info!(old_year, new_year, "copyright year changed");
            notices.push(Notice::CopyrightChanged {
                old_line: line,
                new_line: new_line.clone(),
            });
            new_line
        }
    }
}

fn reconcile_informational_version(rewrite: &mut Rewrite, dialect: Dialect) {
    let Some(file_version) = rewrite.file_version.as_deref() else {
        return;
    };

    let Some(semver) = semantic_version(file_version) else {
        warn!(version = file_version, "file version is not a four-part version");
        rewrite.notices.push(Notice::MalformedFileVersion {
            version: file_version.to_owned(),
            components: component_count(file_version),
        });
        return;
    };

    let line = dialect.attribute_line(Attribute::InformationalVersion, &semver);

    if let Some(index) = rewrite.informational_index {
        rewrite.lines[index].clone_from(&line);
        rewrite.notices.push(Notice::InformationalUpdated { line });
    } else {
        rewrite.informational_index = Some(rewrite.lines.len());
        rewrite.lines.push(line.clone());
        rewrite.notices.push(Notice::InformationalAdded { line });
    }
}
