//! Brings the end year of a copyright range up to date.

use crate::dialect::COPYRIGHT_MARKER;

const COPYRIGHT_WORD: &str = "Copyright";
const RANGE_SEPARATOR: char = '-';
const RANGE_TERMINATORS: [char; 2] = [',', ' '];

/// Outcome of [`fix_copyright_year`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyrightOutcome {
    /// The line is not a copyright attribute.
    NotCopyright,
    /// The notice holds a single year; left alone on purpose.
    SingleYear,
    /// The year range could not be delimited or parsed.
    Unrecognized,
    /// The range already ends in the current year or later.
    Current,
    /// The end year was replaced.
    Changed {
        /// The rewritten line.
        line: String,
        /// End year before the rewrite.
        old_year: i32,
        /// End year after the rewrite.
        new_year: i32,
    },
}

/// Replaces the end year of a `YYYY-YYYY` copyright range with `current_year`.
///
/// The line must hold the `AssemblyCopyright` marker followed by the word
/// `Copyright`. The end year runs from the first hyphen after that word to
/// the nearest following comma or space.
#[must_use]
pub fn fix_copyright_year(line: &str, current_year: i32) -> CopyrightOutcome {
    let Some(marker) = line.find(COPYRIGHT_MARKER) else {
        return CopyrightOutcome::NotCopyright;
    };
    let after_marker = marker + COPYRIGHT_MARKER.len();
    let Some(word) = line[after_marker..].find(COPYRIGHT_WORD) else {
        return CopyrightOutcome::NotCopyright;
    };
    let after_word = after_marker + word + COPYRIGHT_WORD.len();

    let Some(hyphen) = line[after_word..].find(RANGE_SEPARATOR) else {
        return CopyrightOutcome::SingleYear;
    };
    let year_start = after_word + hyphen + RANGE_SEPARATOR.len_utf8();

    let Some(year_len) = line[year_start..].find(RANGE_TERMINATORS) else {
        return CopyrightOutcome::Unrecognized;
    };
    let year_end = year_start + year_len;

    let Ok(old_year) = line[year_start..year_end].trim().parse::<i32>() else {
        return CopyrightOutcome::Unrecognized;
    };

    if old_year >= current_year {
        return CopyrightOutcome::Current;
    }

    let mut rewritten = String::with_capacity(line.len());
    rewritten.push_str(&line[..year_start]);
    rewritten.push_str(&current_year.to_string());
    rewritten.push_str(&line[year_end..]);

    CopyrightOutcome::Changed {
        line: rewritten,
        old_year,
        new_year: current_year,
    }
}
