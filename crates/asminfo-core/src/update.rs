//! Rewrites an assembly metadata file on disk.

use std::path::Path;

use tracing::info;

use crate::clock::Clock;
use crate::dialect::Dialect;
use crate::driver::{Rewrite, rewrite_lines};
use crate::error::FileResult;
use crate::files::SourceFile;
use crate::options::RunConfig;

/// Extension appended to the target's path for the temporary copy.
pub const DEFAULT_TEMP_EXTENSION: &str = ".out";

/// Reads `path`, rewrites it per `config`, and swaps the result into place.
///
/// The file is written back even when no line changed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or replaced.
pub fn update_assembly_info(
    path: &Path,
    config: &RunConfig,
    clock: &dyn Clock,
    temp_extension: &str,
) -> FileResult<Rewrite> {
    let source = SourceFile::read(path)?;
    let dialect = Dialect::from_path(path);
    info!(?path, %dialect, "processing");

    let rewrite = rewrite_lines(source.lines(), dialect, config, clock);
    if !rewrite.differs_from(source.lines()) {
        info!(?path, "no line changed, rewriting as is");
    }
    source.write_in_place(&rewrite.lines, temp_extension)?;

    Ok(rewrite)
}
