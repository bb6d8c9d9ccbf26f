//! Reading, replacing and change-detection for the target file.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, trace};

use crate::error::{FileError, FileResult};

const BOM: &str = "\u{feff}";

/// Line terminator of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// An assembly metadata file loaded into memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
    /// Terminator of each line that had one, by index.
    endings: Vec<LineEnding>,
    /// Terminator for lines that had none, such as appended ones.
    dominant: LineEnding,
    bom: bool,
    trailing_newline: bool,
}

impl SourceFile {
    /// Reads the whole file, remembering its BOM and line endings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or is
    /// not UTF-8.
    pub fn read(path: impl AsRef<Path>) -> FileResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(FileError::io("read", path))?;
        let text = String::from_utf8(bytes).map_err(|_| FileError::NotUtf8(path.to_path_buf()))?;
        let (bom, body) = match text.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };

        let mut lines = Vec::new();
        let mut endings = Vec::new();
        for chunk in body.split_inclusive('\n') {
            if let Some(line) = chunk.strip_suffix("\r\n") {
                lines.push(line.to_owned());
                endings.push(LineEnding::CrLf);
            } else if let Some(line) = chunk.strip_suffix('\n') {
                lines.push(line.to_owned());
                endings.push(LineEnding::Lf);
            } else {
                lines.push(chunk.to_owned());
            }
        }

        let crlf = endings.iter().filter(|e| **e == LineEnding::CrLf).count();
        let dominant = if crlf > 0 && crlf >= endings.len() - crlf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
        debug!(?path, lines = lines.len(), bom, ?dominant, "read source file");

        Ok(Self {
            path: path.to_path_buf(),
            lines,
            endings,
            dominant,
            bom,
            trailing_newline: body.ends_with('\n'),
        })
    }

    /// Returns the lines, without terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn ending_after(&self, index: usize) -> &'static str {
        self.endings
            .get(index)
            .copied()
            .unwrap_or(self.dominant)
            .as_str()
    }

    /// Joins `lines` the way this file was laid out.
    ///
    /// Line `i` keeps the terminator line `i` had on disk; lines past the
    /// original end use the file's dominant terminator.
    #[must_use]
    pub fn render(&self, lines: &[String]) -> String {
        let mut out = String::new();
        if self.bom {
            out.push_str(BOM);
        }
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                out.push_str(self.ending_after(index - 1));
            }
            out.push_str(line);
        }
        if self.trailing_newline && !lines.is_empty() {
            out.push_str(self.ending_after(lines.len() - 1));
        }
        out
    }

    /// Replaces the file on disk with `lines`.
    ///
    /// The content goes to `<path><temp_extension>` first, which then takes
    /// the original's place. The original's permissions, read-only flag
    /// included, are reapplied to the replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if any step of the swap fails.
    #[allow(clippy::permissions_set_readonly_false)]
    pub fn write_in_place(&self, lines: &[String], temp_extension: &str) -> FileResult<()> {
        let temp = temp_path(&self.path, temp_extension);
        fs::write(&temp, self.render(lines)).map_err(FileError::io("write", &temp))?;
        trace!(?temp, "wrote temporary file");

        let original = fs::metadata(&self.path)
            .map_err(FileError::io("inspect", &self.path))?
            .permissions();
        let read_only = original.readonly();

        if read_only {
            let mut writable = original.clone();
            writable.set_readonly(false);
            fs::set_permissions(&self.path, writable)
                .map_err(FileError::io("clear the read-only flag of", &self.path))?;
        }

        fs::remove_file(&self.path).map_err(FileError::io("delete", &self.path))?;
        fs::rename(&temp, &self.path).map_err(FileError::io("rename", &temp))?;
        fs::set_permissions(&self.path, original)
            .map_err(FileError::io("restore the permissions of", &self.path))?;

        debug!(path = ?self.path, read_only, "replaced source file");
        Ok(())
    }
}

fn temp_path(path: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(extension);
    PathBuf::from(name)
}

/// Returns true if some other file beside `target`, or in the directory
/// above it, looks modified since `target` was last written.
///
/// A file counts when it is newer than `target`, or, on Windows, when its
/// Archive attribute is set. Directories further up are never inspected.
///
/// # Errors
///
/// Returns an error if `target` or either directory cannot be read.
pub fn sources_modified(target: &Path) -> FileResult<bool> {
    let target = fs::canonicalize(target).map_err(FileError::io("resolve", target))?;
    let written = fs::metadata(&target)
        .and_then(|meta| meta.modified())
        .map_err(FileError::io("inspect", &target))?;

    let home = target
        .parent()
        .ok_or_else(|| FileError::NoParent(target.clone()))?;

    for dir in std::iter::once(home).chain(home.parent()) {
        if directory_has_newer_file(dir, &target, written)? {
            return Ok(true);
        }
    }

    Ok(false)
}

fn directory_has_newer_file(dir: &Path, target: &Path, written: SystemTime) -> FileResult<bool> {
    let entries = fs::read_dir(dir).map_err(FileError::io("list", dir))?;

    for entry in entries {
        let entry = entry.map_err(FileError::io("list", dir))?;
        let path = entry.path();
        if path == target {
            continue;
        }

        let meta = entry.metadata().map_err(FileError::io("inspect", &path))?;
        if !meta.is_file() {
            continue;
        }

        if has_archive_flag(&meta) {
            debug!(?path, "archive flag set");
            return Ok(true);
        }

        if meta.modified().is_ok_and(|modified| modified > written) {
            debug!(?path, "newer than target");
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(windows)]
fn has_archive_flag(meta: &fs::Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_ARCHIVE: u32 = 0x20;
    meta.file_attributes() & FILE_ATTRIBUTE_ARCHIVE != 0
}

#[cfg(not(windows))]
fn has_archive_flag(_meta: &fs::Metadata) -> bool {
    false
}
