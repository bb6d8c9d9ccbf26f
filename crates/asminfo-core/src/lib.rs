//! Core library for asminfo.
//!
//! This crate rewrites the version and copyright attributes of
//! `AssemblyInfo.cs` and `AssemblyInfo.vb` files one line at a time.

mod clock;
mod copyright;
mod dialect;
mod driver;
mod error;
mod files;
mod mutator;
mod notice;
mod options;
mod status;
mod update;
mod version;

pub use clock::{Clock, FixedClock, SystemClock};
pub use copyright::{CopyrightOutcome, fix_copyright_year};
pub use dialect::{Attribute, COPYRIGHT_MARKER, Dialect};
pub use driver::{Rewrite, rewrite_lines};
pub use error::{FileError, FileResult};
pub use files::{SourceFile, sources_modified};
pub use mutator::{LineMutation, SkipReason, mutate_line};
pub use notice::Notice;
pub use options::{RunConfig, Strategy};
pub use status::ExitStatus;
pub use update::{DEFAULT_TEMP_EXTENSION, update_assembly_info};
pub use version::{
    ComponentPosition, Increment, WILDCARD, increment_component, semantic_version,
};
