//! CLI definition.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use thiserror::Error;
use tracing::{error, warn};

use asminfo_config::load_config_for;
use asminfo_core::{
    ComponentPosition, ExitStatus, RunConfig, Strategy, SystemClock, sources_modified,
    update_assembly_info,
};

const SETTINGS_INDENT: &str = "    ";

/// Bump version attributes and copyright years in AssemblyInfo.cs and AssemblyInfo.vb files.
///
/// The classic switches -set:<version>, -inc:<position>, -av, -fv, -cy,
/// -onlywhenmodified and -stop are accepted as well.
#[derive(Debug, Parser)]
#[command(name = "asminfo")]
#[command(version)]
pub struct Cli {
    /// Path to the AssemblyInfo.cs or AssemblyInfo.vb file
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Set the whole version to this value (NN.NN.NN.NN)
    #[arg(long, value_name = "VERSION", allow_hyphen_values = true)]
    pub set: Option<String>,

    /// Increment the version component at this position (1 to 4)
    #[arg(long = "inc", value_name = "POSITION", allow_hyphen_values = true)]
    pub increment: Option<String>,

    /// Update AssemblyVersion
    #[arg(long = "av")]
    pub assembly_version: bool,

    /// Update AssemblyFileVersion
    #[arg(long = "fv")]
    pub file_version: bool,

    /// Update the copyright year when it is a hyphenated range
    #[arg(long = "cy")]
    pub copyright_year: bool,

    /// Do nothing unless a file beside the target, or one directory up, is newer
    #[arg(long)]
    pub only_when_modified: bool,

    /// Wait for Return before exiting
    #[arg(long)]
    pub stop: bool,

    /// Use this configuration file instead of the nearest asminfo.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line problems detected before any file is touched.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// No file name was given.
    #[error("Error: You must specify the name of the file to process.")]
    NoFilename,

    /// The file does not exist.
    #[error("Error: Can not find file \"{0}\"")]
    FileNotFound(PathBuf),

    /// The increment position is not a number.
    #[error("Error: Increment value must be numeric.\n       Specified value = \"{0}\"")]
    IncrementNotNumeric(String),

    /// The increment position is outside the accepted range.
    #[error(
        "Error: Increment value must be between {min} and {max}.\n       Specified value = {value}"
    )]
    IncrementOutOfRange { min: usize, max: usize, value: i64 },
}

impl PreflightError {
    /// Returns the exit status reported for this error.
    #[must_use]
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::NoFilename => ExitStatus::NoFilename,
            Self::FileNotFound(_) => ExitStatus::FileNotFound,
            Self::IncrementNotNumeric(_) => ExitStatus::IncrementMustBeNumeric,
            Self::IncrementOutOfRange { .. } => ExitStatus::IncrementOutOfRange,
        }
    }
}

/// A validated command line.
#[derive(Debug)]
struct Request {
    file: PathBuf,
    increment: Option<ComponentPosition>,
}

impl Cli {
    /// Runs the CLI command, returning the status to exit with.
    pub fn run(self) -> ExitStatus {
        let request = match self.preflight() {
            Ok(request) => request,
            Err(err) => {
                eprintln!("{err}\n");
                eprintln!("{}", Self::command().render_help());
                return err.exit_status();
            }
        };

        let status = match self.execute(&request) {
            Ok(status) => status,
            Err(err) => {
                report_runtime_error(&err);
                ExitStatus::Runtime
            }
        };

        println!("{SETTINGS_INDENT}Done!");
        status
    }

    fn preflight(&self) -> Result<Request, PreflightError> {
        let increment = self
            .increment
            .as_deref()
            .map(parse_increment)
            .transpose()?;

        let file = self.file.clone().ok_or(PreflightError::NoFilename)?;
        if !file.is_file() {
            return Err(PreflightError::FileNotFound(file));
        }

        Ok(Request { file, increment })
    }

    fn execute(&self, request: &Request) -> Result<ExitStatus> {
        let file = request.file.as_path();
        let config = load_config_for(file, self.config.as_deref())
            .context("failed to load configuration")?;

        if self.set.is_some() && request.increment.is_some() {
            warn!("both a literal version and an increment were given; the literal wins");
        }

        let run = RunConfig::new(
            self.assembly_version || config.defaults.assembly_version,
            self.file_version || config.defaults.file_version,
            self.copyright_year || config.defaults.copyright_year,
            Strategy::resolve(self.set.clone(), request.increment),
        );
        report_settings(file, &run);

        let only_when_modified = self.only_when_modified || config.defaults.only_when_modified;
        if only_when_modified
            && !sources_modified(file).context("failed to inspect neighbouring files")?
        {
            println!(
                "\nSince the project is unchanged, {} remains unchanged and unexamined.\n",
                display_name(file)
            );
            return Ok(ExitStatus::Success);
        }

        let rewrite = update_assembly_info(
            file,
            &run,
            &SystemClock,
            &config.output.temp_extension,
        )
        .with_context(|| format!("failed to update {}", file.display()))?;

        for notice in &rewrite.notices {
            if notice.is_error() {
                eprintln!("\n{notice}");
            } else {
                println!("\n{notice}");
            }
        }

        if rewrite.invalid_component {
            Ok(ExitStatus::InvalidVersionSubstring)
        } else {
            Ok(ExitStatus::Success)
        }
    }
}

/// Reports a command line clap rejected, returning the status to exit with.
///
/// Stray arguments never reach this point, so what is left is an option
/// missing its value or a value that is not valid text.
pub fn report_usage_error(err: &clap::Error) -> ExitStatus {
    error!(kind = ?err.kind(), "command line rejected");
    eprintln!("{err}");
    eprintln!("{}", Cli::command().render_help());
    ExitStatus::Runtime
}

fn parse_increment(value: &str) -> Result<ComponentPosition, PreflightError> {
    let number: i64 = value
        .trim()
        .parse()
        .map_err(|_| PreflightError::IncrementNotNumeric(value.to_string()))?;

    ComponentPosition::new(number).ok_or(PreflightError::IncrementOutOfRange {
        min: ComponentPosition::MIN,
        max: ComponentPosition::MAX,
        value: number,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn report_settings(file: &Path, run: &RunConfig) {
    println!("Processing \"{}\":", file.display());

    let attributes = match (run.fix_assembly_version, run.fix_file_version) {
        (true, true) => "both AssemblyVersion and AssemblyFileVersion",
        (true, false) => "AssemblyVersion",
        _ => "AssemblyFileVersion",
    };
    println!("{SETTINGS_INDENT}Updating {attributes}");

    match &run.strategy {
        Strategy::Set(value) => println!("{SETTINGS_INDENT}Setting the version to {value}"),
        Strategy::Increment(position) => {
            println!("{SETTINGS_INDENT}Incrementing version component {position}");
        }
        Strategy::Keep => println!("{SETTINGS_INDENT}Leaving version numbers as they are"),
    }

    if run.fix_copyright_year {
        println!("{SETTINGS_INDENT}Updating the Copyright year if needed");
    }
}

fn report_runtime_error(err: &anyhow::Error) {
    error!(error = ?err, "run failed");

    eprintln!("\nAn unexpected error arose.");
    eprintln!("    Message   : {err}");
    for cause in err.chain().skip(1) {
        eprintln!("    Caused by : {cause}");
    }
    if let Some(root) = err.chain().last() {
        eprintln!("    Kind      : {}", error_kind(root));
    }

    let backtrace = err.backtrace();
    if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
        eprintln!("    StackTrace:\n{backtrace}");
    }
}

fn error_kind(err: &(dyn std::error::Error + 'static)) -> String {
    if let Some(io) = err.downcast_ref::<std::io::Error>() {
        return format!("I/O ({})", io.kind());
    }
    if err.downcast_ref::<asminfo_core::FileError>().is_some() {
        return "file".to_string();
    }
    if err.downcast_ref::<asminfo_config::ConfigError>().is_some() {
        return "configuration".to_string();
    }
    "other".to_string()
}
