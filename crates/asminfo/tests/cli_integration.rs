//! End-to-end CLI integration tests.
//!
//! Each test writes an AssemblyInfo file into a temporary directory, runs the
//! asminfo binary against it and checks the exit code and the rewritten file.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;
use tempfile::TempDir;

const CSHARP: &str = "using System.Reflection;\n\
\n\
[assembly: AssemblyTitle(\"Widget\")]\n\
[assembly: AssemblyCopyright(\"Copyright 2019-2022, Acme Corp\")]\n\
// [assembly: AssemblyVersion(\"1.0.*\")]\n\
[assembly: AssemblyVersion(\"1.2.3.4\")]\n\
[assembly: AssemblyFileVersion(\"1.2.3.4\")]\n";

const VISUAL_BASIC: &str = "Imports System.Reflection\n\
\n\
<Assembly: AssemblyInformationalVersion(\"1.0.0-beta\")>\n\
<Assembly: AssemblyVersion(\"1.0.0.0\")>\n\
<Assembly: AssemblyFileVersion(\"1.0.0.0\")>\n";

fn asminfo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_asminfo"))
}

/// Writes `content` to `name` inside a fresh temporary directory.
fn project_with(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("failed to write assembly info");
    (temp_dir, path)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("failed to read assembly info")
}

#[test]
fn test_no_filename_exits_2() {
    asminfo()
        .arg("-fv")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "You must specify the name of the file to process.",
        ))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_missing_file_exits_3() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("AssemblyInfo.cs");

    asminfo()
        .arg(&missing)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Can not find file"));
}

#[test]
fn test_unknown_switch_is_taken_as_file_name() {
    asminfo()
        .arg("-bogus")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("asminfo, version"))
        .stdout(predicate::str::contains("Running time ="))
        .stderr(predicate::str::contains("Can not find file \"-bogus\""))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_last_file_name_wins() {
    let (dir, path) = project_with("a.cs", CSHARP);

    asminfo()
        .current_dir(dir.path())
        .args(["a.cs", "b.cs"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Can not find file \"b.cs\""));
    assert_eq!(read(&path), CSHARP);

    asminfo()
        .current_dir(dir.path())
        .args(["-bogus", "-set:5.0.0.0", "a.cs"])
        .assert()
        .success();
    assert!(read(&path).contains("[assembly: AssemblyVersion(\"5.0.0.0\")]"));
}

#[test]
fn test_option_missing_value_exits_1() {
    asminfo()
        .arg("--set")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Running time ="))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_stop_waits_for_return() {
    let (_dir, path) = project_with("AssemblyInfo.cs", CSHARP);

    asminfo()
        .arg(&path)
        .arg("-STOP")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please press Return to fully stop the program.",
        ));
}

#[test]
fn test_non_numeric_increment_exits_4() {
    let (_dir, path) = project_with("AssemblyInfo.cs", CSHARP);

    asminfo()
        .arg(&path)
        .arg("-inc:x")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Increment value must be numeric."));

    assert_eq!(read(&path), CSHARP);
}

#[test]
fn test_increment_out_of_range_exits_5() {
    let (_dir, path) = project_with("AssemblyInfo.cs", CSHARP);

    asminfo()
        .arg(&path)
        .arg("-inc:7")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("must be between 1 and 4"));

    assert_eq!(read(&path), CSHARP);
}

#[test]
fn test_set_rewrites_both_versions() {
    let (dir, path) = project_with("AssemblyInfo.cs", CSHARP);

    asminfo()
        .arg(&path)
        .arg("-set:2.1.0.7")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing"))
        .stdout(predicate::str::contains(
            "Updating both AssemblyVersion and AssemblyFileVersion",
        ))
        .stdout(predicate::str::contains("AssemblyInformationalVersion added"))
        .stdout(predicate::str::contains("Running time ="));

    let content = read(&path);
    assert!(content.contains("[assembly: AssemblyVersion(\"2.1.0.7\")]"));
    assert!(content.contains("[assembly: AssemblyFileVersion(\"2.1.0.7\")]"));
    assert!(content.ends_with("[assembly: AssemblyInformationalVersion(\"2.1.0\")]\n"));
    assert!(content.contains("// [assembly: AssemblyVersion(\"1.0.*\")]"));
    assert!(
        !dir.path().join("AssemblyInfo.cs.out").exists(),
        "temporary file should be renamed away"
    );
}

#[test]
fn test_visual_basic_increment() {
    let (_dir, path) = project_with("AssemblyInfo.vb", VISUAL_BASIC);

    asminfo().arg(&path).args(["-INC:2", "-fv"]).assert().success();

    assert_eq!(
        read(&path),
        "Imports System.Reflection\n\
         \n\
         <Assembly: AssemblyInformationalVersion(\"1.1.0\")>\n\
         <Assembly: AssemblyVersion(\"1.0.0.0\")>\n\
         <Assembly: AssemblyFileVersion(\"1.1.0.0\")>\n"
    );
}

#[test]
fn test_invalid_component_exits_6_and_still_writes() {
    let (_dir, path) = project_with(
        "AssemblyInfo.cs",
        "[assembly: AssemblyVersion(\"1.x.0.0\")]\n[assembly: AssemblyFileVersion(\"1.0.0.0\")]\n",
    );

    asminfo()
        .arg(&path)
        .arg("--inc=2")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("version substring = x"));

    let content = read(&path);
    assert!(content.contains("[assembly: AssemblyVersion(\"1.x.0.0\")]"));
    assert!(content.contains("[assembly: AssemblyFileVersion(\"1.1.0.0\")]"));
}

#[test]
fn test_copyright_year_bumped_to_current() {
    let (_dir, path) = project_with("AssemblyInfo.cs", CSHARP);
    let year = Local::now().year();

    asminfo().arg(&path).arg("-cy").assert().success();

    assert!(read(&path).contains(&format!(
        "[assembly: AssemblyCopyright(\"Copyright 2019-{year}, Acme Corp\")]"
    )));
}

#[cfg(not(windows))]
#[test]
fn test_only_when_modified_leaves_unchanged_project_alone() {
    let temp_dir = TempDir::new().unwrap();
    let properties = temp_dir.path().join("Widget").join("Properties");
    fs::create_dir_all(&properties).unwrap();
    let path = properties.join("AssemblyInfo.cs");
    fs::write(&path, CSHARP).unwrap();

    asminfo()
        .arg(&path)
        .args(["-set:9.9.9.9", "-OnlyWhenModified"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "AssemblyInfo.cs remains unchanged and unexamined",
        ));

    assert_eq!(read(&path), CSHARP);
}

#[test]
fn test_config_defaults_apply() {
    let (dir, path) = project_with("AssemblyInfo.cs", CSHARP);
    fs::write(
        dir.path().join("asminfo.toml"),
        "[defaults]\nassembly_version = true\n",
    )
    .unwrap();

    asminfo()
        .arg(&path)
        .arg("-set:3.0.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updating AssemblyVersion"));

    let content = read(&path);
    assert!(content.contains("[assembly: AssemblyVersion(\"3.0.0.0\")]"));
    assert!(content.contains("[assembly: AssemblyFileVersion(\"1.2.3.4\")]"));
    assert!(!content.contains("AssemblyInformationalVersion"));
}

#[test]
fn test_invalid_config_exits_1() {
    let (dir, path) = project_with("AssemblyInfo.cs", CSHARP);
    fs::write(dir.path().join("asminfo.toml"), "[output]\ntemp_extension = \"\"\n").unwrap();

    asminfo()
        .arg(&path)
        .arg("-set:3.0.0.0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load configuration"));

    assert_eq!(read(&path), CSHARP);
}
