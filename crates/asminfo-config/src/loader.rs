//! Configuration loader.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "asminfo.toml";

/// Loads and validates configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(ConfigError::io("read", path))?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    Ok(config)
}

/// Finds the nearest configuration file, starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
pub fn find_config_from(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    let mut dir = start_dir.as_ref();

    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        dir = dir.parent()?;
    }
}

/// Loads the configuration that applies to `target`.
///
/// An explicit path must exist. Otherwise the nearest `asminfo.toml` above
/// the target is used, and defaults apply when there is none.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be loaded.
pub fn load_config_for(target: &Path, explicit: Option<&Path>) -> ConfigResult<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let start = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().map_err(ConfigError::io("resolve", "."))?,
    };

    match find_config_from(&start) {
        Some(path) => load_config(path),
        None => {
            debug!(?start, "no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_name() {
        assert_eq!(CONFIG_FILE_NAME, "asminfo.toml");
    }

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/asminfo.toml");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert!(path.to_string_lossy().contains("asminfo.toml"));
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_config_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::InvalidToml(_))));
    }

    #[test]
    fn test_load_config_invalid_value() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[output]\ntemp_extension = \"\"\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_config_custom_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"
            [defaults]
            file_version = true
            copyright_year = true

            [output]
            temp_extension = ".tmp"
        "#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert!(config.defaults.file_version);
        assert!(config.defaults.copyright_year);
        assert!(!config.defaults.assembly_version);
        assert_eq!(config.output.temp_extension, ".tmp");
    }

    #[cfg(unix)]
    #[test]
    fn test_load_config_unreadable_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::create_dir(&config_path).unwrap();

        match load_config(&config_path) {
            Err(ConfigError::Io { action, path, .. }) => {
                assert_eq!(action, "read");
                assert_eq!(path, config_path);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_find_config_in_parent() {
        let parent_dir = TempDir::new().unwrap();
        let config_path = parent_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[defaults]\ncopyright_year = true\n").unwrap();

        let child_dir = parent_dir.path().join("Properties");
        fs::create_dir(&child_dir).unwrap();

        assert_eq!(find_config_from(&child_dir), Some(config_path));
    }

    #[test]
    fn test_load_config_for_target() {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join(CONFIG_FILE_NAME),
            "[defaults]\nonly_when_modified = true\n",
        )
        .unwrap();
        let properties = project.path().join("Properties");
        fs::create_dir(&properties).unwrap();

        let config = load_config_for(&properties.join("AssemblyInfo.cs"), None).unwrap();
        assert!(config.defaults.only_when_modified);
    }

    #[test]
    fn test_load_config_for_explicit_missing() {
        let dir = TempDir::new().unwrap();
        let result = load_config_for(
            &dir.path().join("AssemblyInfo.cs"),
            Some(&dir.path().join("missing.toml")),
        );
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
