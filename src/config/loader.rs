//! Configuration loading functionality

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde_yaml::from_str;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{
    Result, config_parsing_error, file_operation_error, generic_error, invalid_filename_error,
};

use super::model::Config;

/// Loads a configuration from a file
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid UTF-8, is not
/// valid YAML or fails validation
pub fn load_config(file: &Path) -> Result<Config> {
    let file_content =
        fs::read(file).map_err(|e| file_operation_error(e, file.to_path_buf(), "read"))?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        config_parsing_error(
            e,
            &format!("{} contains invalid UTF-8 characters", file.display()),
        )
    })?;

    let config = load_config_from_str(&content_str)?;
    debug!("Loaded configuration from {}", file.display());
    Ok(config)
}

/// Parses and validates a configuration from YAML text
///
/// # Errors
/// Returns an error if the text is not valid YAML or fails validation
pub fn load_config_from_str(content: &str) -> Result<Config> {
    let config: Config = from_str(content).map_err(|e| {
        let detail = format!("{e}. Please check the YAML syntax.");
        config_parsing_error(e, &detail)
    })?;

    config.validate()?;
    Ok(config)
}

/// Resolves the configuration path given on the command line
///
/// The path is tilde-expanded first. A relative path that does not exist is
/// looked up in the platform configuration directory.
///
/// # Errors
/// Returns an error if the file exists in neither location
pub fn locate_config(path: &str) -> Result<PathBuf> {
    let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
    if expanded.exists() {
        return Ok(expanded);
    }

    if expanded.is_relative() {
        let candidate = project_dirs()?.config_dir().join(&expanded);
        debug!("Looking for configuration in {}", candidate.display());
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(file_operation_error(
        io::Error::new(io::ErrorKind::NotFound, "configuration file not found"),
        expanded,
        "locate",
    ))
}

/// Platform directories of the application
pub(crate) fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))
}

/// Resolves where the log file should be written
///
/// Unless `locally` is set, relative names are placed in the platform
/// configuration directory.
pub fn resolve_log_file(name: &str, locally: bool) -> Result<String> {
    if name.is_empty() || locally || Path::new(name).is_absolute() {
        return Ok(name.to_string());
    }

    let folder = project_dirs()?;
    if !folder.config_dir().exists() {
        fs::create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }

    let path = folder.config_dir().join(name);
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_filename_error(path.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_str() {
        let config = load_config_from_str("rename:\n  suffix: -min\n").unwrap();
        assert_eq!(config.build_pipeline().unwrap().len(), 1);
    }

    #[test]
    fn test_load_config_from_str_invalid_yaml() {
        let err = load_config_from_str("rename: [unclosed").unwrap_err();
        assert!(format!("{err}").contains("Please check the YAML syntax"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(format!("{err}").contains("Failed to read file"));
    }

    #[test]
    fn test_locate_config_missing() {
        assert!(locate_config("/definitely/not/here.yaml").is_err());
    }

    #[test]
    fn test_resolve_log_file() {
        assert_eq!(resolve_log_file("", false).unwrap(), "");
        assert_eq!(resolve_log_file("run.log", true).unwrap(), "run.log");
        assert_eq!(resolve_log_file("/tmp/run.log", false).unwrap(), "/tmp/run.log");
    }
}
