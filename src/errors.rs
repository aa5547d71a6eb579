use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::constants::UNSUPPORTED_RULE_MESSAGE;

/// Custom error type for the path renaming library
#[derive(Debug)]
pub enum Error {
    /// The renaming rule is not a literal path, a descriptor or a function
    UnsupportedRuleType,
    /// A descriptor rule carries a field that cannot be used as a path part
    InvalidRule { detail: String },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Error related to reading configuration or log files
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl Error {
    /// Whether this error is the per-item rejection of an unusable rule
    pub fn is_unsupported_rule(&self) -> bool {
        matches!(self, Error::UnsupportedRuleType)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedRuleType => write!(f, "{UNSUPPORTED_RULE_MESSAGE}"),
            Error::InvalidRule { detail } => write!(f, "Invalid renaming rule: {detail}"),
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => write!(f, "{message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        let detail = err.to_string();
        Error::ConfigParsing {
            source: Box::new(err),
            detail,
        }
    }
}

/// Custom Result type for the path renaming library
///
/// # Examples
/// ```
/// use path_rename::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create the unsupported rule type error
pub fn unsupported_rule_type_error() -> Error {
    Error::UnsupportedRuleType
}

/// Helper function to create an invalid rule error
pub fn invalid_rule_error(detail: &str) -> Error {
    Error::InvalidRule {
        detail: detail.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_rule_type_error() {
        let error = unsupported_rule_type_error();

        // The message is matched verbatim by callers
        assert_eq!(
            format!("{error}"),
            "Unsupported renaming parameter type supplied"
        );
        assert!(error.is_unsupported_rule());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_rule_error() {
        let error = invalid_rule_error("field 'extname' must be a string");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("extname"),
            "Error message should contain the detail"
        );
        assert!(!error.is_unsupported_rule());
    }

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = file_operation_error(io_error, path.clone(), "read");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("read"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_parsing_error() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "Invalid YAML");
        let error = config_parsing_error(io_error, "Missing required field");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Missing required field"),
            "Error message should contain the detail"
        );
    }

    #[test]
    fn test_invalid_filename_error() {
        let path = PathBuf::from("/test/invalid:file");
        let error = invalid_filename_error(path.clone());

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/invalid:file"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_generic_error() {
        let error = generic_error("Something went wrong");
        assert_eq!(format!("{error}"), "Something went wrong");
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        assert!(
            format!("{error}").contains("Failed to perform operation on file"),
            "Error message should contain the underlying error"
        );

        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let error: Error = yaml_error.into();
        assert!(
            format!("{error}").contains("Configuration parsing error"),
            "Error message should mention configuration parsing"
        );
    }
}
