//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Message carried by the unsupported rule type error
///
/// Callers match on this text, so it must stay stable.
pub const UNSUPPORTED_RULE_MESSAGE: &str = "Unsupported renaming parameter type supplied";

/// Path separator used when decomposing and joining relative paths
pub const SEPARATOR: char = '/';

/// Directory name used when a path has no directory component
pub const CURRENT_DIR: &str = ".";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the platform configuration directory.
pub const APPLICATION: &str = "path_rename";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read renaming rules from a specific config file";

/// Help text for the base command-line option
pub const BASE_HELP: &str = "Base directory the given paths are relative to";

/// Help text for the multi-extension command-line option
pub const MULTI_EXT_HELP: &str =
    "Treat everything from the first dot of the file name as the extension";

/// Help text for the literal path command-line option
pub const TO_HELP: &str = "Replace the whole relative path with this value";

/// Help text for the dirname command-line option
pub const DIRNAME_HELP: &str = "Replace the directory of the relative path";

/// Help text for the prefix command-line option
pub const PREFIX_HELP: &str = "Prepend a value to the file base name";

/// Help text for the suffix command-line option
pub const SUFFIX_HELP: &str = "Append a value to the file base name";

/// Help text for the basename command-line option
pub const BASENAME_HELP: &str = "Replace the file base name";

/// Help text for the extname command-line option
pub const EXTNAME_HELP: &str = "Replace the file extension (including the leading dot)";

/// Help text for the paths positional argument
pub const PATHS_HELP: &str = "Paths to rename; read from stdin when omitted";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file relative to the working directory";

/// Default log file name, empty meaning console output only
pub const LOG_FILE_DEFAULT: &str = "";
