use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::constants::{
    BASE_HELP, BASENAME_HELP, CONFIG_HELP, DIRNAME_HELP, EXTNAME_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, MULTI_EXT_HELP, PATHS_HELP, PREFIX_HELP, SUFFIX_HELP,
    TO_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::rule::{PathDescriptor, RenameRule};

const DESCRIPTOR_ARGS: [&str; 5] = ["dirname", "prefix", "suffix", "basename", "extname"];

/// Options gathered from the command line
#[derive(Debug, Clone)]
pub struct CliOptions {
    /// Configuration file, if one was given
    pub config: Option<String>,
    /// Base directory overriding the configured one
    pub base: Option<String>,
    /// Multi-extension mode requested on the command line
    pub multi_ext: bool,
    /// Rule built from the rule flags, replacing the configured rules
    pub rule: Option<RenameRule>,
    /// Paths to rename; empty means read them from stdin
    pub paths: Vec<String>,
    pub verbosity: LogLevel,
    pub log_file: String,
    pub log_locally: bool,
}

/// Builds the command-line definition
///
/// Defines the following arguments:
/// - `config`: Path to the configuration file
/// - `base`: Base directory of the paths
/// - `multi_ext`: Multi-extension mode
/// - `to`, `dirname`, `prefix`, `suffix`, `basename`, `extname`: Rule flags
/// - `verbose`, `log_file`, `log_locally`: Logging
/// - `paths`: Paths to rename
pub fn build_command() -> Command {
    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP);

    let arg_base = Arg::new("base")
        .short('b')
        .long("base")
        .value_name("DIR")
        .help(BASE_HELP);

    let arg_multi_ext = Arg::new("multi_ext")
        .short('m')
        .long("multi-ext")
        .help(MULTI_EXT_HELP)
        .action(ArgAction::SetTrue);

    // a literal path cannot be combined with descriptor flags
    let arg_to = Arg::new("to")
        .short('t')
        .long("to")
        .value_name("PATH")
        .help(TO_HELP)
        .conflicts_with_all(DESCRIPTOR_ARGS);

    let arg_dirname = Arg::new("dirname")
        .short('d')
        .long("dirname")
        .allow_hyphen_values(true)
        .help(DIRNAME_HELP);

    let arg_prefix = Arg::new("prefix")
        .short('p')
        .long("prefix")
        .allow_hyphen_values(true)
        .help(PREFIX_HELP);

    let arg_suffix = Arg::new("suffix")
        .short('s')
        .long("suffix")
        .allow_hyphen_values(true)
        .help(SUFFIX_HELP);

    let arg_basename = Arg::new("basename")
        .short('B')
        .long("basename")
        .allow_hyphen_values(true)
        .help(BASENAME_HELP);

    let arg_extname = Arg::new("extname")
        .short('e')
        .long("extname")
        .help(EXTNAME_HELP);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    let arg_paths = Arg::new("paths")
        .help(PATHS_HELP)
        .num_args(0..)
        .action(ArgAction::Append);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_config)
        .arg(arg_base)
        .arg(arg_multi_ext)
        .arg(arg_to)
        .arg(arg_dirname)
        .arg(arg_prefix)
        .arg(arg_suffix)
        .arg(arg_basename)
        .arg(arg_extname)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .arg(arg_paths)
}

/// Parses the process arguments
pub fn get_options() -> Result<CliOptions> {
    options_from_matches(&build_command().get_matches())
}

/// Parses an explicit argument list, the first item being the program name
///
/// # Errors
/// Returns an error if the arguments do not match the command definition
pub fn get_options_from<I, T>(args: I) -> Result<CliOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_command()
        .try_get_matches_from(args)
        .map_err(|e| generic_error(&e.to_string()))?;
    options_from_matches(&matches)
}

/// Extracts the options from parsed arguments
pub fn options_from_matches(matches: &ArgMatches) -> Result<CliOptions> {
    Ok(CliOptions {
        config: matches.get_one::<String>("config").cloned(),
        base: matches.get_one::<String>("base").cloned(),
        multi_ext: matches.get_flag("multi_ext"),
        rule: get_rule(matches),
        paths: matches
            .get_many::<String>("paths")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default(),
        verbosity: get_verbosity(matches),
        log_file: matches
            .get_one::<String>("log_file")
            .cloned()
            .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string()),
        log_locally: matches.get_flag("log_locally"),
    })
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Builds the rule described by the rule flags, if any was given
pub fn get_rule(matches: &ArgMatches) -> Option<RenameRule> {
    if let Some(to) = matches.get_one::<String>("to") {
        return Some(RenameRule::literal(to.clone()));
    }

    let value = |name: &str| matches.get_one::<String>(name).cloned();
    let descriptor = PathDescriptor {
        dirname: value("dirname"),
        prefix: value("prefix"),
        suffix: value("suffix"),
        basename: value("basename"),
        extname: value("extname"),
    };

    if descriptor.is_empty() {
        None
    } else {
        Some(RenameRule::Descriptor(descriptor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = get_options_from(["frename", "a.txt", "b.txt"]).unwrap();

        assert_eq!(options.config, None);
        assert_eq!(options.base, None);
        assert!(!options.multi_ext);
        assert!(options.rule.is_none());
        assert_eq!(options.paths, vec!["a.txt", "b.txt"]);
        assert_eq!(options.verbosity, LogLevel::Warning);
        assert_eq!(options.log_file, "");
        assert!(!options.log_locally);
    }

    #[test]
    fn test_literal_rule() {
        let options = get_options_from(["frename", "--to", "hola.md", "hello.txt"]).unwrap();
        assert!(matches!(options.rule, Some(RenameRule::Literal(ref path)) if path == "hola.md"));
    }

    #[test]
    fn test_descriptor_rule() {
        let options =
            get_options_from(["frename", "-p", "bonjour-", "-s", "-hola", "-d", "", "x.txt"])
                .unwrap();

        match options.rule {
            Some(RenameRule::Descriptor(descriptor)) => {
                assert_eq!(descriptor.prefix.as_deref(), Some("bonjour-"));
                assert_eq!(descriptor.suffix.as_deref(), Some("-hola"));
                assert_eq!(descriptor.dirname.as_deref(), Some(""));
                assert_eq!(descriptor.basename, None);
            }
            other => panic!("expected a descriptor, got {other:?}"),
        }
    }

    #[test]
    fn test_literal_conflicts_with_descriptor() {
        assert!(get_options_from(["frename", "--to", "a.md", "--prefix", "x-"]).is_err());
    }

    #[test]
    fn test_verbosity_and_flags() {
        let options = get_options_from(["frename", "-vv", "-m", "-b", "src", "-L"]).unwrap();

        assert_eq!(options.verbosity, LogLevel::Debug);
        assert!(options.multi_ext);
        assert_eq!(options.base.as_deref(), Some("src"));
        assert!(options.log_locally);
        assert!(options.paths.is_empty());
    }
}
