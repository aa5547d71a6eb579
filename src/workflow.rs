//! Command-line workflow
//!
//! Ties the parsed options and configuration to a pipeline and prints the
//! renamed paths. No file is ever touched; only paths are rewritten.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::cli::CliOptions;
use crate::config::{Config, load_config, locate_config};
use crate::constants::CURRENT_DIR;
use crate::errors::{Result, invalid_filename_error};
use crate::item::FileItem;
use crate::logging::format_rename;
use crate::path::join;
use crate::pipeline::{Pipeline, PipelineStats};
use crate::renamer::{RenameOptions, Renamer};

/// Loads the configuration named on the command line, or the default one
///
/// # Errors
/// Returns an error if the file cannot be found, read or parsed
pub fn load_configuration(options: &CliOptions) -> Result<Config> {
    match &options.config {
        Some(path) => load_config(&locate_config(path)?),
        None => Ok(Config::default()),
    }
}

/// Builds the pipeline for a run
///
/// Rule flags on the command line replace the configured rules; the
/// multi-extension mode is on when either source asks for it.
///
/// # Errors
/// Returns an error when a configured descriptor has fields that are not
/// strings
pub fn build_pipeline(options: &CliOptions, config: &Config) -> Result<Pipeline> {
    let rename_options = RenameOptions::multi_ext(options.multi_ext || config.multi_ext);

    match &options.rule {
        Some(rule) => Ok(Pipeline::new().with_stage(Renamer::new(rule.clone(), rename_options))),
        None => Config {
            multi_ext: rename_options.multi_ext,
            ..config.clone()
        }
        .build_pipeline(),
    }
}

/// The base directory for a run, command line first
pub fn resolve_base(options: &CliOptions, config: &Config) -> String {
    options
        .base
        .clone()
        .or_else(|| config.base.clone())
        .unwrap_or_else(|| CURRENT_DIR.to_string())
}

/// Creates the item for a path given relative to `base`
///
/// Absolute paths are taken as they are; a relative base is then anchored
/// at the working directory so both sides compare lexically.
///
/// # Errors
/// Returns an error if the working directory cannot be determined or is not
/// valid Unicode
pub fn make_item(base: &str, path: &str) -> Result<FileItem> {
    if !Path::new(path).is_absolute() {
        return Ok(FileItem::new(base, &join(&[base, path])));
    }

    if Path::new(base).is_absolute() {
        return Ok(FileItem::new(base, path));
    }

    let cwd = env::current_dir()?;
    let cwd_str = cwd.to_str().ok_or_else(|| invalid_filename_error(cwd.clone()))?;
    Ok(FileItem::new(&join(&[cwd_str, base]), path))
}

/// Renames every path and writes one `old -> new` line per success
///
/// Rejected paths are logged by the pipeline and counted in the returned
/// statistics.
///
/// # Errors
/// Returns an error if the output cannot be written
pub fn rename_paths<I, W>(
    pipeline: &mut Pipeline,
    base: &str,
    paths: I,
    out: &mut W,
) -> Result<PipelineStats>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    for path in paths {
        let item = make_item(base, &path)?;
        let original = item.path().to_string();
        if let Ok(renamed) = pipeline.process(item) {
            writeln!(out, "{}", format_rename(&original, renamed.path()))?;
        }
    }

    Ok(pipeline.stats().clone())
}

/// Runs the whole command-line workflow
///
/// # Errors
/// Returns an error if the configuration is unusable or input and output
/// fail
pub fn run(options: &CliOptions) -> Result<PipelineStats> {
    let config = load_configuration(options)?;
    let mut pipeline = build_pipeline(options, &config)?;
    let base = resolve_base(options, &config);
    debug!("Renaming relative to {base} with {} stage(s)", pipeline.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = if options.paths.is_empty() {
        let paths = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()?
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty());
        rename_paths(&mut pipeline, &base, paths, &mut out)?
    } else {
        rename_paths(&mut pipeline, &base, options.paths.iter().cloned(), &mut out)?
    };

    info!(
        "Processed {} path(s): {} renamed, {} unchanged, {} rejected",
        stats.items_processed, stats.items_renamed, stats.items_unchanged, stats.errors
    );

    Ok(stats)
}
