//! Rewrites the paths of file items flowing through a pipeline.
//!
//! Each item's path relative to its base is split into directory, base name
//! and extension, a [`RenameRule`](rule::RenameRule) computes the new
//! relative path, and the item (together with its source map) is moved there.
//!
//! ```
//! use path_rename::prelude::*;
//!
//! let mut pipeline = Pipeline::new()
//!     .with_stage(Renamer::new(PathDescriptor::new().prefix("test-"), RenameOptions::default()))
//!     .with_stage(Renamer::new(
//!         PathDescriptor::new().extname(".min.css"),
//!         RenameOptions::default(),
//!     ));
//!
//! let item = FileItem::new("fixtures", "fixtures/fixture.css")
//!     .with_source_map(SourceMap::new("fixture.css"));
//! let item = pipeline.process(item)?;
//!
//! assert_eq!(item.relative(), "test-fixture.min.css");
//! assert_eq!(item.source_map().unwrap().file, "test-fixture.min.css");
//! # Ok::<(), Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod item;
pub mod logging;
pub mod path;
pub mod pipeline;
pub mod renamer;
pub mod rule;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{CliOptions, get_options, get_options_from};
    pub use crate::config::{
        Config, load_config, load_config_from_str, locate_config, resolve_log_file,
    };
    pub use crate::errors::{
        config_parsing_error, file_operation_error, generic_error, invalid_filename_error,
        invalid_rule_error, unsupported_rule_type_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::item::{FileItem, SourceMap};
    pub use crate::logging::{LogLevel, format_rename, init_logger};
    pub use crate::path::{PathParts, join, parse_path};
    pub use crate::pipeline::{Pipeline, PipelineStats};
    pub use crate::renamer::{RenameOptions, Renamer};
    pub use crate::rule::{MergedPath, PathDescriptor, RenameRule};
}
