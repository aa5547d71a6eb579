//! The renaming pipeline stage
//!
//! A [`Renamer`] takes one item at a time, computes its new relative path
//! from the configured rule and rewrites the item's path and source map.

use log::{debug, warn};
use serde::Deserialize;
use serde_yaml::Value;

use crate::errors::{Result, unsupported_rule_type_error};
use crate::item::FileItem;
use crate::path::{join, parse_path};
use crate::rule::{RenameRule, resolve_rule};

/// Options controlling how paths are decomposed
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameOptions {
    /// Treat everything from the first dot of the file name as the extension
    #[serde(default)]
    pub multi_ext: bool,
}

impl RenameOptions {
    pub fn multi_ext(multi_ext: bool) -> Self {
        RenameOptions { multi_ext }
    }
}

/// A pass-through stage renaming every item it processes
///
/// The stage holds no mutable state, so one instance may process items from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct Renamer {
    /// `None` when the configured rule has an unsupported shape
    rule: Option<RenameRule>,
    options: RenameOptions,
}

impl Renamer {
    /// Creates a stage applying `rule`
    pub fn new(rule: impl Into<RenameRule>, options: RenameOptions) -> Self {
        Renamer {
            rule: Some(rule.into()),
            options,
        }
    }

    /// Creates a stage from a configuration value
    ///
    /// A value of unsupported shape (null, boolean, number, sequence) still
    /// yields a stage; every item it processes then fails with the
    /// unsupported rule type error.
    ///
    /// # Errors
    /// Returns an error when the value is a mapping with fields that are not
    /// strings
    pub fn from_value(value: &Value, options: RenameOptions) -> Result<Self> {
        let rule = match RenameRule::from_value(value) {
            Ok(rule) => Some(rule),
            Err(e) if e.is_unsupported_rule() => {
                warn!("Renaming rule {value:?} is not a path or a mapping; items will be rejected");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Renamer { rule, options })
    }

    /// Creates a stage without a rule, rejecting every item
    pub fn unsupported(options: RenameOptions) -> Self {
        Renamer {
            rule: None,
            options,
        }
    }

    pub fn rule(&self) -> Option<&RenameRule> {
        self.rule.as_ref()
    }

    pub fn options(&self) -> RenameOptions {
        self.options
    }

    /// Computes the new relative path of `item` without touching it
    ///
    /// # Errors
    /// Returns the unsupported rule type error if the rule cannot be applied
    pub fn rename_relative(&self, item: &FileItem) -> Result<String> {
        let rule = self.rule.as_ref().ok_or_else(unsupported_rule_type_error)?;
        let parts = parse_path(&item.relative(), self.options.multi_ext);
        resolve_rule(rule, &parts, item)
    }

    /// Renames a single item
    ///
    /// The item is only modified once its new path is known, so on error it
    /// is dropped untouched.
    ///
    /// # Examples
    /// ```
    /// use path_rename::prelude::*;
    ///
    /// let renamer =
    ///     Renamer::new(PathDescriptor::new().prefix("bonjour-"), RenameOptions::default());
    /// let item = renamer.process(FileItem::new("/test", "/test/fixtures/hello.txt"))?;
    /// assert_eq!(item.path(), "/test/fixtures/bonjour-hello.txt");
    /// # Ok::<(), Error>(())
    /// ```
    ///
    /// # Errors
    /// Returns the unsupported rule type error if the rule cannot be applied
    pub fn process(&self, mut item: FileItem) -> Result<FileItem> {
        let new_relative = self.rename_relative(&item)?;
        let new_path = join(&[item.base(), &new_relative]);
        debug!("Renaming {} to {}", item.path(), new_path);

        item.set_path(&new_path);

        let relative = item.relative();
        if let Some(source_map) = item.source_map_mut() {
            source_map.file = relative;
        }

        Ok(item)
    }

    /// Renames every item of a sequence, yielding one result per item
    ///
    /// A failing item does not stop the items after it.
    pub fn stream<'a, I>(&'a self, items: I) -> impl Iterator<Item = Result<FileItem>> + 'a
    where
        I: IntoIterator<Item = FileItem>,
        I::IntoIter: 'a,
    {
        items.into_iter().map(move |item| self.process(item))
    }
}
