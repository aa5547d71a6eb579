//! Chained renaming stages
//!
//! A [`Pipeline`] feeds each item through its stages in order and keeps
//! statistics about what happened to the items it saw.

use log::{debug, error};

use crate::errors::Result;
use crate::item::FileItem;
use crate::renamer::Renamer;

/// Statistics about the items a pipeline processed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Number of items fed into the pipeline
    pub items_processed: usize,
    /// Number of items emitted with a path different from their input path
    pub items_renamed: usize,
    /// Number of items emitted with an unchanged path
    pub items_unchanged: usize,
    /// Number of items rejected by a stage
    pub errors: usize,
}

impl PipelineStats {
    /// Increments the number of items processed
    pub fn increment_items_processed(&mut self) {
        self.items_processed += 1;
    }

    /// Increments the number of items renamed
    pub fn increment_items_renamed(&mut self) {
        self.items_renamed += 1;
    }

    /// Increments the number of items left unchanged
    pub fn increment_items_unchanged(&mut self) {
        self.items_unchanged += 1;
    }

    /// Increments the number of errors
    pub fn increment_errors(&mut self) {
        self.errors += 1;
    }
}

/// An ordered chain of renaming stages
///
/// An empty pipeline passes items through untouched.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<Renamer>,
    stats: PipelineStats,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline::default()
    }

    /// Appends a stage, returning the pipeline for chaining
    pub fn with_stage(mut self, stage: Renamer) -> Self {
        self.stages.push(stage);
        self
    }

    /// Appends a stage
    pub fn push_stage(&mut self, stage: Renamer) {
        self.stages.push(stage);
    }

    pub fn stages(&self) -> &[Renamer] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    /// Feeds one item through every stage
    ///
    /// # Errors
    /// Returns the error of the first stage rejecting the item; later stages
    /// do not see it
    pub fn process(&mut self, item: FileItem) -> Result<FileItem> {
        self.stats.increment_items_processed();
        let original_path = item.path().to_string();

        let result = self
            .stages
            .iter()
            .enumerate()
            .try_fold(item, |item, (index, stage)| {
                debug!("Stage {index} processing {}", item.path());
                stage.process(item)
            });

        match &result {
            Ok(item) if item.path() != original_path => self.stats.increment_items_renamed(),
            Ok(_) => self.stats.increment_items_unchanged(),
            Err(e) => {
                error!("{original_path}: {e}");
                self.stats.increment_errors();
            }
        }

        result
    }

    /// Feeds every item through the pipeline, yielding one result per item
    pub fn run<'a, I>(&'a mut self, items: I) -> impl Iterator<Item = Result<FileItem>> + 'a
    where
        I: IntoIterator<Item = FileItem>,
        I::IntoIter: 'a,
    {
        items.into_iter().map(move |item| self.process(item))
    }
}
