//! Configuration data structures

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::errors::{Result, generic_error};
use crate::pipeline::Pipeline;
use crate::renamer::{RenameOptions, Renamer};

/// Renaming configuration
///
/// ```yaml
/// multi_ext: false
/// base: ~/project/assets
/// rename:
///   - prefix: "test-"
///   - extname: ".md"
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Treat everything from the first dot of the file name as the extension
    #[serde(default)]
    pub multi_ext: bool,
    /// Base directory paths are relative to
    #[serde(default, deserialize_with = "deserialize_expanded_path")]
    pub base: Option<String>,
    /// Rule, or chain of rules, applied to each path
    #[serde(default)]
    pub rename: Option<RuleValues>,
}

/// One rule value or a chain of them
///
/// Rule values stay untyped here so that a rule of unsupported shape is
/// reported per item rather than when the file is loaded.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RuleValues {
    /// Several rules applied one after another
    Chain(Vec<Value>),
    /// A single rule
    Single(Value),
}

impl Config {
    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error when the rule chain is empty
    pub fn validate(&self) -> Result<()> {
        if let Some(RuleValues::Chain(values)) = &self.rename
            && values.is_empty()
        {
            return Err(generic_error(
                "The rename list is empty. Specify at least one renaming rule.",
            ));
        }
        Ok(())
    }

    pub fn options(&self) -> RenameOptions {
        RenameOptions::multi_ext(self.multi_ext)
    }

    /// The configured rule values, in the order they apply
    ///
    /// A configuration without rules yields a single null value, which
    /// rejects every item.
    pub fn rule_values(&self) -> Vec<Value> {
        match &self.rename {
            None => vec![Value::Null],
            Some(RuleValues::Single(value)) => vec![value.clone()],
            Some(RuleValues::Chain(values)) => values.clone(),
        }
    }

    /// Builds a pipeline with one stage per configured rule
    ///
    /// # Errors
    /// Returns an error when a descriptor rule has fields that are not strings
    pub fn build_pipeline(&self) -> Result<Pipeline> {
        let options = self.options();
        self.rule_values()
            .iter()
            .try_fold(Pipeline::new(), |pipeline, value| {
                Ok(pipeline.with_stage(Renamer::from_value(value, options)?))
            })
    }
}

fn deserialize_expanded_path<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let path: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(path.map(|p| shellexpand::tilde(&p).into_owned()))
}
