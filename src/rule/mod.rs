//! Renaming rules
//!
//! A rule describes how the new relative path of an item is computed. It is
//! one of a literal path, a descriptor of path parts to replace, or a function
//! over the parsed path.

use std::fmt;
use std::sync::Arc;

use serde_yaml::Value;

use crate::errors::{Result, invalid_rule_error, unsupported_rule_type_error};
use crate::item::FileItem;
use crate::path::PathParts;

mod descriptor;
mod resolver;

pub use descriptor::{MergedPath, PathDescriptor};
pub use resolver::resolve_rule;

/// Function computing new path parts for an item
///
/// The function may edit the parts it receives in place and return `None`,
/// or return `Some` replacement parts which then take precedence over
/// anything it edited.
pub type RuleFn = Arc<dyn Fn(&mut PathParts, &FileItem) -> Option<PathParts> + Send + Sync>;

/// How a new relative path is derived for each item
#[derive(Clone)]
pub enum RenameRule {
    /// Replaces the whole relative path
    Literal(String),
    /// Replaces selected parts of the parsed path
    Descriptor(PathDescriptor),
    /// Computes the parts with a caller-supplied function
    Function(RuleFn),
}

impl RenameRule {
    /// Creates a rule replacing the whole relative path
    pub fn literal(path: impl Into<String>) -> Self {
        RenameRule::Literal(path.into())
    }

    /// Creates a rule from a function that may return replacement parts
    pub fn function<F>(func: F) -> Self
    where
        F: Fn(&mut PathParts, &FileItem) -> Option<PathParts> + Send + Sync + 'static,
    {
        RenameRule::Function(Arc::new(func))
    }

    /// Creates a rule from a function that only edits the parts in place
    ///
    /// # Examples
    /// ```
    /// use path_rename::prelude::*;
    ///
    /// let rule = RenameRule::mutate(|parts, _| parts.extname = ".md".to_string());
    /// let renamer = Renamer::new(rule, RenameOptions::default());
    /// let item = renamer.process(FileItem::new("/test", "/test/fixtures/hello.txt"))?;
    /// assert_eq!(item.relative(), "fixtures/hello.md");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn mutate<F>(func: F) -> Self
    where
        F: Fn(&mut PathParts, &FileItem) + Send + Sync + 'static,
    {
        RenameRule::function(move |parts, item| {
            func(parts, item);
            None
        })
    }

    /// Interprets a configuration value as a rule
    ///
    /// Strings become literal rules and mappings become descriptors. Any
    /// other shape is rejected with the unsupported rule type error, and a
    /// mapping whose fields are not strings with an invalid rule error.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(path) => Ok(RenameRule::Literal(path.clone())),
            Value::Mapping(_) => serde_yaml::from_value::<PathDescriptor>(value.clone())
                .map(RenameRule::Descriptor)
                .map_err(|e| invalid_rule_error(&e.to_string())),
            Value::Tagged(tagged) => RenameRule::from_value(&tagged.value),
            _ => Err(unsupported_rule_type_error()),
        }
    }
}

impl fmt::Debug for RenameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameRule::Literal(path) => f.debug_tuple("Literal").field(path).finish(),
            RenameRule::Descriptor(descriptor) => {
                f.debug_tuple("Descriptor").field(descriptor).finish()
            }
            RenameRule::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<&str> for RenameRule {
    fn from(path: &str) -> Self {
        RenameRule::Literal(path.to_string())
    }
}

impl From<String> for RenameRule {
    fn from(path: String) -> Self {
        RenameRule::Literal(path)
    }
}

impl From<PathDescriptor> for RenameRule {
    fn from(descriptor: PathDescriptor) -> Self {
        RenameRule::Descriptor(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_from_value_string() {
        let rule = RenameRule::from_value(&yaml("hola.md")).unwrap();
        assert!(matches!(rule, RenameRule::Literal(ref path) if path == "hola.md"));
    }

    #[test]
    fn test_from_value_mapping() {
        let rule = RenameRule::from_value(&yaml("prefix: bonjour-\nextname: ''")).unwrap();
        match rule {
            RenameRule::Descriptor(descriptor) => {
                assert_eq!(descriptor.prefix.as_deref(), Some("bonjour-"));
                assert_eq!(descriptor.extname.as_deref(), Some(""));
                assert_eq!(descriptor.dirname, None);
            }
            other => panic!("expected a descriptor, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_unsupported_shapes() {
        for text in ["~", "true", "1", "1.5", "[a, b]"] {
            let err = RenameRule::from_value(&yaml(text)).unwrap_err();
            assert!(err.is_unsupported_rule(), "{text} should be unsupported");
        }
    }

    #[test]
    fn test_from_value_invalid_descriptor_field() {
        let err = RenameRule::from_value(&yaml("extname: [1, 2]")).unwrap_err();
        assert!(!err.is_unsupported_rule());
        assert!(format!("{err}").contains("Invalid renaming rule"));
    }

    #[test]
    fn test_debug_hides_function() {
        let rule = RenameRule::mutate(|_, _| {});
        assert_eq!(format!("{rule:?}"), "Function(..)");
    }
}
