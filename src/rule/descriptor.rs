use serde::Deserialize;

use crate::path::{PathParts, join};

/// Parts of a path to replace
///
/// Fields left unset keep the corresponding part of the parsed path. A field
/// set to an empty string removes that part.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PathDescriptor {
    /// Replacement directory; `""` or `./` moves the file to the base
    pub dirname: Option<String>,
    /// Text prepended to the base name
    pub prefix: Option<String>,
    /// Text appended to the base name
    pub suffix: Option<String>,
    /// Replacement base name
    pub basename: Option<String>,
    /// Replacement extension, including its leading dot
    pub extname: Option<String>,
}

impl PathDescriptor {
    pub fn new() -> Self {
        PathDescriptor::default()
    }

    pub fn dirname(mut self, dirname: impl Into<String>) -> Self {
        self.dirname = Some(dirname.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }

    pub fn extname(mut self, extname: impl Into<String>) -> Self {
        self.extname = Some(extname.into());
        self
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == PathDescriptor::default()
    }

    /// Fills the unset fields from the parsed path
    pub fn merge(&self, parts: &PathParts) -> MergedPath {
        MergedPath {
            dirname: self.dirname.clone().unwrap_or_else(|| parts.dirname.clone()),
            prefix: self.prefix.clone().unwrap_or_default(),
            suffix: self.suffix.clone().unwrap_or_default(),
            basename: self.basename.clone().unwrap_or_else(|| parts.basename.clone()),
            extname: self.extname.clone().unwrap_or_else(|| parts.extname.clone()),
        }
    }
}

/// A descriptor with every field resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPath {
    pub dirname: String,
    pub prefix: String,
    pub suffix: String,
    pub basename: String,
    pub extname: String,
}

impl MergedPath {
    /// Builds the relative path `dirname/prefix + basename + suffix + extname`
    pub fn to_relative(&self) -> String {
        let file_name = format!(
            "{}{}{}{}",
            self.prefix, self.basename, self.suffix, self.extname
        );
        join(&[&self.dirname, &file_name])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> PathParts {
        PathParts::new("fixtures", "hello", ".txt")
    }

    #[test]
    fn test_empty_descriptor_keeps_parts() {
        let merged = PathDescriptor::new().merge(&hello());

        assert_eq!(merged.dirname, "fixtures");
        assert_eq!(merged.prefix, "");
        assert_eq!(merged.suffix, "");
        assert_eq!(merged.basename, "hello");
        assert_eq!(merged.extname, ".txt");
        assert_eq!(merged.to_relative(), "fixtures/hello.txt");
    }

    #[test]
    fn test_set_fields_take_precedence() {
        let descriptor = PathDescriptor::new()
            .dirname("elsewhere")
            .basename("aloha")
            .extname(".md");
        let merged = descriptor.merge(&hello());

        assert_eq!(merged.to_relative(), "elsewhere/aloha.md");
    }

    #[test]
    fn test_empty_strings_are_explicit() {
        let descriptor = PathDescriptor::new().dirname("").extname("");
        let merged = descriptor.merge(&hello());

        assert_eq!(merged.dirname, "");
        assert_eq!(merged.extname, "");
        assert_eq!(merged.to_relative(), "hello");
    }

    #[test]
    fn test_prefix_and_suffix_wrap_basename() {
        let descriptor = PathDescriptor::new().prefix("bonjour-").suffix("-hola");
        assert_eq!(
            descriptor.merge(&hello()).to_relative(),
            "fixtures/bonjour-hello-hola.txt"
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(PathDescriptor::new().is_empty());
        assert!(!PathDescriptor::new().suffix("").is_empty());
    }
}
