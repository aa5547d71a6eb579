//! File items flowing through a renaming pipeline

use std::sync::Arc;

use crate::constants::SEPARATOR;
use crate::path::{normalize, parse_path, relative};

/// Source map metadata attached to a file item
///
/// Only `file` is maintained by the renamer; it always names the item it
/// belongs to by its relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    pub version: u32,
    /// Relative path of the file this map describes
    pub file: String,
    pub sources: Vec<String>,
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    /// Creates an empty version 3 source map for the given file
    pub fn new(file: impl Into<String>) -> Self {
        SourceMap {
            version: 3,
            file: file.into(),
            ..SourceMap::default()
        }
    }
}

/// A file-like record carrying a path, its base directory and metadata
///
/// The payload is shared behind an [`Arc`], so cloning an item duplicates its
/// metadata but never its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    path: String,
    base: String,
    contents: Option<Arc<[u8]>>,
    source_map: Option<SourceMap>,
}

impl FileItem {
    /// Creates an item at `path` whose relative path is computed from `base`
    ///
    /// # Examples
    /// ```
    /// use path_rename::item::FileItem;
    ///
    /// let item = FileItem::new("/project/test", "/project/test/fixtures/hello.txt");
    /// assert_eq!(item.relative(), "fixtures/hello.txt");
    /// ```
    pub fn new(base: &str, path: &str) -> Self {
        FileItem {
            path: clean(path),
            base: clean(base),
            contents: None,
            source_map: None,
        }
    }

    /// Creates an item whose base is the directory containing it
    pub fn from_path(path: &str) -> Self {
        let base = parse_path(&clean(path), false).dirname;
        FileItem::new(&base, path)
    }

    /// Attaches a payload to the item
    pub fn with_contents(mut self, contents: impl Into<Vec<u8>>) -> Self {
        self.contents = Some(Arc::from(contents.into()));
        self
    }

    /// Attaches a source map to the item
    pub fn with_source_map(mut self, source_map: SourceMap) -> Self {
        self.source_map = Some(source_map);
        self
    }

    /// Full path of the item
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base directory the relative path is computed from
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Path of the item relative to its base
    pub fn relative(&self) -> String {
        relative(&self.base, &self.path)
    }

    /// Directory portion of the full path
    pub fn dirname(&self) -> String {
        parse_path(&self.path, false).dirname
    }

    /// File name of the item, extension included
    pub fn basename(&self) -> String {
        let parts = parse_path(&self.path, false);
        format!("{}{}", parts.basename, parts.extname)
    }

    /// Final extension of the item
    pub fn extname(&self) -> String {
        parse_path(&self.path, false).extname
    }

    /// File name of the item without its final extension
    pub fn stem(&self) -> String {
        parse_path(&self.path, false).basename
    }

    /// Moves the item to a new full path
    pub fn set_path(&mut self, path: &str) {
        self.path = clean(path);
    }

    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    pub fn source_map(&self) -> Option<&SourceMap> {
        self.source_map.as_ref()
    }

    pub fn source_map_mut(&mut self) -> Option<&mut SourceMap> {
        self.source_map.as_mut()
    }

    /// Whether two items share the same payload allocation
    pub fn shares_contents_with(&self, other: &FileItem) -> bool {
        match (&self.contents, &other.contents) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Normalises a path and drops its trailing separator
fn clean(path: &str) -> String {
    let normalized = normalize(path);
    if normalized.len() > 1 {
        normalized.trim_end_matches(SEPARATOR).to_string()
    } else {
        normalized
    }
}
