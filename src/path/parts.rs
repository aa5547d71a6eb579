//! Relative path decomposition

use crate::constants::{CURRENT_DIR, SEPARATOR};

use super::join::join;

/// A relative path split into directory, base name and extension
///
/// In single-extension mode `join(dirname, basename + extname)` gives back the
/// normalised path the parts were parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParts {
    /// Directory portion of the path, `.` when there is none
    pub dirname: String,
    /// File name with the extension removed
    pub basename: String,
    /// Extension including its leading dot, or empty
    pub extname: String,
}

impl PathParts {
    /// Creates path parts from their components
    pub fn new(
        dirname: impl Into<String>,
        basename: impl Into<String>,
        extname: impl Into<String>,
    ) -> Self {
        PathParts {
            dirname: dirname.into(),
            basename: basename.into(),
            extname: extname.into(),
        }
    }

    /// Reassembles the parts into a relative path
    pub fn to_relative(&self) -> String {
        let file_name = format!("{}{}", self.basename, self.extname);
        join(&[&self.dirname, &file_name])
    }
}

/// Splits a relative path into [`PathParts`]
///
/// With `multi_ext` unset the extension starts at the last dot of the file
/// name; with it set the extension starts at the first dot, so
/// `archive.tar.gz` keeps `.tar.gz` together and `.eslintrc.json` has an
/// empty base name. Only single-extension mode treats a leading dot as part of
/// the name.
///
/// # Examples
/// ```
/// use path_rename::path::parse_path;
///
/// let parts = parse_path("fixtures/hello.min.txt", false);
/// assert_eq!(parts.dirname, "fixtures");
/// assert_eq!(parts.basename, "hello.min");
/// assert_eq!(parts.extname, ".txt");
///
/// let parts = parse_path("fixtures/hello.min.txt", true);
/// assert_eq!(parts.basename, "hello");
/// assert_eq!(parts.extname, ".min.txt");
/// ```
pub fn parse_path(path: &str, multi_ext: bool) -> PathParts {
    let file_name = file_name(path);
    let extname = if multi_ext {
        multi_extension(file_name)
    } else {
        last_extension(file_name)
    };

    PathParts {
        dirname: dirname(path),
        basename: strip_extension(file_name, extname).to_string(),
        extname: extname.to_string(),
    }
}

fn dirname(path: &str) -> String {
    if path.is_empty() {
        return CURRENT_DIR.to_string();
    }

    let bytes = path.as_bytes();
    let has_root = bytes[0] == SEPARATOR as u8;

    // Trailing separators belong to the final segment
    let mut end = None;
    let mut matched_separator = true;
    for index in (1..bytes.len()).rev() {
        if bytes[index] == SEPARATOR as u8 {
            if !matched_separator {
                end = Some(index);
                break;
            }
        } else {
            matched_separator = false;
        }
    }

    match end {
        None if has_root => SEPARATOR.to_string(),
        None => CURRENT_DIR.to_string(),
        Some(1) if has_root => "//".to_string(),
        Some(index) => path[..index].to_string(),
    }
}

fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

fn last_extension(file_name: &str) -> &str {
    if file_name == ".." {
        return "";
    }
    match file_name.rfind('.') {
        Some(index) if index > 0 => &file_name[index..],
        _ => "",
    }
}

fn multi_extension(file_name: &str) -> &str {
    if file_name == CURRENT_DIR || file_name == ".." {
        return "";
    }
    match file_name.find('.') {
        Some(index) => &file_name[index..],
        None => "",
    }
}

fn strip_extension<'a>(file_name: &'a str, extname: &str) -> &'a str {
    if extname.is_empty() {
        return file_name;
    }
    if extname == file_name {
        return "";
    }
    file_name.strip_suffix(extname).unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("hello.txt"), ".");
        assert_eq!(dirname("fixtures/hello.txt"), "fixtures");
        assert_eq!(dirname("a/b/c.txt"), "a/b");
        assert_eq!(dirname("a/b/"), "a");
        assert_eq!(dirname("/hello.txt"), "/");
        assert_eq!(dirname(""), ".");
    }

    #[test]
    fn test_single_extension() {
        let parts = parse_path("hello.txt", false);
        assert_eq!(parts, PathParts::new(".", "hello", ".txt"));

        let parts = parse_path("a.tar.gz", false);
        assert_eq!(parts, PathParts::new(".", "a.tar", ".gz"));

        let parts = parse_path("fixtures/README", false);
        assert_eq!(parts, PathParts::new("fixtures", "README", ""));

        let parts = parse_path(".bashrc", false);
        assert_eq!(parts, PathParts::new(".", ".bashrc", ""));

        let parts = parse_path("trailing.", false);
        assert_eq!(parts, PathParts::new(".", "trailing", "."));
    }

    #[test]
    fn test_multi_extension() {
        let parts = parse_path("a.tar.gz", true);
        assert_eq!(parts, PathParts::new(".", "a", ".tar.gz"));

        let parts = parse_path("fixtures/README", true);
        assert_eq!(parts, PathParts::new("fixtures", "README", ""));

        let parts = parse_path("dir/.eslintrc.json", true);
        assert_eq!(parts, PathParts::new("dir", "", ".eslintrc.json"));

        let parts = parse_path(".bashrc", true);
        assert_eq!(parts, PathParts::new(".", "", ".bashrc"));

        let parts = parse_path("a/..", true);
        assert_eq!(parts, PathParts::new("a", "..", ""));
    }

    #[test]
    fn test_reconstruction() {
        for path in [
            "hello.txt",
            "fixtures/hello.txt",
            "a/b/c/hello.min.txt",
            "no_extension",
            "dir/.hidden",
            "dir/name.",
        ] {
            let parts = parse_path(path, false);
            assert_eq!(parts.to_relative(), path, "failed to rebuild {path}");
        }
    }

    #[test]
    fn test_multi_extension_reconstruction() {
        for path in [
            "archive.tar.gz",
            "fixtures/hello.min.txt",
            "dir/.eslintrc.json",
            "dir/.bashrc",
            "no_extension",
        ] {
            let parts = parse_path(path, true);
            assert_eq!(parts.to_relative(), path, "failed to rebuild {path}");
        }
    }
}
