//! POSIX path joining
//!
//! Paths are handled as strings with `/` separators so that renaming behaves
//! identically on every platform and never consults the file system.

use crate::constants::{CURRENT_DIR, SEPARATOR};

/// Normalises a path lexically
///
/// Repeated separators collapse, `.` segments are dropped and `..` pops the
/// preceding segment. A relative path that would climb above its start keeps
/// its leading `..` segments; an absolute one stops at the root. A trailing
/// separator is preserved and an empty result becomes `.`.
///
/// # Examples
/// ```
/// use path_rename::path::normalize;
///
/// assert_eq!(normalize("fixtures/./a/../hello.txt"), "fixtures/hello.txt");
/// assert_eq!(normalize("../x//y/"), "../x/y/");
/// assert_eq!(normalize(""), ".");
/// ```
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return CURRENT_DIR.to_string();
    }

    let is_absolute = path.starts_with(SEPARATOR);
    let has_trailing_separator = path.ends_with(SEPARATOR);

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => continue,
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !is_absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join("/");
    if normalized.is_empty() && !is_absolute {
        normalized.push_str(CURRENT_DIR);
    }
    if !normalized.is_empty() && has_trailing_separator {
        normalized.push(SEPARATOR);
    }

    if is_absolute {
        format!("{SEPARATOR}{normalized}")
    } else {
        normalized
    }
}

/// Joins path segments and normalises the result
///
/// Empty segments are skipped, so an empty directory collapses away. Joining
/// nothing but empty segments yields `.`.
///
/// # Examples
/// ```
/// use path_rename::path::join;
///
/// assert_eq!(join(&["fixtures", "hello.txt"]), "fixtures/hello.txt");
/// assert_eq!(join(&["./", "hello.txt"]), "hello.txt");
/// assert_eq!(join(&["", "hello.txt"]), "hello.txt");
/// ```
pub fn join(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join("/");

    normalize(&joined)
}

/// Computes the path of `to` relative to `from`
///
/// Both paths are compared lexically after normalisation, so they should
/// either both be absolute or both be relative to the same directory.
/// Identical paths yield an empty string.
pub fn relative(from: &str, to: &str) -> String {
    let from = normalize(from);
    let to = normalize(to);
    if from == to {
        return String::new();
    }

    let from_parts = components(&from);
    let to_parts = components(&to);

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from_parts.len() - common];
    parts.extend_from_slice(&to_parts[common..]);
    parts.join("/")
}

fn components(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.is_empty() && *segment != CURRENT_DIR)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("a/b/c"), "a/b/c");
        assert_eq!(normalize("a//b///c"), "a/b/c");
        assert_eq!(normalize("./a/./b"), "a/b");
        assert_eq!(normalize("a/b/../c"), "a/c");
        assert_eq!(normalize("a/../../b"), "../b");
        assert_eq!(normalize("../../a"), "../../a");
        assert_eq!(normalize("/a/../../b"), "/b");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("."), ".");
        assert_eq!(normalize("./"), "./");
        assert_eq!(normalize("a/b/"), "a/b/");
        assert_eq!(normalize(""), ".");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["fixtures", "hello.txt"]), "fixtures/hello.txt");
        assert_eq!(join(&[".", "hello.txt"]), "hello.txt");
        assert_eq!(join(&["./", "hello.txt"]), "hello.txt");
        assert_eq!(join(&["", "hello.txt"]), "hello.txt");
        assert_eq!(join(&["/base", "sub/file.css"]), "/base/sub/file.css");
        assert_eq!(join(&["fixtures", ""]), "fixtures");
        assert_eq!(join(&["", ""]), ".");
        assert_eq!(join(&[]), ".");
        assert_eq!(join(&["a/b", "../c.txt"]), "a/c.txt");
    }

    #[test]
    fn test_relative() {
        assert_eq!(relative("/base", "/base/hello.txt"), "hello.txt");
        assert_eq!(relative("/base", "/base/a/b.txt"), "a/b.txt");
        assert_eq!(relative("/base/a", "/base/b.txt"), "../b.txt");
        assert_eq!(relative(".", "fixtures/hello.txt"), "fixtures/hello.txt");
        assert_eq!(relative("fixtures", "fixtures/fixture.css"), "fixture.css");
        assert_eq!(relative("/base", "/base"), "");
        assert_eq!(relative("/base/", "/base"), "");
    }
}
