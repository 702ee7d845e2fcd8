//! Platform-aware path splitting, stripping, joining and absolute-resolution.
//!
//! Mirrors the two families of helpers the reference tool carries for POSIX
//! and Windows: POSIX has no drive segment and no long-path sentinel; Windows
//! prefixes absolute paths with `\\?\` and treats a leading drive letter as
//! its own path segment.

use std::path::{Path, PathBuf};

/// The long-path / "verbatim" prefix Windows absolute paths are given.
#[cfg(windows)]
pub const DEFAULT_PATH: &str = "\\\\?\\C:\\";
#[cfg(not(windows))]
pub const DEFAULT_PATH: &str = "/";

#[cfg(windows)]
const SEP: char = '\\';
#[cfg(windows)]
const ALT_SEP: char = '/';

#[cfg(not(windows))]
const SEP: char = '/';

/// Splits a path into its segments. On Windows, a leading drive letter (if
/// present) is returned as the first segment.
pub fn split_path(path: &str) -> Vec<String> {
    #[cfg(windows)]
    {
        let normalized = path.replace(ALT_SEP, &SEP.to_string());
        let p = Path::new(&normalized);
        let mut out = Vec::new();
        let mut rest = normalized.as_str();
        if let Some(colon) = normalized.find(":\\").or_else(|| normalized.find(':')) {
            if colon == 1 {
                out.push(normalized[..1].to_string());
                rest = strip_seps(&normalized[colon + 1..]);
            }
        }
        let _ = p;
        for seg in rest.split(SEP) {
            if !seg.is_empty() {
                out.push(seg.to_string());
            }
        }
        out
    }
    #[cfg(not(windows))]
    {
        path.split(SEP)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(windows)]
fn strip_seps(s: &str) -> &str {
    s.trim_matches(|c| c == SEP || c == ALT_SEP || c == '?')
}

/// Strips leading/trailing separator (and sentinel, on Windows) characters,
/// normalizing alternate separators to the native one.
pub fn strip_path(path: &str) -> String {
    #[cfg(windows)]
    {
        let normalized = path.replace(ALT_SEP, &SEP.to_string());
        strip_seps(&normalized).to_string()
    }
    #[cfg(not(windows))]
    {
        path.trim_matches(SEP).to_string()
    }
}

/// Joins `base` with one or more path segments, each stripped of separators
/// first. An empty `base` joins the segments alone.
pub fn join_path(base: &str, segments: &[&str]) -> String {
    let stripped: Vec<String> = segments.iter().map(|s| strip_path(s)).collect();
    if base.is_empty() {
        stripped.join(&SEP.to_string())
    } else {
        let mut out = base.to_string();
        for seg in stripped {
            if !out.ends_with(SEP) {
                out.push(SEP);
            }
            out.push_str(&seg);
        }
        out
    }
}

/// Resolves `p` to an absolute, normalized form relative to `cwd`. An empty
/// `p` resolves to empty. On drive-letter systems the result is prefixed
/// with the long-path sentinel.
pub fn absolute(cwd: &str, p: &str) -> String {
    if p.is_empty() {
        return String::new();
    }
    #[cfg(not(windows))]
    {
        // Mirrors `os.path.join`: an already-absolute `p` discards `cwd`
        // entirely rather than being appended to it.
        let resolved = if cwd.is_empty() || p.starts_with(SEP) {
            normalize(p)
        } else {
            normalize(&join_native(cwd, p))
        };
        let stripped = strip_path(&resolved);
        format!("{SEP}{stripped}")
    }
    #[cfg(windows)]
    {
        let p_is_absolute = p.starts_with('\\') || p.starts_with('/') || split_drive(p).is_some();
        let resolved = if cwd.is_empty() {
            if p.starts_with('\\') || p.starts_with('/') {
                normalize(p)
            } else {
                p.to_string()
            }
        } else if p_is_absolute {
            normalize(p)
        } else {
            normalize(&join_native(cwd, p))
        };
        let with_prefix = format!("\\\\?\\{}", strip_seps(&resolved));
        let segs = split_drive(&with_prefix);
        match segs {
            Some((drive, subpath)) => {
                if subpath.is_empty() {
                    if drive.ends_with(SEP) {
                        drive
                    } else {
                        format!("{drive}{SEP}")
                    }
                } else {
                    format!("{drive}{subpath}")
                }
            }
            None => with_prefix,
        }
    }
}

#[cfg(windows)]
fn split_drive(p: &str) -> Option<(String, String)> {
    let stripped = p.trim_start_matches("\\\\?\\");
    if stripped.len() >= 2 && stripped.as_bytes()[1] == b':' {
        let drive = format!("\\\\?\\{}", &stripped[..2]);
        let rest = strip_seps(&stripped[2..]);
        Some((drive, rest.to_string()))
    } else {
        None
    }
}

fn join_native(base: &str, p: &str) -> String {
    let mut out = base.to_string();
    if !out.ends_with(SEP) {
        out.push(SEP);
    }
    out.push_str(p);
    out
}

/// Lexically normalizes `.`/`..` components without touching the filesystem.
fn normalize(p: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for seg in p.split(SEP) {
        match seg {
            "" | "." => continue,
            ".." => {
                out.pop();
            }
            _ => out.push(seg),
        }
    }
    out.join(&SEP.to_string())
}

/// The unsorted names of direct children of `p`. Returns an empty sequence if
/// `p` is empty, missing, non-readable, or not a directory - this function
/// never fails.
pub fn list_path(p: &str) -> Vec<String> {
    if p.is_empty() {
        return Vec::new();
    }
    match std::fs::read_dir(p) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(err) => {
            tracing::warn!(path = p, error = %err, "directory listing failed, treating as empty");
            Vec::new()
        }
    }
}

pub fn is_dir(p: &str) -> bool {
    Path::new(p).is_dir()
}

pub fn current_dir() -> String {
    std::env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Convenience wrapper returning a [`PathBuf`] for an already-absolute path
/// string, for call sites that need filesystem APIs.
pub fn as_path(p: &str) -> PathBuf {
    PathBuf::from(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn split_path_drops_empty_segments() {
        assert_eq!(split_path("/a/b/c"), vec!["a", "b", "c"]);
        assert_eq!(split_path("a//b/"), vec!["a", "b"]);
    }

    #[cfg(not(windows))]
    #[test]
    fn strip_path_trims_separators() {
        assert_eq!(strip_path("//a/b//"), "a/b");
    }

    #[cfg(not(windows))]
    #[test]
    fn join_path_strips_each_segment() {
        assert_eq!(join_path("/root", &["/a/", "b/"]), "/root/a/b");
        assert_eq!(join_path("", &["a", "b"]), "a/b");
    }

    #[cfg(not(windows))]
    #[test]
    fn absolute_resolves_relative_to_cwd() {
        assert_eq!(absolute("/home/user", "proj"), "/home/user/proj");
        assert_eq!(absolute("/home/user", "../other"), "/home/other");
        assert_eq!(absolute("", ""), "");
    }

    #[cfg(not(windows))]
    #[test]
    fn absolute_path_input_discards_cwd() {
        assert_eq!(absolute("/home/user", "/etc/conf"), "/etc/conf");
    }

    #[cfg(not(windows))]
    #[test]
    fn list_path_is_empty_for_missing_directory() {
        assert_eq!(list_path(""), Vec::<String>::new());
        assert_eq!(list_path("/definitely/does/not/exist/anywhere"), Vec::<String>::new());
    }
}
