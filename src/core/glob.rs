//! Executes a single glob pattern against a root directory.
//!
//! Segment and `**` matching is delegated to the `glob` crate's `Pattern`,
//! the same crate the wider example pack reaches for when it needs glob
//! semantics beyond a flat directory listing. Candidate paths are enumerated
//! with `walkdir`, bounded to the pattern's fixed segment count unless the
//! pattern contains a recursive `**` component.
use std::path::Path;

use glob::{MatchOptions, Pattern};

use super::paths::{self, DEFAULT_PATH};

#[cfg(windows)]
const SEP: char = '\\';
#[cfg(not(windows))]
const SEP: char = '/';

/// Cross-platform glob relative to `root`. `root` may be empty, in which case
/// the filesystem root (or, on drive systems, a drive split off of `pattern`)
/// is used instead.
pub fn glob_root(root: &str, pattern: &str, dirs_only: bool) -> Vec<String> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut nglob = paths::strip_path(pattern);
    let mut nroot = root.to_string();

    if root.is_empty() {
        if nglob.is_empty() {
            return vec![DEFAULT_PATH.to_string()];
        }

        #[cfg(windows)]
        {
            if let Some((drive, rest)) = split_drive(&nglob) {
                nroot = drive;
                nglob = rest;
                if nglob.is_empty() {
                    return vec![root.to_string()];
                }
            }
        }
        #[cfg(not(windows))]
        {
            nroot = DEFAULT_PATH.to_string();
        }
    }

    if nglob.is_empty() {
        return Vec::new();
    }

    if !nroot.ends_with(SEP) {
        nroot.push(SEP);
    }

    let matches = match_glob(&nroot, &nglob, dirs_only);

    #[cfg(windows)]
    {
        if root.is_empty() {
            return matches.into_iter().map(|p| format!("{nroot}{p}")).collect();
        }
    }

    matches
}

#[cfg(windows)]
fn split_drive(nglob: &str) -> Option<(String, String)> {
    if nglob.len() >= 2 && nglob.as_bytes()[1] == b':' {
        let drive = format!("{}{SEP}", &nglob[..2]);
        let rest = paths::strip_path(&nglob[2..]);
        Some((drive, rest))
    } else {
        None
    }
}

fn match_glob(nroot: &str, nglob: &str, dirs_only: bool) -> Vec<String> {
    let has_recursive = nglob.contains("**");
    let opts = MatchOptions {
        case_sensitive: true,
        require_literal_separator: !has_recursive,
        require_literal_leading_dot: false,
    };

    let pattern = match Pattern::new(nglob) {
        Ok(p) => p,
        Err(_) => return Vec::new(),
    };

    let mut walker = walkdir::WalkDir::new(nroot).follow_links(false);
    if !has_recursive {
        let seg_count = nglob.split(SEP).filter(|s| !s.is_empty()).count();
        walker = walker.max_depth(seg_count);
    }

    let root_path = Path::new(nroot);
    let mut out = Vec::new();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if dirs_only && !entry.file_type().is_dir() {
            continue;
        }
        let rel = match entry.path().strip_prefix(root_path) {
            Ok(r) => r,
            Err(_) => continue,
        };
        if !pattern.matches_path_with(rel, opts) {
            continue;
        }
        out.push(rel.to_string_lossy().replace('\\', &SEP.to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "").unwrap();
        fs::write(dir.path().join("b.py"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.py"), "").unwrap();
        dir
    }

    #[test]
    fn matches_single_segment_glob() {
        let dir = setup();
        let root = dir.path().to_string_lossy().into_owned();
        let mut got = glob_root(&root, "*.py", false);
        got.sort();
        assert_eq!(got, vec!["a.py".to_string(), "b.py".to_string()]);
    }

    #[test]
    fn recursive_glob_crosses_directories() {
        let dir = setup();
        let root = dir.path().to_string_lossy().into_owned();
        let mut got = glob_root(&root, "**/*.py", false);
        got.sort();
        assert_eq!(got, vec!["a.py".to_string(), "b.py".to_string(), "sub/c.py".to_string()]);
    }

    #[test]
    fn dirs_only_excludes_files() {
        let dir = setup();
        let root = dir.path().to_string_lossy().into_owned();
        let got = glob_root(&root, "*", true);
        assert_eq!(got, vec!["sub".to_string()]);
    }

    #[test]
    fn empty_pattern_yields_nothing() {
        let dir = setup();
        let root = dir.path().to_string_lossy().into_owned();
        assert!(glob_root(&root, "", false).is_empty());
    }
}
