//! The lazy file tree and the grouper that drives it.
//!
//! Nodes live in a flat arena (`Vec<Node>`) addressed by [`NodeId`] rather
//! than behind `Rc<RefCell<_>>`; parent and child links are indices, which
//! keeps mutation through recursive tree operations a matter of ordinary
//! `&mut self` borrows instead of runtime borrow checks.

use std::collections::HashMap;
use std::path::Path;

use crate::core::error::{GroveError, Result};
use crate::core::glob::glob_root;
use crate::core::paths;

pub const DEFAULT_GROUP: &str = "unknown";

/// A glob key's associated value: either a terminal group name, or a nested
/// pattern map scoped to directories matched by the key.
#[derive(Debug, Clone)]
pub enum PatternEntry {
    Group(String),
    Nested(PatternMap),
}

/// An ordered glob-key -> value mapping. Order is significant: when two keys
/// would both match the same path, the earlier entry wins.
pub type PatternMap = Vec<(String, PatternEntry)>;

/// Validates a pattern map per the non-empty-key / alternation rule.
pub fn validate_pattern_map(map: &PatternMap, path: &str) -> Result<()> {
    for (key, value) in map {
        if key.is_empty() || key.split(", ").any(|part| part.is_empty()) {
            return Err(GroveError::InvalidConfig(format!(
                "found empty glob at {path} -> {key}"
            )));
        }
        if let PatternEntry::Nested(nested) = value {
            validate_pattern_map(nested, &format!("{path} -> {key}"))?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    ParentWins,
    Distinct,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    name: String,
    path: String,
    children: std::collections::BTreeMap<String, NodeId>,
    group: Option<String>,
    visited: bool,
    expanded: bool,
    collapsed: bool,
    quasi: bool,
    prune_guard: u32,
    weight: u64,
}

/// The result of a grouping run: named buckets of paths, and a diagnostic
/// weight per walked path.
#[derive(Debug, Clone, Default)]
pub struct GroupResult {
    pub groups: HashMap<String, Vec<String>>,
    pub weights: HashMap<String, u64>,
}

pub struct Grouper {
    nodes: Vec<Node>,
    root: NodeId,
    mode: GroupMode,
    absolute: bool,
    overrides: HashMap<String, String>,
    groups: HashMap<String, Vec<String>>,
    weights: HashMap<String, u64>,
}

fn join_segments(segments: &[String]) -> String {
    segments.join("/")
}

impl Grouper {
    fn new(root_path: &str, mode: GroupMode, absolute: bool, mut overrides: HashMap<String, String>) -> Self {
        overrides.insert(DEFAULT_GROUP.to_string(), DEFAULT_GROUP.to_string());
        let root_node = Node {
            parent: None,
            name: root_path.to_string(),
            path: root_path.to_string(),
            children: std::collections::BTreeMap::new(),
            group: None,
            visited: false,
            expanded: false,
            collapsed: true,
            quasi: false,
            prune_guard: 0,
            weight: 0,
        };
        Grouper {
            nodes: vec![root_node],
            root: NodeId(0),
            mode,
            absolute,
            overrides,
            groups: HashMap::new(),
            weights: HashMap::new(),
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn depth(&self, id: NodeId) -> usize {
        let mut d = 0;
        let mut cur = self.node(id).parent;
        while let Some(p) = cur {
            d += 1;
            cur = self.node(p).parent;
        }
        d
    }

    fn relative_path(&self, path: &str) -> String {
        let root_path = &self.node(self.root).path;
        if self.absolute || root_path.is_empty() {
            return path.to_string();
        }
        match Path::new(path).strip_prefix(Path::new(root_path)) {
            Ok(rel) => {
                let s = rel.to_string_lossy().replace('\\', "/");
                if s.is_empty() { ".".to_string() } else { s }
            }
            Err(_) => path.to_string(),
        }
    }

    fn add_to_group(&mut self, group: &str, path: &str) {
        let rel = self.relative_path(path);
        self.groups.entry(group.to_string()).or_default().push(rel);
    }

    fn resolve_override<'a>(&'a self, group: &'a str) -> &'a str {
        self.overrides.get(group).map(String::as_str).unwrap_or(group)
    }

    // -- node operations, mirroring the reference tree's node methods --

    fn get_child(&mut self, id: NodeId, name: &str, group: Option<&str>, quasi: Option<bool>) -> NodeId {
        if let Some(&cid) = self.node(id).children.get(name) {
            return cid;
        }
        let parent_quasi = self.node(id).quasi;
        let q = quasi.unwrap_or(parent_quasi);
        let parent_path = self.node(id).path.clone();
        let path = paths::absolute(&parent_path, name);
        let has_group = group.is_some();
        let weight_seed = (self.depth(id) + 1) as u64;
        let node = Node {
            parent: Some(id),
            name: name.to_string(),
            path,
            children: std::collections::BTreeMap::new(),
            group: group.map(String::from),
            visited: has_group,
            expanded: has_group,
            collapsed: true,
            quasi: q,
            prune_guard: 0,
            weight: weight_seed,
        };
        let nid = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.node_mut(id).children.insert(name.to_string(), nid);
        nid
    }

    fn locate(&mut self, id: NodeId, segments: &[String]) -> Option<NodeId> {
        if self.node(id).visited {
            return None;
        }
        let mut cur = id;
        for seg in segments {
            cur = self.get_child(cur, seg, None, None);
            if self.node(cur).visited {
                return None;
            }
        }
        Some(cur)
    }

    fn ancestor(&self, id: NodeId, n: usize) -> NodeId {
        let mut cur = id;
        for _ in 0..n {
            match self.node(cur).parent {
                Some(p) => cur = p,
                None => break,
            }
        }
        cur
    }

    fn descendants(&self, id: NodeId, exclude_leaves: bool) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.descendants_into(id, exclude_leaves, &mut out);
        out
    }

    fn descendants_into(&self, id: NodeId, exclude_leaves: bool, out: &mut Vec<NodeId>) {
        if self.node(id).visited {
            return;
        }
        if !exclude_leaves || !self.node(id).children.is_empty() {
            out.push(id);
        }
        let children: Vec<NodeId> = self.node(id).children.values().copied().collect();
        for cid in children {
            if !self.node(cid).visited {
                self.descendants_into(cid, exclude_leaves, out);
            }
        }
    }

    fn observe(&mut self, id: NodeId) {
        if !self.node(id).quasi {
            return;
        }
        self.node_mut(id).quasi = false;
        let mut cur = self.node(id).parent;
        while let Some(p) = cur {
            if !self.node(p).quasi {
                break;
            }
            self.node_mut(p).quasi = false;
            cur = self.node(p).parent;
        }
    }

    fn collapse(&mut self, id: NodeId) {
        if self.node(id).collapsed || self.node(id).visited {
            return;
        }
        let children: Vec<(String, NodeId)> = self
            .node(id)
            .children
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        for (name, cid) in children {
            if self.node(cid).quasi {
                let w = self.node(cid).weight;
                self.node_mut(id).weight += w;
                self.node_mut(id).children.remove(&name);
            } else if !self.node(cid).collapsed {
                self.collapse(cid);
            }
        }
        let n = self.node_mut(id);
        n.expanded = false;
        n.collapsed = true;
    }

    fn expand(&mut self, id: NodeId) {
        if self.node(id).expanded || self.node(id).visited {
            return;
        }
        let path = self.node(id).path.clone();
        let isdir = paths::is_dir(&path);
        if isdir {
            let names = paths::list_path(&path);
            for name in names {
                let cid = self.get_child(id, &name, None, Some(true));
                self.expand(cid);
            }
        }
        self.node_mut(id).expanded = true;
        if isdir && self.node(id).collapsed {
            self.node_mut(id).collapsed = false;
            let mut cur = self.node(id).parent;
            while let Some(p) = cur {
                self.node_mut(p).collapsed = false;
                cur = self.node(p).parent;
            }
        }
    }

    fn prune(&mut self, id: NodeId) {
        let n = self.node(id);
        if n.prune_guard > 0 || !n.children.is_empty() || n.visited || n.parent.is_none() {
            return;
        }
        let pid = n.parent.unwrap();
        let w = n.weight;
        let name = n.name.clone();
        self.node_mut(pid).weight += w;
        self.node_mut(pid).children.remove(&name);
        self.prune(pid);
    }

    fn glob_nodes(&mut self, id: NodeId, pattern: &str, dirs_only: bool) -> Vec<NodeId> {
        let path = self.node(id).path.clone();
        let mut out = Vec::new();
        for rel in glob_root(&path, pattern, dirs_only) {
            let segs = paths::split_path(&rel);
            if let Some(found) = self.locate(id, &segs) {
                out.push(found);
            }
        }
        out
    }

    /// The extended-glob interpreter: `..`, `**` and `,`-alternation.
    fn glob_children(&mut self, id: NodeId, pattern: &str, dirs_only: bool) -> Vec<NodeId> {
        self.node_mut(id).weight += 1;
        let mut out = Vec::new();
        for alt in pattern.split(", ") {
            let segments: Vec<String> = paths::split_path(alt)
                .into_iter()
                .filter(|s| s != ".")
                .collect();
            if segments.is_empty() {
                out.push(id);
                continue;
            }
            if let Some(i) = segments.iter().position(|s| s == "..") {
                out.extend(self.glob_parent(id, &segments, i, dirs_only));
                continue;
            }
            if let Some(i) = segments.iter().position(|s| s == "**") {
                out.extend(self.glob_recursive(id, &segments, i, dirs_only));
                continue;
            }
            out.extend(self.glob_nodes(id, alt, dirs_only));
        }
        out
    }

    fn glob_parent(&mut self, id: NodeId, segments: &[String], i: usize, dirs_only: bool) -> Vec<NodeId> {
        let pre_part: Vec<NodeId> = if i == 0 {
            vec![id]
        } else {
            let joined = join_segments(&segments[..i]);
            self.glob_children(id, &joined, false)
        };

        let mut n = 0usize;
        while i + n < segments.len() && segments[i + n] == ".." {
            n += 1;
        }
        let new_i = i + n;

        let mut parents: Vec<NodeId> = pre_part.iter().map(|&nid| self.ancestor(nid, n)).collect();
        parents.sort_by_key(|&nid| paths::split_path(&self.node(nid).path));
        parents.dedup();

        for &p in &parents {
            self.node_mut(p).prune_guard += 1;
        }
        for &c in &pre_part {
            self.prune(c);
        }
        for &p in &parents {
            self.node_mut(p).prune_guard -= 1;
        }

        if new_i < segments.len() {
            let leftover = join_segments(&segments[new_i..]);
            let mut out = Vec::new();
            for &p in &parents {
                out.extend(self.glob_children(p, &leftover, dirs_only));
            }
            out
        } else {
            parents
        }
    }

    fn glob_recursive(&mut self, id: NodeId, segments: &[String], i: usize, dirs_only: bool) -> Vec<NodeId> {
        let pre_part: Vec<NodeId> = if i == 0 {
            vec![id]
        } else {
            let joined = join_segments(&segments[..i]);
            self.glob_nodes(id, &joined, false)
        };

        for &p in &pre_part {
            self.expand(p);
        }

        if i + 1 < segments.len() {
            let leftover = join_segments(&segments[i + 1..]);
            let mut out = Vec::new();
            for &p in &pre_part {
                for d in self.descendants(p, false) {
                    out.extend(self.glob_children(d, &leftover, dirs_only));
                }
            }
            out
        } else {
            let mut out = Vec::new();
            for &p in &pre_part {
                out.extend(self.descendants(p, dirs_only));
            }
            out
        }
    }

    fn visit(&mut self, id: NodeId, group: Option<&str>) {
        match self.mode {
            GroupMode::ParentWins => self.visit_parent_wins(id, group),
            GroupMode::Distinct => self.visit_distinct(id, group),
        }
    }

    fn visit_parent_wins(&mut self, id: NodeId, group: Option<&str>) {
        if self.node(id).visited {
            return;
        }
        self.observe(id);
        self.collapse(id);

        let g = group
            .map(str::to_string)
            .unwrap_or_else(|| self.node(id).group.clone().unwrap_or_else(|| DEFAULT_GROUP.to_string()));

        if self.node(id).children.is_empty() {
            let n = self.node_mut(id);
            n.visited = true;
            n.group = Some(g);
            return;
        }

        let path = self.node(id).path.clone();
        let items = paths::list_path(&path);
        if !items.is_empty() {
            for name in items {
                let cid = self.get_child(id, &name, Some(g.as_str()), None);
                self.visit_parent_wins(cid, Some(g.as_str()));
            }
        } else {
            let children: Vec<NodeId> = self.node(id).children.values().copied().collect();
            for cid in children {
                self.visit_parent_wins(cid, Some(g.as_str()));
            }
        }

        let n = self.node_mut(id);
        n.visited = true;
        n.expanded = true;
        n.collapsed = true;
        n.group = None;
    }

    /// Distinct-mode visit: never sets `visited`, so descendants stay
    /// available to later patterns; writes straight into `self.groups`.
    fn visit_distinct(&mut self, id: NodeId, group: Option<&str>) {
        self.observe(id);
        self.collapse(id);
        if self.node(id).group.is_some() {
            return;
        }
        let g = group.map(str::to_string).unwrap_or_else(|| DEFAULT_GROUP.to_string());
        self.node_mut(id).group = Some(g.clone());
        let path = self.node(id).path.clone();
        self.add_to_group(&g, &path);
    }

    fn load(&mut self, id: NodeId, config: &PatternMap) {
        for (glob_key, data) in config {
            match data {
                PatternEntry::Group(group_name) => {
                    let resolved = self.resolve_override(group_name).to_string();
                    let matched = self.glob_children(id, glob_key, false);
                    tracing::debug!(pattern = %glob_key, group = %resolved, matches = matched.len(), "pattern matched");
                    for child in matched {
                        self.visit(child, Some(&resolved));
                    }
                }
                PatternEntry::Nested(nested) => {
                    let matched = self.glob_children(id, glob_key, true);
                    tracing::debug!(pattern = %glob_key, matches = matched.len(), "nested pattern matched");
                    for child in matched {
                        self.load(child, nested);
                        self.visit(child, Some(DEFAULT_GROUP));
                    }
                }
            }
        }
    }

    fn walk(&mut self, id: NodeId) {
        let path = self.node(id).path.clone();
        let rel = self.relative_path(&path);
        let weight = self.node(id).weight;
        self.weights.insert(rel, weight);

        if self.node(id).group.is_none() {
            let children: Vec<NodeId> = self.node(id).children.values().copied().collect();
            for c in children {
                self.walk(c);
            }
        } else {
            let group = self.node(id).group.clone().unwrap();
            self.add_to_group(&group, &path);
        }
    }

    fn finish(mut self) -> GroupResult {
        for list in self.groups.values_mut() {
            list.sort_by_key(|p| paths::split_path(p));
        }
        GroupResult {
            groups: self.groups,
            weights: self.weights,
        }
    }
}

/// Groups files under `root` according to `pattern_map`.
///
/// `root` must already be resolved to an absolute path, or be the empty
/// string (meaning "filesystem root"); callers resolve it against the
/// working directory before calling in.
pub fn group(
    root: &str,
    pattern_map: &PatternMap,
    absolute: bool,
    distinct: bool,
    overrides: HashMap<String, String>,
) -> Result<GroupResult> {
    validate_pattern_map(pattern_map, "files")?;

    if !root.is_empty() && !Path::new(root).exists() {
        return Err(GroveError::RootNotFound(root.into()));
    }

    let mode = if distinct { GroupMode::Distinct } else { GroupMode::ParentWins };
    let mut grouper = Grouper::new(root, mode, absolute, overrides);
    let root_id = grouper.root;

    grouper.load(root_id, pattern_map);

    if !distinct {
        grouper.visit(root_id, None);
        grouper.walk(root_id);
    }

    let groups_count;
    let paths_count: usize;
    {
        groups_count = grouper.groups.len();
        paths_count = grouper.groups.values().map(Vec::len).sum();
    }
    tracing::info!(groups = groups_count, paths = paths_count, root = root, "run complete");

    Ok(grouper.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pm(entries: &[(&str, &str)]) -> PatternMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), PatternEntry::Group(v.to_string())))
            .collect()
    }

    #[test]
    fn simple_extension_split() {
        let dir = TempDir::new().unwrap();
        for f in ["a.py", "b.py", "a.txt", "b.txt"] {
            fs::write(dir.path().join(f), "").unwrap();
        }
        let root = dir.path().to_string_lossy().into_owned();
        let map = pm(&[("*.py", "python"), ("*.txt", "text")]);
        let result = group(&root, &map, false, false, HashMap::new()).unwrap();

        let mut python = result.groups.get("python").cloned().unwrap_or_default();
        python.sort();
        assert_eq!(python, vec!["a.py".to_string(), "b.py".to_string()]);

        let mut text = result.groups.get("text").cloned().unwrap_or_default();
        text.sort();
        assert_eq!(text, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn unmatched_files_fall_into_default_group() {
        let dir = TempDir::new().unwrap();
        for f in ["a.py", "b.py", "a.txt", "b.txt"] {
            fs::write(dir.path().join(f), "").unwrap();
        }
        let root = dir.path().to_string_lossy().into_owned();
        let map = pm(&[("a.*", "afiles")]);
        let result = group(&root, &map, false, false, HashMap::new()).unwrap();

        let mut afiles = result.groups.get("afiles").cloned().unwrap_or_default();
        afiles.sort();
        assert_eq!(afiles, vec!["a.py".to_string(), "a.txt".to_string()]);

        let mut unknown = result.groups.get(DEFAULT_GROUP).cloned().unwrap_or_default();
        unknown.sort();
        assert_eq!(unknown, vec!["b.py".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn first_match_wins() {
        let dir = TempDir::new().unwrap();
        for f in ["a.txt", "b.txt", "c.txt", "a.py", "b.py", "c.py"] {
            fs::write(dir.path().join(f), "").unwrap();
        }
        let root = dir.path().to_string_lossy().into_owned();
        let map = pm(&[("*.txt", "text"), ("a*", "other"), ("*.py", "third")]);
        let result = group(&root, &map, false, false, HashMap::new()).unwrap();

        let mut text = result.groups.get("text").cloned().unwrap_or_default();
        text.sort();
        assert_eq!(text, vec!["a.txt".to_string(), "b.txt".to_string(), "c.txt".to_string()]);

        assert_eq!(result.groups.get("other").cloned().unwrap_or_default(), vec!["a.py".to_string()]);

        let mut third = result.groups.get("third").cloned().unwrap_or_default();
        third.sort();
        assert_eq!(third, vec!["b.py".to_string(), "c.py".to_string()]);
    }

    #[test]
    fn recursive_glob_over_nested_tree() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("1/2")).unwrap();
        for f in ["1/2/a.txt", "1/2/b.txt", "1/2/a.py", "1/b.py", "1/c.py", "1/c.txt", "d.txt", "d.py"] {
            let p = dir.path().join(f);
            fs::write(p, "").unwrap();
        }
        let root = dir.path().to_string_lossy().into_owned();
        let map = pm(&[("**/*.py", "python"), ("**/*.txt", "text")]);
        let result = group(&root, &map, false, false, HashMap::new()).unwrap();

        let mut python = result.groups.get("python").cloned().unwrap_or_default();
        python.sort();
        assert_eq!(
            python,
            vec!["1/2/a.py".to_string(), "1/b.py".to_string(), "1/c.py".to_string(), "d.py".to_string()]
        );

        let mut text = result.groups.get("text").cloned().unwrap_or_default();
        text.sort();
        assert_eq!(
            text,
            vec!["1/2/a.txt".to_string(), "1/2/b.txt".to_string(), "1/c.txt".to_string(), "d.txt".to_string()]
        );
    }

    #[test]
    fn parent_operator_overrides_descendants() {
        let dir = TempDir::new().unwrap();
        let root_path = dir.path();
        let layout = [
            "1/2/3/match.txt",
            "1/2/3/other.txt",
            "1/2/other.txt",
            "1/other.txt",
            "4/5/match.txt",
            "4/other.txt",
            "6/match.txt",
            "7/8/match.txt",
            "7/match.txt",
            "7/other.txt",
            "10/9/match.txt",
            "10/match.txt",
            "10/other.txt",
            "other.txt",
        ];
        for f in layout {
            let p = root_path.join(f);
            fs::create_dir_all(p.parent().unwrap()).unwrap();
            fs::write(p, "").unwrap();
        }
        let root = root_path.to_string_lossy().into_owned();
        let map = pm(&[("**/match.txt/..", "matching")]);
        let result = group(&root, &map, false, false, HashMap::new()).unwrap();

        let mut matching = result.groups.get("matching").cloned().unwrap_or_default();
        matching.sort();
        assert_eq!(
            matching,
            vec!["1/2/3".to_string(), "10".to_string(), "4/5".to_string(), "6".to_string(), "7".to_string()]
        );
    }

    #[test]
    fn distinct_mode_matches_parents_and_descendants() {
        let dir = TempDir::new().unwrap();
        let root_path = dir.path();
        for f in ["a/b/file.txt", "a/c/d/file.txt", "a/c/other.py", "file.txt"] {
            let p = root_path.join(f);
            fs::create_dir_all(p.parent().unwrap()).unwrap();
            fs::write(p, "").unwrap();
        }
        let root = root_path.to_string_lossy().into_owned();
        let map = pm(&[("**/*.txt/..", "hastext")]);
        let result = group(&root, &map, false, true, HashMap::new()).unwrap();

        let mut hastext = result.groups.get("hastext").cloned().unwrap_or_default();
        hastext.sort();
        assert_eq!(hastext, vec![".".to_string(), "a/b".to_string(), "a/c/d".to_string()]);
        assert!(!result.groups.contains_key(DEFAULT_GROUP));
    }

    #[test]
    fn visit_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "").unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let map = pm(&[("*.py", "python")]);
        let once = group(&root, &map, false, false, HashMap::new()).unwrap();
        let twice = group(&root, &map, false, false, HashMap::new()).unwrap();
        assert_eq!(once.groups.get("python"), twice.groups.get("python"));
    }

    #[test]
    fn weight_seeds_by_ancestor_depth() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/leaf.txt"), "").unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let map = pm(&[("a/b/leaf.txt", "text")]);
        let result = group(&root, &map, false, false, HashMap::new()).unwrap();
        // a/b/leaf.txt sits three levels below root; its seeded weight (3)
        // plus one glob_children traversal step on ancestors still leaves it
        // with a strictly positive weight even though it's a childless leaf.
        assert!(result.weights.get("a/b/leaf.txt").copied().unwrap_or(0) >= 3);
    }

    #[test]
    fn overrides_rename_groups() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "").unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let map = pm(&[("*.py", "python")]);
        let mut overrides = HashMap::new();
        overrides.insert("python".to_string(), "code".to_string());
        let result = group(&root, &map, false, false, overrides).unwrap();
        assert_eq!(result.groups.get("code"), Some(&vec!["a.py".to_string()]));
        assert!(!result.groups.contains_key("python"));
    }

    #[test]
    fn rejects_empty_glob_key() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let map = pm(&[("", "python")]);
        assert!(group(&root, &map, false, false, HashMap::new()).is_err());
    }

    #[test]
    fn missing_root_is_fatal() {
        let map = pm(&[("*.py", "python")]);
        let err = group("/no/such/root/anywhere", &map, false, false, HashMap::new()).unwrap_err();
        assert!(matches!(err, GroveError::RootNotFound(_)));
    }
}
