use std::collections::HashMap;
use std::path::Path;

use serde_yaml::Value;

use crate::core::error::{GroveError, Result};
use crate::core::grouper::{PatternEntry, PatternMap};

/// The parsed form of a run's YAML config file, before CLI flags are merged
/// in (see [`merge_extra_globs`] and the CLI handler for `root`/`overrides`
/// precedence).
#[derive(Debug, Default, Clone)]
pub struct ConfigFile {
    pub root: Option<String>,
    pub config_relative_root: bool,
    pub overrides: HashMap<String, String>,
    pub files: PatternMap,
}

const KNOWN_KEYS: [&str; 4] = ["overrides", "root", "files", "config_relative_root"];

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let text = std::fs::read_to_string(path).map_err(|_| GroveError::ConfigNotFound(path.to_path_buf()))?;
    let value: Value = serde_yaml::from_str(&text)?;

    let mapping = value
        .as_mapping()
        .ok_or_else(|| GroveError::InvalidConfig(format!("must be a dictionary, parsed \"{}\" instead", value_kind(&value))))?;

    for (key, _) in mapping {
        let key_str = key
            .as_str()
            .ok_or_else(|| GroveError::InvalidConfig("config keys must be strings".to_string()))?;
        if !KNOWN_KEYS.contains(&key_str) {
            return Err(GroveError::InvalidConfig(format!("unknown keys: {key_str:?}")));
        }
    }

    let overrides = match get(mapping, "overrides") {
        Some(Value::Mapping(m)) => {
            let mut out = HashMap::new();
            for (k, v) in m {
                let (Some(k), Some(v)) = (k.as_str(), v.as_str()) else {
                    return Err(GroveError::InvalidConfig(
                        "overrides must be a dictionary of string: string pairs".to_string(),
                    ));
                };
                out.insert(k.to_string(), v.to_string());
            }
            out
        }
        Some(_) => {
            return Err(GroveError::InvalidConfig(
                "overrides must be a dictionary of string: string pairs".to_string(),
            ));
        }
        None => HashMap::new(),
    };

    let root = match get(mapping, "root") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(GroveError::InvalidConfig("root filepath must be a string".to_string())),
        None => None,
    };

    let config_relative_root = match get(mapping, "config_relative_root") {
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            return Err(GroveError::InvalidConfig(
                "config_relative_root must be true or false".to_string(),
            ));
        }
        None => false,
    };

    let files = match get(mapping, "files") {
        Some(Value::Mapping(m)) => mapping_to_pattern_map(m)?,
        Some(_) => return Err(GroveError::InvalidConfig("files must be a dictionary".to_string())),
        None => Vec::new(),
    };

    Ok(ConfigFile { root, config_relative_root, overrides, files })
}

fn get<'a>(mapping: &'a serde_yaml::Mapping, key: &str) -> Option<&'a Value> {
    mapping.iter().find(|(k, _)| k.as_str() == Some(key)).map(|(_, v)| v)
}

fn mapping_to_pattern_map(mapping: &serde_yaml::Mapping) -> Result<PatternMap> {
    let mut out = Vec::new();
    for (key, value) in mapping {
        let key = key
            .as_str()
            .ok_or_else(|| GroveError::InvalidConfig("found a non-string key in files".to_string()))?
            .to_string();
        let entry = match value {
            Value::String(s) => PatternEntry::Group(s.clone()),
            Value::Mapping(m) => PatternEntry::Nested(mapping_to_pattern_map(m)?),
            other => {
                return Err(GroveError::InvalidConfig(format!(
                    "value is not str or dict for key {key} ({})",
                    value_kind(other)
                )));
            }
        };
        out.push((key, entry));
    }
    Ok(out)
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "dict",
        Value::Tagged(_) => "tagged",
    }
}

/// Merges CLI-supplied `-m`/`--manual PATTERN:GROUP` entries into a config's
/// `files` map. Extras take priority: they are added first, then config
/// entries whose glob key wasn't already supplied as an extra are appended,
/// preserving config order.
pub fn merge_extra_globs(files: PatternMap, extra_globs: Vec<(String, String)>) -> PatternMap {
    if extra_globs.is_empty() {
        return files;
    }
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(files.len() + extra_globs.len());
    for (glob, group) in extra_globs {
        seen.insert(glob.clone());
        out.push((glob, PatternEntry::Group(group)));
    }
    for (glob, data) in files {
        if !seen.contains(&glob) {
            out.push((glob, data));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parses_full_document() {
        let f = write_yaml(
            "root: .\noverrides:\n  python: code\nfiles:\n  \"*.py\": python\n  src:\n    \"*.rs\": rust\n",
        );
        let config = load_config(f.path()).unwrap();
        assert_eq!(config.root.as_deref(), Some("."));
        assert_eq!(config.overrides.get("python"), Some(&"code".to_string()));
        assert_eq!(config.files.len(), 2);
    }

    #[test]
    fn rejects_unknown_top_level_key() {
        let f = write_yaml("wat: true\n");
        assert!(load_config(f.path()).is_err());
    }

    #[test]
    fn rejects_non_dict_document() {
        let f = write_yaml("- a\n- b\n");
        assert!(load_config(f.path()).is_err());
    }

    #[test]
    fn merge_extra_globs_gives_extras_priority() {
        let files = vec![
            ("*.py".to_string(), PatternEntry::Group("python".to_string())),
            ("*.txt".to_string(), PatternEntry::Group("text".to_string())),
        ];
        let extras = vec![("*.py".to_string(), "override-python".to_string())];
        let merged = merge_extra_globs(files, extras);
        assert_eq!(merged[0].0, "*.py");
        assert!(matches!(&merged[0].1, PatternEntry::Group(g) if g == "override-python"));
        assert_eq!(merged[1].0, "*.txt");
    }
}
