//! Renders a [`GroupResult`] in one of the supported output formats.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::OutputFormat;
use crate::core::error::{GroveError, Result};
use crate::core::grouper::GroupResult;
use crate::core::paths;

/// What to render: the full group map, one group, or a top-N weights table.
pub enum Rendering<'a> {
    AllGroups(&'a GroupResult),
    SingleGroup { name: &'a str, paths: &'a [String] },
    Top { n: usize, weights: &'a std::collections::HashMap<String, u64> },
}

/// Picks a format from an explicit flag, or infers one from the output
/// path's extension (an existing directory means folder; anything else not
/// ending in `.json`/`.yaml`/`.yml` means text).
pub fn infer_format(explicit: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
    if let Some(f) = explicit {
        return f;
    }
    match output {
        Some(p) if p.is_dir() => OutputFormat::Folder,
        Some(p) => match p.extension().and_then(|e| e.to_str()) {
            Some("json") => OutputFormat::Json,
            Some("yaml") | Some("yml") => OutputFormat::Yaml,
            _ => OutputFormat::Text,
        },
        None => OutputFormat::Text,
    }
}

/// Renders `rendering` in `format`, writing to `output` (or stdout).
///
/// `indent` controls JSON/YAML formatting only: `None` (the `-i` flag
/// omitted) renders compact JSON and default-indented YAML; `Some(n)`
/// (the flag given, with or without an explicit value) renders both at an
/// `n`-space indent.
pub fn render(rendering: &Rendering, format: OutputFormat, output: Option<&Path>, indent: Option<usize>) -> Result<()> {
    if matches!(format, OutputFormat::Folder) {
        let dir = output.ok_or_else(|| {
            GroveError::InvalidConfig("folder format requires an output directory, not stdout".to_string())
        })?;
        return render_folder(rendering, dir);
    }

    let text = match format {
        OutputFormat::Text => render_text(rendering),
        OutputFormat::Json => render_json(rendering, indent)?,
        OutputFormat::Yaml => render_yaml(rendering, indent)?,
        OutputFormat::Folder => unreachable!(),
    };

    match output {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}

fn sorted_groups(result: &GroupResult) -> BTreeMap<&str, &[String]> {
    result
        .groups
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_slice()))
        .collect()
}

fn top_entries(weights: &std::collections::HashMap<String, u64>, n: usize) -> Vec<(&String, u64)> {
    let mut entries: Vec<(&String, u64)> = weights.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| {
        b.1.cmp(&a.1).then_with(|| paths::split_path(a.0).cmp(&paths::split_path(b.0)))
    });
    entries.truncate(n);
    entries
}

fn render_text(rendering: &Rendering) -> String {
    match rendering {
        Rendering::AllGroups(result) => {
            let groups = sorted_groups(result);
            let mut blocks = Vec::new();
            for (name, paths) in groups {
                let mut block = format!("{name}\n");
                for p in paths {
                    block.push_str(p);
                    block.push('\n');
                }
                blocks.push(block);
            }
            blocks.join("\n")
        }
        Rendering::SingleGroup { paths, .. } => {
            let mut out = String::new();
            for p in *paths {
                out.push_str(p);
                out.push('\n');
            }
            out
        }
        Rendering::Top { n, weights } => {
            let mut out = String::new();
            for (path, weight) in top_entries(weights, *n) {
                out.push_str(&format!("{weight}\t{path}\n"));
            }
            out
        }
    }
}

fn render_json(rendering: &Rendering, indent: Option<usize>) -> Result<String> {
    let value = match rendering {
        Rendering::AllGroups(result) => serde_json::to_value(sorted_groups(result))?,
        Rendering::SingleGroup { paths, .. } => serde_json::to_value(paths)?,
        Rendering::Top { n, weights } => {
            let entries: BTreeMap<&str, u64> =
                top_entries(weights, *n).into_iter().map(|(p, w)| (p.as_str(), w)).collect();
            serde_json::to_value(entries)?
        }
    };
    match indent {
        None => Ok(serde_json::to_string(&value)?),
        Some(width) => {
            let spaces = vec![b' '; width];
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&spaces);
            let mut buf = Vec::new();
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            serde::Serialize::serialize(&value, &mut ser)?;
            Ok(String::from_utf8(buf).expect("json output is always valid utf-8"))
        }
    }
}

fn render_yaml(rendering: &Rendering, indent: Option<usize>) -> Result<String> {
    let value = match rendering {
        Rendering::AllGroups(result) => serde_yaml::to_value(sorted_groups(result))
            .map_err(GroveError::ConfigParse)?,
        Rendering::SingleGroup { paths, .. } => {
            serde_yaml::to_value(paths).map_err(GroveError::ConfigParse)?
        }
        Rendering::Top { n, weights } => {
            let entries: BTreeMap<&str, u64> =
                top_entries(weights, *n).into_iter().map(|(p, w)| (p.as_str(), w)).collect();
            serde_yaml::to_value(entries).map_err(GroveError::ConfigParse)?
        }
    };
    let rendered = serde_yaml::to_string(&value).map_err(GroveError::ConfigParse)?;
    match indent {
        None => Ok(rendered),
        Some(width) => Ok(reindent_yaml(&rendered, width)),
    }
}

/// Rescales `serde_yaml`'s fixed 2-space-per-level indentation to `width`
/// spaces per level. `serde_yaml` has no indent-width knob of its own, so
/// this rewrites each line's leading whitespace rather than the document.
fn reindent_yaml(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let trimmed = line.trim_start_matches(' ');
        let depth = (line.len() - trimmed.len()) / 2;
        out.push_str(&" ".repeat(depth * width));
        out.push_str(trimmed);
        out.push('\n');
    }
    out
}

fn render_folder(rendering: &Rendering, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    match rendering {
        Rendering::AllGroups(result) => {
            for (name, paths) in sorted_groups(result) {
                write_group_file(dir, name, paths)?;
            }
        }
        Rendering::SingleGroup { name, paths } => write_group_file(dir, name, paths)?,
        // The CLI handler rejects `-t` with folder format before rendering
        // is ever reached (the original treats the combination as fatal).
        Rendering::Top { .. } => unreachable!("-t with folder format is rejected before rendering"),
    }
    Ok(())
}

fn write_group_file(dir: &Path, name: &str, paths: &[String]) -> Result<()> {
    let file_path: PathBuf = dir.join(format!("{name}.txt"));
    let mut f = std::fs::File::create(file_path)?;
    for p in paths {
        writeln!(f, "{p}")?;
    }
    Ok(())
}
