use crate::cli::args::{CliArgs, OutputFormat};
use crate::cli::output::{self, Rendering};
use crate::config;
use crate::core::error::{GroveError, Result};
use crate::core::grouper::{self, PatternMap};
use crate::core::paths;

pub fn run(args: CliArgs) -> Result<()> {
    if args.config.is_none() && args.manual.is_empty() {
        return Err(GroveError::NoGlobsGiven);
    }
    if args.top.is_some() && args.group.is_some() {
        return Err(GroveError::InvalidConfig("--top and --group are mutually exclusive".to_string()));
    }

    let format = output::infer_format(args.format, args.output.as_deref());
    if args.top.is_some() && format == OutputFormat::Folder {
        return Err(GroveError::InvalidConfig(
            "option -t does not support output format \"folder\"".to_string(),
        ));
    }

    let config_file = match &args.config {
        Some(path) => Some(config::load_config(path)?),
        None => None,
    };

    let extra_globs = parse_manual(&args.manual)?;
    let files = merge_files(config_file.as_ref(), extra_globs);

    let mut overrides = config_file.as_ref().map(|c| c.overrides.clone()).unwrap_or_default();
    for entry in &args.overrides {
        let (group, name) = split_pair(entry).ok_or_else(|| GroveError::InvalidOverride(entry.clone()))?;
        overrides.insert(group, name);
    }

    let root = resolve_root(&args, config_file.as_ref())?;

    let result = grouper::group(&root, &files, args.absolute, args.distinct, overrides)?;

    if let Some(n) = args.top {
        let rendering = Rendering::Top { n, weights: &result.weights };
        output::render(&rendering, format, args.output.as_deref(), args.indent)?;
    } else if let Some(name) = &args.group {
        let paths = result
            .groups
            .get(name)
            .ok_or_else(|| GroveError::GroupNotFound(name.clone()))?;
        let rendering = Rendering::SingleGroup { name, paths };
        output::render(&rendering, format, args.output.as_deref(), args.indent)?;
    } else {
        let rendering = Rendering::AllGroups(&result);
        output::render(&rendering, format, args.output.as_deref(), args.indent)?;
    }

    Ok(())
}

fn resolve_root(args: &CliArgs, config_file: Option<&config::ConfigFile>) -> Result<String> {
    let raw_root: Option<String> = match &args.root {
        Some(r) => Some(r.clone()),
        None => config_file.and_then(|c| c.root.clone()),
    };

    let raw_root = match raw_root {
        Some(r) => r,
        None => ".".to_string(),
    };

    if raw_root.is_empty() {
        return Ok(String::new());
    }

    let base = if config_file.is_some_and(|c| c.config_relative_root) {
        let config_path = args.config.as_ref().expect("config_relative_root implies a config file");
        config_path
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        paths::current_dir()
    };

    Ok(paths::absolute(&base, &raw_root))
}

fn merge_files(config_file: Option<&config::ConfigFile>, extra_globs: Vec<(String, String)>) -> PatternMap {
    let base = config_file.map(|c| c.files.clone()).unwrap_or_default();
    config::merge_extra_globs(base, extra_globs)
}

fn parse_manual(manual: &[String]) -> Result<Vec<(String, String)>> {
    manual
        .iter()
        .map(|entry| split_pair(entry).ok_or_else(|| GroveError::InvalidManualPattern(entry.clone())))
        .collect()
}

fn split_pair(entry: &str) -> Option<(String, String)> {
    // The last colon is the separator, not the first - a pattern or group
    // name can itself contain one (a Windows drive-letter pattern like
    // `C:\data\*.py:python`, for instance).
    let (left, right) = entry.rsplit_once(':')?;
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left.to_string(), right.to_string()))
}
