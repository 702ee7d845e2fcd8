use std::path::PathBuf;

use clap::Parser;

/// Groups files under a root directory into named buckets, by glob pattern.
#[derive(Debug, Parser)]
#[command(name = "groupgrove", version, about)]
pub struct CliArgs {
    /// Where to write output. Omitted means stdout.
    pub output: Option<PathBuf>,

    /// Emit absolute paths instead of paths relative to the root.
    #[arg(short = 'a', long)]
    pub absolute: bool,

    /// Match every matching path independently instead of letting a
    /// directory's first match claim its whole subtree.
    #[arg(short = 'd', long)]
    pub distinct: bool,

    /// YAML config file describing the pattern map.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// An extra `PATTERN:GROUP` pair, given priority over the config file's
    /// patterns. May be repeated.
    #[arg(short = 'm', long = "manual", value_name = "PATTERN:GROUP")]
    pub manual: Vec<String>,

    /// Root directory to group under. With no value, the filesystem root is
    /// used. Omitted entirely, `.` is used.
    #[arg(short = 'r', long, num_args = 0..=1, default_missing_value = "")]
    pub root: Option<String>,

    /// Output format. Inferred from the output path's extension if omitted.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Render the N highest-weight paths instead of the full group listing.
    #[arg(short = 't', long, num_args = 0..=1, default_missing_value = "10")]
    pub top: Option<usize>,

    /// For formats "json" and "yaml", indent and nicely format output at N
    /// spaces per level. Omitted means compact JSON / default-indented YAML;
    /// given with no value means a built-in default indent width.
    #[arg(short = 'i', long, num_args = 0..=1, default_missing_value = "4")]
    pub indent: Option<usize>,

    /// Render only this group's path list.
    #[arg(short = 'g', long)]
    pub group: Option<String>,

    /// Rename a group in the output, given as `GROUP:NAME`. May be repeated.
    #[arg(short = 'o', long = "override", value_name = "GROUP:NAME")]
    pub overrides: Vec<String>,

    /// Raise the log level. Repeat for more verbosity.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
    Folder,
}
