//! YAML-backed configuration file loading and CLI/config merge semantics.

mod file;

pub use file::{load_config, merge_extra_globs, ConfigFile};
