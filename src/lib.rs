//! Groups files under a root directory into named buckets by glob pattern.
//!
//! The core entry point is [`core::grouper::group`], which takes a root
//! directory and an ordered pattern map and returns a [`core::grouper::GroupResult`]
//! of named path buckets plus a per-path weight used for diagnostics and the
//! `--top` rendering mode. Configuration can be supplied as a YAML file (see
//! [`config`]) or built up manually from `PATTERN:GROUP` pairs.
//!
//! ```no_run
//! use std::collections::HashMap;
//! use filegroup::core::grouper::{group, PatternEntry, PatternMap};
//!
//! let pattern_map: PatternMap = vec![
//!     ("*.rs".to_string(), PatternEntry::Group("rust".to_string())),
//!     ("*.md".to_string(), PatternEntry::Group("docs".to_string())),
//! ];
//! let result = group(".", &pattern_map, false, false, HashMap::new())?;
//! for (name, paths) in &result.groups {
//!     println!("{name}: {} files", paths.len());
//! }
//! # Ok::<(), filegroup::core::error::GroveError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;

pub use core::error::{GroveError, Result};
pub use core::grouper::{group, GroupMode, GroupResult, PatternEntry, PatternMap, DEFAULT_GROUP};
