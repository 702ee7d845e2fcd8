//! The `groupgrove` command-line surface: argument parsing, config/CLI
//! merge semantics, and output rendering.

pub mod args;
pub mod handler;
pub mod output;

pub use args::CliArgs;
