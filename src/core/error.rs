use std::path::PathBuf;

/// Errors that can surface while building a [`crate::core::grouper::Grouper`]
/// or rendering its results.
///
/// Transient filesystem failures (a directory that disappears mid-walk, a
/// permission-denied subtree) are absorbed internally as empty listings and
/// never reach this type - see [`crate::core::paths::list_path`]. Only
/// configuration mistakes and a missing root are raised.
#[derive(Debug, thiserror::Error)]
pub enum GroveError {
    #[error("root path \"{0}\" not found")]
    RootNotFound(PathBuf),

    #[error("no globs given, provide some with --manual or supply a config with --config")]
    NoGlobsGiven,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config file \"{0}\" not found")]
    ConfigNotFound(PathBuf),

    #[error("invalid config: config is not a valid yaml file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("invalid override \"{0}\": expected GROUP:NAME")]
    InvalidOverride(String),

    #[error("invalid manual pattern \"{0}\": expected PATTERN:GROUP")]
    InvalidManualPattern(String),

    #[error("group \"{0}\" not found")]
    GroupNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GroveError>;
