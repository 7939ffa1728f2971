use std::path::PathBuf;

use thiserror::Error;

/// Problems that stop a session from starting. None of these are recoverable
/// at runtime, so they surface from bootstrap and end the process.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("level catalog must contain at least one level")]
    EmptyCatalog,
    #[error(
        "level {level} requests {requested} collectibles but only {available} grid cells exist"
    )]
    TooManyCollectibles {
        level: usize,
        requested: usize,
        available: usize,
    },
    #[error("level {level} requests {requested} hazards but at most {max} are allowed")]
    TooManyHazards {
        level: usize,
        requested: usize,
        max: usize,
    },
    #[error("level {level} references unknown {category} variant '{name}'")]
    UnknownVariant {
        level: usize,
        category: &'static str,
        name: String,
    },
    #[error("level {level} is not in the catalog")]
    MissingLevel { level: usize },
    #[error("failed to read level catalog '{}': {source}", path.display())]
    ReadCatalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse level catalog '{}': {message}", path.display())]
    ParseCatalog { path: PathBuf, message: String },
    #[error("invalid value '{value}' for {var}")]
    InvalidEnv { var: &'static str, value: String },
}
