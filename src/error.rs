use std::path::PathBuf;

/// Errors that can occur while generating a maze.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("maze dimensions {width}x{height} are too small to carve")]
    TooSmall { width: usize, height: usize },

    #[error("generation left only {open} open cells; need at least 2 to place the agents")]
    Degenerate { open: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
