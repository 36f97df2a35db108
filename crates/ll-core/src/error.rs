use std::path::PathBuf;

/// Alias for `Result<T, LootError>`.
pub type LootResult<T> = Result<T, LootError>;

/// Errors that can occur while loading tables or configuration.
///
/// Resolution itself never fails; these only surface at the loading boundary.
#[derive(Debug, thiserror::Error)]
pub enum LootError {
    /// A file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A file was read but is not valid loot table JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        /// The file that failed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Walking the data directory failed.
    #[error("cannot walk data directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The data root is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The configuration is malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A chance label could not be parsed as a percentage.
    #[error("invalid chance: \"{0}\"")]
    InvalidChance(String),
}
