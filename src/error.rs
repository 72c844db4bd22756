use std::path::PathBuf;

/// Failure to produce a record collection from a data source.
///
/// Never reaches the engine: `load_or_empty` absorbs it into an empty
/// collection.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read records from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Input a control cannot translate into an engine call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    #[error("unknown sort control: {0}")]
    UnknownSort(String),
    #[error("page size {0} is not offered")]
    PageSizeNotOffered(usize),
}

/// Failure to load a `ViewConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
