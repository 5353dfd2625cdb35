use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Raised while reading or interpreting the chore list. Always fatal, and always raised before
/// any page is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("chore list not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read chore list {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse chore list: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid chore list: {0}")]
    Schema(String),
    #[error("invalid chart settings: {0}")]
    Settings(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("pdf error: {0}")]
    Pdf(#[from] printpdf::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer error: {0}")]
    CsvBuffer(String),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type RenderResult<T> = Result<T, RenderError>;
pub type ChartResult<T> = Result<T, ChartError>;
