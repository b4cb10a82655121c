use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperienceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("experience {0} has no steps")]
    NoSteps(String),
    #[error("unknown step: {0}")]
    UnknownStep(String),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExperienceError>;
