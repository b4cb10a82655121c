use crate::error::{ExperienceError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Host settings, read from a YAML file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_filter: Option<String>,
    pub enable_text_scaling: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ExperienceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&source)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(source)?;
        if config
            .log_filter
            .as_deref()
            .is_some_and(|filter| filter.trim().is_empty())
        {
            return Err(ExperienceError::Config("blank log_filter".into()));
        }
        Ok(config)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::error::ExperienceError;

    #[test]
    fn empty_source_is_default() {
        let config = Config::from_yaml("").expect("empty config should load");
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter(), "warn");
        assert!(!config.enable_text_scaling);
    }

    #[test]
    fn reads_fields() {
        let source = "log_filter: experience_kit=debug\nenable_text_scaling: true\n";
        let config = Config::from_yaml(source).expect("config should load");
        assert_eq!(config.log_filter(), "experience_kit=debug");
        assert!(config.enable_text_scaling);
    }

    #[test]
    fn blank_filter_is_rejected() {
        let err = Config::from_yaml("log_filter: ' '\n").expect_err("blank filter");
        assert!(matches!(err, ExperienceError::Config(_)));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = Config::from_yaml("enable_text_scaling: [").expect_err("bad yaml");
        assert!(matches!(err, ExperienceError::Yaml(_)));
    }
}
