use crate::error::{ExperienceError, Result};
use crate::experience::model::Experience;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some(other) => Err(ExperienceError::UnsupportedFormat(other.to_string())),
            None => Err(ExperienceError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub fn parse_experience(source: &str, format: DocumentFormat) -> Result<Experience> {
    let experience: Experience = match format {
        DocumentFormat::Json => serde_json::from_str(source)?,
        DocumentFormat::Yaml => serde_yaml::from_str(source)?,
    };

    if experience.steps.is_empty() {
        return Err(ExperienceError::NoSteps(experience.id));
    }

    Ok(experience)
}

pub fn load_experience(path: &Path) -> Result<Experience> {
    let format = DocumentFormat::from_path(path)?;
    let source = std::fs::read_to_string(path).map_err(|source| ExperienceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let experience = parse_experience(&source, format)?;
    tracing::debug!(
        experience_id = %experience.id,
        steps = experience.steps.len(),
        "loaded experience document"
    );
    Ok(experience)
}
