use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub prepare: PrepareConfig,
    pub labeling: LabelingConfig,
    pub validation: ValidationConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrepareConfig {
    pub sample_size: usize,
    pub validation_split: f64,
    pub random_seed: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelingConfig {
    pub export_format: ExportFormatConfig,
    pub include_metadata: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormatConfig {
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    pub min_samples: usize,
    pub quality_threshold: f64,
    pub required_labels: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub prepared: PathBuf,
    pub raw_export: PathBuf,
    pub labeled: PathBuf,
    pub metrics: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            prepared: PathBuf::from("data/prepared/sentiment_dataset.json"),
            raw_export: PathBuf::from("data/raw/label_studio_export.json"),
            labeled: PathBuf::from("data/labeled/annotations.json"),
            metrics: PathBuf::from("metrics/data_quality.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "pretty".to_owned(),
        }
    }
}
