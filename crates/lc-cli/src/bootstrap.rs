use std::collections::BTreeSet;

use anyhow::ensure;
use lc_core::domain::{Label, ValidationRules};
use lc_pipeline::samples::SampleParams;

use crate::config::{AppConfig, LoggingConfig, PathsConfig};

// ---------------------------------------------------------------------------
// RuntimeConfig — fully validated runtime configuration
// ---------------------------------------------------------------------------

pub struct RuntimeConfig {
    pub sample_params: SampleParams,
    /// Parsed for config compatibility; no stage consumes it yet.
    pub validation_split: f64,
    pub include_metadata: bool,
    pub rules: ValidationRules,
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// into_runtime — converts raw AppConfig into validated RuntimeConfig
// ---------------------------------------------------------------------------

pub fn into_runtime(config: AppConfig) -> Result<RuntimeConfig, anyhow::Error> {
    ensure!(
        config.prepare.sample_size > 0,
        "prepare.sample_size must be positive"
    );
    ensure!(
        (0.0..1.0).contains(&config.prepare.validation_split),
        "prepare.validation_split must be in [0, 1): {}",
        config.prepare.validation_split
    );
    ensure!(
        (0.0..=1.0).contains(&config.validation.quality_threshold),
        "validation.quality_threshold must be in [0, 1]: {}",
        config.validation.quality_threshold
    );

    let required_labels: BTreeSet<Label> = config
        .validation
        .required_labels
        .iter()
        .cloned()
        .map(Label::new)
        .collect();
    ensure!(
        required_labels.len() == config.validation.required_labels.len(),
        "duplicate label in validation.required_labels"
    );

    Ok(RuntimeConfig {
        sample_params: SampleParams {
            count: config.prepare.sample_size,
            seed: config.prepare.random_seed,
            include_metadata: config.labeling.include_metadata,
        },
        validation_split: config.prepare.validation_split,
        include_metadata: config.labeling.include_metadata,
        rules: ValidationRules {
            min_samples: config.validation.min_samples,
            quality_threshold: config.validation.quality_threshold,
            required_labels,
        },
        paths: config.paths,
        logging: config.logging,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExportFormatConfig, LabelingConfig, PrepareConfig, ValidationConfig};

    fn app_config() -> AppConfig {
        AppConfig {
            prepare: PrepareConfig {
                sample_size: 100,
                validation_split: 0.2,
                random_seed: 42,
            },
            labeling: LabelingConfig {
                export_format: ExportFormatConfig::Json,
                include_metadata: true,
            },
            validation: ValidationConfig {
                min_samples: 50,
                quality_threshold: 0.6,
                required_labels: vec![
                    "positive".to_owned(),
                    "negative".to_owned(),
                    "neutral".to_owned(),
                ],
            },
            paths: PathsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_into_runtime_accepts_valid_config() {
        let runtime = into_runtime(app_config()).expect("valid config");

        assert_eq!(runtime.sample_params.count, 100);
        assert_eq!(runtime.sample_params.seed, 42);
        assert!(runtime.sample_params.include_metadata);
        assert_eq!(runtime.rules.min_samples, 50);
        assert_eq!(runtime.rules.required_labels.len(), 3);
        assert!(runtime
            .rules
            .required_labels
            .contains(&Label::new("neutral")));
    }

    #[test]
    fn test_into_runtime_rejects_zero_sample_size() {
        let mut config = app_config();
        config.prepare.sample_size = 0;
        assert!(into_runtime(config).is_err());
    }

    #[test]
    fn test_into_runtime_rejects_out_of_range_split() {
        let mut config = app_config();
        config.prepare.validation_split = 1.0;
        assert!(into_runtime(config).is_err());
    }

    #[test]
    fn test_into_runtime_rejects_out_of_range_threshold() {
        let mut config = app_config();
        config.validation.quality_threshold = 1.5;
        assert!(into_runtime(config).is_err());
    }

    #[test]
    fn test_into_runtime_rejects_duplicate_labels() {
        let mut config = app_config();
        config
            .validation
            .required_labels
            .push("positive".to_owned());
        assert!(into_runtime(config).is_err());
    }
}
