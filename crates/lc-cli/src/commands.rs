use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use lc_core::domain::AnnotationRecord;
use lc_pipeline::{label_studio, quality, report, samples, tabular};

use crate::bootstrap::RuntimeConfig;

// ---------------------------------------------------------------------------
// prepare — synthesize samples and write annotation-tool tasks
// ---------------------------------------------------------------------------

pub fn prepare(config: &RuntimeConfig) -> Result<(), anyhow::Error> {
    let generated = samples::generate(&config.sample_params, Utc::now());
    let tasks = label_studio::to_tasks(&generated)?;

    write_artifact(&config.paths.prepared, &serde_json::to_string_pretty(&tasks)?)?;
    write_artifact(
        &csv_twin(&config.paths.prepared),
        &tabular::samples_csv(&generated)?,
    )?;

    tracing::info!(
        count = generated.len(),
        path = %config.paths.prepared.display(),
        "prepared dataset written"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// export — normalize the annotation-tool export into canonical records
// ---------------------------------------------------------------------------

pub fn export(config: &RuntimeConfig) -> Result<(), anyhow::Error> {
    let records = if config.paths.raw_export.exists() {
        let raw = fs::read_to_string(&config.paths.raw_export)
            .with_context(|| format!("failed to read {}", config.paths.raw_export.display()))?;
        let tasks: Vec<label_studio::Task> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to decode {}", config.paths.raw_export.display()))?;

        let records = label_studio::import_tasks(&tasks, config.include_metadata)?;
        let labeled = records.iter().filter(|record| record.is_labeled()).count();
        tracing::info!(total = records.len(), labeled, "annotation export converted");
        records
    } else {
        tracing::warn!(
            path = %config.paths.raw_export.display(),
            "annotation export not found, writing demonstration records"
        );
        label_studio::demo_annotations()
    };

    write_artifact(
        &config.paths.labeled,
        &serde_json::to_string_pretty(&records)?,
    )?;
    write_artifact(
        &csv_twin(&config.paths.labeled),
        &tabular::annotations_csv(&records)?,
    )?;

    tracing::info!(path = %config.paths.labeled.display(), "labeled dataset written");
    Ok(())
}

// ---------------------------------------------------------------------------
// validate — score the labeled dataset and persist quality metrics
// ---------------------------------------------------------------------------

pub fn validate(config: &RuntimeConfig) -> Result<(), anyhow::Error> {
    let data_path = &config.paths.labeled;
    if !data_path.exists() {
        // missing input is a logged skip, not a process failure
        tracing::error!(path = %data_path.display(), "labeled dataset not found");
        tracing::info!("run the export step first");
        return Ok(());
    }

    let raw = fs::read_to_string(data_path)
        .with_context(|| format!("failed to read {}", data_path.display()))?;
    let records: Vec<AnnotationRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to decode {}", data_path.display()))?;

    let metrics = quality::evaluate(&records, &config.rules);

    write_artifact(
        &config.paths.metrics,
        &serde_json::to_string_pretty(&metrics)?,
    )?;
    tracing::info!(path = %config.paths.metrics.display(), "quality metrics written");

    let rendered = report::render(&metrics, &config.rules);
    for line in &rendered.lines {
        tracing::info!("{line}");
    }
    for warning in &rendered.warnings {
        tracing::warn!("{warning}");
    }

    Ok(())
}

fn write_artifact(path: &Path, content: &str) -> Result<(), anyhow::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

fn csv_twin(path: &Path) -> PathBuf {
    path.with_extension("csv")
}
