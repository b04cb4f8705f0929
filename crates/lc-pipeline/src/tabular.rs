use serde::Serialize;

use lc_core::domain::{AnnotationRecord, Label};

use crate::samples::SampleRecord;

// ---------------------------------------------------------------------------
// TabularError — CSV projection failures
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum TabularError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("metadata serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv buffer flush failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// ---------------------------------------------------------------------------
// Row shapes — flat one-row-per-record projections
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct AnnotationRow<'a> {
    id: &'a str,
    text: &'a str,
    sentiment: Option<&'a str>,
    annotation_id: Option<&'a str>,
    completed_at: Option<&'a str>,
    annotation_time: Option<f64>,
    metadata: Option<String>,
}

#[derive(Serialize)]
struct SampleRow<'a> {
    id: &'a str,
    text: &'a str,
    source: &'a str,
    created_at: String,
    metadata: Option<String>,
}

/// Flatten annotation records into CSV, one row per record. The metadata
/// mapping is JSON-encoded into a single column; this is a second view of
/// the JSON artifact, not independent state.
pub fn annotations_csv(records: &[AnnotationRecord]) -> Result<String, TabularError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        for record in records {
            writer.serialize(AnnotationRow {
                id: &record.id,
                text: &record.text,
                sentiment: record.sentiment.as_ref().map(Label::as_str),
                annotation_id: record.annotation_id.as_deref(),
                completed_at: record.completed_at.as_deref(),
                annotation_time: record.annotation_time,
                metadata: record
                    .metadata
                    .as_ref()
                    .map(serde_json::to_string)
                    .transpose()?,
            })?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}

/// Flatten synthetic samples into CSV with the same column conventions.
pub fn samples_csv(samples: &[SampleRecord]) -> Result<String, TabularError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        for sample in samples {
            writer.serialize(SampleRow {
                id: &sample.id,
                text: &sample.text,
                source: &sample.source,
                created_at: sample.created_at.to_rfc3339(),
                metadata: sample
                    .metadata
                    .as_ref()
                    .map(serde_json::to_string)
                    .transpose()?,
            })?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}
