use std::fmt;

use serde::{Deserialize, Serialize};

use lc_core::domain::{AnnotationRecord, Label, Metadata};

use crate::samples::SampleRecord;

// ---------------------------------------------------------------------------
// DecodeError — adapter decode failures (fatal for the run)
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to decode annotation export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("task {task} carries a result with no choices")]
    EmptyChoices { task: String },
    #[error("task {task} carries malformed metadata: {source}")]
    Metadata {
        task: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Wire shape — the annotation tool's export format
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub data: TaskData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskData {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time: Option<f64>,
    #[serde(default)]
    pub result: Vec<AnnotationResult>,
}

/// Annotation ids arrive as integers from the real tool and as strings in
/// demonstration fixtures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationId::Number(value) => write!(f, "{value}"),
            AnnotationId::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotationResult {
    pub value: ChoiceValue,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChoiceValue {
    #[serde(default)]
    pub choices: Vec<String>,
}

// ---------------------------------------------------------------------------
// import_tasks — export-to-internal conversion
// ---------------------------------------------------------------------------

/// Convert decoded annotation-tool tasks into canonical records.
///
/// Multi-annotator exports are reduced by taking the first annotation, its
/// first result, and that result's first choice; there is no consensus
/// resolution. A task whose first annotation has no result entries is
/// dropped from the output entirely. The embedded metadata string is only
/// decoded when `include_metadata` is set.
pub fn import_tasks(
    tasks: &[Task],
    include_metadata: bool,
) -> Result<Vec<AnnotationRecord>, DecodeError> {
    let mut records = Vec::with_capacity(tasks.len());

    for task in tasks {
        let id = task.data.id.clone().unwrap_or_default();
        let metadata = if include_metadata {
            Some(decode_metadata(&id, task.data.metadata.as_deref())?)
        } else {
            None
        };

        match task.annotations.first() {
            Some(annotation) => {
                let Some(first_result) = annotation.result.first() else {
                    continue;
                };
                let Some(choice) = first_result.value.choices.first() else {
                    return Err(DecodeError::EmptyChoices { task: id });
                };

                records.push(AnnotationRecord {
                    id,
                    text: task.data.text.clone(),
                    sentiment: Some(Label::new(choice.clone())),
                    annotation_id: Some(annotation.id.to_string()),
                    completed_at: annotation.completed_at.clone(),
                    annotation_time: Some(annotation.lead_time.unwrap_or(0.0)),
                    metadata,
                });
            }
            None => {
                records.push(AnnotationRecord {
                    id,
                    text: task.data.text.clone(),
                    sentiment: None,
                    annotation_id: None,
                    completed_at: None,
                    annotation_time: None,
                    metadata,
                });
            }
        }
    }

    Ok(records)
}

fn decode_metadata(task_id: &str, raw: Option<&str>) -> Result<Metadata, DecodeError> {
    serde_json::from_str(raw.unwrap_or("{}")).map_err(|source| DecodeError::Metadata {
        task: task_id.to_owned(),
        source,
    })
}

// ---------------------------------------------------------------------------
// to_tasks — internal-to-export conversion
// ---------------------------------------------------------------------------

/// Wrap synthetic samples in the annotation tool's task shape.
pub fn to_tasks(samples: &[SampleRecord]) -> Result<Vec<Task>, serde_json::Error> {
    samples
        .iter()
        .map(|sample| {
            let metadata = sample
                .metadata
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?;
            Ok(Task {
                data: TaskData {
                    text: sample.text.clone(),
                    id: Some(sample.id.clone()),
                    metadata,
                },
                annotations: Vec::new(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// demo_annotations — fallback set when no real export exists
// ---------------------------------------------------------------------------

/// Fixed demonstration set used when no annotation export is present: one
/// labeled record per sentiment class with plausible timings, so the
/// pipeline can proceed without real annotation work.
pub fn demo_annotations() -> Vec<AnnotationRecord> {
    let demo = [
        (
            "sample_0001",
            "Great product, really happy with this purchase!",
            "positive",
            "demo_001",
            "2025-06-25T10:30:00Z",
            15.5,
        ),
        (
            "sample_0002",
            "Terrible service, never ordering from here again.",
            "negative",
            "demo_002",
            "2025-06-25T10:31:00Z",
            12.3,
        ),
        (
            "sample_0003",
            "An ordinary item, nothing special about it.",
            "neutral",
            "demo_003",
            "2025-06-25T10:32:00Z",
            18.7,
        ),
    ];

    demo.into_iter()
        .map(
            |(id, text, sentiment, annotation_id, completed_at, secs)| AnnotationRecord {
                id: id.to_owned(),
                text: text.to_owned(),
                sentiment: Some(Label::new(sentiment)),
                annotation_id: Some(annotation_id.to_owned()),
                completed_at: Some(completed_at.to_owned()),
                annotation_time: Some(secs),
                metadata: None,
            },
        )
        .collect()
}
