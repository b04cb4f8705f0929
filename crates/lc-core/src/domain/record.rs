use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Label;

/// Free-form per-sample metadata (string length, word count, language tag).
pub type Metadata = BTreeMap<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// AnnotationRecord — canonical representation of one annotated text sample
// ---------------------------------------------------------------------------

/// One text sample after adapter normalization. The annotation-derived
/// fields are all null for a sample that never received an annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub id: String,
    pub text: String,
    pub sentiment: Option<Label>,
    pub annotation_id: Option<String>,
    pub completed_at: Option<String>,
    pub annotation_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl AnnotationRecord {
    /// A record counts as labeled iff it carries a non-empty sentiment.
    pub fn is_labeled(&self) -> bool {
        self.sentiment
            .as_ref()
            .is_some_and(|label| !label.is_empty())
    }
}
