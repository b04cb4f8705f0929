use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::Label;

// ---------------------------------------------------------------------------
// ValidationRules — immutable quality gate configuration for one run
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct ValidationRules {
    pub min_samples: usize,
    pub quality_threshold: f64,
    pub required_labels: BTreeSet<Label>,
}

// ---------------------------------------------------------------------------
// QualityMetrics — validator output, one immutable record per run
// ---------------------------------------------------------------------------

/// Quality metrics for a labeled dataset. Field order matches the persisted
/// metrics document; ordered collections keep the serialized form identical
/// across runs on the same input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub total_samples: usize,
    pub labeled_samples: usize,
    pub unlabeled_samples: usize,
    pub labeling_coverage: f64,
    pub meets_min_samples: bool,
    pub label_distribution: BTreeMap<Label, u64>,
    pub missing_labels: BTreeSet<Label>,
    pub has_all_required_labels: bool,
    pub class_balance_ratio: f64,
    pub avg_annotation_time: f64,
    pub annotation_quality_score: f64,
    pub overall_quality_score: f64,
    pub passes_quality_threshold: bool,
}
