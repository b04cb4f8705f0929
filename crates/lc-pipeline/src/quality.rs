use std::collections::{BTreeMap, BTreeSet};

use lc_core::domain::{AnnotationRecord, Label, QualityMetrics, ValidationRules};

/// Annotations at or under this many seconds earn a full timing score;
/// slower annotations score `FAST_ANNOTATION_SECS / avg`, decaying toward
/// zero without ever going negative.
const FAST_ANNOTATION_SECS: f64 = 30.0;

// ---------------------------------------------------------------------------
// evaluate — dataset quality scoring (pure, total, deterministic)
// ---------------------------------------------------------------------------

/// Score a dataset against the configured quality rules.
///
/// Degenerate inputs never fail: an empty dataset, an empty label
/// distribution, or a dataset with no recorded annotation times all resolve
/// to zero-valued factors, so the overall score is a well-defined number in
/// [0, 1] for any input.
pub fn evaluate(records: &[AnnotationRecord], rules: &ValidationRules) -> QualityMetrics {
    let total_samples = records.len();
    let labeled_samples = records.iter().filter(|r| r.is_labeled()).count();
    let unlabeled_samples = total_samples - labeled_samples;

    let labeling_coverage = if total_samples > 0 {
        labeled_samples as f64 / total_samples as f64
    } else {
        0.0
    };

    let meets_min_samples = labeled_samples >= rules.min_samples;

    let mut label_distribution: BTreeMap<Label, u64> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_labeled()) {
        if let Some(label) = &record.sentiment {
            *label_distribution.entry(label.clone()).or_insert(0) += 1;
        }
    }

    let observed: BTreeSet<Label> = label_distribution.keys().cloned().collect();
    let missing_labels: BTreeSet<Label> = rules
        .required_labels
        .difference(&observed)
        .cloned()
        .collect();
    let has_all_required_labels = missing_labels.is_empty();

    // Balance is computed over observed labels only: a class that never
    // appears is absent from the distribution, not a zero count.
    let class_balance_ratio = match (
        label_distribution.values().min(),
        label_distribution.values().max(),
    ) {
        (Some(&min), Some(&max)) if max > 0 => min as f64 / max as f64,
        _ => 0.0,
    };

    let annotation_times: Vec<f64> = records
        .iter()
        .filter_map(|record| record.annotation_time)
        .filter(|&secs| secs > 0.0)
        .collect();

    let (avg_annotation_time, annotation_quality_score) = if annotation_times.is_empty() {
        (0.0, 0.0)
    } else {
        let avg = annotation_times.iter().sum::<f64>() / annotation_times.len() as f64;
        (avg, (FAST_ANNOTATION_SECS / avg).min(1.0))
    };

    // Five equally weighted factors, each clamped to the unit interval.
    let quality_factors = [
        labeling_coverage,
        if meets_min_samples { 1.0 } else { 0.0 },
        if has_all_required_labels { 1.0 } else { 0.0 },
        class_balance_ratio,
        annotation_quality_score,
    ];
    let overall_quality_score = quality_factors
        .iter()
        .map(|factor| factor.clamp(0.0, 1.0))
        .sum::<f64>()
        / quality_factors.len() as f64;

    let passes_quality_threshold = overall_quality_score >= rules.quality_threshold;

    QualityMetrics {
        total_samples,
        labeled_samples,
        unlabeled_samples,
        labeling_coverage,
        meets_min_samples,
        label_distribution,
        missing_labels,
        has_all_required_labels,
        class_balance_ratio,
        avg_annotation_time,
        annotation_quality_score,
        overall_quality_score,
        passes_quality_threshold,
    }
}
