use lc_core::domain::{Label, QualityMetrics, ValidationRules};

// ---------------------------------------------------------------------------
// QualityReport — human-readable projection of QualityMetrics
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct QualityReport {
    pub lines: Vec<String>,
    pub warnings: Vec<String>,
}

/// Render the metrics as ordered report lines plus failure warnings.
///
/// Warnings are only emitted when the dataset fails the quality threshold:
/// one names the configured minimum when the sample count falls short, one
/// names the missing labels when the required set is not covered.
pub fn render(metrics: &QualityMetrics, rules: &ValidationRules) -> QualityReport {
    let mut lines = vec![
        "Dataset quality report:".to_owned(),
        format!("  total samples: {}", metrics.total_samples),
        format!("  labeled samples: {}", metrics.labeled_samples),
        format!("  unlabeled samples: {}", metrics.unlabeled_samples),
        format!(
            "  labeling coverage: {:.2}%",
            metrics.labeling_coverage * 100.0
        ),
        format!("  label distribution: {}", format_distribution(metrics)),
        format!("  class balance ratio: {:.2}", metrics.class_balance_ratio),
        format!("  avg annotation time: {:.1}s", metrics.avg_annotation_time),
        format!(
            "  overall quality score: {:.2}%",
            metrics.overall_quality_score * 100.0
        ),
    ];

    let mut warnings = Vec::new();
    if metrics.passes_quality_threshold {
        lines.push("Dataset meets the quality requirements.".to_owned());
    } else {
        warnings.push("Dataset does not meet the quality requirements.".to_owned());
        if !metrics.meets_min_samples {
            warnings.push(format!(
                "  at least {} labeled samples required",
                rules.min_samples
            ));
        }
        if !metrics.has_all_required_labels {
            let missing: Vec<&str> = metrics.missing_labels.iter().map(Label::as_str).collect();
            warnings.push(format!("  missing labels: [{}]", missing.join(", ")));
        }
    }

    QualityReport { lines, warnings }
}

fn format_distribution(metrics: &QualityMetrics) -> String {
    let entries: Vec<String> = metrics
        .label_distribution
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;

    fn metrics() -> QualityMetrics {
        QualityMetrics {
            total_samples: 10,
            labeled_samples: 6,
            unlabeled_samples: 4,
            labeling_coverage: 0.6,
            meets_min_samples: true,
            label_distribution: BTreeMap::from([
                (Label::new("negative"), 2),
                (Label::new("neutral"), 1),
                (Label::new("positive"), 3),
            ]),
            missing_labels: BTreeSet::new(),
            has_all_required_labels: true,
            class_balance_ratio: 1.0 / 3.0,
            avg_annotation_time: 15.5,
            annotation_quality_score: 1.0,
            overall_quality_score: 0.786_666_7,
            passes_quality_threshold: true,
        }
    }

    fn rules() -> ValidationRules {
        ValidationRules {
            min_samples: 5,
            quality_threshold: 0.6,
            required_labels: ["negative", "neutral", "positive"]
                .iter()
                .copied()
                .map(Label::new)
                .collect(),
        }
    }

    #[test]
    fn test_passing_report_has_no_warnings() {
        let report = render(&metrics(), &rules());

        assert!(report.warnings.is_empty());
        assert_eq!(report.lines[0], "Dataset quality report:");
        assert!(report
            .lines
            .iter()
            .any(|line| line == "Dataset meets the quality requirements."));
    }

    #[test]
    fn test_percentages_use_two_decimals() {
        let report = render(&metrics(), &rules());

        assert!(report
            .lines
            .iter()
            .any(|line| line == "  labeling coverage: 60.00%"));
        assert!(report
            .lines
            .iter()
            .any(|line| line == "  overall quality score: 78.67%"));
        assert!(report
            .lines
            .iter()
            .any(|line| line == "  avg annotation time: 15.5s"));
    }

    #[test]
    fn test_distribution_renders_in_label_order() {
        let report = render(&metrics(), &rules());
        assert!(report
            .lines
            .iter()
            .any(|line| line == "  label distribution: {negative: 2, neutral: 1, positive: 3}"));
    }

    #[test]
    fn test_failing_report_names_minimum_and_missing_labels() {
        let mut failing = metrics();
        failing.meets_min_samples = false;
        failing.missing_labels = BTreeSet::from([Label::new("neutral")]);
        failing.has_all_required_labels = false;
        failing.overall_quality_score = 0.31;
        failing.passes_quality_threshold = false;

        let report = render(&failing, &rules());

        assert_eq!(
            report.warnings[0],
            "Dataset does not meet the quality requirements."
        );
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning == "  at least 5 labeled samples required"));
        assert!(report
            .warnings
            .iter()
            .any(|warning| warning == "  missing labels: [neutral]"));
    }

    #[test]
    fn test_failing_report_without_specific_causes() {
        // threshold failure driven purely by low factor scores
        let mut failing = metrics();
        failing.overall_quality_score = 0.5;
        failing.passes_quality_threshold = false;

        let report = render(&failing, &rules());
        assert_eq!(report.warnings.len(), 1);
    }
}
