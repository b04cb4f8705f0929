use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use lc_core::domain::Metadata;

// ---------------------------------------------------------------------------
// Text pool — base review texts and wrapping variations
// ---------------------------------------------------------------------------

const BASE_TEXTS: [&str; 10] = [
    "Great product, really happy with this purchase!",
    "Terrible service, never ordering from here again.",
    "An ordinary item, nothing special about it.",
    "Simply fantastic! Recommending it to all my friends.",
    "Could be better, but decent overall.",
    "A complete disaster, money down the drain.",
    "Neutral impression, neither good nor bad.",
    "Impressed by the quality and the fast delivery!",
    "Support was a letdown, but the product itself is fine.",
    "Fits my needs perfectly.",
];

fn wrap_text(base: &str, variation: u32) -> String {
    match variation {
        0 => base.to_owned(),
        1 => format!("Review: {base}"),
        2 => format!("{base} Thanks!"),
        _ => format!("My take: {base}"),
    }
}

// ---------------------------------------------------------------------------
// SampleRecord — synthetic pre-annotation sample
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub id: String,
    pub text: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Clone, Debug)]
pub struct SampleParams {
    pub count: usize,
    pub seed: u64,
    pub include_metadata: bool,
}

// ---------------------------------------------------------------------------
// generate — seeded sample synthesis (pure, no system clock)
// ---------------------------------------------------------------------------

/// Synthesize `params.count` unlabeled samples with sequential zero-padded
/// ids.
///
/// Text selection is driven by a seeded RNG, so the same seed and count
/// always reproduce the same text sequence. The caller supplies
/// `created_at`; generation itself never reads the system clock.
pub fn generate(params: &SampleParams, created_at: DateTime<Utc>) -> Vec<SampleRecord> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut samples = Vec::with_capacity(params.count);

    for index in 0..params.count {
        let base = BASE_TEXTS[rng.random_range(0..BASE_TEXTS.len())];
        let text = wrap_text(base, rng.random_range(0..4u32));
        let metadata = params.include_metadata.then(|| text_metadata(&text));

        samples.push(SampleRecord {
            id: format!("sample_{index:04}"),
            text,
            source: "synthetic".to_owned(),
            created_at,
            metadata,
        });
    }

    samples
}

fn text_metadata(text: &str) -> Metadata {
    Metadata::from([
        (
            "length".to_owned(),
            serde_json::json!(text.chars().count()),
        ),
        (
            "words_count".to_owned(),
            serde_json::json!(text.split_whitespace().count()),
        ),
        ("language".to_owned(), serde_json::json!("en")),
    ])
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn params(count: usize, seed: u64, include_metadata: bool) -> SampleParams {
        SampleParams {
            count,
            seed,
            include_metadata,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 25, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_same_seed_reproduces_texts() {
        let first = generate(&params(50, 42, false), fixed_now());
        let second = generate(&params(50, 42, false), fixed_now());
        assert_eq!(first, second);
    }

    #[test]
    fn test_ids_are_sequential_and_zero_padded() {
        let samples = generate(&params(3, 1, false), fixed_now());
        let ids: Vec<&str> = samples.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["sample_0000", "sample_0001", "sample_0002"]);
        assert!(samples.iter().all(|s| s.source == "synthetic"));
    }

    #[test]
    fn test_texts_derive_from_the_base_pool() {
        let samples = generate(&params(40, 7, false), fixed_now());
        for sample in &samples {
            assert!(
                BASE_TEXTS.iter().any(|base| sample.text.contains(base)),
                "unexpected text: {}",
                sample.text
            );
        }
    }

    #[test]
    fn test_metadata_describes_the_text() {
        let samples = generate(&params(10, 3, true), fixed_now());
        for sample in &samples {
            let metadata = sample.metadata.as_ref().expect("metadata present");
            assert_eq!(
                metadata["length"],
                serde_json::json!(sample.text.chars().count())
            );
            assert_eq!(
                metadata["words_count"],
                serde_json::json!(sample.text.split_whitespace().count())
            );
            assert_eq!(metadata["language"], serde_json::json!("en"));
        }
    }

    #[test]
    fn test_metadata_omitted_when_disabled() {
        let samples = generate(&params(5, 3, false), fixed_now());
        assert!(samples.iter().all(|s| s.metadata.is_none()));
    }

    #[test]
    fn test_zero_count_yields_empty_dataset() {
        assert!(generate(&params(0, 9, true), fixed_now()).is_empty());
    }
}
