//! Hugging Face Inference API request and response types.

use serde::{Deserialize, Serialize};

use notetag_core::RawClassification;

/// Request body for a text-classification model.
#[derive(Debug, Serialize)]
pub struct ClassificationRequest<'a> {
    pub inputs: &'a str,
}

/// One label/score entry as sent by the API.
///
/// Both fields are optional on the wire; incomplete entries are dropped or
/// defaulted by [`ClassificationResponse::into_raw`].
#[derive(Debug, Clone, Deserialize)]
pub struct LabelScore {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Classification response in any of the shapes the API returns.
///
/// A single input usually yields `[[{label, score}, ...]]`, but some models
/// and deployments answer with a flat list or a lone object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
    Single(LabelScore),
}

impl ClassificationResponse {
    /// Normalize to raw classifications for the single input sent.
    ///
    /// Entries without a label are skipped. A missing or non-finite score
    /// becomes 0.0.
    pub fn into_raw(self) -> Vec<RawClassification> {
        let entries = match self {
            Self::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(entries) => entries,
            Self::Single(entry) => vec![entry],
        };

        entries
            .into_iter()
            .filter_map(|entry| {
                let label = entry.label?;
                let score = entry.score.filter(|s| s.is_finite()).unwrap_or(0.0);
                Some(RawClassification::new(label, score))
            })
            .collect()
    }
}

/// Error body returned by the API (`{"error": "...", "estimated_time": 20.0}`).
#[derive(Debug, Deserialize)]
pub struct HfErrorResponse {
    pub error: String,
    /// Seconds until a cold model finishes loading.
    #[serde(default)]
    pub estimated_time: Option<f64>,
}
