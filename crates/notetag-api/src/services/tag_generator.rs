//! Tag generation: classify text, then rank the raw labels.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use notetag_core::{rank_tags, ClassificationBackend, Result, TagSet};

/// Turns free text into a [`TagSet`] using a classification backend.
#[derive(Clone)]
pub struct TagGenerator {
    backend: Arc<dyn ClassificationBackend>,
}

impl TagGenerator {
    pub fn new(backend: Arc<dyn ClassificationBackend>) -> Self {
        Self { backend }
    }

    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }

    /// Tags for a note being saved.
    ///
    /// Never fails: gateway errors are logged and yield an empty set so the
    /// note is still stored.
    pub async fn generate_for_note(&self, text: &str) -> TagSet {
        if text.trim().is_empty() {
            return TagSet::empty();
        }

        match self.classify_and_rank(text).await {
            Ok(set) => set,
            Err(e) => {
                warn!(
                    subsystem = "api",
                    component = "tag_generator",
                    op = "generate_for_note",
                    error_kind = e
                        .classification_kind()
                        .map(|k| k.as_str())
                        .unwrap_or("internal"),
                    error = %e,
                    "Tag generation failed, saving note without tags"
                );
                TagSet::empty()
            }
        }
    }

    /// Tags for the preview endpoint. Gateway errors are returned with their
    /// failure kind intact.
    pub async fn preview(&self, text: &str) -> Result<TagSet> {
        if text.trim().is_empty() {
            return Ok(TagSet::empty());
        }
        self.classify_and_rank(text).await
    }

    async fn classify_and_rank(&self, text: &str) -> Result<TagSet> {
        let start = Instant::now();
        let raw = self.backend.classify(text).await?;
        let raw_count = raw.len();
        let set = rank_tags(raw);

        debug!(
            subsystem = "api",
            component = "tag_generator",
            op = "classify_and_rank",
            model = self.model_name(),
            input_len = text.chars().count(),
            raw_count,
            result_count = set.tags.len(),
            star = set.star_tag.as_ref().map(|s| s.label.as_str()).unwrap_or(""),
            duration_ms = start.elapsed().as_millis() as u64,
            "Tags generated"
        );
        Ok(set)
    }
}
