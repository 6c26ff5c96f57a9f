//! Data model: classifier output, derived tags, and notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

// =============================================================================
// CLASSIFIER OUTPUT
// =============================================================================

/// One label/confidence pair returned by the classification gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RawClassification {
    /// Raw label token, e.g. `"science_&_technology"`.
    pub label: String,
    /// Confidence in [0, 1].
    pub score: f64,
}

impl RawClassification {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

// =============================================================================
// TAG TYPES
// =============================================================================

/// A formatted classifier label with rounded confidence and display rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Tag {
    pub label: String,
    /// Confidence rounded to 2 decimals.
    pub score: f64,
    /// 1-based position after sorting by descending score.
    pub rank: u32,
}

/// Legacy duplicate of the rank-1 tag, without star-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TopTag {
    pub label: String,
    pub score: f64,
}

/// The highest-priority tag of a note, with its blended priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StarTag {
    pub label: String,
    pub score: f64,
    pub rank: u32,
    #[serde(default = "default_is_star")]
    pub is_star: bool,
    /// Blended rank/confidence priority, rounded to 2 decimals.
    pub priority: f64,
}

fn default_is_star() -> bool {
    true
}

/// Ranked tags for one text, plus the two views of the rank-1 tag.
///
/// Construct through [`TagSet::from_tags`] (or [`crate::tags::rank_tags`]) so
/// that `top_tag` and `star_tag` always agree with `tags[0]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TagSet {
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub top_tag: Option<TopTag>,
    pub star_tag: Option<StarTag>,
}

impl TagSet {
    /// The empty/null triple used when there is nothing to classify or the
    /// gateway failed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derive `top_tag` and `star_tag` from the first entry of `tags`.
    pub fn from_tags(tags: Vec<Tag>) -> Self {
        let top_tag = tags.first().map(|t| TopTag {
            label: t.label.clone(),
            score: t.score,
        });
        let star_tag = tags.first().map(|t| StarTag {
            label: t.label.clone(),
            score: t.score,
            rank: 1,
            is_star: true,
            priority: crate::tags::calculate_priority(0, t.score),
        });
        Self {
            tags,
            top_tag,
            star_tag,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A stored note with its embedded tags.
///
/// Field names follow the JSON shape existing clients already consume
/// (`_id`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub top_tag: Option<TopTag>,
    pub star_tag: Option<StarTag>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// The note's tags as a [`TagSet`].
    pub fn tag_set(&self) -> TagSet {
        TagSet {
            tags: self.tags.clone(),
            top_tag: self.top_tag.clone(),
            star_tag: self.star_tag.clone(),
        }
    }

    /// Replace the embedded tags with `set`.
    pub fn apply_tags(&mut self, set: TagSet) {
        self.tags = set.tags;
        self.top_tag = set.top_tag;
        self.star_tag = set.star_tag;
    }
}

/// A validated note ready for insertion.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub description: String,
    pub tags: TagSet,
}

impl NewNote {
    /// Validate and trim the required fields.
    pub fn new(title: &str, description: &str, tags: TagSet) -> Result<Self> {
        Ok(Self {
            title: required_field("title", title)?,
            description: required_field("description", description)?,
            tags,
        })
    }
}

/// Partial update of a note. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<TagSet>,
}

impl NoteUpdate {
    /// Apply this update to `note` in place, bumping `updated_at`.
    pub fn apply(self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(description) = self.description {
            note.description = description;
        }
        if let Some(tags) = self.tags {
            note.apply_tags(tags);
        }
        note.updated_at = now;
    }
}

/// Trim a required text field, rejecting empty results.
pub fn required_field(name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", name)));
    }
    Ok(trimmed.to_string())
}
