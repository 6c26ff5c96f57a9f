//! Tag preview handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use notetag_core::{defaults, StarTag, Tag, TopTag};

use crate::{ApiError, AppState};

/// Request body for tag preview.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct GenerateTagsBody {
    #[serde(default)]
    pub text: Option<String>,
}

/// Ranked tags for a text, without persisting anything.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct GenerateTagsResponse {
    pub success: bool,
    pub tags: Vec<Tag>,
    pub star_tag: Option<StarTag>,
    pub top_tag: Option<TopTag>,
    /// Length of the submitted text in characters.
    pub input_length: usize,
}

/// Preview the tags a text would receive.
///
/// # Returns
/// - 200 OK with the ranked tags
/// - 400 Bad Request if the body is not JSON, or text is blank or longer than 1000 characters
/// - 401 Unauthorized if the classifier rejects the credential
/// - 503 Service Unavailable if the classifier cannot be reached
/// - 500 Internal Server Error for any other classifier failure
pub async fn generate_tags(
    State(state): State<AppState>,
    payload: Result<Json<GenerateTagsBody>, JsonRejection>,
) -> Result<Json<GenerateTagsResponse>, ApiError> {
    let Json(body) = payload?;
    let text = body.text.unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ApiError::BadRequest("Valid text is required".to_string()));
    }

    let input_length = text.chars().count();
    if input_length > defaults::PREVIEW_MAX_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Text too long. Maximum {} characters allowed.",
            defaults::PREVIEW_MAX_CHARS
        )));
    }

    let set = state
        .tagger
        .preview(&text)
        .await
        .map_err(|e| ApiError::classification(e, state.config.development))?;

    Ok(Json(GenerateTagsResponse {
        success: true,
        tags: set.tags,
        star_tag: set.star_tag,
        top_tag: set.top_tag,
        input_length,
    }))
}
