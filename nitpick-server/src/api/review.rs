//! Review endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use nitpick_core::{ReviewRequest, ReviewType};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/review`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBody {
    /// Source code to review
    #[serde(default)]
    pub code: String,

    /// Language tag for the code
    #[serde(default)]
    pub language: String,

    /// Requested review style; absent or unrecognized values fall back to
    /// comprehensive
    #[serde(default)]
    pub review_type: Option<String>,
}

/// Response body for a successful review
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    /// Generated review text
    pub review: String,

    /// Language tag echoed from the request
    pub language: String,

    /// Review type that was applied
    pub review_type: ReviewType,

    /// Server-generated completion timestamp
    pub timestamp: DateTime<Utc>,
}

/// Handle `POST /api/review`
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ReviewBody>,
) -> AppResult<Json<ReviewResponse>> {
    if body.code.is_empty() || body.language.is_empty() {
        return Err(AppError::Validation(
            "Code and language are required".to_string(),
        ));
    }

    let review_type = ReviewType::from_param(body.review_type.as_deref());

    info!(
        language = %body.language,
        review_type = %review_type,
        code_len = body.code.len(),
        "Review requested"
    );

    let request = ReviewRequest {
        code: body.code,
        language: body.language,
        review_type,
    };

    let outcome = state.reviewer.review(&request).await?;

    Ok(Json(ReviewResponse {
        review: outcome.review,
        language: outcome.language,
        review_type: outcome.review_type,
        timestamp: outcome.timestamp,
    }))
}
