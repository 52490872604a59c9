use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::validation::{validate_content_id, validate_page};
use super::{ApiError, ApiResponse, AppState, CreateReviewRequest, PageQuery, ReviewDto};
use crate::domain::ContentId;
use crate::services::ReviewError;

const MAX_REVIEW_LEN: usize = 10_000;

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::ContentNotFound(id) => Self::content_not_found(id),
            err @ ReviewError::AlreadyReviewed { .. } => Self::Conflict(err.to_string()),
            ReviewError::Validation(msg) => Self::validation(msg),
            ReviewError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

/// `GET /api/content/{id}/reviews`
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<ReviewDto>>>, ApiError> {
    let id = validate_content_id(id)?;
    let catalog = state.catalog_config().await;
    let (offset, limit) = validate_page(query.offset, query.limit, &catalog)?;

    let reviews = state
        .review_service()
        .list_reviews(ContentId::new(id), offset, limit)
        .await?;
    Ok(Json(ApiResponse::success(reviews)))
}

/// `POST /api/content/{id}/reviews`
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<Json<ApiResponse<ReviewDto>>, ApiError> {
    let id = validate_content_id(id)?;
    if payload.text.len() > MAX_REVIEW_LEN {
        return Err(ApiError::validation(format!(
            "Review text must be {MAX_REVIEW_LEN} characters or less"
        )));
    }

    let review = state
        .review_service()
        .add_review(user, ContentId::new(id), payload.score, &payload.text)
        .await?;
    Ok(Json(ApiResponse::success(review)))
}
