use axum::{
    Extension, Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::auth::CurrentUser;
use super::validation::validate_content_id;
use super::{ApiError, ApiResponse, AppState, PreviewDto};
use crate::domain::ContentId;
use crate::services::FavoriteError;

impl From<FavoriteError> for ApiError {
    fn from(err: FavoriteError) -> Self {
        match err {
            FavoriteError::ContentNotFound(id) => Self::content_not_found(id),
            FavoriteError::Content(err) => err.into(),
            FavoriteError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

/// `GET /api/favorites`
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Vec<PreviewDto>>>, ApiError> {
    let favorites = state.favorite_service().list(user).await?;
    Ok(Json(ApiResponse::success(favorites)))
}

/// `PUT /api/favorites/{id}`
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = validate_content_id(id)?;
    state
        .favorite_service()
        .add(user, ContentId::new(id))
        .await?;
    Ok(Json(ApiResponse::success(())))
}

/// `DELETE /api/favorites/{id}`
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = validate_content_id(id)?;
    let removed = state
        .favorite_service()
        .remove(user, ContentId::new(id))
        .await?;

    if !removed {
        return Err(ApiError::not_found("Favorite", id));
    }
    Ok(Json(ApiResponse::success(())))
}
