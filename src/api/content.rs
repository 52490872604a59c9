//! Catalog read endpoints.
//!
//! Handlers only map HTTP to [`ContentService`](crate::services::ContentService)
//! calls; aggregation happens in the catalog core.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use super::validation::{
    validate_content_id, validate_genre_id, validate_page, validate_person_id,
    validate_search_query,
};
use super::{ApiError, ApiResponse, AppState, ContentDto, PageQuery, PersonDto, PreviewDto, SearchQuery};
use crate::domain::{ContentId, PersonId};
use crate::services::ContentError;

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound(id) => Self::content_not_found(id),
            ContentError::PersonNotFound(id) => Self::not_found("Person", id),
            ContentError::Unavailable(msg) => Self::Unavailable(msg),
            ContentError::Configuration(msg) | ContentError::Internal(msg) => Self::internal(msg),
            ContentError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

/// `GET /api/content?offset&limit`
pub async fn list_content(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<PreviewDto>>>, ApiError> {
    let catalog = state.catalog_config().await;
    let (offset, limit) = validate_page(query.offset, query.limit, &catalog)?;

    let previews = state.content_service().list_previews(offset, limit).await?;
    Ok(Json(ApiResponse::success(previews)))
}

/// `GET /api/content/search?q&offset&limit`
pub async fn search_content(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<PreviewDto>>>, ApiError> {
    let term = validate_search_query(&query.q)?;
    let catalog = state.catalog_config().await;
    let (offset, limit) = validate_page(query.offset, query.limit, &catalog)?;

    let previews = state.content_service().search(term, offset, limit).await?;
    Ok(Json(ApiResponse::success(previews)))
}

/// `GET /api/content/{id}`
///
/// # Errors
/// - 404 when the content does not exist
/// - 503 when any facet of the record could not be loaded
pub async fn get_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ContentDto>>, ApiError> {
    let id = validate_content_id(id)?;
    let content = state.content_service().get_content(ContentId::new(id)).await?;
    Ok(Json(ApiResponse::success(content)))
}

/// `GET /api/content/{id}/preview`
pub async fn get_preview(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PreviewDto>>, ApiError> {
    let id = validate_content_id(id)?;
    let preview = state.content_service().get_preview(ContentId::new(id)).await?;
    Ok(Json(ApiResponse::success(preview)))
}

/// `GET /api/genres/{id}/content`
pub async fn list_genre_content(
    State(state): State<Arc<AppState>>,
    Path(genre_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<PreviewDto>>>, ApiError> {
    let genre_id = validate_genre_id(genre_id)?;
    let catalog = state.catalog_config().await;
    let (offset, limit) = validate_page(query.offset, query.limit, &catalog)?;

    let previews = state
        .content_service()
        .list_by_genre(genre_id, offset, limit)
        .await?;
    Ok(Json(ApiResponse::success(previews)))
}

/// `GET /api/persons/{id}`
pub async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PersonDto>>, ApiError> {
    let id = validate_person_id(id)?;
    let person = state.content_service().get_person(PersonId::new(id)).await?;
    Ok(Json(ApiResponse::success(person)))
}
