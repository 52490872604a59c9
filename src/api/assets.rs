use axum::{
    Json,
    body::{Body, Bytes},
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::validation::validate_asset_path;
use super::{ApiError, ApiResponse, AppState};
use crate::services::StaticError;

impl From<StaticError> for ApiError {
    fn from(err: StaticError) -> Self {
        match err {
            StaticError::InvalidPath(path) => Self::validation(format!("Invalid asset path: {path}")),
            StaticError::Io(msg) => Self::internal(msg),
        }
    }
}

/// `GET /static/{*path}`
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let path = validate_asset_path(&path)?;
    let bytes = state
        .statics()
        .get(path)
        .await?
        .ok_or_else(|| ApiError::not_found("Asset", path))?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok((
        [(header::CONTENT_TYPE, mime.as_ref().to_string())],
        Body::from(bytes),
    )
        .into_response())
}

#[derive(Debug, serde::Serialize)]
pub struct UploadResponse {
    pub path: String,
    pub url: String,
}

/// `POST /api/static/{*path}`
pub async fn upload_static(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    body: Bytes,
) -> Result<Json<ApiResponse<UploadResponse>>, ApiError> {
    let path = validate_asset_path(&path)?;
    if body.is_empty() {
        return Err(ApiError::validation("Upload body cannot be empty"));
    }

    state.statics().put(path, body.to_vec()).await?;

    Ok(Json(ApiResponse::success(UploadResponse {
        url: state.statics().url_for(path),
        path: path.to_string(),
    })))
}
