//! Domain service for per-user favorite lists.

use thiserror::Error;

use crate::api::types::PreviewDto;
use crate::domain::{ContentId, UserId};
use crate::services::ContentError;

#[derive(Debug, Error)]
pub enum FavoriteError {
    #[error("Content not found: {0}")]
    ContentNotFound(ContentId),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for FavoriteError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait FavoriteService: Send + Sync {
    /// Adds `content` to the user's favorites. Adding twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`FavoriteError::ContentNotFound`] for an unknown content id.
    async fn add(&self, user: UserId, content: ContentId) -> Result<(), FavoriteError>;

    /// Returns `false` when the content was not a favorite.
    async fn remove(&self, user: UserId, content: ContentId) -> Result<bool, FavoriteError>;

    async fn list(&self, user: UserId) -> Result<Vec<PreviewDto>, FavoriteError>;
}
