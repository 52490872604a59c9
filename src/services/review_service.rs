//! Domain service for user reviews and the derived content rating.

use thiserror::Error;

use crate::api::types::ReviewDto;
use crate::domain::{ContentId, UserId};

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Content not found: {0}")]
    ContentNotFound(ContentId),

    #[error("User {user} already reviewed content {content}")]
    AlreadyReviewed { user: UserId, content: ContentId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for ReviewError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

#[async_trait::async_trait]
pub trait ReviewService: Send + Sync {
    /// Stores a review; each user may review a content item once.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::Validation`] if the score is outside `1..=10`
    /// - [`ReviewError::AlreadyReviewed`] on a second review by the same user
    async fn add_review(
        &self,
        user: UserId,
        content: ContentId,
        score: i32,
        text: &str,
    ) -> Result<ReviewDto, ReviewError>;

    /// Newest first.
    async fn list_reviews(
        &self,
        content: ContentId,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<ReviewDto>, ReviewError>;

    /// Average score, `None` without reviews.
    async fn rating(&self, content: ContentId) -> Result<Option<f64>, ReviewError>;
}
