//! `SeaORM` implementation of the `ReviewService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::api::types::ReviewDto;
use crate::db::Store;
use crate::domain::{ContentId, UserId};
use crate::services::review_service::{MAX_SCORE, MIN_SCORE, ReviewError, ReviewService};

pub struct SeaOrmReviewService {
    store: Store,
}

impl SeaOrmReviewService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn ensure_content(&self, content: ContentId) -> Result<(), ReviewError> {
        if self.store.content_exists(content.value()).await? {
            Ok(())
        } else {
            Err(ReviewError::ContentNotFound(content))
        }
    }
}

#[async_trait]
impl ReviewService for SeaOrmReviewService {
    async fn add_review(
        &self,
        user: UserId,
        content: ContentId,
        score: i32,
        text: &str,
    ) -> Result<ReviewDto, ReviewError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(ReviewError::Validation(format!(
                "Score must be between {MIN_SCORE} and {MAX_SCORE}"
            )));
        }

        self.ensure_content(content).await?;

        if self.store.review_exists(content.value(), user.value()).await? {
            return Err(ReviewError::AlreadyReviewed { user, content });
        }

        // The unique index settles races the check above cannot see.
        let id = self
            .store
            .add_review(content.value(), user.value(), score, text.trim())
            .await?
            .ok_or(ReviewError::AlreadyReviewed { user, content })?;

        info!(review_id = id, content = %content, user = %user, score, "Review added");

        let review = self
            .store
            .get_review(id)
            .await?
            .ok_or_else(|| ReviewError::Database(format!("Review {id} vanished after insert")))?;

        Ok(ReviewDto::from(review))
    }

    async fn list_reviews(
        &self,
        content: ContentId,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<ReviewDto>, ReviewError> {
        self.ensure_content(content).await?;

        let reviews = self
            .store
            .list_reviews(content.value(), offset, limit)
            .await?;
        Ok(reviews.into_iter().map(ReviewDto::from).collect())
    }

    async fn rating(&self, content: ContentId) -> Result<Option<f64>, ReviewError> {
        Ok(self.store.get_rating(content.value()).await?)
    }
}
