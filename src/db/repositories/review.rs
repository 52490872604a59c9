use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr,
};

use crate::domain::{ContentId, UserId};
use crate::entities::{review, users};
use crate::models::Review;

pub struct ReviewRepository {
    conn: DatabaseConnection,
}

impl ReviewRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: review::Model, username: String) -> Review {
        Review {
            id: model.id,
            content_id: ContentId::new(model.content_id),
            user_id: UserId::new(model.user_id),
            username,
            score: model.score,
            text: model.text,
            created_at: model.created_at,
        }
    }

    pub async fn exists(&self, content_id: i32, user_id: i32) -> anyhow::Result<bool> {
        let found = review::Entity::find()
            .filter(review::Column::ContentId.eq(content_id))
            .filter(review::Column::UserId.eq(user_id))
            .one(&self.conn)
            .await
            .context("Failed to query existing review")?;
        Ok(found.is_some())
    }

    /// Inserts a review and returns its id, or `None` when the user already
    /// reviewed this content.
    pub async fn add(
        &self,
        content_id: i32,
        user_id: i32,
        score: i32,
        text: &str,
    ) -> anyhow::Result<Option<i32>> {
        let result = review::ActiveModel {
            content_id: Set(content_id),
            user_id: Set(user_id),
            score: Set(score),
            text: Set(text.to_string()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await;

        match result {
            Ok(model) => Ok(Some(model.id)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err).context("Failed to insert review"),
        }
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<Review>> {
        let row = review::Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(&self.conn)
            .await
            .context("Failed to query review")?;

        Ok(row.map(|(review, user)| {
            Self::map_model(review, user.map(|u| u.username).unwrap_or_default())
        }))
    }

    /// Newest first.
    pub async fn list(&self, content_id: i32, offset: u64, limit: u64) -> anyhow::Result<Vec<Review>> {
        let rows = review::Entity::find()
            .filter(review::Column::ContentId.eq(content_id))
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id)
            .offset(offset)
            .limit(limit)
            .find_also_related(users::Entity)
            .all(&self.conn)
            .await
            .context("Failed to list reviews")?;

        Ok(rows
            .into_iter()
            .map(|(review, user)| {
                let username = user.map(|u| u.username).unwrap_or_default();
                Self::map_model(review, username)
            })
            .collect())
    }

    /// Average score, `None` when the content has no reviews.
    pub async fn rating(&self, content_id: i32) -> anyhow::Result<Option<f64>> {
        let scores = review::Entity::find()
            .select_only()
            .column(review::Column::Score)
            .filter(review::Column::ContentId.eq(content_id))
            .into_tuple::<i32>()
            .all(&self.conn)
            .await
            .context("Failed to load review scores")?;

        if scores.is_empty() {
            return Ok(None);
        }

        let sum: i64 = scores.iter().map(|s| i64::from(*s)).sum();
        #[allow(clippy::cast_precision_loss)]
        Ok(Some(sum as f64 / scores.len() as f64))
    }
}
