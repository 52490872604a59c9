use anyhow::Context;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::favorite;

pub struct FavoriteRepository {
    conn: DatabaseConnection,
}

impl FavoriteRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts the favorite; an existing entry is left untouched.
    pub async fn add(&self, user_id: i32, content_id: i32) -> anyhow::Result<()> {
        let model = favorite::ActiveModel {
            user_id: Set(user_id),
            content_id: Set(content_id),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
        };

        favorite::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    favorite::Column::UserId,
                    favorite::Column::ContentId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec(&self.conn)
            .await
            .context("Failed to insert favorite")?;

        Ok(())
    }

    pub async fn remove(&self, user_id: i32, content_id: i32) -> anyhow::Result<bool> {
        let result = favorite::Entity::delete_many()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::ContentId.eq(content_id))
            .exec(&self.conn)
            .await
            .context("Failed to delete favorite")?;

        Ok(result.rows_affected > 0)
    }

    /// Most recently added first.
    pub async fn content_ids(&self, user_id: i32) -> anyhow::Result<Vec<i32>> {
        let ids = favorite::Entity::find()
            .select_only()
            .column(favorite::Column::ContentId)
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_desc(favorite::Column::CreatedAt)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await
            .context("Failed to list favorites")?;

        Ok(ids)
    }
}
