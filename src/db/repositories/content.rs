use anyhow::Context;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::ContentId;
use crate::entities::{content, content_fact, content_genre, content_picture, prelude::*};
use crate::models::ScalarRow;

pub struct ContentRepository {
    conn: DatabaseConnection,
}

impl ContentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: content::Model) -> anyhow::Result<ScalarRow> {
        let content_type = model
            .content_type
            .parse()
            .with_context(|| format!("Malformed content row {}", model.id))?;

        Ok(ScalarRow {
            id: ContentId::new(model.id),
            content_type,
            title: model.title,
            original_title: model.original_title,
            slogan: model.slogan,
            budget: model.budget,
            age_restriction: model.age_restriction,
            audience: model.audience,
            external_rating: model.external_rating,
            description: model.description,
            poster: model.poster,
            trailer_url: model.trailer_url,
            backdrop: model.backdrop,
        })
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<ScalarRow>> {
        let model = Content::find_by_id(id).one(&self.conn).await?;
        model.map(Self::map_model).transpose()
    }

    pub async fn exists(&self, id: i32) -> anyhow::Result<bool> {
        let count = Content::find_by_id(id)
            .select_only()
            .column(content::Column::Id)
            .into_tuple::<i32>()
            .one(&self.conn)
            .await?;
        Ok(count.is_some())
    }

    pub async fn list_ids(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<i32>> {
        let ids = Content::find()
            .select_only()
            .column(content::Column::Id)
            .order_by_asc(content::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await?;
        Ok(ids)
    }

    /// Substring match on either title. Ranking is left to the store.
    pub async fn search_ids(&self, query: &str, offset: u64, limit: u64) -> anyhow::Result<Vec<i32>> {
        let ids = Content::find()
            .select_only()
            .column(content::Column::Id)
            .filter(
                Condition::any()
                    .add(content::Column::Title.contains(query))
                    .add(content::Column::OriginalTitle.contains(query)),
            )
            .order_by_asc(content::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await?;
        Ok(ids)
    }

    pub async fn ids_by_genre(
        &self,
        genre_id: i32,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<i32>> {
        let ids = ContentGenre::find()
            .select_only()
            .column(content_genre::Column::ContentId)
            .filter(content_genre::Column::GenreId.eq(genre_id))
            .order_by_asc(content_genre::Column::ContentId)
            .offset(offset)
            .limit(limit)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await?;
        Ok(ids)
    }

    pub async fn pictures(&self, content_id: i32) -> anyhow::Result<Vec<String>> {
        let assets = ContentPicture::find()
            .select_only()
            .column(content_picture::Column::Asset)
            .filter(content_picture::Column::ContentId.eq(content_id))
            .order_by_asc(content_picture::Column::Id)
            .into_tuple::<String>()
            .all(&self.conn)
            .await?;
        Ok(assets)
    }

    pub async fn facts(&self, content_id: i32) -> anyhow::Result<Vec<String>> {
        let facts = ContentFact::find()
            .select_only()
            .column(content_fact::Column::Text)
            .filter(content_fact::Column::ContentId.eq(content_id))
            .order_by_asc(content_fact::Column::Id)
            .into_tuple::<String>()
            .all(&self.conn)
            .await?;
        Ok(facts)
    }
}
