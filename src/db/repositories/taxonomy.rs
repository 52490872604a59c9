use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::entities::{content_country, content_genre, country, genre, prelude::*};
use crate::models::{Country, Genre};

/// Genres and production countries.
pub struct TaxonomyRepository {
    conn: DatabaseConnection,
}

impl TaxonomyRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn genre(&self, id: i32) -> anyhow::Result<Option<Genre>> {
        let model = genre::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(|g| Genre {
            id: g.id,
            name: g.name,
        }))
    }

    pub async fn country(&self, id: i32) -> anyhow::Result<Option<Country>> {
        let model = country::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(|c| Country {
            id: c.id,
            name: c.name,
        }))
    }

    pub async fn genre_ids(&self, content_id: i32) -> anyhow::Result<Vec<i32>> {
        let ids = ContentGenre::find()
            .select_only()
            .column(content_genre::Column::GenreId)
            .filter(content_genre::Column::ContentId.eq(content_id))
            .order_by_asc(content_genre::Column::GenreId)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await?;
        Ok(ids)
    }

    pub async fn country_ids(&self, content_id: i32) -> anyhow::Result<Vec<i32>> {
        let ids = ContentCountry::find()
            .select_only()
            .column(content_country::Column::CountryId)
            .filter(content_country::Column::ContentId.eq(content_id))
            .order_by_asc(content_country::Column::CountryId)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await?;
        Ok(ids)
    }
}
