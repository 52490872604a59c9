use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::entities::{episode, prelude::*, season};
use crate::models::{Episode, MoviePayload};

/// Movie and series sub-type tables.
pub struct SubtypeRepository {
    conn: DatabaseConnection,
}

impl SubtypeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn movie(&self, content_id: i32) -> anyhow::Result<Option<MoviePayload>> {
        let model = Movie::find_by_id(content_id).one(&self.conn).await?;
        Ok(model.map(|m| MoviePayload {
            premiere: m.premiere,
            runtime_minutes: m.runtime_minutes,
        }))
    }

    pub async fn series_years(
        &self,
        content_id: i32,
    ) -> anyhow::Result<Option<(Option<i32>, Option<i32>)>> {
        let model = Series::find_by_id(content_id).one(&self.conn).await?;
        Ok(model.map(|s| (s.year_start, s.year_end)))
    }

    pub async fn season_ids(&self, content_id: i32) -> anyhow::Result<Vec<i32>> {
        let ids = Season::find()
            .select_only()
            .column(season::Column::Id)
            .filter(season::Column::ContentId.eq(content_id))
            .order_by_asc(season::Column::Position)
            .order_by_asc(season::Column::Id)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await?;
        Ok(ids)
    }

    pub async fn season(&self, id: i32) -> anyhow::Result<Option<(i32, Option<String>)>> {
        let model = Season::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(|s| (s.id, s.title)))
    }

    pub async fn episode_ids(&self, season_id: i32) -> anyhow::Result<Vec<i32>> {
        let ids = episode::Entity::find()
            .select_only()
            .column(episode::Column::Id)
            .filter(episode::Column::SeasonId.eq(season_id))
            .order_by_asc(episode::Column::Number)
            .order_by_asc(episode::Column::Id)
            .into_tuple::<i32>()
            .all(&self.conn)
            .await?;
        Ok(ids)
    }

    pub async fn episode(&self, id: i32) -> anyhow::Result<Option<Episode>> {
        let model = episode::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(|e| Episode {
            id: e.id,
            number: e.number,
            title: e.title,
            runtime_minutes: e.runtime_minutes,
        }))
    }
}
