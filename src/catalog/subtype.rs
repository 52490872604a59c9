use std::sync::Arc;

use super::{CatalogError, EntityStore, IdList};
use crate::domain::{ContentId, ContentType};
use crate::models::{Season, SeriesPayload, TypePayload};

/// Loads the movie or series payload of a content record.
///
/// Only reachable through the aggregator. Seasons and their episodes are
/// fetched one after another inside the single payload task.
#[derive(Clone)]
pub(super) struct SubtypeResolver {
    store: Arc<dyn EntityStore>,
}

impl SubtypeResolver {
    pub(super) fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub(super) async fn payload(
        &self,
        content: ContentId,
        content_type: ContentType,
    ) -> Result<TypePayload, CatalogError> {
        match content_type {
            ContentType::Movie => Ok(TypePayload::Movie(self.store.movie(content).await?)),
            ContentType::Series => Ok(TypePayload::Series(self.series(content).await?)),
        }
    }

    async fn series(&self, content: ContentId) -> Result<SeriesPayload, CatalogError> {
        let (year_start, year_end) = self.store.series_years(content).await?;
        let season_ids = self.store.list_ids(IdList::Seasons(content)).await?;

        let mut seasons = Vec::with_capacity(season_ids.len());
        for season_id in season_ids {
            seasons.push(self.season(season_id).await?);
        }

        Ok(SeriesPayload {
            year_start,
            year_end,
            seasons,
        })
    }

    async fn season(&self, id: i32) -> Result<Season, CatalogError> {
        let row = self.store.season(id).await?;
        let episode_ids = self.store.list_ids(IdList::Episodes(row.id)).await?;

        let mut episodes = Vec::with_capacity(episode_ids.len());
        for episode_id in episode_ids {
            episodes.push(self.store.episode(episode_id).await?);
        }

        Ok(Season {
            id: row.id,
            title: row.title,
            episodes,
        })
    }
}
