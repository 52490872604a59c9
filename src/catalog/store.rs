//! The lookup boundary consumed by the aggregator.

use async_trait::async_trait;

use super::StoreError;
use crate::db::Store;
use crate::domain::{ContentId, PersonId};
use crate::models::{Country, Episode, Genre, MoviePayload, Person, ScalarRow};

/// Id lists the aggregator can request, each scoped to its parent row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdList {
    Countries(ContentId),
    Genres(ContentId),
    Seasons(ContentId),
    /// Episode ids of a season.
    Episodes(i32),
}

/// A season row without its episodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRow {
    pub id: i32,
    pub title: Option<String>,
}

/// Typed point and range lookups over the relational catalog.
///
/// Point lookups return [`StoreError::NotFound`] when the row is absent;
/// list lookups return an empty list instead.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn scalar_row(&self, id: ContentId) -> Result<ScalarRow, StoreError>;

    async fn person(&self, id: PersonId) -> Result<Person, StoreError>;

    async fn genre(&self, id: i32) -> Result<Genre, StoreError>;

    async fn country(&self, id: i32) -> Result<Country, StoreError>;

    async fn list_ids(&self, list: IdList) -> Result<Vec<i32>, StoreError>;

    /// Asset ids of the content's stills.
    async fn pictures(&self, content: ContentId) -> Result<Vec<String>, StoreError>;

    async fn facts(&self, content: ContentId) -> Result<Vec<String>, StoreError>;

    /// `None` when no role with that name exists.
    async fn role_id(&self, name: &str) -> Result<Option<i32>, StoreError>;

    async fn participant_ids(
        &self,
        role_id: i32,
        content: ContentId,
    ) -> Result<Vec<PersonId>, StoreError>;

    async fn movie(&self, content: ContentId) -> Result<MoviePayload, StoreError>;

    async fn series_years(
        &self,
        content: ContentId,
    ) -> Result<(Option<i32>, Option<i32>), StoreError>;

    async fn season(&self, id: i32) -> Result<SeasonRow, StoreError>;

    async fn episode(&self, id: i32) -> Result<Episode, StoreError>;
}

fn found<T>(entity: &'static str, id: i32, row: anyhow::Result<Option<T>>) -> Result<T, StoreError> {
    row?.ok_or(StoreError::NotFound { entity, id })
}

#[async_trait]
impl EntityStore for Store {
    async fn scalar_row(&self, id: ContentId) -> Result<ScalarRow, StoreError> {
        found("content", id.value(), self.get_content_row(id.value()).await)
    }

    async fn person(&self, id: PersonId) -> Result<Person, StoreError> {
        found("person", id.value(), self.get_person(id.value()).await)
    }

    async fn genre(&self, id: i32) -> Result<Genre, StoreError> {
        found("genre", id, self.get_genre(id).await)
    }

    async fn country(&self, id: i32) -> Result<Country, StoreError> {
        found("country", id, self.get_country(id).await)
    }

    async fn list_ids(&self, list: IdList) -> Result<Vec<i32>, StoreError> {
        let ids = match list {
            IdList::Countries(content) => self.get_country_ids(content.value()).await?,
            IdList::Genres(content) => self.get_genre_ids(content.value()).await?,
            IdList::Seasons(content) => self.get_season_ids(content.value()).await?,
            IdList::Episodes(season) => self.get_episode_ids(season).await?,
        };
        Ok(ids)
    }

    async fn pictures(&self, content: ContentId) -> Result<Vec<String>, StoreError> {
        Ok(self.get_pictures(content.value()).await?)
    }

    async fn facts(&self, content: ContentId) -> Result<Vec<String>, StoreError> {
        Ok(self.get_facts(content.value()).await?)
    }

    async fn role_id(&self, name: &str) -> Result<Option<i32>, StoreError> {
        Ok(self.get_role_id(name).await?)
    }

    async fn participant_ids(
        &self,
        role_id: i32,
        content: ContentId,
    ) -> Result<Vec<PersonId>, StoreError> {
        let ids = self.get_participant_ids(role_id, content.value()).await?;
        Ok(ids.into_iter().map(PersonId::new).collect())
    }

    async fn movie(&self, content: ContentId) -> Result<MoviePayload, StoreError> {
        found("movie", content.value(), self.get_movie(content.value()).await)
    }

    async fn series_years(
        &self,
        content: ContentId,
    ) -> Result<(Option<i32>, Option<i32>), StoreError> {
        found(
            "series",
            content.value(),
            self.get_series_years(content.value()).await,
        )
    }

    async fn season(&self, id: i32) -> Result<SeasonRow, StoreError> {
        let (id, title) = found("season", id, self.get_season(id).await)?;
        Ok(SeasonRow { id, title })
    }

    async fn episode(&self, id: i32) -> Result<Episode, StoreError> {
        found("episode", id, self.get_episode(id).await)
    }
}
