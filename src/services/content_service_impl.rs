//! `SeaORM` implementation of the `ContentService` trait.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::api::types::{ContentDto, PersonDto, PersonSummaryDto, PreviewDto};
use crate::catalog::Aggregator;
use crate::db::Store;
use crate::domain::{ContentId, PersonId};
use crate::models::{ContentRecord, Person, PreviewRecord};
use crate::services::content_service::{ContentError, ContentService};
use crate::services::static_store::StaticStore;

/// Previews aggregated at once when building a page.
const PREVIEW_CONCURRENCY: usize = 4;

pub struct SeaOrmContentService {
    store: Store,
    aggregator: Aggregator,
    statics: Arc<dyn StaticStore>,
}

impl SeaOrmContentService {
    #[must_use]
    pub fn new(store: Store, aggregator: Aggregator, statics: Arc<dyn StaticStore>) -> Self {
        Self {
            store,
            aggregator,
            statics,
        }
    }

    fn person_dto(&self, person: Person) -> PersonSummaryDto {
        PersonSummaryDto {
            photo_url: person.photo.as_deref().map(|p| self.statics.url_for(p)),
            id: person.id,
            name: person.name,
            name_localized: person.name_localized,
            birth_date: person.birth_date,
            death_date: person.death_date,
            sex: person.sex,
            height_cm: person.height_cm,
        }
    }

    fn people(&self, persons: Vec<Person>) -> Vec<PersonSummaryDto> {
        persons.into_iter().map(|p| self.person_dto(p)).collect()
    }

    fn url(&self, asset: Option<&str>) -> Option<String> {
        asset.map(|a| self.statics.url_for(a))
    }

    fn content_dto(&self, record: ContentRecord, rating: Option<f64>) -> ContentDto {
        ContentDto {
            poster_url: self.url(record.poster.as_deref()),
            backdrop_url: self.url(record.backdrop.as_deref()),
            picture_urls: record
                .pictures
                .iter()
                .map(|p| self.statics.url_for(p))
                .collect(),
            actors: self.people(record.actors),
            directors: self.people(record.directors),
            producers: self.people(record.producers),
            writers: self.people(record.writers),
            cinematographers: self.people(record.cinematographers),
            composers: self.people(record.composers),
            editors: self.people(record.editors),
            id: record.id,
            content_type: record.content_type,
            title: record.title,
            original_title: record.original_title,
            slogan: record.slogan,
            budget: record.budget,
            age_restriction: record.age_restriction,
            audience: record.audience,
            external_rating: record.external_rating,
            rating,
            description: record.description,
            trailer_url: record.trailer_url,
            facts: record.facts,
            countries: record.countries,
            genres: record.genres,
            type_payload: record.payload,
        }
    }

    fn preview_dto(&self, preview: PreviewRecord) -> PreviewDto {
        PreviewDto {
            poster_url: self.url(preview.poster.as_deref()),
            actors: self.people(preview.actors),
            directors: self.people(preview.directors),
            id: preview.id,
            content_type: preview.content_type,
            title: preview.title,
            original_title: preview.original_title,
            external_rating: preview.external_rating,
            countries: preview.countries,
            genres: preview.genres,
            type_payload: preview.payload,
        }
    }

    async fn previews(&self, ids: Vec<i32>) -> Result<Vec<PreviewDto>, ContentError> {
        stream::iter(ids)
            .map(|id| self.get_preview(ContentId::new(id)))
            .buffered(PREVIEW_CONCURRENCY)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect()
    }
}

#[async_trait]
impl ContentService for SeaOrmContentService {
    async fn get_content(&self, id: ContentId) -> Result<ContentDto, ContentError> {
        let record = self.aggregator.fetch_content(id).await?;
        let rating = self.store.get_rating(id.value()).await?;
        Ok(self.content_dto(record, rating))
    }

    async fn get_preview(&self, id: ContentId) -> Result<PreviewDto, ContentError> {
        let preview = self.aggregator.fetch_preview(id).await?;
        Ok(self.preview_dto(preview))
    }

    async fn list_previews(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PreviewDto>, ContentError> {
        let ids = self.store.list_content_ids(offset, limit).await?;
        self.previews(ids).await
    }

    async fn search(
        &self,
        query: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PreviewDto>, ContentError> {
        let ids = self.store.search_content_ids(query, offset, limit).await?;
        self.previews(ids).await
    }

    async fn list_by_genre(
        &self,
        genre_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PreviewDto>, ContentError> {
        let ids = self
            .store
            .content_ids_by_genre(genre_id, offset, limit)
            .await?;
        self.previews(ids).await
    }

    async fn get_person(&self, id: PersonId) -> Result<PersonDto, ContentError> {
        let person = self
            .store
            .get_person(id.value())
            .await?
            .ok_or(ContentError::PersonNotFound(id))?;

        let content_ids = self
            .store
            .get_person_content_ids(id.value())
            .await?
            .into_iter()
            .map(ContentId::new)
            .collect();

        Ok(PersonDto {
            person: self.person_dto(person),
            content_ids,
        })
    }
}
