//! Parallel assembly of content records.
//!
//! Every facet of a record is loaded by its own task on a [`JoinSet`]. The set
//! is always drained completely before anything is returned, so no task
//! outlives the call. Tasks hand back small [`FacetValue`]s which a
//! [`RecordBuilder`] folds into the record after the barrier. If any facet
//! failed the partially built record is dropped and the first failure to
//! arrive is returned.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use super::roles::RoleResolver;
use super::subtype::SubtypeResolver;
use super::{CatalogError, EntityStore, Facet, FacetError, IdList, StoreError};
use crate::domain::{ContentId, ContentType, Role};
use crate::models::{
    ContentRecord, Country, Genre, Person, PreviewRecord, ScalarRow, TypePayload,
};

/// Facets loaded for a full record.
pub const FULL_FACETS: [Facet; 12] = [
    Facet::Pictures,
    Facet::Facts,
    Facet::Countries,
    Facet::Genres,
    Facet::Participants(Role::Actor),
    Facet::Participants(Role::Director),
    Facet::Participants(Role::Producer),
    Facet::Participants(Role::Writer),
    Facet::Participants(Role::Cinematographer),
    Facet::Participants(Role::Composer),
    Facet::Participants(Role::Editor),
    Facet::TypePayload,
];

/// Facets loaded for a preview.
pub const PREVIEW_FACETS: [Facet; 5] = [
    Facet::Countries,
    Facet::Genres,
    Facet::Participants(Role::Actor),
    Facet::Participants(Role::Director),
    Facet::TypePayload,
];

/// The result of one facet task.
#[derive(Debug)]
enum FacetValue {
    Pictures(Vec<String>),
    Facts(Vec<String>),
    Countries(Vec<Country>),
    Genres(Vec<Genre>),
    Participants(Role, Vec<Person>),
    TypePayload(TypePayload),
}

/// Everything a facet task needs, cloned into each spawned task.
#[derive(Clone)]
struct FacetLoader {
    store: Arc<dyn EntityStore>,
    roles: RoleResolver,
    subtype: SubtypeResolver,
}

impl FacetLoader {
    async fn run(
        self,
        facet: Facet,
        content: ContentId,
        content_type: ContentType,
    ) -> Result<FacetValue, FacetError> {
        self.load(facet, content, content_type)
            .await
            .map_err(|source| FacetError { facet, source })
    }

    async fn load(
        &self,
        facet: Facet,
        content: ContentId,
        content_type: ContentType,
    ) -> Result<FacetValue, CatalogError> {
        let value = match facet {
            Facet::Pictures => FacetValue::Pictures(self.store.pictures(content).await?),
            Facet::Facts => FacetValue::Facts(self.store.facts(content).await?),
            Facet::Countries => {
                let ids = self.store.list_ids(IdList::Countries(content)).await?;
                let mut countries = Vec::with_capacity(ids.len());
                for id in ids {
                    countries.push(self.store.country(id).await?);
                }
                FacetValue::Countries(countries)
            }
            Facet::Genres => {
                let ids = self.store.list_ids(IdList::Genres(content)).await?;
                let mut genres = Vec::with_capacity(ids.len());
                for id in ids {
                    genres.push(self.store.genre(id).await?);
                }
                FacetValue::Genres(genres)
            }
            Facet::Participants(role) => {
                FacetValue::Participants(role, self.roles.participants(role, content).await?)
            }
            Facet::TypePayload => {
                FacetValue::TypePayload(self.subtype.payload(content, content_type).await?)
            }
        };
        Ok(value)
    }
}

/// Collects facet values after the barrier and turns them into a record.
#[derive(Debug, Default)]
struct RecordBuilder {
    pictures: Option<Vec<String>>,
    facts: Option<Vec<String>>,
    countries: Option<Vec<Country>>,
    genres: Option<Vec<Genre>>,
    participants: HashMap<Role, Vec<Person>>,
    payload: Option<TypePayload>,
}

fn missing(facet: Facet) -> CatalogError {
    CatalogError::Internal(format!("{facet} facet was not loaded"))
}

impl RecordBuilder {
    fn apply(&mut self, value: FacetValue) {
        match value {
            FacetValue::Pictures(v) => self.pictures = Some(v),
            FacetValue::Facts(v) => self.facts = Some(v),
            FacetValue::Countries(v) => self.countries = Some(v),
            FacetValue::Genres(v) => self.genres = Some(v),
            FacetValue::Participants(role, v) => {
                self.participants.insert(role, v);
            }
            FacetValue::TypePayload(v) => self.payload = Some(v),
        }
    }

    fn role(&mut self, role: Role) -> Result<Vec<Person>, CatalogError> {
        self.participants
            .remove(&role)
            .ok_or_else(|| missing(Facet::Participants(role)))
    }

    fn payload(&mut self, row: &ScalarRow) -> Result<TypePayload, CatalogError> {
        let payload = self.payload.take().ok_or_else(|| missing(Facet::TypePayload))?;
        if payload.content_type() != row.content_type {
            return Err(CatalogError::Internal(format!(
                "content {} is a {} but carries a {} payload",
                row.id,
                row.content_type,
                payload.content_type()
            )));
        }
        Ok(payload)
    }

    fn into_record(mut self, row: ScalarRow) -> Result<ContentRecord, CatalogError> {
        let payload = self.payload(&row)?;
        Ok(ContentRecord {
            countries: self.countries.take().ok_or_else(|| missing(Facet::Countries))?,
            genres: self.genres.take().ok_or_else(|| missing(Facet::Genres))?,
            pictures: self.pictures.take().ok_or_else(|| missing(Facet::Pictures))?,
            facts: self.facts.take().ok_or_else(|| missing(Facet::Facts))?,
            actors: self.role(Role::Actor)?,
            directors: self.role(Role::Director)?,
            producers: self.role(Role::Producer)?,
            writers: self.role(Role::Writer)?,
            cinematographers: self.role(Role::Cinematographer)?,
            composers: self.role(Role::Composer)?,
            editors: self.role(Role::Editor)?,
            payload,
            id: row.id,
            content_type: row.content_type,
            title: row.title,
            original_title: row.original_title,
            slogan: row.slogan,
            budget: row.budget,
            age_restriction: row.age_restriction,
            audience: row.audience,
            external_rating: row.external_rating,
            description: row.description,
            poster: row.poster,
            trailer_url: row.trailer_url,
            backdrop: row.backdrop,
        })
    }

    fn into_preview(mut self, row: ScalarRow) -> Result<PreviewRecord, CatalogError> {
        let payload = self.payload(&row)?;
        Ok(PreviewRecord {
            countries: self.countries.take().ok_or_else(|| missing(Facet::Countries))?,
            genres: self.genres.take().ok_or_else(|| missing(Facet::Genres))?,
            actors: self.role(Role::Actor)?,
            directors: self.role(Role::Director)?,
            payload,
            id: row.id,
            content_type: row.content_type,
            title: row.title,
            original_title: row.original_title,
            external_rating: row.external_rating,
            poster: row.poster,
        })
    }
}

/// Assembles full and preview content records from an [`EntityStore`].
///
/// Holds no per-request state; one instance is shared by every request.
#[derive(Clone)]
pub struct Aggregator {
    store: Arc<dyn EntityStore>,
    loader: FacetLoader,
}

impl Aggregator {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        let loader = FacetLoader {
            roles: RoleResolver::new(Arc::clone(&store)),
            subtype: SubtypeResolver::new(Arc::clone(&store)),
            store: Arc::clone(&store),
        };
        Self { store, loader }
    }

    /// Loads the scalar row and every facet of `id`.
    pub async fn fetch_content(&self, id: ContentId) -> Result<ContentRecord, CatalogError> {
        let started = Instant::now();
        let result = match self.aggregate(id, &FULL_FACETS).await {
            Ok((row, builder)) => builder.into_record(row),
            Err(err) => Err(err),
        };
        record_outcome("full", started, &result);
        result
    }

    /// Loads the scalar row and the five preview facets of `id`.
    pub async fn fetch_preview(&self, id: ContentId) -> Result<PreviewRecord, CatalogError> {
        let started = Instant::now();
        let result = match self.aggregate(id, &PREVIEW_FACETS).await {
            Ok((row, builder)) => builder.into_preview(row),
            Err(err) => Err(err),
        };
        record_outcome("preview", started, &result);
        result
    }

    async fn aggregate(
        &self,
        id: ContentId,
        facets: &[Facet],
    ) -> Result<(ScalarRow, RecordBuilder), CatalogError> {
        let row = match self.store.scalar_row(id).await {
            Ok(row) => row,
            Err(StoreError::NotFound { .. }) => return Err(CatalogError::NotFound(id)),
            Err(err) => return Err(err.into()),
        };

        let mut tasks = JoinSet::new();
        for &facet in facets {
            tasks.spawn(self.loader.clone().run(facet, row.id, row.content_type));
        }

        let mut builder = RecordBuilder::default();
        let mut failures = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(value)) => builder.apply(value),
                Ok(Err(err)) => {
                    warn!(content = %id, facet = %err.facet, error = %err.source, "Facet failed");
                    failures.push(CatalogError::from(err));
                }
                Err(err) => {
                    error!(content = %id, error = %err, "Facet task did not complete");
                    failures.push(CatalogError::Internal(format!("facet task failed: {err}")));
                }
            }
        }

        if let Some(first) = failures.into_iter().next() {
            return Err(first);
        }

        debug!(content = %id, facets = facets.len(), "Aggregated content");
        Ok((row, builder))
    }
}

fn record_outcome<T>(kind: &'static str, started: Instant, result: &Result<T, CatalogError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(CatalogError::NotFound(_)) => "not_found",
        Err(_) => "error",
    };
    metrics::counter!("catalog_aggregations_total", "kind" => kind, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("catalog_aggregation_duration_seconds", "kind" => kind)
        .record(started.elapsed().as_secs_f64());
}
