//! Domain service for reading the content catalog.
//!
//! Wraps the [`Aggregator`](crate::catalog::Aggregator) and turns its records
//! into presentation DTOs with asset URLs and review ratings.

use thiserror::Error;

use crate::api::types::{ContentDto, PersonDto, PreviewDto};
use crate::catalog::CatalogError;
use crate::domain::{ContentId, PersonId};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content not found: {0}")]
    NotFound(ContentId),

    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),

    /// A facet of the record could not be loaded.
    #[error("Content temporarily unavailable: {0}")]
    Unavailable(String),

    #[error("Catalog misconfigured: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for ContentError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => Self::NotFound(id),
            err @ CatalogError::Facet { .. } => Self::Unavailable(err.to_string()),
            CatalogError::Configuration(msg) => Self::Configuration(msg),
            CatalogError::Store(err) => Self::Database(err.to_string()),
            CatalogError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<anyhow::Error> for ContentError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Read access to the catalog.
///
/// Listing operations return previews in the order of the underlying id
/// query; a failure on any single entry fails the page.
#[async_trait::async_trait]
pub trait ContentService: Send + Sync {
    /// Full record with every facet.
    ///
    /// # Errors
    ///
    /// - [`ContentError::NotFound`] if no content has this id
    /// - [`ContentError::Unavailable`] if any facet failed to load
    async fn get_content(&self, id: ContentId) -> Result<ContentDto, ContentError>;

    async fn get_preview(&self, id: ContentId) -> Result<PreviewDto, ContentError>;

    async fn list_previews(&self, offset: u64, limit: u64)
    -> Result<Vec<PreviewDto>, ContentError>;

    /// Substring match on title and original title.
    async fn search(
        &self,
        query: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PreviewDto>, ContentError>;

    async fn list_by_genre(
        &self,
        genre_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PreviewDto>, ContentError>;

    async fn get_person(&self, id: PersonId) -> Result<PersonDto, ContentError>;
}
