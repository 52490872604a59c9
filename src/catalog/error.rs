use std::fmt;
use thiserror::Error;

use crate::domain::{ContentId, Role};

/// Errors reported by an [`EntityStore`](super::EntityStore) lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("store error: {0}")]
    Backend(String),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Backend(format!("{err:#}"))
    }
}

/// One independently retrievable slice of a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Pictures,
    Facts,
    Countries,
    Genres,
    Participants(Role),
    TypePayload,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pictures => f.write_str("pictures"),
            Self::Facts => f.write_str("facts"),
            Self::Countries => f.write_str("countries"),
            Self::Genres => f.write_str("genres"),
            Self::Participants(role) => write!(f, "{role} participants"),
            Self::TypePayload => f.write_str("type payload"),
        }
    }
}

/// Errors surfaced by the catalog core.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The scalar row of the requested content does not exist.
    #[error("Content not found: {0}")]
    NotFound(ContentId),

    /// One of the parallel facet lookups failed; the record is discarded.
    #[error("Failed to load {facet} facet: {message}")]
    Facet { facet: Facet, message: String },

    /// A canonical role is missing from the role table.
    #[error("Catalog configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal catalog error: {0}")]
    Internal(String),
}

/// A facet task failure, tagged with the facet it was loading.
#[derive(Debug, Clone, Error)]
#[error("{facet}: {source}")]
pub struct FacetError {
    pub facet: Facet,
    pub source: CatalogError,
}

impl From<FacetError> for CatalogError {
    fn from(err: FacetError) -> Self {
        match err.source {
            Self::Configuration(msg) => Self::Configuration(msg),
            other => Self::Facet {
                facet: err.facet,
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_names_read_naturally() {
        assert_eq!(
            Facet::Participants(Role::Cinematographer).to_string(),
            "cinematographer participants"
        );
        assert_eq!(Facet::TypePayload.to_string(), "type payload");
    }

    #[test]
    fn configuration_errors_survive_facet_wrapping() {
        let err: CatalogError = FacetError {
            facet: Facet::Participants(Role::Editor),
            source: CatalogError::Configuration("role 'editor' is not seeded".to_string()),
        }
        .into();
        assert!(matches!(err, CatalogError::Configuration(_)));

        let err: CatalogError = FacetError {
            facet: Facet::Facts,
            source: StoreError::Backend("connection reset".to_string()).into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Failed to load facts facet: store error: connection reset"
        );
    }
}
