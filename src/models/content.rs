//! Value objects produced by the catalog aggregator.
//!
//! Records are assembled fresh for every request and never mutated after
//! construction.

use serde::{Deserialize, Serialize};

use crate::domain::{ContentId, ContentType};
use crate::models::Person;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Scalar columns of the `content` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarRow {
    pub id: ContentId,
    pub content_type: ContentType,
    pub title: String,
    pub original_title: Option<String>,
    pub slogan: Option<String>,
    pub budget: Option<i64>,
    pub age_restriction: Option<i32>,
    pub audience: Option<i64>,
    pub external_rating: Option<f64>,
    pub description: Option<String>,
    pub poster: Option<String>,
    pub trailer_url: Option<String>,
    pub backdrop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePayload {
    pub premiere: Option<String>,
    pub runtime_minutes: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: i32,
    pub number: i32,
    pub title: Option<String>,
    pub runtime_minutes: Option<i32>,
}

/// A season with its episodes in the order the store returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: i32,
    pub title: Option<String>,
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPayload {
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub seasons: Vec<Season>,
}

/// Type-specific data of a content record.
///
/// Exactly one branch exists per record and it always matches the record's
/// [`ContentType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TypePayload {
    Movie(MoviePayload),
    Series(SeriesPayload),
}

impl TypePayload {
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        match self {
            Self::Movie(_) => ContentType::Movie,
            Self::Series(_) => ContentType::Series,
        }
    }

    #[must_use]
    pub const fn movie(&self) -> Option<&MoviePayload> {
        match self {
            Self::Movie(movie) => Some(movie),
            Self::Series(_) => None,
        }
    }

    #[must_use]
    pub const fn series(&self) -> Option<&SeriesPayload> {
        match self {
            Self::Series(series) => Some(series),
            Self::Movie(_) => None,
        }
    }
}

/// A fully aggregated content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: ContentId,
    pub content_type: ContentType,
    pub title: String,
    pub original_title: Option<String>,
    pub slogan: Option<String>,
    pub budget: Option<i64>,
    pub age_restriction: Option<i32>,
    pub audience: Option<i64>,
    pub external_rating: Option<f64>,
    pub description: Option<String>,
    pub poster: Option<String>,
    pub trailer_url: Option<String>,
    pub backdrop: Option<String>,

    pub countries: Vec<Country>,
    pub genres: Vec<Genre>,
    pub pictures: Vec<String>,
    pub facts: Vec<String>,

    pub actors: Vec<Person>,
    pub directors: Vec<Person>,
    pub producers: Vec<Person>,
    pub writers: Vec<Person>,
    pub cinematographers: Vec<Person>,
    pub composers: Vec<Person>,
    pub editors: Vec<Person>,

    pub payload: TypePayload,
}

/// The reduced view used by listings, search results and cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRecord {
    pub id: ContentId,
    pub content_type: ContentType,
    pub title: String,
    pub original_title: Option<String>,
    pub external_rating: Option<f64>,
    pub poster: Option<String>,
    pub countries: Vec<Country>,
    pub genres: Vec<Genre>,
    pub actors: Vec<Person>,
    pub directors: Vec<Person>,
    pub payload: TypePayload,
}

impl From<ContentRecord> for PreviewRecord {
    fn from(record: ContentRecord) -> Self {
        Self {
            id: record.id,
            content_type: record.content_type,
            title: record.title,
            original_title: record.original_title,
            external_rating: record.external_rating,
            poster: record.poster,
            countries: record.countries,
            genres: record.genres,
            actors: record.actors,
            directors: record.directors,
            payload: record.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_exposes_only_its_own_branch() {
        let movie = TypePayload::Movie(MoviePayload {
            premiere: Some("2010-07-16".to_string()),
            runtime_minutes: Some(148),
        });
        assert!(movie.movie().is_some());
        assert!(movie.series().is_none());
        assert_eq!(movie.content_type(), ContentType::Movie);

        let series = TypePayload::Series(SeriesPayload {
            year_start: Some(2008),
            year_end: Some(2013),
            seasons: Vec::new(),
        });
        assert!(series.movie().is_none());
        assert!(series.series().is_some());
        assert_eq!(series.content_type(), ContentType::Series);
    }

    #[test]
    fn payload_serializes_with_type_tag() {
        let movie = TypePayload::Movie(MoviePayload {
            premiere: None,
            runtime_minutes: Some(90),
        });
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["type"], "movie");
        assert_eq!(json["runtime_minutes"], 90);
    }
}
