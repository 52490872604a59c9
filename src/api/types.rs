use serde::{Deserialize, Serialize};

use crate::domain::{ContentId, ContentType, PersonId, UserId};
use crate::models::{Country, Genre, Review, TypePayload};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// A cast or crew member as embedded in content responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummaryDto {
    pub id: PersonId,
    pub name: String,
    pub name_localized: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub sex: Option<String>,
    pub height_cm: Option<i32>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDto {
    pub id: ContentId,
    pub content_type: ContentType,
    pub title: String,
    pub original_title: Option<String>,
    pub slogan: Option<String>,
    pub budget: Option<i64>,
    pub age_restriction: Option<i32>,
    pub audience: Option<i64>,
    pub external_rating: Option<f64>,
    /// Average review score, absent until someone reviews the content.
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub trailer_url: Option<String>,
    pub picture_urls: Vec<String>,
    pub facts: Vec<String>,
    pub countries: Vec<Country>,
    pub genres: Vec<Genre>,
    pub actors: Vec<PersonSummaryDto>,
    pub directors: Vec<PersonSummaryDto>,
    pub producers: Vec<PersonSummaryDto>,
    pub writers: Vec<PersonSummaryDto>,
    pub cinematographers: Vec<PersonSummaryDto>,
    pub composers: Vec<PersonSummaryDto>,
    pub editors: Vec<PersonSummaryDto>,
    pub type_payload: TypePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewDto {
    pub id: ContentId,
    pub content_type: ContentType,
    pub title: String,
    pub original_title: Option<String>,
    pub external_rating: Option<f64>,
    pub poster_url: Option<String>,
    pub countries: Vec<Country>,
    pub genres: Vec<Genre>,
    pub actors: Vec<PersonSummaryDto>,
    pub directors: Vec<PersonSummaryDto>,
    pub type_payload: TypePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDto {
    #[serde(flatten)]
    pub person: PersonSummaryDto,
    pub content_ids: Vec<ContentId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDto {
    pub id: i32,
    pub content_id: ContentId,
    pub user_id: UserId,
    pub username: String,
    pub score: i32,
    pub text: String,
    pub created_at: String,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            content_id: review.content_id,
            user_id: review.user_id,
            username: review.username,
            score: review.score,
            text: review.text,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub score: i32,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: bool,
    pub version: String,
}
