use super::ApiError;
use crate::config::CatalogConfig;

pub fn validate_content_id(id: i32) -> Result<i32, ApiError> {
    validate_id("content", id)
}

pub fn validate_person_id(id: i32) -> Result<i32, ApiError> {
    validate_id("person", id)
}

pub fn validate_genre_id(id: i32) -> Result<i32, ApiError> {
    validate_id("genre", id)
}

fn validate_id(kind: &str, id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {} ID: {}. ID must be a positive integer",
            kind, id
        )));
    }
    Ok(id)
}

/// Resolves optional `offset`/`limit` query values against the catalog limits.
pub fn validate_page(
    offset: Option<u64>,
    limit: Option<u64>,
    catalog: &CatalogConfig,
) -> Result<(u64, u64), ApiError> {
    let limit = limit.unwrap_or(catalog.default_page_size);

    if !(1..=catalog.max_page_size).contains(&limit) {
        return Err(ApiError::validation(format!(
            "Invalid limit: {}. Limit must be between 1 and {}",
            limit, catalog.max_page_size
        )));
    }

    Ok((offset.unwrap_or(0), limit))
}

pub fn validate_search_query(query: &str) -> Result<&str, ApiError> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return Err(ApiError::validation("Search query cannot be empty"));
    }

    if trimmed.len() > 200 {
        return Err(ApiError::validation(
            "Search query must be 200 characters or less",
        ));
    }

    Ok(trimmed)
}

pub fn validate_asset_path(path: &str) -> Result<&str, ApiError> {
    if path.is_empty() || path.split('/').any(|part| part == "..") {
        return Err(ApiError::validation(format!("Invalid asset path: {path}")));
    }
    Ok(path)
}
