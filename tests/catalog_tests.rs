mod common;

use std::sync::Arc;

use cinecat::catalog::{Aggregator, CatalogError, EntityStore};
use cinecat::domain::{ContentId, ContentType};
use cinecat::models::PreviewRecord;

async fn aggregator() -> (Aggregator, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = common::test_config(&dir);
    let store = common::seeded_store(&config).await;
    (Aggregator::new(Arc::new(store) as Arc<dyn EntityStore>), dir)
}

#[tokio::test]
async fn aggregates_movie_from_sqlite() {
    let (aggregator, _dir) = aggregator().await;

    let record = aggregator.fetch_content(ContentId::new(1)).await.unwrap();
    assert_eq!(record.content_type, ContentType::Movie);
    assert_eq!(record.title, "Inception");
    assert_eq!(record.countries.len(), 2);
    assert_eq!(record.pictures, ["stills/1a.jpg", "stills/1b.jpg"]);
    assert_eq!(record.actors.len(), 1);
    assert_eq!(record.directors[0].name, "Christopher Nolan");
    assert!(record.editors.is_empty());

    let movie = record.payload.movie().expect("movie payload");
    assert_eq!(movie.premiere.as_deref(), Some("2010-07-16"));
}

#[tokio::test]
async fn aggregates_series_from_sqlite() {
    let (aggregator, _dir) = aggregator().await;

    let record = aggregator.fetch_content(ContentId::new(2)).await.unwrap();
    let series = record.payload.series().expect("series payload");
    assert_eq!(series.year_end, Some(2013));
    assert_eq!(series.seasons.len(), 2);
    let numbers: Vec<i32> = series.seasons[0].episodes.iter().map(|e| e.number).collect();
    assert_eq!(numbers, [1, 2]);
}

#[tokio::test]
async fn preview_matches_projection_of_full_record() {
    let (aggregator, _dir) = aggregator().await;

    for id in [1, 2] {
        let id = ContentId::new(id);
        let full = aggregator.fetch_content(id).await.unwrap();
        let preview = aggregator.fetch_preview(id).await.unwrap();
        assert_eq!(preview, PreviewRecord::from(full));
    }
}

#[tokio::test]
async fn missing_content_is_not_found() {
    let (aggregator, _dir) = aggregator().await;

    let err = aggregator.fetch_content(ContentId::new(42)).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(id) if id == ContentId::new(42)));
}

#[tokio::test]
async fn concurrent_fetches_are_independent() {
    let (aggregator, _dir) = aggregator().await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let aggregator = aggregator.clone();
        handles.push(tokio::spawn(async move {
            aggregator.fetch_content(ContentId::new(2)).await
        }));
    }

    let first = aggregator.fetch_content(ContentId::new(2)).await.unwrap();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), first);
    }
}
