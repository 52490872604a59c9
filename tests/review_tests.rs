mod common;

use std::sync::Arc;

use cinecat::domain::ContentId;
use cinecat::services::{ReviewError, ReviewService, SeaOrmReviewService};

#[tokio::test]
async fn concurrent_reviews_by_one_user_store_a_single_row() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = common::test_config(&dir);
    let store = common::seeded_store(&config).await;
    let service = Arc::new(SeaOrmReviewService::new(store.clone()));
    let content = ContentId::new(1);

    for round in 0..5 {
        let user = store
            .create_user(&format!("critic{round}"), "correct-horse", &config.security)
            .await
            .unwrap()
            .id;

        let mut handles = Vec::new();
        for _ in 0..4 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service.add_review(user, content, 7, "Again.").await
            }));
        }

        let mut accepted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(review) => {
                    assert_eq!(review.user_id, user);
                    accepted += 1;
                }
                Err(ReviewError::AlreadyReviewed { .. }) => {}
                Err(err) => panic!("unexpected error: {err}"),
            }
        }
        assert_eq!(accepted, 1, "round {round} accepted {accepted} reviews");
    }

    let reviews = service.list_reviews(content, 0, 100).await.unwrap();
    assert_eq!(reviews.len(), 5);
    assert_eq!(service.rating(content).await.unwrap(), Some(7.0));
}

#[tokio::test]
async fn second_review_is_rejected_after_the_first_lands() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = common::test_config(&dir);
    let store = common::seeded_store(&config).await;
    let service = SeaOrmReviewService::new(store.clone());

    let user = store
        .create_user("alice", "correct-horse", &config.security)
        .await
        .unwrap();

    service
        .add_review(user.id, ContentId::new(2), 9, "Tense.")
        .await
        .unwrap();

    let err = service
        .add_review(user.id, ContentId::new(2), 2, "Changed my mind.")
        .await
        .unwrap_err();
    assert!(matches!(err, ReviewError::AlreadyReviewed { .. }));

    // The rejected score must not leak into the rating.
    assert_eq!(service.rating(ContentId::new(2)).await.unwrap(), Some(9.0));
}
