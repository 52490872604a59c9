//! `SeaORM` implementation of the `FavoriteService` trait.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::api::types::PreviewDto;
use crate::db::Store;
use crate::domain::{ContentId, UserId};
use crate::services::ContentService;
use crate::services::favorite_service::{FavoriteError, FavoriteService};

pub struct SeaOrmFavoriteService {
    store: Store,
    content: Arc<dyn ContentService>,
}

impl SeaOrmFavoriteService {
    #[must_use]
    pub fn new(store: Store, content: Arc<dyn ContentService>) -> Self {
        Self { store, content }
    }
}

#[async_trait]
impl FavoriteService for SeaOrmFavoriteService {
    async fn add(&self, user: UserId, content: ContentId) -> Result<(), FavoriteError> {
        if !self.store.content_exists(content.value()).await? {
            return Err(FavoriteError::ContentNotFound(content));
        }

        self.store.add_favorite(user.value(), content.value()).await?;
        debug!(user = %user, content = %content, "Favorite added");
        Ok(())
    }

    async fn remove(&self, user: UserId, content: ContentId) -> Result<bool, FavoriteError> {
        Ok(self
            .store
            .remove_favorite(user.value(), content.value())
            .await?)
    }

    async fn list(&self, user: UserId) -> Result<Vec<PreviewDto>, FavoriteError> {
        let ids = self.store.list_favorite_ids(user.value()).await?;

        let mut previews = Vec::with_capacity(ids.len());
        for id in ids {
            previews.push(self.content.get_preview(ContentId::new(id)).await?);
        }
        Ok(previews)
    }
}
