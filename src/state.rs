use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::Aggregator;
use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, ContentService, FavoriteService, FsStaticStore, ReviewService,
    SeaOrmAuthService, SeaOrmContentService, SeaOrmFavoriteService, SeaOrmReviewService,
    StaticStore,
};

/// Long-lived handles shared by the HTTP layer and the CLI.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub aggregator: Aggregator,

    pub statics: Arc<dyn StaticStore>,

    pub content_service: Arc<dyn ContentService>,

    pub review_service: Arc<dyn ReviewService>,

    pub favorite_service: Arc<dyn FavoriteService>,

    pub auth_service: Arc<dyn AuthService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Wires every service on top of an already connected store.
    pub fn with_store(config: Config, store: Store) -> Self {
        let statics = Arc::new(FsStaticStore::new(
            &config.storage.static_root,
            &config.storage.static_url_prefix,
        )) as Arc<dyn StaticStore>;

        let aggregator = Aggregator::new(Arc::new(store.clone()));

        let content_service = Arc::new(SeaOrmContentService::new(
            store.clone(),
            aggregator.clone(),
            statics.clone(),
        )) as Arc<dyn ContentService>;

        let review_service =
            Arc::new(SeaOrmReviewService::new(store.clone())) as Arc<dyn ReviewService>;

        let favorite_service = Arc::new(SeaOrmFavoriteService::new(
            store.clone(),
            content_service.clone(),
        )) as Arc<dyn FavoriteService>;

        let auth_service = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            config.security.clone(),
        )) as Arc<dyn AuthService>;

        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            aggregator,
            statics,
            content_service,
            review_service,
            favorite_service,
            auth_service,
        }
    }
}
