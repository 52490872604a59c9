use crate::config::SecurityConfig;
use crate::models::{Country, Episode, Genre, MoviePayload, Person, Review, ScalarRow, User};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;
pub mod seed;

pub use seed::CatalogSeed;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & schema ready (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn content_repo(&self) -> repositories::content::ContentRepository {
        repositories::content::ContentRepository::new(self.conn.clone())
    }

    fn taxonomy_repo(&self) -> repositories::taxonomy::TaxonomyRepository {
        repositories::taxonomy::TaxonomyRepository::new(self.conn.clone())
    }

    fn person_repo(&self) -> repositories::person::PersonRepository {
        repositories::person::PersonRepository::new(self.conn.clone())
    }

    fn role_repo(&self) -> repositories::role::RoleRepository {
        repositories::role::RoleRepository::new(self.conn.clone())
    }

    fn subtype_repo(&self) -> repositories::subtype::SubtypeRepository {
        repositories::subtype::SubtypeRepository::new(self.conn.clone())
    }

    fn review_repo(&self) -> repositories::review::ReviewRepository {
        repositories::review::ReviewRepository::new(self.conn.clone())
    }

    fn favorite_repo(&self) -> repositories::favorite::FavoriteRepository {
        repositories::favorite::FavoriteRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn import_catalog(&self, seed: &CatalogSeed) -> Result<()> {
        seed::import(&self.conn, seed).await
    }

    // Content

    pub async fn get_content_row(&self, id: i32) -> Result<Option<ScalarRow>> {
        self.content_repo().get(id).await
    }

    pub async fn content_exists(&self, id: i32) -> Result<bool> {
        self.content_repo().exists(id).await
    }

    pub async fn list_content_ids(&self, offset: u64, limit: u64) -> Result<Vec<i32>> {
        self.content_repo().list_ids(offset, limit).await
    }

    pub async fn search_content_ids(&self, query: &str, offset: u64, limit: u64) -> Result<Vec<i32>> {
        self.content_repo().search_ids(query, offset, limit).await
    }

    pub async fn content_ids_by_genre(
        &self,
        genre_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<i32>> {
        self.content_repo()
            .ids_by_genre(genre_id, offset, limit)
            .await
    }

    pub async fn get_pictures(&self, content_id: i32) -> Result<Vec<String>> {
        self.content_repo().pictures(content_id).await
    }

    pub async fn get_facts(&self, content_id: i32) -> Result<Vec<String>> {
        self.content_repo().facts(content_id).await
    }

    // Genres and countries

    pub async fn get_genre(&self, id: i32) -> Result<Option<Genre>> {
        self.taxonomy_repo().genre(id).await
    }

    pub async fn get_country(&self, id: i32) -> Result<Option<Country>> {
        self.taxonomy_repo().country(id).await
    }

    pub async fn get_genre_ids(&self, content_id: i32) -> Result<Vec<i32>> {
        self.taxonomy_repo().genre_ids(content_id).await
    }

    pub async fn get_country_ids(&self, content_id: i32) -> Result<Vec<i32>> {
        self.taxonomy_repo().country_ids(content_id).await
    }

    // Persons and roles

    pub async fn get_person(&self, id: i32) -> Result<Option<Person>> {
        self.person_repo().get(id).await
    }

    pub async fn get_person_content_ids(&self, person_id: i32) -> Result<Vec<i32>> {
        self.person_repo().content_ids(person_id).await
    }

    pub async fn get_role_id(&self, name: &str) -> Result<Option<i32>> {
        self.role_repo().id_by_name(name).await
    }

    pub async fn get_participant_ids(&self, role_id: i32, content_id: i32) -> Result<Vec<i32>> {
        self.role_repo().participant_ids(role_id, content_id).await
    }

    // Movie / series

    pub async fn get_movie(&self, content_id: i32) -> Result<Option<MoviePayload>> {
        self.subtype_repo().movie(content_id).await
    }

    pub async fn get_series_years(
        &self,
        content_id: i32,
    ) -> Result<Option<(Option<i32>, Option<i32>)>> {
        self.subtype_repo().series_years(content_id).await
    }

    pub async fn get_season_ids(&self, content_id: i32) -> Result<Vec<i32>> {
        self.subtype_repo().season_ids(content_id).await
    }

    pub async fn get_season(&self, id: i32) -> Result<Option<(i32, Option<String>)>> {
        self.subtype_repo().season(id).await
    }

    pub async fn get_episode_ids(&self, season_id: i32) -> Result<Vec<i32>> {
        self.subtype_repo().episode_ids(season_id).await
    }

    pub async fn get_episode(&self, id: i32) -> Result<Option<Episode>> {
        self.subtype_repo().episode(id).await
    }

    // Reviews

    pub async fn review_exists(&self, content_id: i32, user_id: i32) -> Result<bool> {
        self.review_repo().exists(content_id, user_id).await
    }

    pub async fn add_review(
        &self,
        content_id: i32,
        user_id: i32,
        score: i32,
        text: &str,
    ) -> Result<Option<i32>> {
        self.review_repo()
            .add(content_id, user_id, score, text)
            .await
    }

    pub async fn get_review(&self, id: i32) -> Result<Option<Review>> {
        self.review_repo().get(id).await
    }

    pub async fn list_reviews(&self, content_id: i32, offset: u64, limit: u64) -> Result<Vec<Review>> {
        self.review_repo().list(content_id, offset, limit).await
    }

    pub async fn get_rating(&self, content_id: i32) -> Result<Option<f64>> {
        self.review_repo().rating(content_id).await
    }

    // Favorites

    pub async fn add_favorite(&self, user_id: i32, content_id: i32) -> Result<()> {
        self.favorite_repo().add(user_id, content_id).await
    }

    pub async fn remove_favorite(&self, user_id: i32, content_id: i32) -> Result<bool> {
        self.favorite_repo().remove(user_id, content_id).await
    }

    pub async fn list_favorite_ids(&self, user_id: i32) -> Result<Vec<i32>> {
        self.favorite_repo().content_ids(user_id).await
    }

    // Users

    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<User> {
        self.user_repo().create(username, password, config).await
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn verify_user_password(&self, username: &str, password: &str) -> Result<Option<User>> {
        self.user_repo().verify_password(username, password).await
    }
}
