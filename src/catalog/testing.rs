//! In-memory [`EntityStore`] with call counting and fault injection.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{EntityStore, IdList, SeasonRow, StoreError};
use crate::domain::{ContentId, ContentType, PersonId, Role};
use crate::models::{Country, Episode, Genre, MoviePayload, Person, ScalarRow};

#[derive(Default)]
pub struct FakeStore {
    rows: HashMap<i32, ScalarRow>,
    persons: HashMap<i32, Person>,
    countries: HashMap<i32, Country>,
    genres: HashMap<i32, Genre>,
    links: HashMap<IdList, Vec<i32>>,
    pictures: HashMap<i32, Vec<String>>,
    facts: HashMap<i32, Vec<String>>,
    credits: HashMap<(i32, i32), Vec<i32>>,
    movies: HashMap<i32, MoviePayload>,
    series: HashMap<i32, (Option<i32>, Option<i32>)>,
    seasons: HashMap<i32, Option<String>>,
    episodes: HashMap<i32, Episode>,
    roles: Mutex<HashMap<&'static str, i32>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failing: Mutex<HashSet<&'static str>>,
    delay: Option<Duration>,
}

fn scalar(id: i32, content_type: ContentType, title: &str) -> ScalarRow {
    ScalarRow {
        id: ContentId::new(id),
        content_type,
        title: title.to_string(),
        original_title: None,
        slogan: None,
        budget: None,
        age_restriction: Some(16),
        audience: None,
        external_rating: Some(8.1),
        description: None,
        poster: Some(format!("poster-{id}")),
        trailer_url: None,
        backdrop: None,
    }
}

fn person(id: i32, name: &str) -> Person {
    Person {
        id: PersonId::new(id),
        name: name.to_string(),
        name_localized: None,
        birth_date: None,
        death_date: None,
        sex: None,
        height_cm: None,
        photo: None,
    }
}

fn episode(id: i32, number: i32) -> Episode {
    Episode {
        id,
        number,
        title: Some(format!("Episode {number}")),
        runtime_minutes: Some(45),
    }
}

impl FakeStore {
    /// Content 1 is a movie with one actor and no directors, content 3 is a
    /// series with two seasons of two episodes each. Content 2 does not exist.
    pub fn with_catalog() -> Self {
        let mut store = Self::default();

        store.countries.insert(1, Country { id: 1, name: "USA".to_string() });
        store.genres.insert(1, Genre { id: 1, name: "Drama".to_string() });
        store.persons.insert(1, person(1, "Ada Actor"));
        store.persons.insert(2, person(2, "Dan Director"));

        let mut roles = HashMap::new();
        for (id, role) in (1..).zip(Role::ALL) {
            roles.insert(role.name(), id);
        }
        let actor = roles[Role::Actor.name()];
        let director = roles[Role::Director.name()];
        store.roles = Mutex::new(roles);

        store.rows.insert(1, scalar(1, ContentType::Movie, "The Movie"));
        store.links.insert(IdList::Countries(ContentId::new(1)), vec![1]);
        store.links.insert(IdList::Genres(ContentId::new(1)), vec![1]);
        store.pictures.insert(1, vec!["still-1".to_string()]);
        store.facts.insert(1, vec!["Shot in 30 days".to_string()]);
        store.credits.insert((actor, 1), vec![1]);
        store.movies.insert(
            1,
            MoviePayload {
                premiere: Some("2010-07-16".to_string()),
                runtime_minutes: Some(120),
            },
        );

        store.rows.insert(3, scalar(3, ContentType::Series, "The Series"));
        store.links.insert(IdList::Countries(ContentId::new(3)), vec![1]);
        store.links.insert(IdList::Genres(ContentId::new(3)), vec![1]);
        store.credits.insert((actor, 3), vec![1]);
        store.credits.insert((director, 3), vec![2]);
        store.series.insert(3, (Some(2008), Some(2013)));
        store.links.insert(IdList::Seasons(ContentId::new(3)), vec![10, 11]);
        store.seasons.insert(10, Some("Season 1".to_string()));
        store.seasons.insert(11, Some("Season 2".to_string()));
        store.links.insert(IdList::Episodes(10), vec![100, 101]);
        store.links.insert(IdList::Episodes(11), vec![110, 111]);
        store.episodes.insert(100, episode(100, 1));
        store.episodes.insert(101, episode(101, 2));
        store.episodes.insert(110, episode(110, 1));
        store.episodes.insert(111, episode(111, 2));

        store
    }

    /// Makes every lookup yield to the scheduler before answering.
    pub fn with_delay(mut self) -> Self {
        self.delay = Some(Duration::from_millis(2));
        self
    }

    pub fn row(&self, id: i32) -> ScalarRow {
        self.rows[&id].clone()
    }

    /// Makes every call to `op` fail with a backend error. Besides the trait
    /// method names, `country_ids`, `genre_ids`, `season_ids` and
    /// `episode_ids` fail a single kind of `list_ids` call.
    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn drop_role(&self, role: Role) {
        self.roles.lock().unwrap().remove(role.name());
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.lock().unwrap().get(op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    async fn enter(&self, op: &'static str) -> Result<(), StoreError> {
        *self.calls.lock().unwrap().entry(op).or_default() += 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.check(op)
    }

    fn check(&self, op: &'static str) -> Result<(), StoreError> {
        if self.failing.lock().unwrap().contains(op) {
            return Err(StoreError::Backend(format!("injected {op} failure")));
        }
        Ok(())
    }
}

/// Fault key for one kind of id list, so a test can fail e.g. only the
/// episode lists of a series.
fn list_op(list: IdList) -> &'static str {
    match list {
        IdList::Countries(_) => "country_ids",
        IdList::Genres(_) => "genre_ids",
        IdList::Seasons(_) => "season_ids",
        IdList::Episodes(_) => "episode_ids",
    }
}

fn lookup<T: Clone>(
    map: &HashMap<i32, T>,
    entity: &'static str,
    id: i32,
) -> Result<T, StoreError> {
    map.get(&id)
        .cloned()
        .ok_or(StoreError::NotFound { entity, id })
}

#[async_trait]
impl EntityStore for FakeStore {
    async fn scalar_row(&self, id: ContentId) -> Result<ScalarRow, StoreError> {
        self.enter("scalar_row").await?;
        lookup(&self.rows, "content", id.value())
    }

    async fn person(&self, id: PersonId) -> Result<Person, StoreError> {
        self.enter("person").await?;
        lookup(&self.persons, "person", id.value())
    }

    async fn genre(&self, id: i32) -> Result<Genre, StoreError> {
        self.enter("genre").await?;
        lookup(&self.genres, "genre", id)
    }

    async fn country(&self, id: i32) -> Result<Country, StoreError> {
        self.enter("country").await?;
        lookup(&self.countries, "country", id)
    }

    async fn list_ids(&self, list: IdList) -> Result<Vec<i32>, StoreError> {
        self.enter("list_ids").await?;
        self.check(list_op(list))?;
        Ok(self.links.get(&list).cloned().unwrap_or_default())
    }

    async fn pictures(&self, content: ContentId) -> Result<Vec<String>, StoreError> {
        self.enter("pictures").await?;
        Ok(self.pictures.get(&content.value()).cloned().unwrap_or_default())
    }

    async fn facts(&self, content: ContentId) -> Result<Vec<String>, StoreError> {
        self.enter("facts").await?;
        Ok(self.facts.get(&content.value()).cloned().unwrap_or_default())
    }

    async fn role_id(&self, name: &str) -> Result<Option<i32>, StoreError> {
        self.enter("role_id").await?;
        Ok(self.roles.lock().unwrap().get(name).copied())
    }

    async fn participant_ids(
        &self,
        role_id: i32,
        content: ContentId,
    ) -> Result<Vec<PersonId>, StoreError> {
        self.enter("participant_ids").await?;
        let ids = self
            .credits
            .get(&(role_id, content.value()))
            .cloned()
            .unwrap_or_default();
        Ok(ids.into_iter().map(PersonId::new).collect())
    }

    async fn movie(&self, content: ContentId) -> Result<MoviePayload, StoreError> {
        self.enter("movie").await?;
        lookup(&self.movies, "movie", content.value())
    }

    async fn series_years(
        &self,
        content: ContentId,
    ) -> Result<(Option<i32>, Option<i32>), StoreError> {
        self.enter("series_years").await?;
        lookup(&self.series, "series", content.value())
    }

    async fn season(&self, id: i32) -> Result<SeasonRow, StoreError> {
        self.enter("season").await?;
        let title = lookup(&self.seasons, "season", id)?;
        Ok(SeasonRow { id, title })
    }

    async fn episode(&self, id: i32) -> Result<Episode, StoreError> {
        self.enter("episode").await?;
        lookup(&self.episodes, "episode", id)
    }
}
