//! Bulk catalog import from a JSON document.
//!
//! Used by `cinecat import` and by the integration tests to populate the
//! relational schema in one transaction.

use anyhow::{Context, Result, bail};
use sea_orm::{
    ActiveModelTrait, DatabaseTransaction, EntityTrait, QuerySelect, Set, TransactionTrait,
};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::info;

use crate::domain::{ContentType, Role};
use crate::entities::{
    content, content_country, content_fact, content_genre, content_person, content_picture,
    country, episode, genre, movie, person, role, season, series,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub countries: Vec<NamedSeed>,
    #[serde(default)]
    pub genres: Vec<NamedSeed>,
    #[serde(default)]
    pub persons: Vec<PersonSeed>,
    #[serde(default)]
    pub content: Vec<ContentSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedSeed {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonSeed {
    pub id: i32,
    pub name: String,
    pub name_localized: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub sex: Option<String>,
    pub height_cm: Option<i32>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreditSeed {
    pub person_id: i32,
    pub role: Role,
    #[serde(default)]
    pub character: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieSeed {
    pub premiere: Option<String>,
    pub runtime_minutes: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeSeed {
    pub number: i32,
    pub title: Option<String>,
    pub runtime_minutes: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeasonSeed {
    pub title: Option<String>,
    pub episodes: Vec<EpisodeSeed>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeriesSeed {
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub seasons: Vec<SeasonSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSeed {
    pub id: i32,
    pub content_type: ContentType,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub age_restriction: Option<i32>,
    #[serde(default)]
    pub audience: Option<i64>,
    #[serde(default)]
    pub external_rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default)]
    pub countries: Vec<i32>,
    #[serde(default)]
    pub genres: Vec<i32>,
    #[serde(default)]
    pub pictures: Vec<String>,
    #[serde(default)]
    pub facts: Vec<String>,
    #[serde(default)]
    pub credits: Vec<CreditSeed>,
    #[serde(default)]
    pub movie: Option<MovieSeed>,
    #[serde(default)]
    pub series: Option<SeriesSeed>,
}

impl ContentSeed {
    fn validate(&self) -> Result<()> {
        match (self.content_type, &self.movie, &self.series) {
            (ContentType::Movie, Some(_), None) | (ContentType::Series, None, Some(_)) => Ok(()),
            (ty, _, _) => bail!(
                "Content {} is declared as {ty} but does not carry exactly the {ty} payload",
                self.id
            ),
        }
    }
}

impl CatalogSeed {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse catalog document")
    }
}

async fn role_ids(txn: &DatabaseTransaction) -> Result<HashMap<String, i32>> {
    let rows = role::Entity::find()
        .select_only()
        .column(role::Column::Name)
        .column(role::Column::Id)
        .into_tuple::<(String, i32)>()
        .all(txn)
        .await?;
    Ok(rows.into_iter().collect())
}

/// Inserts every row of the document in a single transaction.
pub async fn import(conn: &sea_orm::DatabaseConnection, seed: &CatalogSeed) -> Result<()> {
    for item in &seed.content {
        item.validate()?;
    }

    let txn = conn.begin().await?;
    let roles = role_ids(&txn).await?;

    for c in &seed.countries {
        country::ActiveModel {
            id: Set(c.id),
            name: Set(c.name.clone()),
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert country {}", c.id))?;
    }

    for g in &seed.genres {
        genre::ActiveModel {
            id: Set(g.id),
            name: Set(g.name.clone()),
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert genre {}", g.id))?;
    }

    for p in &seed.persons {
        person::ActiveModel {
            id: Set(p.id),
            name: Set(p.name.clone()),
            name_localized: Set(p.name_localized.clone()),
            birth_date: Set(p.birth_date.clone()),
            death_date: Set(p.death_date.clone()),
            sex: Set(p.sex.clone()),
            height_cm: Set(p.height_cm),
            photo: Set(p.photo.clone()),
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert person {}", p.id))?;
    }

    for item in &seed.content {
        import_content(&txn, &roles, item)
            .await
            .with_context(|| format!("Failed to import content {}", item.id))?;
    }

    txn.commit().await?;

    info!(
        content = seed.content.len(),
        persons = seed.persons.len(),
        "Catalog imported"
    );
    Ok(())
}

async fn import_content(
    txn: &DatabaseTransaction,
    roles: &HashMap<String, i32>,
    item: &ContentSeed,
) -> Result<()> {
    content::ActiveModel {
        id: Set(item.id),
        content_type: Set(item.content_type.as_str().to_string()),
        title: Set(item.title.clone()),
        original_title: Set(item.original_title.clone()),
        slogan: Set(item.slogan.clone()),
        budget: Set(item.budget),
        age_restriction: Set(item.age_restriction),
        audience: Set(item.audience),
        external_rating: Set(item.external_rating),
        description: Set(item.description.clone()),
        poster: Set(item.poster.clone()),
        trailer_url: Set(item.trailer_url.clone()),
        backdrop: Set(item.backdrop.clone()),
    }
    .insert(txn)
    .await?;

    for country_id in &item.countries {
        content_country::ActiveModel {
            content_id: Set(item.id),
            country_id: Set(*country_id),
        }
        .insert(txn)
        .await?;
    }

    for genre_id in &item.genres {
        content_genre::ActiveModel {
            content_id: Set(item.id),
            genre_id: Set(*genre_id),
        }
        .insert(txn)
        .await?;
    }

    for asset in &item.pictures {
        content_picture::ActiveModel {
            content_id: Set(item.id),
            asset: Set(asset.clone()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    for text in &item.facts {
        content_fact::ActiveModel {
            content_id: Set(item.id),
            text: Set(text.clone()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    for (position, credit) in (0_i32..).zip(&item.credits) {
        let role_id = roles
            .get(credit.role.name())
            .copied()
            .with_context(|| format!("Role '{}' is not seeded", credit.role))?;

        content_person::ActiveModel {
            content_id: Set(item.id),
            person_id: Set(credit.person_id),
            role_id: Set(role_id),
            position: Set(position),
            character: Set(credit.character.clone()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    if let Some(m) = &item.movie {
        movie::ActiveModel {
            content_id: Set(item.id),
            premiere: Set(m.premiere.clone()),
            runtime_minutes: Set(m.runtime_minutes),
        }
        .insert(txn)
        .await?;
    }

    if let Some(s) = &item.series {
        series::ActiveModel {
            content_id: Set(item.id),
            year_start: Set(s.year_start),
            year_end: Set(s.year_end),
        }
        .insert(txn)
        .await?;

        for (position, season_seed) in (0_i32..).zip(&s.seasons) {
            let season_row = season::ActiveModel {
                content_id: Set(item.id),
                title: Set(season_seed.title.clone()),
                position: Set(position),
                ..Default::default()
            }
            .insert(txn)
            .await?;

            for ep in &season_seed.episodes {
                episode::ActiveModel {
                    season_id: Set(season_row.id),
                    number: Set(ep.number),
                    title: Set(ep.title.clone()),
                    runtime_minutes: Set(ep.runtime_minutes),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
            }
        }
    }

    Ok(())
}
