#![allow(dead_code)]

use cinecat::config::Config;
use cinecat::db::{CatalogSeed, Store};
use serde_json::json;
use tempfile::TempDir;

/// Two titles: a movie with full credits and a two-season series.
pub fn catalog_document() -> serde_json::Value {
    json!({
        "countries": [
            { "id": 1, "name": "USA" },
            { "id": 2, "name": "United Kingdom" }
        ],
        "genres": [
            { "id": 1, "name": "Drama" },
            { "id": 2, "name": "Science Fiction" }
        ],
        "persons": [
            { "id": 1, "name": "Leonardo DiCaprio", "sex": "male", "photo": "persons/1.jpg" },
            { "id": 2, "name": "Christopher Nolan", "birth_date": "1970-07-30" },
            { "id": 3, "name": "Bryan Cranston" },
            { "id": 4, "name": "Hans Zimmer" }
        ],
        "content": [
            {
                "id": 1,
                "content_type": "movie",
                "title": "Inception",
                "original_title": "Inception",
                "slogan": "Your mind is the scene of the crime",
                "budget": 160000000,
                "age_restriction": 12,
                "external_rating": 8.8,
                "poster": "posters/1.jpg",
                "countries": [1, 2],
                "genres": [2],
                "pictures": ["stills/1a.jpg", "stills/1b.jpg"],
                "facts": ["Shot in six countries"],
                "credits": [
                    { "person_id": 1, "role": "actor", "character": "Cobb" },
                    { "person_id": 2, "role": "director" },
                    { "person_id": 2, "role": "writer" },
                    { "person_id": 4, "role": "composer" }
                ],
                "movie": { "premiere": "2010-07-16", "runtime_minutes": 148 }
            },
            {
                "id": 2,
                "content_type": "series",
                "title": "Breaking Bad",
                "countries": [1],
                "genres": [1],
                "credits": [
                    { "person_id": 3, "role": "actor", "character": "Walter White" }
                ],
                "series": {
                    "year_start": 2008,
                    "year_end": 2013,
                    "seasons": [
                        {
                            "title": "Season 1",
                            "episodes": [
                                { "number": 1, "title": "Pilot", "runtime_minutes": 58 },
                                { "number": 2, "title": "Cat's in the Bag...", "runtime_minutes": 48 }
                            ]
                        },
                        {
                            "title": "Season 2",
                            "episodes": [
                                { "number": 1, "title": "Seven Thirty-Seven" }
                            ]
                        }
                    ]
                }
            }
        ]
    })
}

/// A config pointing at a fresh sqlite file and static root inside `dir`.
pub fn test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", dir.path().join("cinecat.db").display());
    config.storage.static_root = dir.path().join("static").display().to_string();
    config.server.secure_cookies = false;
    config.observability.metrics_enabled = false;
    config
}

pub async fn seeded_store(config: &Config) -> Store {
    let store = Store::new(&config.general.database_path)
        .await
        .expect("Failed to open store");
    let seed = CatalogSeed::from_json(&catalog_document().to_string()).expect("Invalid seed");
    store.import_catalog(&seed).await.expect("Failed to import seed");
    store
}
