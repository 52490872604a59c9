use anyhow::Context;
use std::path::Path;

use crate::config::Config;
use crate::db::{CatalogSeed, Store};

pub async fn cmd_import(config: &Config, path: &Path) -> anyhow::Result<()> {
    let document = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let seed = CatalogSeed::from_json(&document)?;

    let store = Store::new(&config.general.database_path).await?;
    store.import_catalog(&seed).await?;

    println!(
        "✓ Imported {} content items, {} persons, {} genres, {} countries",
        seed.content.len(),
        seed.persons.len(),
        seed.genres.len(),
        seed.countries.len()
    );
    Ok(())
}
