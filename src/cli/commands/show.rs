use crate::catalog::CatalogError;
use crate::config::Config;
use crate::domain::ContentId;
use crate::state::SharedState;

pub async fn cmd_show(config: &Config, id: i32, preview: bool) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;
    let id = ContentId::new(id);

    let json = if preview {
        state
            .aggregator
            .fetch_preview(id)
            .await
            .map(|p| serde_json::to_string_pretty(&p))
    } else {
        state
            .aggregator
            .fetch_content(id)
            .await
            .map(|c| serde_json::to_string_pretty(&c))
    };

    match json {
        Ok(json) => println!("{}", json?),
        Err(CatalogError::NotFound(id)) => println!("Content with ID {id} does not exist."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
