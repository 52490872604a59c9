use crate::config::Config;
use crate::services::AuthError;
use crate::state::SharedState;

pub async fn cmd_create_user(config: &Config, username: &str, password: &str) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;

    match state.auth_service.register(username, password).await {
        Ok(user) => println!("✓ Created user '{}' (id {})", user.username, user.id),
        Err(AuthError::UsernameTaken(name)) => println!("User '{name}' already exists."),
        Err(AuthError::Validation(msg)) => println!("{msg}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
