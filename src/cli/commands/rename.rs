//! Rename user command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_rename_user(config: &Config, id: i32, name: &str) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;

    let user = store.rename_user(id, name).await?;
    println!("Renamed user {} to '{}'", user.username, user.name);

    Ok(())
}
