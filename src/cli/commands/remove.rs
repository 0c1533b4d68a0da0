//! Remove user command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_remove_user(config: &Config, id: i32) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;

    if store.remove_user(id).await? {
        println!("Removed user {id}");
    } else {
        println!("No user with id {id}");
    }

    Ok(())
}
