//! Show user command handler

use crate::config::Config;
use crate::db::Store;

/// Looks up by id when the argument parses as one, otherwise by username.
pub async fn cmd_show_user(config: &Config, user: &str) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;

    let found = match user.parse::<i32>() {
        Ok(id) => store.get_user(id).await?,
        Err(_) => store.get_user_by_username(user).await?,
    };

    let Some(found) = found else {
        println!("No user matching '{user}'");
        return Ok(());
    };

    println!("{} [{}]", found.username, found.id);
    println!("  Name:  {}", found.name);
    println!("  Email: {}", found.email);
    match &found.address {
        Some(address) => println!("  Address: {} [{}]", address, address.id),
        None => println!("  Address: none"),
    }

    Ok(())
}
