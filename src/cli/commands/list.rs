//! List users command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_users(config: &Config) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;
    let users = store.list_users().await?;

    if users.is_empty() {
        println!("No users yet.");
        println!();
        println!("Add one with: userbook add \"Jane Doe\" janedoe jane@example.com");
        return Ok(());
    }

    println!("Users ({} total)", users.len());
    println!("{:-<70}", "");

    for user in users {
        println!("{} [{}]", user.username, user.id);
        println!("  Name: {} | Email: {}", user.name, user.email);
        if let Some(address) = &user.address {
            println!("  Address: {address}");
        }
    }

    Ok(())
}
