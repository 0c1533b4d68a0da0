//! Add user command handler

use crate::config::Config;
use crate::db::{NewUser, Store};

pub async fn cmd_add_user(
    config: &Config,
    name: &str,
    username: &str,
    email: &str,
    address: Option<&str>,
) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;

    let user = store
        .add_user(NewUser {
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            address: address.map(ToString::to_string),
        })
        .await?;

    println!("Added user {} (id {})", user.username, user.id);
    if let Some(address) = &user.address {
        println!("  Address: {address}");
    }

    Ok(())
}
