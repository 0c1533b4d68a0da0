//! Demo command handler: the sequential create/read/update/delete walkthrough.

use crate::config::Config;
use crate::db::{NewUser, Store};

pub async fn cmd_demo(config: &Config) -> anyhow::Result<()> {
    let store = Store::from_config(&config.general).await?;

    let user = store
        .add_user(NewUser {
            name: "john doe".to_string(),
            username: "johndoe".to_string(),
            email: "johndoe@email.com".to_string(),
            address: Some("awesome address number 2".to_string()),
        })
        .await?;
    println!("created: {user}");

    // Read back by unique field.
    if let Some(found) = store.get_user_by_username("johndoe").await? {
        println!("by username: {found}");
    }

    // Read back by id.
    if let Some(found) = store.get_user(user.id).await? {
        let address = found
            .address
            .as_ref()
            .map_or("none", |a| a.address.as_str());
        println!("by id: {found} @ {address}");
    }

    // Mutate a field and read the change back.
    store.rename_user(user.id, "john doe updated").await?;
    if let Some(found) = store.get_user(user.id).await? {
        println!("after rename: {}", found.name);
    }

    let users = store.list_users().await?;
    println!("all users ({}):", users.len());
    for u in &users {
        println!("  {u}");
    }

    // Delete the user; the address row stays behind.
    store.remove_user(user.id).await?;
    let users = store.list_users().await?;
    println!("after delete: {} user(s)", users.len());

    let addresses = store.list_addresses().await?;
    println!("addresses kept: {}", addresses.len());

    Ok(())
}
