//! CRUD tests for the user/address store.

use userbook::config::GeneralConfig;
use userbook::db::{NewUser, Store, StoreError};

async fn test_store() -> Store {
    Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("failed to create in-memory store")
}

fn john_doe() -> NewUser {
    NewUser {
        name: "john doe".to_string(),
        username: "johndoe".to_string(),
        email: "johndoe@email.com".to_string(),
        address: Some("awesome address number 2".to_string()),
    }
}

#[tokio::test]
async fn create_user_with_address_persists_and_links_both() {
    let store = test_store().await;

    let user = store.add_user(john_doe()).await.unwrap();
    assert!(user.id > 0);

    let found = store
        .get_user(user.id)
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.name, "john doe");
    assert_eq!(found.email, "johndoe@email.com");

    let address = found.address.expect("address should be linked");
    assert_eq!(address.address, "awesome address number 2");

    // The address exists as its own row too.
    let stored = store
        .get_address(address.id)
        .await
        .unwrap()
        .expect("address row should exist");
    assert_eq!(stored, address);
}

#[tokio::test]
async fn create_user_without_address_leaves_link_unset() {
    let store = test_store().await;

    let user = store
        .add_user(NewUser {
            name: "jane doe".to_string(),
            username: "janedoe".to_string(),
            email: "janedoe@email.com".to_string(),
            address: None,
        })
        .await
        .unwrap();

    let found = store.get_user(user.id).await.unwrap().unwrap();
    assert!(found.address.is_none());
    assert!(store.list_addresses().await.unwrap().is_empty());
}

#[tokio::test]
async fn lookup_by_username_returns_match_or_none() {
    let store = test_store().await;
    store.add_user(john_doe()).await.unwrap();

    let found = store.get_user_by_username("johndoe").await.unwrap();
    assert_eq!(found.unwrap().username, "johndoe");

    let missing = store.get_user_by_username("nobody").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn lookup_by_id_returns_record_or_none() {
    let store = test_store().await;
    let user = store.add_user(john_doe()).await.unwrap();

    let found = store.get_user(user.id).await.unwrap();
    assert_eq!(found.unwrap().id, user.id);

    let missing = store.get_user(user.id + 1000).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn rename_persists_across_reads() {
    let store = test_store().await;
    let user = store.add_user(john_doe()).await.unwrap();

    let renamed = store.rename_user(user.id, "john doe updated").await.unwrap();
    assert_eq!(renamed.name, "john doe updated");

    let found = store.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(found.name, "john doe updated");
    // Other fields are untouched.
    assert_eq!(found.username, "johndoe");
    assert!(found.address.is_some());
}

#[tokio::test]
async fn update_email_persists_across_reads() {
    let store = test_store().await;
    let user = store.add_user(john_doe()).await.unwrap();

    store
        .update_user_email(user.id, "john@newmail.com")
        .await
        .unwrap();

    let found = store.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(found.email, "john@newmail.com");
}

#[tokio::test]
async fn rename_missing_user_reports_not_found() {
    let store = test_store().await;

    let err = store.rename_user(42, "ghost").await.unwrap_err();
    assert!(matches!(err, StoreError::UserNotFound(42)));
}

#[tokio::test]
async fn list_returns_every_user() {
    let store = test_store().await;
    assert!(store.list_users().await.unwrap().is_empty());

    store.add_user(john_doe()).await.unwrap();
    store
        .add_user(NewUser {
            name: "jane doe".to_string(),
            username: "janedoe".to_string(),
            email: "janedoe@email.com".to_string(),
            address: Some("another address".to_string()),
        })
        .await
        .unwrap();

    let users = store.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(usernames, ["johndoe", "janedoe"]);
}

#[tokio::test]
async fn delete_removes_user_but_keeps_address() {
    let store = test_store().await;
    let user = store.add_user(john_doe()).await.unwrap();
    let address_id = user.address.as_ref().unwrap().id;

    assert!(store.remove_user(user.id).await.unwrap());

    assert!(store.get_user(user.id).await.unwrap().is_none());
    assert!(store.list_users().await.unwrap().is_empty());

    // No cascade: the address row survives the user.
    let address = store.get_address(address_id).await.unwrap();
    assert_eq!(address.unwrap().address, "awesome address number 2");

    // Deleting again is a no-op.
    assert!(!store.remove_user(user.id).await.unwrap());
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let store = test_store().await;
    store.add_user(john_doe()).await.unwrap();

    let err = store
        .add_user(NewUser {
            name: "impostor".to_string(),
            username: "johndoe".to_string(),
            email: "other@email.com".to_string(),
            address: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Duplicate(_)));
}

#[tokio::test]
async fn duplicate_address_text_is_rejected() {
    let store = test_store().await;
    store.add_address("awesome address number 2").await.unwrap();

    let err = store
        .add_address("awesome address number 2")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));

    // The same text nested under a new user is rejected too.
    let err = store.add_user(john_doe()).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));
}

#[tokio::test]
async fn address_lookup_by_text() {
    let store = test_store().await;
    let created = store.add_address("main street 1").await.unwrap();

    let found = store.get_address_by_text("main street 1").await.unwrap();
    assert_eq!(found, Some(created));

    assert!(store.get_address_by_text("nowhere").await.unwrap().is_none());
}

#[tokio::test]
async fn from_config_honors_configured_pool_bounds() {
    let general = GeneralConfig {
        database_url: "sqlite::memory:".to_string(),
        max_db_connections: 1,
        min_db_connections: 1,
        ..GeneralConfig::default()
    };

    let store = Store::from_config(&general).await.unwrap();
    store.add_user(john_doe()).await.unwrap();

    // A one-connection pool keeps every query on the connection the
    // migrations ran on. A larger pool against an in-memory sqlite URL
    // would hand concurrent reads fresh, empty databases.
    let (a, b, c) = tokio::join!(store.list_users(), store.list_users(), store.list_users());
    assert_eq!(a.unwrap().len(), 1);
    assert_eq!(b.unwrap().len(), 1);
    assert_eq!(c.unwrap().len(), 1);
}

#[tokio::test]
async fn file_backed_store_runs_full_cycle() {
    let db_path = std::env::temp_dir().join(format!("userbook-test-{}.db", uuid::Uuid::new_v4()));
    let db_url = format!("sqlite:{}", db_path.display());

    let store = Store::new(&db_url).await.expect("failed to open store");
    store.ping().await.unwrap();

    let user = store.add_user(john_doe()).await.unwrap();

    let by_username = store.get_user_by_username("johndoe").await.unwrap().unwrap();
    assert_eq!(
        by_username.address.as_ref().unwrap().address,
        "awesome address number 2"
    );

    store.rename_user(user.id, "john doe updated").await.unwrap();
    let by_id = store.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.name, "john doe updated");

    assert_eq!(store.list_users().await.unwrap().len(), 1);

    store.remove_user(user.id).await.unwrap();
    assert!(store.list_users().await.unwrap().is_empty());
    assert_eq!(store.list_addresses().await.unwrap().len(), 1);

    drop(store);
    std::fs::remove_file(&db_path).ok();
}
