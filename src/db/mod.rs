use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::GeneralConfig;

pub mod migrator;
pub mod repositories;

pub use repositories::StoreError;
pub use repositories::address::{Address, AddressRepository};
pub use repositories::user::{NewUser, User, UserRepository};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    /// Open a store using the configured URL and pool bounds.
    pub async fn from_config(general: &GeneralConfig) -> Result<Self> {
        Self::with_pool_options(
            &general.database_url,
            general.max_db_connections,
            general.min_db_connections,
        )
        .await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if db_url.starts_with("sqlite:") && !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> UserRepository {
        UserRepository::new(self.conn.clone())
    }

    fn address_repo(&self) -> AddressRepository {
        AddressRepository::new(self.conn.clone())
    }

    pub async fn add_user(&self, new: NewUser) -> Result<User, StoreError> {
        self.user_repo().create(new).await
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn rename_user(&self, id: i32, name: &str) -> Result<User, StoreError> {
        self.user_repo().update_name(id, name).await
    }

    pub async fn update_user_email(&self, id: i32, email: &str) -> Result<User, StoreError> {
        self.user_repo().update_email(id, email).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.user_repo().list_all().await
    }

    pub async fn remove_user(&self, id: i32) -> Result<bool, StoreError> {
        self.user_repo().delete(id).await
    }

    pub async fn add_address(&self, text: &str) -> Result<Address, StoreError> {
        self.address_repo().create(text).await
    }

    pub async fn get_address(&self, id: i32) -> Result<Option<Address>, StoreError> {
        self.address_repo().get(id).await
    }

    pub async fn get_address_by_text(&self, text: &str) -> Result<Option<Address>, StoreError> {
        self.address_repo().get_by_text(text).await
    }

    pub async fn list_addresses(&self) -> Result<Vec<Address>, StoreError> {
        self.address_repo().list_all().await
    }
}
