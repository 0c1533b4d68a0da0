use std::fmt;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use super::StoreError;
use crate::entities::{addresses, prelude::*};

/// A postal address row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i32,
    pub address: String,
}

impl From<addresses::Model> for Address {
    fn from(model: addresses::Model) -> Self {
        Self {
            id: model.id,
            address: model.address,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

pub struct AddressRepository {
    conn: DatabaseConnection,
}

impl AddressRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert an address. Fails with [`StoreError::Duplicate`] when the text
    /// already exists.
    pub async fn create(&self, text: &str) -> Result<Address, StoreError> {
        let model = addresses::ActiveModel {
            address: Set(text.to_string()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .map_err(StoreError::from_db)?;

        info!("Added address {} (id {})", model.address, model.id);
        Ok(Address::from(model))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Address>, StoreError> {
        let row = Addresses::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Address::from))
    }

    pub async fn get_by_text(&self, text: &str) -> Result<Option<Address>, StoreError> {
        let row = Addresses::find()
            .filter(addresses::Column::Address.eq(text))
            .one(&self.conn)
            .await?;
        Ok(row.map(Address::from))
    }

    pub async fn list_all(&self) -> Result<Vec<Address>, StoreError> {
        let rows = Addresses::find()
            .order_by_asc(addresses::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(Address::from).collect())
    }
}
