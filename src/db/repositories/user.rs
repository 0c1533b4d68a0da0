use std::fmt;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use super::StoreError;
use super::address::Address;
use crate::entities::{addresses, prelude::*, users};

/// A user row, hydrated with its linked address when one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Option<Address>,
}

impl User {
    fn from_row(user: users::Model, address: Option<addresses::Model>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            address: address.map(Address::from),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.username, self.name, self.email)
    }
}

/// Input for [`UserRepository::create`].
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    /// Address text to insert alongside the user, if any.
    pub address: Option<String>,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a user, creating its nested address first when one is given.
    ///
    /// Each insert commits on its own; a rejected user insert leaves an
    /// already-inserted address row behind.
    pub async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let address = match new.address {
            Some(text) => Some(
                addresses::ActiveModel {
                    address: Set(text),
                    ..Default::default()
                }
                .insert(&self.conn)
                .await
                .map_err(StoreError::from_db)?,
            ),
            None => None,
        };

        let user = users::ActiveModel {
            name: Set(new.name),
            username: Set(new.username),
            email: Set(new.email),
            address_id: Set(address.as_ref().map(|a| a.id)),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .map_err(StoreError::from_db)?;

        info!("Created user {} (id {})", user.username, user.id);
        Ok(User::from_row(user, address))
    }

    /// Get user by unique username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = Users::find()
            .filter(users::Column::Username.eq(username))
            .find_also_related(Addresses)
            .one(&self.conn)
            .await?;

        Ok(row.map(|(user, address)| User::from_row(user, address)))
    }

    /// Get user by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        let row = Users::find_by_id(id)
            .find_also_related(Addresses)
            .one(&self.conn)
            .await?;

        Ok(row.map(|(user, address)| User::from_row(user, address)))
    }

    pub async fn update_name(&self, id: i32, name: &str) -> Result<User, StoreError> {
        let (user, address) = Users::find_by_id(id)
            .find_also_related(Addresses)
            .one(&self.conn)
            .await?
            .ok_or(StoreError::UserNotFound(id))?;

        let mut active: users::ActiveModel = user.into();
        active.name = Set(name.to_string());
        let user = active.update(&self.conn).await?;

        Ok(User::from_row(user, address))
    }

    pub async fn update_email(&self, id: i32, email: &str) -> Result<User, StoreError> {
        let (user, address) = Users::find_by_id(id)
            .find_also_related(Addresses)
            .one(&self.conn)
            .await?
            .ok_or(StoreError::UserNotFound(id))?;

        let mut active: users::ActiveModel = user.into();
        active.email = Set(email.to_string());
        let user = active.update(&self.conn).await?;

        Ok(User::from_row(user, address))
    }

    pub async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = Users::find()
            .find_also_related(Addresses)
            .order_by_asc(users::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user, address)| User::from_row(user, address))
            .collect())
    }

    /// Delete a user. Returns whether a row was removed. The linked address
    /// row, if any, is left untouched.
    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let res = Users::delete_by_id(id).exec(&self.conn).await?;

        if res.rows_affected > 0 {
            info!("Deleted user {}", id);
        }
        Ok(res.rows_affected > 0)
    }
}
