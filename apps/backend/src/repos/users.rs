//! User repository functions for domain layer.

use std::fmt;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::{Date, OffsetDateTime};

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use users_adapter::{UserCreate, UserUpdate};

/// Base identity record shared by every kind of account.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    /// Opaque password hash; never logged.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub last_login: Option<OffsetDateTime>,
    pub date_joined: OffsetDateTime,
}

impl Account {
    /// "first last", trimmed; empty when neither is set.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("is_staff", &self.is_staff)
            .field("is_active", &self.is_active)
            .field("is_superuser", &self.is_superuser)
            .field("last_login", &self.last_login)
            .field("date_joined", &self.date_joined)
            .finish()
    }
}

/// Application user: an `Account` plus a birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub account: Account,
    pub birth_date: Date,
}

impl User {
    pub fn username(&self) -> &str {
        &self.account.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.account.username)
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            account: Account {
                username: model.username,
                password: model.password,
                first_name: model.first_name,
                last_name: model.last_name,
                email: model.email,
                is_staff: model.is_staff,
                is_active: model.is_active,
                is_superuser: model.is_superuser,
                last_login: model.last_login,
                date_joined: model.date_joined,
            },
            birth_date: model.birth_date,
        }
    }
}

fn user_not_found(user_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::User, format!("User {user_id} not found"))
}

pub async fn create_user(txn: &DatabaseTransaction, dto: UserCreate) -> Result<User, DomainError> {
    let user = users_adapter::create_user(txn, dto).await?;
    Ok(User::from(user))
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

pub async fn find_user_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_username(conn, username).await?;
    Ok(user.map(User::from))
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::list_all(conn).await?;
    Ok(users.into_iter().map(User::from).collect())
}

pub async fn update_user(txn: &DatabaseTransaction, dto: UserUpdate) -> Result<User, DomainError> {
    let user_id = dto.id;
    users_adapter::update_user(txn, dto)
        .await?
        .map(User::from)
        .ok_or_else(|| user_not_found(user_id))
}

/// Stamp `last_login` with the current time.
pub async fn record_login(txn: &DatabaseTransaction, user_id: i64) -> Result<User, DomainError> {
    users_adapter::record_login(txn, users_adapter::LoginRecord::now(user_id))
        .await?
        .map(User::from)
        .ok_or_else(|| user_not_found(user_id))
}

/// Delete a user and, through cascades, their profile, basket, administered
/// groups, subscriptions, posts and comments.
pub async fn delete_user(txn: &DatabaseTransaction, user_id: i64) -> Result<(), DomainError> {
    match users_adapter::delete_user(txn, user_id).await? {
        0 => Err(user_not_found(user_id)),
        _ => Ok(()),
    }
}
