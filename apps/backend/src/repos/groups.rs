//! Group repository functions, including the subscriber set.

use std::fmt;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::debug;

use crate::adapters::groups_sea as groups_adapter;
use crate::entities::groups;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::users::User;

pub use groups_adapter::{GroupCreate, GroupUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub admin_id: i64,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<groups::Model> for Group {
    fn from(model: groups::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            admin_id: model.admin_id,
        }
    }
}

fn group_not_found(group_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Group, format!("Group {group_id} not found"))
}

pub async fn create_group(
    txn: &DatabaseTransaction,
    dto: GroupCreate,
) -> Result<Group, DomainError> {
    let group = groups_adapter::create_group(txn, dto).await?;
    Ok(Group::from(group))
}

pub async fn find_group_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Option<Group>, DomainError> {
    let group = groups_adapter::find_by_id(conn, group_id).await?;
    Ok(group.map(Group::from))
}

/// All groups, name descending.
pub async fn list_groups<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Group>, DomainError> {
    let groups = groups_adapter::list_all(conn).await?;
    Ok(groups.into_iter().map(Group::from).collect())
}

pub async fn list_groups_by_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    admin_id: i64,
) -> Result<Vec<Group>, DomainError> {
    let groups = groups_adapter::list_by_admin(conn, admin_id).await?;
    Ok(groups.into_iter().map(Group::from).collect())
}

pub async fn update_group(
    txn: &DatabaseTransaction,
    dto: GroupUpdate,
) -> Result<Group, DomainError> {
    let group_id = dto.id;
    groups_adapter::update_group(txn, dto)
        .await?
        .map(Group::from)
        .ok_or_else(|| group_not_found(group_id))
}

/// Delete a group together with its posts and subscriptions.
pub async fn delete_group(txn: &DatabaseTransaction, group_id: i64) -> Result<(), DomainError> {
    match groups_adapter::delete_group(txn, group_id).await? {
        0 => Err(group_not_found(group_id)),
        _ => Ok(()),
    }
}

/// Subscribe a user. Subscribing twice is a no-op; returns whether a new
/// subscription was created.
pub async fn subscribe(
    txn: &DatabaseTransaction,
    group_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    let inserted = groups_adapter::subscribe(txn, group_id, user_id).await?;
    debug!(group_id, user_id, inserted, "group subscribe");
    Ok(inserted)
}

/// Returns whether a subscription was removed.
pub async fn unsubscribe(
    txn: &DatabaseTransaction,
    group_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    let removed = groups_adapter::unsubscribe(txn, group_id, user_id).await?;
    Ok(removed > 0)
}

pub async fn is_subscribed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    Ok(groups_adapter::is_subscribed(conn, group_id, user_id).await?)
}

pub async fn list_subscribers<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<User>, DomainError> {
    let users = groups_adapter::list_subscribers(conn, group_id).await?;
    Ok(users.into_iter().map(User::from).collect())
}

/// Groups the user subscribes to, name descending.
pub async fn list_user_groups<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Group>, DomainError> {
    let groups = groups_adapter::list_user_groups(conn, user_id).await?;
    Ok(groups.into_iter().map(Group::from).collect())
}
