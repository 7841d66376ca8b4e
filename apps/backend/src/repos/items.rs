//! Catalog item repository functions.

use std::fmt;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::items_sea as items_adapter;
use crate::entities::items::{self, ItemType};
use crate::errors::domain::{DomainError, NotFoundKind};

pub use items_adapter::{ItemCreate, ItemUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub item_type: ItemType,
    pub created_at: OffsetDateTime,
}

/// "type - name", using the stored type value.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.item_type, self.name)
    }
}

impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            item_type: model.item_type,
            created_at: model.created_at,
        }
    }
}

fn item_not_found(item_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Item, format!("Item {item_id} not found"))
}

pub async fn create_item(txn: &DatabaseTransaction, dto: ItemCreate) -> Result<Item, DomainError> {
    let item = items_adapter::create_item(txn, dto).await?;
    Ok(Item::from(item))
}

pub async fn find_item_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_id: i64,
) -> Result<Option<Item>, DomainError> {
    let item = items_adapter::find_by_id(conn, item_id).await?;
    Ok(item.map(Item::from))
}

/// All items, type descending then name descending.
pub async fn list_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Item>, DomainError> {
    let items = items_adapter::list_all(conn).await?;
    Ok(items.into_iter().map(Item::from).collect())
}

pub async fn list_items_by_type<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_type: ItemType,
) -> Result<Vec<Item>, DomainError> {
    let items = items_adapter::list_by_type(conn, item_type).await?;
    Ok(items.into_iter().map(Item::from).collect())
}

pub async fn update_item(txn: &DatabaseTransaction, dto: ItemUpdate) -> Result<Item, DomainError> {
    let item_id = dto.id;
    items_adapter::update_item(txn, dto)
        .await?
        .map(Item::from)
        .ok_or_else(|| item_not_found(item_id))
}

/// Delete an item; every basket entry pointing at it goes too.
pub async fn delete_item(txn: &DatabaseTransaction, item_id: i64) -> Result<(), DomainError> {
    match items_adapter::delete_item(txn, item_id).await? {
        0 => Err(item_not_found(item_id)),
        _ => Ok(()),
    }
}
