//! Basket repository functions. Items enter a basket only as entries
//! (`items_in_basket` rows) carrying a count.

use std::fmt;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::debug;

use crate::adapters::baskets_sea as baskets_adapter;
use crate::entities::{baskets, items_in_basket};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::items::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Basket {
    pub id: i64,
    pub profile_id: i64,
}

impl From<baskets::Model> for Basket {
    fn from(model: baskets::Model) -> Self {
        Self {
            id: model.id,
            profile_id: model.profile_id,
        }
    }
}

/// One `items_in_basket` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasketEntry {
    pub id: i64,
    pub basket_id: i64,
    pub item_id: i64,
    pub count: i32,
}

impl From<items_in_basket::Model> for BasketEntry {
    fn from(model: items_in_basket::Model) -> Self {
        Self {
            id: model.id,
            basket_id: model.basket_id,
            item_id: model.item_id,
            count: model.count,
        }
    }
}

/// Entry with its item loaded; displays as "basket id - item name".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketLine {
    pub entry: BasketEntry,
    pub item: Item,
}

impl fmt::Display for BasketLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.entry.basket_id, self.item.name)
    }
}

fn basket_not_found(basket_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Basket,
        format!("Basket {basket_id} not found"),
    )
}

fn entry_not_found(entry_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::BasketEntry,
        format!("Basket entry {entry_id} not found"),
    )
}

/// Open the basket of a profile. A profile has at most one basket.
pub async fn create_basket(
    txn: &DatabaseTransaction,
    profile_id: i64,
) -> Result<Basket, DomainError> {
    let basket = baskets_adapter::create_basket(txn, profile_id).await?;
    Ok(Basket::from(basket))
}

pub async fn find_basket_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    basket_id: i64,
) -> Result<Option<Basket>, DomainError> {
    let basket = baskets_adapter::find_by_id(conn, basket_id).await?;
    Ok(basket.map(Basket::from))
}

pub async fn find_basket_by_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Option<Basket>, DomainError> {
    let basket = baskets_adapter::find_by_profile(conn, profile_id).await?;
    Ok(basket.map(Basket::from))
}

/// Delete a basket and all of its entries.
pub async fn delete_basket(txn: &DatabaseTransaction, basket_id: i64) -> Result<(), DomainError> {
    match baskets_adapter::delete_basket(txn, basket_id).await? {
        0 => Err(basket_not_found(basket_id)),
        _ => Ok(()),
    }
}

/// Put `count` of an item into a basket as a new entry.
pub async fn add_item(
    txn: &DatabaseTransaction,
    basket_id: i64,
    item_id: i64,
    count: i32,
) -> Result<BasketEntry, DomainError> {
    let entry = baskets_adapter::insert_entry(txn, basket_id, item_id, count).await?;
    debug!(basket_id, item_id, count, entry_id = entry.id, "basket add_item");
    Ok(BasketEntry::from(entry))
}

/// Overwrite the count of an entry; the value is stored as given.
pub async fn set_item_count(
    txn: &DatabaseTransaction,
    entry_id: i64,
    count: i32,
) -> Result<BasketEntry, DomainError> {
    baskets_adapter::update_entry_count(txn, entry_id, count)
        .await?
        .map(BasketEntry::from)
        .ok_or_else(|| entry_not_found(entry_id))
}

pub async fn remove_entry(txn: &DatabaseTransaction, entry_id: i64) -> Result<(), DomainError> {
    match baskets_adapter::delete_entry(txn, entry_id).await? {
        0 => Err(entry_not_found(entry_id)),
        _ => Ok(()),
    }
}

pub async fn find_entry_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<Option<BasketEntry>, DomainError> {
    let entry = baskets_adapter::find_entry_by_id(conn, entry_id).await?;
    Ok(entry.map(BasketEntry::from))
}

pub async fn list_entries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    basket_id: i64,
) -> Result<Vec<BasketEntry>, DomainError> {
    let entries = baskets_adapter::list_entries(conn, basket_id).await?;
    Ok(entries.into_iter().map(BasketEntry::from).collect())
}

pub async fn list_lines<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    basket_id: i64,
) -> Result<Vec<BasketLine>, DomainError> {
    let rows = baskets_adapter::list_entries_with_items(conn, basket_id).await?;
    Ok(rows
        .into_iter()
        .map(|(entry, item)| BasketLine {
            entry: BasketEntry::from(entry),
            item: Item::from(item),
        })
        .collect())
}

/// Distinct items in the basket, in the catalog's default order.
pub async fn list_items_in_basket<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    basket_id: i64,
) -> Result<Vec<Item>, DomainError> {
    let items = baskets_adapter::list_items(conn, basket_id).await?;
    Ok(items.into_iter().map(Item::from).collect())
}
