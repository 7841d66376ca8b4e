//! SeaORM adapter for baskets and their item entries.
//!
//! Items are only ever attached to a basket through an `items_in_basket` row.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, JoinType,
    NotSet, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::entities::{baskets, items, items_in_basket};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    basket_id: i64,
) -> Result<Option<baskets::Model>, sea_orm::DbErr> {
    baskets::Entity::find_by_id(basket_id).one(conn).await
}

pub async fn find_by_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Option<baskets::Model>, sea_orm::DbErr> {
    baskets::Entity::find()
        .filter(baskets::Column::ProfileId.eq(profile_id))
        .one(conn)
        .await
}

pub async fn create_basket(
    txn: &DatabaseTransaction,
    profile_id: i64,
) -> Result<baskets::Model, sea_orm::DbErr> {
    let basket_active = baskets::ActiveModel {
        id: NotSet,
        profile_id: Set(profile_id),
    };

    basket_active.insert(txn).await
}

pub async fn delete_basket(
    txn: &DatabaseTransaction,
    basket_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = baskets::Entity::delete_by_id(basket_id).exec(txn).await?;
    Ok(result.rows_affected)
}

pub async fn find_entry_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<Option<items_in_basket::Model>, sea_orm::DbErr> {
    items_in_basket::Entity::find_by_id(entry_id).one(conn).await
}

/// Insert a new entry. The same item may appear in several entries.
pub async fn insert_entry(
    txn: &DatabaseTransaction,
    basket_id: i64,
    item_id: i64,
    count: i32,
) -> Result<items_in_basket::Model, sea_orm::DbErr> {
    let entry_active = items_in_basket::ActiveModel {
        id: NotSet,
        count: Set(count),
        basket_id: Set(basket_id),
        item_id: Set(item_id),
    };

    entry_active.insert(txn).await
}

pub async fn update_entry_count(
    txn: &DatabaseTransaction,
    entry_id: i64,
    count: i32,
) -> Result<Option<items_in_basket::Model>, sea_orm::DbErr> {
    let Some(existing) = find_entry_by_id(txn, entry_id).await? else {
        return Ok(None);
    };

    let mut entry: items_in_basket::ActiveModel = existing.into();
    entry.count = Set(count);
    entry.update(txn).await.map(Some)
}

pub async fn delete_entry(txn: &DatabaseTransaction, entry_id: i64) -> Result<u64, sea_orm::DbErr> {
    let result = items_in_basket::Entity::delete_by_id(entry_id)
        .exec(txn)
        .await?;
    Ok(result.rows_affected)
}

/// Entries of a basket in insertion order.
pub async fn list_entries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    basket_id: i64,
) -> Result<Vec<items_in_basket::Model>, sea_orm::DbErr> {
    items_in_basket::Entity::find()
        .filter(items_in_basket::Column::BasketId.eq(basket_id))
        .order_by_asc(items_in_basket::Column::Id)
        .all(conn)
        .await
}

/// Entries joined with their item, in insertion order.
pub async fn list_entries_with_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    basket_id: i64,
) -> Result<Vec<(items_in_basket::Model, items::Model)>, sea_orm::DbErr> {
    let rows = items_in_basket::Entity::find()
        .find_also_related(items::Entity)
        .filter(items_in_basket::Column::BasketId.eq(basket_id))
        .order_by_asc(items_in_basket::Column::Id)
        .all(conn)
        .await?;

    rows.into_iter()
        .map(|(entry, item)| match item {
            Some(item) => Ok((entry, item)),
            None => Err(sea_orm::DbErr::RecordNotFound(format!(
                "item {} for basket entry {}",
                entry.item_id, entry.id
            ))),
        })
        .collect()
}

/// Distinct items held by a basket, in the default item order.
pub async fn list_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    basket_id: i64,
) -> Result<Vec<items::Model>, sea_orm::DbErr> {
    crate::adapters::items_sea::ordered(
        items::Entity::find()
            .join(JoinType::InnerJoin, items::Relation::ItemsInBasket.def())
            .filter(items_in_basket::Column::BasketId.eq(basket_id))
            .distinct(),
    )
    .all(conn)
    .await
}
