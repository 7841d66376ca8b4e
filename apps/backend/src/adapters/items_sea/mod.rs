//! SeaORM adapter for catalog items.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Select, Set,
};

use crate::entities::items::{self, ItemType};

pub mod dto;

pub use dto::{ItemCreate, ItemUpdate};

/// Type descending (on the stored string), then name descending.
pub(crate) fn ordered(select: Select<items::Entity>) -> Select<items::Entity> {
    select
        .order_by_desc(items::Column::ItemType)
        .order_by_desc(items::Column::Name)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_id: i64,
) -> Result<Option<items::Model>, sea_orm::DbErr> {
    items::Entity::find_by_id(item_id).one(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<items::Model>, sea_orm::DbErr> {
    ordered(items::Entity::find()).all(conn).await
}

pub async fn list_by_type<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_type: ItemType,
) -> Result<Vec<items::Model>, sea_orm::DbErr> {
    ordered(items::Entity::find().filter(items::Column::ItemType.eq(item_type)))
        .all(conn)
        .await
}

pub async fn create_item(
    txn: &DatabaseTransaction,
    dto: ItemCreate,
) -> Result<items::Model, sea_orm::DbErr> {
    let item_active = items::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_at: dto.created_at.map_or(NotSet, Set),
        item_type: Set(dto.item_type.unwrap_or_default()),
    };

    item_active.insert(txn).await
}

pub async fn update_item(
    txn: &DatabaseTransaction,
    dto: ItemUpdate,
) -> Result<Option<items::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(txn, dto.id).await? else {
        return Ok(None);
    };

    let mut item: items::ActiveModel = existing.into();
    if let Some(name) = dto.name {
        item.name = Set(name);
    }
    if let Some(item_type) = dto.item_type {
        item.item_type = Set(item_type);
    }
    item.update(txn).await.map(Some)
}

pub async fn delete_item(txn: &DatabaseTransaction, item_id: i64) -> Result<u64, sea_orm::DbErr> {
    let result = items::Entity::delete_by_id(item_id).exec(txn).await?;
    Ok(result.rows_affected)
}
