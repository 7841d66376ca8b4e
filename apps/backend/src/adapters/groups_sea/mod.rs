//! SeaORM adapter for groups and their subscriber set.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, JoinType,
    NotSet, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use crate::entities::{group_subscribers, groups, users};

pub mod dto;

pub use dto::{GroupCreate, GroupUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Default listing order: name descending.
fn ordered(select: Select<groups::Entity>) -> Select<groups::Entity> {
    select.order_by_desc(groups::Column::Name)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Option<groups::Model>, sea_orm::DbErr> {
    groups::Entity::find_by_id(group_id).one(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<groups::Model>, sea_orm::DbErr> {
    ordered(groups::Entity::find()).all(conn).await
}

pub async fn list_by_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    admin_id: i64,
) -> Result<Vec<groups::Model>, sea_orm::DbErr> {
    ordered(groups::Entity::find().filter(groups::Column::AdminId.eq(admin_id)))
        .all(conn)
        .await
}

pub async fn create_group(
    txn: &DatabaseTransaction,
    dto: GroupCreate,
) -> Result<groups::Model, sea_orm::DbErr> {
    let group_active = groups::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        admin_id: Set(dto.admin_id),
    };

    group_active.insert(txn).await
}

pub async fn update_group(
    txn: &DatabaseTransaction,
    dto: GroupUpdate,
) -> Result<Option<groups::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(txn, dto.id).await? else {
        return Ok(None);
    };

    let mut group: groups::ActiveModel = existing.into();
    if let Some(name) = dto.name {
        group.name = Set(name);
    }
    if let Some(admin_id) = dto.admin_id {
        group.admin_id = Set(admin_id);
    }
    group.update(txn).await.map(Some)
}

pub async fn delete_group(txn: &DatabaseTransaction, group_id: i64) -> Result<u64, sea_orm::DbErr> {
    let result = groups::Entity::delete_by_id(group_id).exec(txn).await?;
    Ok(result.rows_affected)
}

/// Add a subscriber. Idempotent: returns `false` when the pair already existed.
pub async fn subscribe(
    txn: &DatabaseTransaction,
    group_id: i64,
    user_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let subscription = group_subscribers::ActiveModel {
        group_id: Set(group_id),
        user_id: Set(user_id),
    };

    let rows = group_subscribers::Entity::insert(subscription)
        .on_conflict(
            OnConflict::columns([
                group_subscribers::Column::GroupId,
                group_subscribers::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(txn)
        .await?;

    Ok(rows == 1)
}

pub async fn unsubscribe(
    txn: &DatabaseTransaction,
    group_id: i64,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = group_subscribers::Entity::delete_by_id((group_id, user_id))
        .exec(txn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn is_subscribed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
    user_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let row = group_subscribers::Entity::find_by_id((group_id, user_id))
        .one(conn)
        .await?;
    Ok(row.is_some())
}

/// Subscribers of a group, ordered by user id.
pub async fn list_subscribers<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .join(JoinType::InnerJoin, users::Relation::Subscriptions.def())
        .filter(group_subscribers::Column::GroupId.eq(group_id))
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
}

/// Groups a user is subscribed to, in the default group order.
pub async fn list_user_groups<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<groups::Model>, sea_orm::DbErr> {
    ordered(
        groups::Entity::find()
            .join(JoinType::InnerJoin, groups::Relation::Subscriptions.def())
            .filter(group_subscribers::Column::UserId.eq(user_id)),
    )
    .all(conn)
    .await
}
