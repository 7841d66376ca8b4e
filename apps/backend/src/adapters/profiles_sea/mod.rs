//! SeaORM adapter for profile repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, Set,
};

use crate::entities::{profiles, users};

pub mod dto;

pub use dto::{ProfileCreate, ProfileUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    profiles::Entity::find_by_id(profile_id).one(conn).await
}

pub async fn find_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    profiles::Entity::find()
        .filter(profiles::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Profile joined with its owning user.
pub async fn find_with_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Option<(profiles::Model, users::Model)>, sea_orm::DbErr> {
    let row = profiles::Entity::find_by_id(profile_id)
        .find_also_related(users::Entity)
        .one(conn)
        .await?;

    match row {
        Some((profile, Some(user))) => Ok(Some((profile, user))),
        // FK guarantees the user; a missing one means the row is orphaned
        Some((profile, None)) => Err(sea_orm::DbErr::RecordNotFound(format!(
            "user {} for profile {}",
            profile.user_id, profile.id
        ))),
        None => Ok(None),
    }
}

pub async fn create_profile(
    txn: &DatabaseTransaction,
    dto: ProfileCreate,
) -> Result<profiles::Model, sea_orm::DbErr> {
    let profile_active = profiles::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        description: Set(dto.description),
        avatar: Set(dto.avatar),
    };

    profile_active.insert(txn).await
}

pub async fn update_profile(
    txn: &DatabaseTransaction,
    dto: ProfileUpdate,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(txn, dto.id).await? else {
        return Ok(None);
    };

    let mut profile: profiles::ActiveModel = existing.into();
    if let Some(description) = dto.description {
        profile.description = Set(description);
    }
    if let Some(avatar) = dto.avatar {
        profile.avatar = Set(avatar);
    }
    profile.update(txn).await.map(Some)
}

pub async fn delete_profile(
    txn: &DatabaseTransaction,
    profile_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = profiles::Entity::delete_by_id(profile_id).exec(txn).await?;
    Ok(result.rows_affected)
}
