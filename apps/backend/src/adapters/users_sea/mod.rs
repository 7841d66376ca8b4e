//! SeaORM adapter for user repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::users;

pub mod dto;

pub use dto::{LoginRecord, UserCreate, UserUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
}

pub async fn create_user(
    txn: &DatabaseTransaction,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
        password: Set(dto.password),
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        email: Set(dto.email),
        is_staff: Set(dto.is_staff),
        is_active: Set(dto.is_active),
        is_superuser: Set(dto.is_superuser),
        last_login: Set(None),
        // stamped in before_save
        date_joined: NotSet,
        birth_date: Set(dto.birth_date),
    };

    user_active.insert(txn).await
}

/// Apply a partial update. Returns `None` when the user does not exist.
pub async fn update_user(
    txn: &DatabaseTransaction,
    dto: UserUpdate,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(txn, dto.id).await? else {
        return Ok(None);
    };

    let mut user: users::ActiveModel = existing.into();
    if let Some(username) = dto.username {
        user.username = Set(username);
    }
    if let Some(password) = dto.password {
        user.password = Set(password);
    }
    if let Some(first_name) = dto.first_name {
        user.first_name = Set(first_name);
    }
    if let Some(last_name) = dto.last_name {
        user.last_name = Set(last_name);
    }
    if let Some(email) = dto.email {
        user.email = Set(email);
    }
    if let Some(is_staff) = dto.is_staff {
        user.is_staff = Set(is_staff);
    }
    if let Some(is_active) = dto.is_active {
        user.is_active = Set(is_active);
    }
    if let Some(is_superuser) = dto.is_superuser {
        user.is_superuser = Set(is_superuser);
    }
    if let Some(birth_date) = dto.birth_date {
        user.birth_date = Set(birth_date);
    }

    user.update(txn).await.map(Some)
}

pub async fn record_login(
    txn: &DatabaseTransaction,
    login: LoginRecord,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(txn, login.user_id).await? else {
        return Ok(None);
    };

    let mut user: users::ActiveModel = existing.into();
    user.last_login = Set(Some(login.at));
    user.update(txn).await.map(Some)
}

/// Delete a user; dependents go with it through ON DELETE CASCADE.
/// Returns the number of rows removed (0 or 1).
pub async fn delete_user(txn: &DatabaseTransaction, user_id: i64) -> Result<u64, sea_orm::DbErr> {
    let result = users::Entity::delete_by_id(user_id).exec(txn).await?;
    Ok(result.rows_affected)
}
