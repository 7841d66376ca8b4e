//! SeaORM adapter for post repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbBackend, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Select, Set,
};

use super::timestamp_sort_key;
use crate::entities::posts;

pub mod dto;

pub use dto::{PostCreate, PostUpdate};

/// Newest first; posts created in the same instant sort by title.
fn ordered(select: Select<posts::Entity>, backend: DbBackend) -> Select<posts::Entity> {
    select
        .order_by_desc(timestamp_sort_key(backend, posts::Column::CreatedAt))
        .order_by_asc(posts::Column::Title)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Option<posts::Model>, sea_orm::DbErr> {
    posts::Entity::find_by_id(post_id).one(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<posts::Model>, sea_orm::DbErr> {
    ordered(posts::Entity::find(), conn.get_database_backend())
        .all(conn)
        .await
}

pub async fn list_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<posts::Model>, sea_orm::DbErr> {
    ordered(
        posts::Entity::find().filter(posts::Column::GroupId.eq(group_id)),
        conn.get_database_backend(),
    )
        .all(conn)
        .await
}

pub async fn list_by_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Vec<posts::Model>, sea_orm::DbErr> {
    ordered(
        posts::Entity::find().filter(posts::Column::AuthorId.eq(author_id)),
        conn.get_database_backend(),
    )
        .all(conn)
        .await
}

pub async fn create_post(
    txn: &DatabaseTransaction,
    dto: PostCreate,
) -> Result<posts::Model, sea_orm::DbErr> {
    let post_active = posts::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        text: Set(dto.text),
        created_at: dto.created_at.map_or(NotSet, Set),
        // refreshed in before_save
        edited_at: NotSet,
        group_id: Set(dto.group_id),
        author_id: Set(dto.author_id),
        image: Set(dto.image),
    };

    post_active.insert(txn).await
}

pub async fn update_post(
    txn: &DatabaseTransaction,
    dto: PostUpdate,
) -> Result<Option<posts::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(txn, dto.id).await? else {
        return Ok(None);
    };

    let mut post: posts::ActiveModel = existing.into();
    if let Some(title) = dto.title {
        post.title = Set(title);
    }
    if let Some(text) = dto.text {
        post.text = Set(text);
    }
    if let Some(image) = dto.image {
        post.image = Set(image);
    }
    post.update(txn).await.map(Some)
}

pub async fn delete_post(txn: &DatabaseTransaction, post_id: i64) -> Result<u64, sea_orm::DbErr> {
    let result = posts::Entity::delete_by_id(post_id).exec(txn).await?;
    Ok(result.rows_affected)
}
