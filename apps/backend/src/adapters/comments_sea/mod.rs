//! SeaORM adapter for comment repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbBackend, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Select, Set,
};

use super::timestamp_sort_key;
use crate::entities::{comments, users};

pub mod dto;

pub use dto::CommentCreate;

fn ordered(select: Select<comments::Entity>, backend: DbBackend) -> Select<comments::Entity> {
    select.order_by_desc(timestamp_sort_key(backend, comments::Column::CreatedAt))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
) -> Result<Option<comments::Model>, sea_orm::DbErr> {
    comments::Entity::find_by_id(comment_id).one(conn).await
}

pub async fn find_with_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
) -> Result<Option<(comments::Model, users::Model)>, sea_orm::DbErr> {
    let row = comments::Entity::find_by_id(comment_id)
        .find_also_related(users::Entity)
        .one(conn)
        .await?;

    match row {
        Some((comment, Some(author))) => Ok(Some((comment, author))),
        Some((comment, None)) => Err(sea_orm::DbErr::RecordNotFound(format!(
            "author {} for comment {}",
            comment.author_id, comment.id
        ))),
        None => Ok(None),
    }
}

pub async fn list_by_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Vec<comments::Model>, sea_orm::DbErr> {
    ordered(
        comments::Entity::find().filter(comments::Column::PostId.eq(post_id)),
        conn.get_database_backend(),
    )
        .all(conn)
        .await
}

pub async fn list_by_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Vec<comments::Model>, sea_orm::DbErr> {
    ordered(
        comments::Entity::find().filter(comments::Column::AuthorId.eq(author_id)),
        conn.get_database_backend(),
    )
        .all(conn)
        .await
}

pub async fn create_comment(
    txn: &DatabaseTransaction,
    dto: CommentCreate,
) -> Result<comments::Model, sea_orm::DbErr> {
    let comment_active = comments::ActiveModel {
        id: NotSet,
        text: Set(dto.text),
        created_at: dto.created_at.map_or(NotSet, Set),
        edited_at: NotSet,
        author_id: Set(dto.author_id),
        post_id: Set(dto.post_id),
    };

    comment_active.insert(txn).await
}

pub async fn update_text(
    txn: &DatabaseTransaction,
    comment_id: i64,
    text: String,
) -> Result<Option<comments::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(txn, comment_id).await? else {
        return Ok(None);
    };

    let mut comment: comments::ActiveModel = existing.into();
    comment.text = Set(text);
    comment.update(txn).await.map(Some)
}

pub async fn delete_comment(
    txn: &DatabaseTransaction,
    comment_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = comments::Entity::delete_by_id(comment_id).exec(txn).await?;
    Ok(result.rows_affected)
}
