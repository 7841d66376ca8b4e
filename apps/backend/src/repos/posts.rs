//! Post repository functions for domain layer.

use std::fmt;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::posts_sea as posts_adapter;
use crate::entities::posts;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::media::{ensure_reference, ImageKind};

pub use posts_adapter::{PostCreate, PostUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub group_id: i64,
    pub author_id: i64,
    pub title: String,
    pub text: String,
    pub image: Option<String>,
    pub created_at: OffsetDateTime,
    pub edited_at: OffsetDateTime,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Self {
            id: model.id,
            group_id: model.group_id,
            author_id: model.author_id,
            title: model.title,
            text: model.text,
            image: model.image,
            created_at: model.created_at,
            edited_at: model.edited_at,
        }
    }
}

fn post_not_found(post_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Post, format!("Post {post_id} not found"))
}

pub async fn create_post(txn: &DatabaseTransaction, dto: PostCreate) -> Result<Post, DomainError> {
    if let Some(image) = &dto.image {
        ensure_reference(ImageKind::PostImage, image)?;
    }
    let post = posts_adapter::create_post(txn, dto).await?;
    Ok(Post::from(post))
}

pub async fn find_post_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Option<Post>, DomainError> {
    let post = posts_adapter::find_by_id(conn, post_id).await?;
    Ok(post.map(Post::from))
}

/// All posts, newest first, ties broken by title.
pub async fn list_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Post>, DomainError> {
    let posts = posts_adapter::list_all(conn).await?;
    Ok(posts.into_iter().map(Post::from).collect())
}

pub async fn list_posts_in_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<Post>, DomainError> {
    let posts = posts_adapter::list_by_group(conn, group_id).await?;
    Ok(posts.into_iter().map(Post::from).collect())
}

pub async fn list_posts_by_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Vec<Post>, DomainError> {
    let posts = posts_adapter::list_by_author(conn, author_id).await?;
    Ok(posts.into_iter().map(Post::from).collect())
}

/// Every successful update refreshes `edited_at`.
pub async fn update_post(txn: &DatabaseTransaction, dto: PostUpdate) -> Result<Post, DomainError> {
    if let Some(Some(image)) = &dto.image {
        ensure_reference(ImageKind::PostImage, image)?;
    }
    let post_id = dto.id;
    posts_adapter::update_post(txn, dto)
        .await?
        .map(Post::from)
        .ok_or_else(|| post_not_found(post_id))
}

pub async fn delete_post(txn: &DatabaseTransaction, post_id: i64) -> Result<(), DomainError> {
    match posts_adapter::delete_post(txn, post_id).await? {
        0 => Err(post_not_found(post_id)),
        _ => Ok(()),
    }
}
