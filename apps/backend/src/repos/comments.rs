//! Comment repository functions for domain layer.

use std::fmt;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::adapters::comments_sea as comments_adapter;
use crate::entities::comments;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use comments_adapter::CommentCreate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub text: String,
    pub created_at: OffsetDateTime,
    pub edited_at: OffsetDateTime,
}

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            author_id: model.author_id,
            text: model.text,
            created_at: model.created_at,
            edited_at: model.edited_at,
        }
    }
}

/// Comment plus its author's username; displays as "author, timestamp".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: String,
}

impl fmt::Display for CommentWithAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let created = self
            .comment
            .created_at
            .format(format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .map_err(|_| fmt::Error)?;
        write!(f, "{}, {}", self.author, created)
    }
}

fn comment_not_found(comment_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Comment,
        format!("Comment {comment_id} not found"),
    )
}

pub async fn create_comment(
    txn: &DatabaseTransaction,
    dto: CommentCreate,
) -> Result<Comment, DomainError> {
    let comment = comments_adapter::create_comment(txn, dto).await?;
    Ok(Comment::from(comment))
}

pub async fn find_comment_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
) -> Result<Option<Comment>, DomainError> {
    let comment = comments_adapter::find_by_id(conn, comment_id).await?;
    Ok(comment.map(Comment::from))
}

pub async fn find_comment_with_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
) -> Result<Option<CommentWithAuthor>, DomainError> {
    let row = comments_adapter::find_with_author(conn, comment_id).await?;
    Ok(row.map(|(comment, author)| CommentWithAuthor {
        comment: Comment::from(comment),
        author: author.username,
    }))
}

/// Comments under a post, newest first.
pub async fn list_comments_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Vec<Comment>, DomainError> {
    let comments = comments_adapter::list_by_post(conn, post_id).await?;
    Ok(comments.into_iter().map(Comment::from).collect())
}

pub async fn list_comments_by_author<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
) -> Result<Vec<Comment>, DomainError> {
    let comments = comments_adapter::list_by_author(conn, author_id).await?;
    Ok(comments.into_iter().map(Comment::from).collect())
}

pub async fn update_comment(
    txn: &DatabaseTransaction,
    comment_id: i64,
    text: impl Into<String>,
) -> Result<Comment, DomainError> {
    comments_adapter::update_text(txn, comment_id, text.into())
        .await?
        .map(Comment::from)
        .ok_or_else(|| comment_not_found(comment_id))
}

pub async fn delete_comment(txn: &DatabaseTransaction, comment_id: i64) -> Result<(), DomainError> {
    match comments_adapter::delete_comment(txn, comment_id).await? {
        0 => Err(comment_not_found(comment_id)),
        _ => Ok(()),
    }
}
