//! comments repo: author label, ordering, edits.

use std::time::Duration;

use agora::db::txn::with_txn;
use agora::error::AppError;
use agora::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use agora::repos::comments::{self, CommentCreate};
use time::macros::datetime;

use crate::support::build_test_state;
use crate::support::factory::{seed_group, seed_post, seed_user};

#[tokio::test]
async fn test_comment_with_author_label() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "critic").await?;
            let group = seed_group(txn, "reviews", author.id).await?;
            let post = seed_post(txn, group.id, author.id).await?;

            let comment = comments::create_comment(
                txn,
                CommentCreate::new(post.id, author.id, "nice")
                    .created_at(datetime!(2024-05-06 07:08:09 UTC)),
            )
            .await?;

            let card = comments::find_comment_with_author(txn, comment.id)
                .await?
                .expect("comment with author");
            assert_eq!(
                card.to_string(),
                format!("{}, 2024-05-06 07:08:09", author.account.username)
            );
            assert_eq!(card.comment, comment);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_comments_newest_first() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "chatty").await?;
            let group = seed_group(txn, "chat", author.id).await?;
            let post = seed_post(txn, group.id, author.id).await?;

            for (text, at) in [
                ("first", datetime!(2024-01-01 0:00 UTC)),
                ("third", datetime!(2024-03-01 0:00 UTC)),
                ("second", datetime!(2024-02-01 0:00 UTC)),
            ] {
                comments::create_comment(
                    txn,
                    CommentCreate::new(post.id, author.id, text).created_at(at),
                )
                .await?;
            }

            let texts: Vec<String> = comments::list_comments_for_post(txn, post.id)
                .await?
                .into_iter()
                .map(|c| c.text)
                .collect();
            assert_eq!(texts, vec!["third", "second", "first"]);

            let mine = comments::list_comments_by_author(txn, author.id).await?;
            assert_eq!(mine.len(), 3);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_comments_order_across_offsets_and_fractions() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "nightowl").await?;
            let group = seed_group(txn, "late", author.id).await?;
            let post = seed_post(txn, group.id, author.id).await?;

            for (text, at) in [
                ("whole", datetime!(2024-06-01 12:00:00 UTC)),
                ("tenth", datetime!(2024-06-01 12:00:00.1 UTC)),
                ("west", datetime!(2024-06-01 07:30 -5)),
            ] {
                comments::create_comment(
                    txn,
                    CommentCreate::new(post.id, author.id, text).created_at(at),
                )
                .await?;
            }

            let texts: Vec<String> = comments::list_comments_for_post(txn, post.id)
                .await?
                .into_iter()
                .map(|c| c.text)
                .collect();
            assert_eq!(texts, vec!["west", "tenth", "whole"]);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_update_and_delete_comment() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "typo").await?;
            let group = seed_group(txn, "errata", author.id).await?;
            let post = seed_post(txn, group.id, author.id).await?;
            let comment =
                comments::create_comment(txn, CommentCreate::new(post.id, author.id, "teh"))
                    .await?;

            tokio::time::sleep(Duration::from_millis(20)).await;
            let fixed = comments::update_comment(txn, comment.id, "the").await?;
            assert_eq!(fixed.text, "the");
            assert_eq!(fixed.created_at, comment.created_at);
            assert!(fixed.edited_at > comment.edited_at);

            comments::delete_comment(txn, comment.id).await?;
            assert_eq!(comments::find_comment_by_id(txn, comment.id).await?, None);

            let err = comments::update_comment(txn, comment.id, "again")
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Comment, _)));

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_comment_requires_post() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "ghost").await?;
            let err = comments::create_comment(txn, CommentCreate::new(5150, author.id, "hi"))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::ForeignKey, _)
            ));

            Ok::<_, AppError>(())
        })
    })
    .await
}
