//! posts repo: timestamps, ordering with title tiebreak, image references.

use std::time::Duration;

use agora::db::txn::with_txn;
use agora::error::AppError;
use agora::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use agora::repos::posts::{self, PostCreate, PostUpdate};
use time::macros::datetime;
use time::UtcOffset;

use crate::support::build_test_state;
use crate::support::factory::{seed_group, seed_post, seed_user};

#[tokio::test]
async fn test_create_post_stamps_times() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let before = time::OffsetDateTime::now_utc();
            let author = seed_user(txn, "writer").await?;
            let group = seed_group(txn, "blog", author.id).await?;

            let post = posts::create_post(
                txn,
                PostCreate::new(group.id, author.id, "Hello").with_text(""),
            )
            .await?;
            assert_eq!(post.to_string(), "Hello");
            assert_eq!(post.text, "");
            assert_eq!(post.image, None);
            assert!(post.created_at >= before);
            assert!(post.edited_at >= post.created_at);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_update_refreshes_edited_at_only() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "editor").await?;
            let group = seed_group(txn, "drafts", author.id).await?;
            let post = seed_post(txn, group.id, author.id).await?;

            tokio::time::sleep(Duration::from_millis(20)).await;
            let edited =
                posts::update_post(txn, PostUpdate::new(post.id).with_text("revised")).await?;

            assert_eq!(edited.text, "revised");
            assert_eq!(edited.created_at, post.created_at);
            assert!(edited.edited_at > post.edited_at);

            tokio::time::sleep(Duration::from_millis(20)).await;
            let again = posts::update_post(txn, PostUpdate::new(post.id)).await?;
            assert!(again.edited_at > edited.edited_at);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_posts_order_newest_first_then_title() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "orderer").await?;
            let group = seed_group(txn, "sorted", author.id).await?;
            let older = datetime!(2024-01-01 10:00 UTC);
            let newer = datetime!(2024-02-01 10:00 UTC);

            for (title, at) in [("b", newer), ("old", older), ("a", newer)] {
                posts::create_post(
                    txn,
                    PostCreate::new(group.id, author.id, title).created_at(at),
                )
                .await?;
            }

            let titles: Vec<String> = posts::list_posts(txn)
                .await?
                .into_iter()
                .map(|p| p.title)
                .collect();
            assert_eq!(titles, vec!["a", "b", "old"]);

            let in_group = posts::list_posts_in_group(txn, group.id).await?;
            assert_eq!(in_group.len(), 3);
            assert_eq!(in_group[0].created_at, newer);

            let by_author = posts::list_posts_by_author(txn, author.id).await?;
            assert_eq!(by_author.len(), 3);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_posts_order_by_instant_not_text() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "tz").await?;
            let group = seed_group(txn, "timezones", author.id).await?;

            // 11:00 at +02:00 is 09:00Z; a whole second sorts before its half
            for (title, at) in [
                ("east", datetime!(2024-01-01 11:00 +2)),
                ("utc", datetime!(2024-01-01 10:00 UTC)),
                ("half", datetime!(2024-01-01 10:00:00.5 UTC)),
            ] {
                let post = posts::create_post(
                    txn,
                    PostCreate::new(group.id, author.id, title).created_at(at),
                )
                .await?;
                assert_eq!(post.created_at, at);
                assert_eq!(post.created_at.offset(), UtcOffset::UTC);
            }

            let titles: Vec<String> = posts::list_posts_in_group(txn, group.id)
                .await?
                .into_iter()
                .map(|p| p.title)
                .collect();
            assert_eq!(titles, vec!["half", "utc", "east"]);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_post_image_and_missing_post() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "photog").await?;
            let group = seed_group(txn, "photos", author.id).await?;

            let post = posts::create_post(
                txn,
                PostCreate::new(group.id, author.id, "Sunset").with_image("posts/sunset.jpg"),
            )
            .await?;
            assert_eq!(post.image.as_deref(), Some("posts/sunset.jpg"));

            let err = posts::create_post(
                txn,
                PostCreate::new(group.id, author.id, "Bad").with_image("avatars/me.png"),
            )
            .await
            .unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::InvalidImagePath, _)
            ));

            let cleared = posts::update_post(txn, PostUpdate::new(post.id).clear_image()).await?;
            assert_eq!(cleared.image, None);

            posts::delete_post(txn, post.id).await?;
            let err = posts::update_post(txn, PostUpdate::new(post.id).with_title("x"))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Post, _)));

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_post_requires_group_and_author() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "orphan").await?;
            let err = posts::create_post(txn, PostCreate::new(31337, author.id, "nowhere"))
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
