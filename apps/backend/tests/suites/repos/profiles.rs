//! profiles repo: one profile per existing user, avatar references, card label.

use agora::db::txn::with_txn;
use agora::error::AppError;
use agora::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use agora::media::{upload_path, ImageKind};
use agora::repos::profiles::{self, ProfileCreate, ProfileUpdate};

use crate::support::build_test_state;
use crate::support::factory::{seed_profile, seed_user};

#[tokio::test]
async fn test_profile_requires_existing_user() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = profiles::create_profile(txn, ProfileCreate::new(999_999))
                .await
                .unwrap_err();
            assert!(
                matches!(err, DomainError::Validation(ValidationKind::ForeignKey, _)),
                "unexpected error: {err:?}"
            );

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_one_profile_per_user() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn, "solo").await?;
            let first = seed_profile(txn, user.id).await?;

            let err = profiles::create_profile(txn, ProfileCreate::new(user.id))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::Conflict(ConflictKind::ProfileExists, _)));

            let found = profiles::find_profile_by_user(txn, user.id).await?;
            assert_eq!(found, Some(first));

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_profile_card_and_avatar() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn, "pic").await?;
            let avatar = upload_path(ImageKind::Avatar, "me.png")?;
            let profile = profiles::create_profile(
                txn,
                ProfileCreate::new(user.id)
                    .with_description("hello")
                    .with_avatar(&avatar),
            )
            .await?;
            assert_eq!(profile.avatar.as_deref(), Some("avatars/me.png"));
            assert_eq!(profile.description, "hello");

            let card = profiles::find_profile_card(txn, profile.id)
                .await?
                .expect("card");
            assert_eq!(card.to_string(), user.account.username);

            let cleared =
                profiles::update_profile(txn, ProfileUpdate::new(profile.id).clear_avatar()).await?;
            assert_eq!(cleared.avatar, None);
            assert_eq!(cleared.description, "hello");

            let err = profiles::update_profile(
                txn,
                ProfileUpdate::new(profile.id).with_avatar("posts/me.png"),
            )
            .await
            .unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::InvalidImagePath, _)
            ));

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_delete_profile() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn, "gone").await?;
            let profile = seed_profile(txn, user.id).await?;

            profiles::delete_profile(txn, profile.id).await?;
            assert_eq!(profiles::find_profile_by_id(txn, profile.id).await?, None);

            let err = profiles::delete_profile(txn, profile.id).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Profile, _)));

            Ok::<_, AppError>(())
        })
    })
    .await
}
