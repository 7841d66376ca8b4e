//! groups repo: ordering, admin filter, idempotent subscriptions.

use agora::db::txn::with_txn;
use agora::error::AppError;
use agora::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use agora::repos::groups::{self, GroupUpdate};

use crate::support::build_test_state;
use crate::support::factory::{seed_group, seed_user};

#[tokio::test]
async fn test_groups_list_by_name_descending() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let admin = seed_user(txn, "admin").await?;
            let other = seed_user(txn, "other").await?;
            seed_group(txn, "beta", admin.id).await?;
            seed_group(txn, "alpha", other.id).await?;
            seed_group(txn, "gamma", admin.id).await?;

            let names: Vec<String> = groups::list_groups(txn)
                .await?
                .iter()
                .map(|g| g.to_string())
                .collect();
            assert_eq!(names, vec!["gamma", "beta", "alpha"]);

            let admin_names: Vec<String> = groups::list_groups_by_admin(txn, admin.id)
                .await?
                .into_iter()
                .map(|g| g.name)
                .collect();
            assert_eq!(admin_names, vec!["gamma", "beta"]);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_subscribe_is_idempotent() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let admin = seed_user(txn, "owner").await?;
            let reader = seed_user(txn, "reader").await?;
            let group = seed_group(txn, "rustaceans", admin.id).await?;

            assert!(!groups::is_subscribed(txn, group.id, reader.id).await?);
            assert!(groups::subscribe(txn, group.id, reader.id).await?);
            assert!(!groups::subscribe(txn, group.id, reader.id).await?);
            assert!(groups::is_subscribed(txn, group.id, reader.id).await?);

            // the admin is not implicitly a subscriber
            let subscribers = groups::list_subscribers(txn, group.id).await?;
            assert_eq!(subscribers.len(), 1);
            assert_eq!(subscribers[0].id, reader.id);

            let joined = groups::list_user_groups(txn, reader.id).await?;
            assert_eq!(joined.len(), 1);
            assert_eq!(joined[0].id, group.id);

            assert!(groups::unsubscribe(txn, group.id, reader.id).await?);
            assert!(!groups::unsubscribe(txn, group.id, reader.id).await?);
            assert!(groups::list_subscribers(txn, group.id).await?.is_empty());

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_subscribe_unknown_group_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn, "lost").await?;
            let err = groups::subscribe(txn, 777, user.id).await.unwrap_err();
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
async fn test_update_and_delete_group() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let admin = seed_user(txn, "a").await?;
            let heir = seed_user(txn, "b").await?;
            let group = seed_group(txn, "old", admin.id).await?;

            let updated = groups::update_group(
                txn,
                GroupUpdate::new(group.id).with_name("new").with_admin(heir.id),
            )
            .await?;
            assert_eq!(updated.name, "new");
            assert_eq!(updated.admin_id, heir.id);

            groups::delete_group(txn, group.id).await?;
            assert_eq!(groups::find_group_by_id(txn, group.id).await?, None);

            let err = groups::update_group(txn, GroupUpdate::new(group.id).with_name("x"))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Group, _)));

            Ok::<_, AppError>(())
        })
    })
    .await
}
