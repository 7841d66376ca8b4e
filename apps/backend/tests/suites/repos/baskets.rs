//! baskets repo: one basket per profile, entries with counts, lines.

use agora::db::txn::with_txn;
use agora::entities::ItemType;
use agora::error::AppError;
use agora::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use agora::repos::baskets;

use crate::support::build_test_state;
use crate::support::factory::{seed_basket, seed_item, seed_profile, seed_user};

#[tokio::test]
async fn test_one_basket_per_profile() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn, "shopper").await?;
            let profile = seed_profile(txn, user.id).await?;
            let basket = baskets::create_basket(txn, profile.id).await?;
            assert_eq!(basket.profile_id, profile.id);

            let err = baskets::create_basket(txn, profile.id).await.unwrap_err();
            assert!(matches!(err, DomainError::Conflict(ConflictKind::BasketExists, _)));

            let found = baskets::find_basket_by_profile(txn, profile.id).await?;
            assert_eq!(found, Some(basket));

            let err = baskets::create_basket(txn, 8_675_309).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::ForeignKey, _)
            ));

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_counts_persist_unchanged() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let basket = seed_basket(txn, "counter").await?;
            let lamp = seed_item(txn, "Lamp", ItemType::Furniture).await?;
            let book = seed_item(txn, "Dune", ItemType::Books).await?;

            let lamps = baskets::add_item(txn, basket.id, lamp.id, 3).await?;
            let books = baskets::add_item(txn, basket.id, book.id, 0).await?;

            let entries = baskets::list_entries(txn, basket.id).await?;
            assert_eq!(entries, vec![lamps, books]);
            assert_eq!(entries[0].count, 3);
            assert_eq!(entries[1].count, 0);

            let bumped = baskets::set_item_count(txn, lamps.id, 12).await?;
            assert_eq!(bumped.count, 12);
            assert_eq!(
                baskets::find_entry_by_id(txn, lamps.id).await?.map(|e| e.count),
                Some(12)
            );

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_lines_and_items_in_basket() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let basket = seed_basket(txn, "lines").await?;
            let lego = seed_item(txn, "Lego", ItemType::Toys).await?;
            let dune = seed_item(txn, "Dune", ItemType::Books).await?;

            baskets::add_item(txn, basket.id, dune.id, 1).await?;
            baskets::add_item(txn, basket.id, lego.id, 2).await?;
            // same item again as a separate entry
            baskets::add_item(txn, basket.id, dune.id, 4).await?;

            let lines: Vec<String> = baskets::list_lines(txn, basket.id)
                .await?
                .iter()
                .map(|l| l.to_string())
                .collect();
            let id = basket.id;
            assert_eq!(
                lines,
                vec![
                    format!("{id} - Dune"),
                    format!("{id} - Lego"),
                    format!("{id} - Dune"),
                ]
            );

            let names: Vec<String> = baskets::list_items_in_basket(txn, basket.id)
                .await?
                .into_iter()
                .map(|i| i.name)
                .collect();
            assert_eq!(names, vec!["Lego", "Dune"]);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_entry_requires_item_and_basket() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let basket = seed_basket(txn, "strict").await?;
            let err = baskets::add_item(txn, basket.id, 404, 1).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::ForeignKey, _)
            ));

            let err = baskets::set_item_count(txn, 404, 1).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::NotFound(NotFoundKind::BasketEntry, _)
            ));

            let err = baskets::remove_entry(txn, 404).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::NotFound(NotFoundKind::BasketEntry, _)
            ));

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_remove_entry_and_delete_basket() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let basket = seed_basket(txn, "empty").await?;
            let item = seed_item(txn, "Mug", ItemType::Uncategorized).await?;
            let entry = baskets::add_item(txn, basket.id, item.id, 1).await?;

            baskets::remove_entry(txn, entry.id).await?;
            assert!(baskets::list_entries(txn, basket.id).await?.is_empty());

            baskets::delete_basket(txn, basket.id).await?;
            assert_eq!(baskets::find_basket_by_id(txn, basket.id).await?, None);

            let err = baskets::delete_basket(txn, basket.id).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Basket, _)));

            Ok::<_, AppError>(())
        })
    })
    .await
}
