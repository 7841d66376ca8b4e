//! ON DELETE CASCADE behaviour across the schema.

use agora::db::txn::with_txn;
use agora::entities::ItemType;
use agora::error::AppError;
use agora::repos::comments::{self, CommentCreate};
use agora::repos::{baskets, groups, items, posts, profiles, users};

use crate::support::build_test_state;
use crate::support::factory::{seed_basket, seed_group, seed_item, seed_post, seed_profile, seed_user};

#[tokio::test]
async fn test_deleting_group_removes_posts_and_comments() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let author = seed_user(txn, "poster").await?;
            let doomed = seed_group(txn, "doomed", author.id).await?;
            let kept = seed_group(txn, "kept", author.id).await?;
            let post = seed_post(txn, doomed.id, author.id).await?;
            let survivor = seed_post(txn, kept.id, author.id).await?;
            let comment =
                comments::create_comment(txn, CommentCreate::new(post.id, author.id, "bye"))
                    .await?;
            groups::subscribe(txn, doomed.id, author.id).await?;

            groups::delete_group(txn, doomed.id).await?;

            assert!(posts::list_posts_in_group(txn, doomed.id).await?.is_empty());
            assert_eq!(posts::find_post_by_id(txn, post.id).await?, None);
            assert_eq!(comments::find_comment_by_id(txn, comment.id).await?, None);
            assert!(!groups::is_subscribed(txn, doomed.id, author.id).await?);
            assert!(posts::find_post_by_id(txn, survivor.id).await?.is_some());

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_deleting_user_removes_everything_they_own() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let leaver = seed_user(txn, "leaver").await?;
            let stayer = seed_user(txn, "stayer").await?;
            let profile = seed_profile(txn, leaver.id).await?;
            let basket = baskets::create_basket(txn, profile.id).await?;

            let own_group = seed_group(txn, "mine", leaver.id).await?;
            let shared = seed_group(txn, "shared", stayer.id).await?;
            groups::subscribe(txn, shared.id, leaver.id).await?;

            let own_post = seed_post(txn, shared.id, leaver.id).await?;
            let other_post = seed_post(txn, shared.id, stayer.id).await?;
            let comment = comments::create_comment(
                txn,
                CommentCreate::new(other_post.id, leaver.id, "hi"),
            )
            .await?;

            users::delete_user(txn, leaver.id).await?;

            assert_eq!(profiles::find_profile_by_id(txn, profile.id).await?, None);
            assert_eq!(baskets::find_basket_by_id(txn, basket.id).await?, None);
            assert_eq!(groups::find_group_by_id(txn, own_group.id).await?, None);
            assert!(groups::list_subscribers(txn, shared.id).await?.is_empty());
            assert_eq!(posts::find_post_by_id(txn, own_post.id).await?, None);
            assert!(posts::list_posts_by_author(txn, leaver.id).await?.is_empty());
            assert_eq!(comments::find_comment_by_id(txn, comment.id).await?, None);

            // other people's content stays
            assert!(posts::find_post_by_id(txn, other_post.id).await?.is_some());
            assert!(groups::find_group_by_id(txn, shared.id).await?.is_some());

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_deleting_basket_or_item_removes_entries() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let basket = seed_basket(txn, "cart").await?;
            let other = seed_basket(txn, "cart2").await?;
            let chair = seed_item(txn, "Chair", ItemType::Furniture).await?;
            let radio = seed_item(txn, "Radio", ItemType::Electronics).await?;

            let e1 = baskets::add_item(txn, basket.id, chair.id, 2).await?;
            let e2 = baskets::add_item(txn, basket.id, radio.id, 1).await?;
            let kept = baskets::add_item(txn, other.id, chair.id, 5).await?;
            let radio_elsewhere = baskets::add_item(txn, other.id, radio.id, 1).await?;

            baskets::delete_basket(txn, basket.id).await?;
            assert_eq!(baskets::find_entry_by_id(txn, e1.id).await?, None);
            assert_eq!(baskets::find_entry_by_id(txn, e2.id).await?, None);
            // items outlive the basket
            assert!(items::find_item_by_id(txn, chair.id).await?.is_some());

            items::delete_item(txn, radio.id).await?;
            assert_eq!(
                baskets::find_entry_by_id(txn, radio_elsewhere.id).await?,
                None
            );
            assert_eq!(baskets::list_entries(txn, other.id).await?, vec![kept]);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn test_deleting_profile_removes_basket_not_user() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn, "keeper").await?;
            let profile = seed_profile(txn, user.id).await?;
            let basket = baskets::create_basket(txn, profile.id).await?;

            profiles::delete_profile(txn, profile.id).await?;

            assert_eq!(baskets::find_basket_by_id(txn, basket.id).await?, None);
            assert!(users::find_user_by_id(txn, user.id).await?.is_some());

            Ok::<_, AppError>(())
        })
    })
    .await
}
