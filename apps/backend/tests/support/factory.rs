//! Seed helpers. Each takes the transaction the test runs in.

use agora::entities::ItemType;
use agora::errors::domain::DomainError;
use agora::repos::baskets::{self, Basket};
use agora::repos::groups::{self, Group, GroupCreate};
use agora::repos::items::{self, Item, ItemCreate};
use agora::repos::posts::{self, Post, PostCreate};
use agora::repos::profiles::{self, Profile, ProfileCreate};
use agora::repos::users::{self, User, UserCreate};
use backend_test_support::unique_helpers::{unique_email, unique_str, unique_username};
use sea_orm::DatabaseTransaction;
use time::macros::date;

pub async fn seed_user(txn: &DatabaseTransaction, prefix: &str) -> Result<User, DomainError> {
    users::create_user(
        txn,
        UserCreate::new(unique_username(prefix), date!(1990 - 06 - 15))
            .with_email(unique_email(prefix)),
    )
    .await
}

pub async fn seed_profile(txn: &DatabaseTransaction, user_id: i64) -> Result<Profile, DomainError> {
    profiles::create_profile(txn, ProfileCreate::new(user_id)).await
}

pub async fn seed_group(
    txn: &DatabaseTransaction,
    name: &str,
    admin_id: i64,
) -> Result<Group, DomainError> {
    groups::create_group(txn, GroupCreate::new(name, admin_id)).await
}

pub async fn seed_post(
    txn: &DatabaseTransaction,
    group_id: i64,
    author_id: i64,
) -> Result<Post, DomainError> {
    posts::create_post(txn, PostCreate::new(group_id, author_id, unique_str("post"))).await
}

pub async fn seed_item(
    txn: &DatabaseTransaction,
    name: &str,
    item_type: ItemType,
) -> Result<Item, DomainError> {
    items::create_item(txn, ItemCreate::new(name).with_type(item_type)).await
}

/// User -> profile -> basket in one go.
pub async fn seed_basket(txn: &DatabaseTransaction, prefix: &str) -> Result<Basket, DomainError> {
    let user = seed_user(txn, prefix).await?;
    let profile = seed_profile(txn, user.id).await?;
    baskets::create_basket(txn, profile.id).await
}
