//! Profile repository functions for domain layer.

use std::fmt;

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::profiles_sea as profiles_adapter;
use crate::entities::profiles;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::media::{ensure_reference, ImageKind};

pub use profiles_adapter::{ProfileCreate, ProfileUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    pub avatar: Option<String>,
}

impl From<profiles::Model> for Profile {
    fn from(model: profiles::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            description: model.description,
            avatar: model.avatar,
        }
    }
}

/// Profile together with its owner's username; displays as the username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub profile: Profile,
    pub username: String,
}

impl fmt::Display for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

fn profile_not_found(profile_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Profile,
        format!("Profile {profile_id} not found"),
    )
}

/// Create the profile of a user. A second profile for the same user is a
/// `Conflict(ProfileExists)`; an unknown user is a foreign-key validation error.
pub async fn create_profile(
    txn: &DatabaseTransaction,
    dto: ProfileCreate,
) -> Result<Profile, DomainError> {
    if let Some(avatar) = &dto.avatar {
        ensure_reference(ImageKind::Avatar, avatar)?;
    }
    let profile = profiles_adapter::create_profile(txn, dto).await?;
    Ok(Profile::from(profile))
}

pub async fn find_profile_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Option<Profile>, DomainError> {
    let profile = profiles_adapter::find_by_id(conn, profile_id).await?;
    Ok(profile.map(Profile::from))
}

pub async fn find_profile_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<Profile>, DomainError> {
    let profile = profiles_adapter::find_by_user(conn, user_id).await?;
    Ok(profile.map(Profile::from))
}

pub async fn find_profile_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Option<ProfileCard>, DomainError> {
    let row = profiles_adapter::find_with_user(conn, profile_id).await?;
    Ok(row.map(|(profile, user)| ProfileCard {
        profile: Profile::from(profile),
        username: user.username,
    }))
}

pub async fn update_profile(
    txn: &DatabaseTransaction,
    dto: ProfileUpdate,
) -> Result<Profile, DomainError> {
    if let Some(Some(avatar)) = &dto.avatar {
        ensure_reference(ImageKind::Avatar, avatar)?;
    }
    let profile_id = dto.id;
    profiles_adapter::update_profile(txn, dto)
        .await?
        .map(Profile::from)
        .ok_or_else(|| profile_not_found(profile_id))
}

pub async fn delete_profile(txn: &DatabaseTransaction, profile_id: i64) -> Result<(), DomainError> {
    match profiles_adapter::delete_profile(txn, profile_id).await? {
        0 => Err(profile_not_found(profile_id)),
        _ => Ok(()),
    }
}
