use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::{Iterable, Set};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::domain::{DomainError, ValidationKind};

/// Catalog category. Stored as its lowercase string value, so ordering by
/// this column is alphabetical on the stored value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(255))")]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    #[sea_orm(string_value = "default")]
    #[serde(rename = "default")]
    Uncategorized,
    #[sea_orm(string_value = "electronics")]
    Electronics,
    #[sea_orm(string_value = "clothes")]
    Clothes,
    #[sea_orm(string_value = "toys")]
    Toys,
    #[sea_orm(string_value = "books")]
    Books,
    #[sea_orm(string_value = "furniture")]
    Furniture,
}

impl ItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Uncategorized => "default",
            ItemType::Electronics => "electronics",
            ItemType::Clothes => "clothes",
            ItemType::Toys => "toys",
            ItemType::Books => "books",
            ItemType::Furniture => "furniture",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            ItemType::Uncategorized => "No type",
            ItemType::Electronics => "Electronics",
            ItemType::Clothes => "Clothes",
            ItemType::Toys => "Children's goods",
            ItemType::Books => "Books",
            ItemType::Furniture => "Furniture",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::iter().find(|t| t.as_str() == s).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidChoice,
                format!("Unknown item type: {s}"),
            )
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "type")]
    pub item_type: ItemType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::items_in_basket::Entity")]
    ItemsInBasket,
}

impl Related<super::items_in_basket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemsInBasket.def()
    }
}

/// Baskets holding this item, through `items_in_basket`.
impl Related<super::baskets::Entity> for Entity {
    fn to() -> RelationDef {
        super::items_in_basket::Relation::Basket.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::items_in_basket::Relation::Item.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(OffsetDateTime::now_utc());
        }
        Ok(self)
    }
}
