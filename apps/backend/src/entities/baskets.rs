use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "baskets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "profile_id", unique)]
    pub profile_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::ProfileId",
        to = "super::profiles::Column::Id",
        on_delete = "Cascade"
    )]
    Profile,
    #[sea_orm(has_many = "super::items_in_basket::Entity")]
    ItemsInBasket,
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::items_in_basket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemsInBasket.def()
    }
}

/// Items in the basket, only reachable through the association rows.
impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        super::items_in_basket::Relation::Item.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::items_in_basket::Relation::Basket.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
