use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items_in_basket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub count: i32,
    #[sea_orm(column_name = "basket_id")]
    pub basket_id: i64,
    #[sea_orm(column_name = "item_id")]
    pub item_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::baskets::Entity",
        from = "Column::BasketId",
        to = "super::baskets::Column::Id",
        on_delete = "Cascade"
    )]
    Basket,
    #[sea_orm(
        belongs_to = "super::items::Entity",
        from = "Column::ItemId",
        to = "super::items::Column::Id",
        on_delete = "Cascade"
    )]
    Item,
}

impl Related<super::baskets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Basket.def()
    }
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
