use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "admin_id")]
    pub admin_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AdminId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Admin,
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
    #[sea_orm(has_many = "super::group_subscribers::Entity")]
    Subscriptions,
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

/// Subscribers of the group; the admin is reached through `Relation::Admin`.
impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_subscribers::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_subscribers::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
