use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[sea_orm(column_name = "first_name")]
    pub first_name: String,
    #[sea_orm(column_name = "last_name")]
    pub last_name: String,
    pub email: String,
    #[sea_orm(column_name = "is_staff")]
    pub is_staff: bool,
    #[sea_orm(column_name = "is_active")]
    pub is_active: bool,
    #[sea_orm(column_name = "is_superuser")]
    pub is_superuser: bool,
    #[sea_orm(column_name = "last_login")]
    pub last_login: Option<OffsetDateTime>,
    #[sea_orm(column_name = "date_joined")]
    pub date_joined: OffsetDateTime,
    #[sea_orm(column_name = "birth_date")]
    pub birth_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Profile,
    /// Groups whose `admin_id` points here
    AdministeredGroups,
    Subscriptions,
    Posts,
    Comments,
}

// Written out by hand: `groups` relates back to users through the subscriber
// table, so a derived has_many would join on the wrong columns.
impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Profile => super::profiles::Relation::User.def().rev(),
            Self::AdministeredGroups => super::groups::Relation::Admin.def().rev(),
            Self::Subscriptions => super::group_subscribers::Relation::User.def().rev(),
            Self::Posts => super::posts::Relation::Author.def().rev(),
            Self::Comments => super::comments::Relation::Author.def().rev(),
        }
    }
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

/// Groups the user is subscribed to (not the ones they administer).
impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_subscribers::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_subscribers::Relation::User.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.date_joined.is_not_set() {
            self.date_joined = Set(OffsetDateTime::now_utc());
        }
        Ok(self)
    }
}
