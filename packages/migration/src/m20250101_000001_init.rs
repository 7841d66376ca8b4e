use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Password,
    FirstName,
    LastName,
    Email,
    IsStaff,
    IsActive,
    IsSuperuser,
    LastLogin,
    DateJoined,
    BirthDate,
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    UserId,
    Description,
    Avatar,
}

#[derive(Iden)]
enum Groups {
    Table,
    Id,
    Name,
    AdminId,
}

#[derive(Iden)]
enum GroupSubscribers {
    Table,
    GroupId,
    UserId,
}

#[derive(Iden)]
enum Posts {
    Table,
    Id,
    Title,
    Text,
    CreatedAt,
    EditedAt,
    GroupId,
    AuthorId,
    Image,
}

#[derive(Iden)]
enum Comments {
    Table,
    Id,
    Text,
    CreatedAt,
    EditedAt,
    AuthorId,
    PostId,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    Name,
    CreatedAt,
    Type,
}

#[derive(Iden)]
enum Baskets {
    Table,
    Id,
    ProfileId,
}

#[derive(Iden)]
enum ItemsInBasket {
    Table,
    Id,
    Count,
    BasketId,
    ItemId,
}

fn id_col<T: IntoIden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_col(Users::Id))
                    .col(ColumnDef::new(Users::Username).string_len(150).not_null())
                    .col(ColumnDef::new(Users::Password).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Users::FirstName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::LastName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(254)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::LastLogin)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Users::DateJoined)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::BirthDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_username_unique")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // profiles (one per user)
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(id_col(Profiles::Id))
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Profiles::Avatar).string_len(100).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user_id")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // groups
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(id_col(Groups::Id))
                    .col(ColumnDef::new(Groups::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Groups::AdminId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_groups_admin_id")
                            .from(Groups::Table, Groups::AdminId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_groups_admin_id")
                    .table(Groups::Table)
                    .col(Groups::AdminId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // group_subscribers (many-to-many users <-> groups)
        manager
            .create_table(
                Table::create()
                    .table(GroupSubscribers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroupSubscribers::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GroupSubscribers::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_group_subscribers")
                            .col(GroupSubscribers::GroupId)
                            .col(GroupSubscribers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_subscribers_group_id")
                            .from(GroupSubscribers::Table, GroupSubscribers::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_subscribers_user_id")
                            .from(GroupSubscribers::Table, GroupSubscribers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_group_subscribers_user_id")
                    .table(GroupSubscribers::Table)
                    .col(GroupSubscribers::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // posts
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(id_col(Posts::Id))
                    .col(ColumnDef::new(Posts::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Posts::Text).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Posts::EditedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Posts::GroupId).big_integer().not_null())
                    .col(ColumnDef::new(Posts::AuthorId).big_integer().not_null())
                    .col(ColumnDef::new(Posts::Image).string_len(100).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_group_id")
                            .from(Posts::Table, Posts::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_author_id")
                            .from(Posts::Table, Posts::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Matches the default listing order
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_created_at_title")
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .col(Posts::Title)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // comments
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(id_col(Comments::Id))
                    .col(ColumnDef::new(Comments::Text).text().not_null())
                    .col(
                        ColumnDef::new(Comments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Comments::EditedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Comments::AuthorId).big_integer().not_null())
                    .col(ColumnDef::new(Comments::PostId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_author_id")
                            .from(Comments::Table, Comments::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_post_id")
                            .from(Comments::Table, Comments::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_post_id")
                    .table(Comments::Table)
                    .col(Comments::PostId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // items
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(id_col(Items::Id))
                    .col(ColumnDef::new(Items::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Items::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::Type)
                            .string_len(255)
                            .not_null()
                            .default("default"),
                    )
                    .to_owned(),
            )
            .await?;

        // baskets (one per profile)
        manager
            .create_table(
                Table::create()
                    .table(Baskets::Table)
                    .if_not_exists()
                    .col(id_col(Baskets::Id))
                    .col(
                        ColumnDef::new(Baskets::ProfileId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_baskets_profile_id")
                            .from(Baskets::Table, Baskets::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // items_in_basket (basket <-> item with quantity)
        manager
            .create_table(
                Table::create()
                    .table(ItemsInBasket::Table)
                    .if_not_exists()
                    .col(id_col(ItemsInBasket::Id))
                    .col(ColumnDef::new(ItemsInBasket::Count).integer().not_null())
                    .col(
                        ColumnDef::new(ItemsInBasket::BasketId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ItemsInBasket::ItemId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_items_in_basket_basket_id")
                            .from(ItemsInBasket::Table, ItemsInBasket::BasketId)
                            .to(Baskets::Table, Baskets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_items_in_basket_item_id")
                            .from(ItemsInBasket::Table, ItemsInBasket::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_in_basket_basket_id")
                    .table(ItemsInBasket::Table)
                    .col(ItemsInBasket::BasketId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first
        manager
            .drop_table(Table::drop().table(ItemsInBasket::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Baskets::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Items::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(GroupSubscribers::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
