//! SeaORM adapters, one module per table family.

use sea_orm::sea_query::{Alias, Func, SimpleExpr};
use sea_orm::{ColumnTrait, DbBackend, IntoSimpleExpr};

pub mod baskets_sea;
pub mod comments_sea;
pub mod groups_sea;
pub mod items_sea;
pub mod posts_sea;
pub mod profiles_sea;
pub mod users_sea;

/// Chronological sort key for a timestamp column.
///
/// SQLite stores timestamps as text, and text order breaks once fractions or
/// offsets differ, so SQLite compares julian day numbers instead.
pub(crate) fn timestamp_sort_key<C: ColumnTrait>(backend: DbBackend, column: C) -> SimpleExpr {
    match backend {
        DbBackend::Sqlite => Func::cust(Alias::new("julianday"))
            .arg(column.into_simple_expr())
            .into(),
        _ => column.into_simple_expr(),
    }
}
