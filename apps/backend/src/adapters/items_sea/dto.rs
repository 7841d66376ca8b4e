//! DTOs for items_sea adapter.

use time::OffsetDateTime;

use crate::entities::items::ItemType;

#[derive(Debug, Clone)]
pub struct ItemCreate {
    pub name: String,
    /// `None` stores the default type.
    pub item_type: Option<ItemType>,
    pub created_at: Option<OffsetDateTime>,
}

impl ItemCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_type: None,
            created_at: None,
        }
    }

    pub fn with_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn created_at(mut self, at: OffsetDateTime) -> Self {
        self.created_at = Some(at);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ItemUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub item_type: Option<ItemType>,
}

impl ItemUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            item_type: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }
}
