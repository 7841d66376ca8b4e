//! DTOs for groups_sea adapter.

#[derive(Debug, Clone)]
pub struct GroupCreate {
    pub name: String,
    pub admin_id: i64,
}

impl GroupCreate {
    pub fn new(name: impl Into<String>, admin_id: i64) -> Self {
        Self {
            name: name.into(),
            admin_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub admin_id: Option<i64>,
}

impl GroupUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            admin_id: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Hand the group over to another user.
    pub fn with_admin(mut self, admin_id: i64) -> Self {
        self.admin_id = Some(admin_id);
        self
    }
}
