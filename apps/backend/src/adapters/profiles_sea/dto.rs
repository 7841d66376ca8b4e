//! DTOs for profiles_sea adapter.

#[derive(Debug, Clone)]
pub struct ProfileCreate {
    pub user_id: i64,
    pub description: String,
    pub avatar: Option<String>,
}

impl ProfileCreate {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            description: String::new(),
            avatar: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Stored image reference, e.g. `avatars/me.png`.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: i64,
    pub description: Option<String>,
    /// Three-state: None = no change, Some(Some(path)) = set, Some(None) = clear.
    pub avatar: Option<Option<String>>,
}

impl ProfileUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            description: None,
            avatar: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(Some(avatar.into()));
        self
    }

    pub fn clear_avatar(mut self) -> Self {
        self.avatar = Some(None);
        self
    }
}
