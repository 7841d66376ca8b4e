//! DTOs for posts_sea adapter.

use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct PostCreate {
    pub group_id: i64,
    pub author_id: i64,
    pub title: String,
    pub text: String,
    pub image: Option<String>,
    /// Leave `None` to have the insert stamp it.
    pub created_at: Option<OffsetDateTime>,
}

impl PostCreate {
    pub fn new(group_id: i64, author_id: i64, title: impl Into<String>) -> Self {
        Self {
            group_id,
            author_id,
            title: title.into(),
            text: String::new(),
            image: None,
            created_at: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn created_at(mut self, at: OffsetDateTime) -> Self {
        self.created_at = Some(at);
        self
    }
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: i64,
    pub title: Option<String>,
    pub text: Option<String>,
    /// Three-state: None = no change, Some(Some(path)) = set, Some(None) = clear.
    pub image: Option<Option<String>>,
}

impl PostUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: None,
            text: None,
            image: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(Some(image.into()));
        self
    }

    pub fn clear_image(mut self) -> Self {
        self.image = Some(None);
        self
    }
}
