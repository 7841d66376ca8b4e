//! DTOs for comments_sea adapter.

use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub post_id: i64,
    pub author_id: i64,
    pub text: String,
    pub created_at: Option<OffsetDateTime>,
}

impl CommentCreate {
    pub fn new(post_id: i64, author_id: i64, text: impl Into<String>) -> Self {
        Self {
            post_id,
            author_id,
            text: text.into(),
            created_at: None,
        }
    }

    pub fn created_at(mut self, at: OffsetDateTime) -> Self {
        self.created_at = Some(at);
        self
    }
}
