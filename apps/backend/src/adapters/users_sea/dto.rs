//! DTOs for users_sea adapter.

use time::{Date, OffsetDateTime};

/// DTO for creating a new user.
///
/// Account fields default to empty strings, `is_active = true` and no
/// staff/superuser flags.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub birth_date: Date,
}

impl UserCreate {
    pub fn new(username: impl Into<String>, birth_date: Date) -> Self {
        Self {
            username: username.into(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            is_staff: false,
            is_active: true,
            is_superuser: false,
            birth_date,
        }
    }

    /// Stores an already-hashed password; nothing here hashes it.
    pub fn with_password(mut self, password_hash: impl Into<String>) -> Self {
        self.password = password_hash.into();
        self
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn staff(mut self, is_staff: bool) -> Self {
        self.is_staff = is_staff;
        self
    }

    pub fn superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = is_superuser;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: i64,
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
    pub birth_date: Option<Date>,
}

impl UserUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            password: None,
            first_name: None,
            last_name: None,
            email: None,
            is_staff: None,
            is_active: None,
            is_superuser: None,
            birth_date: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password_hash: impl Into<String>) -> Self {
        self.password = Some(password_hash.into());
        self
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_staff(mut self, is_staff: bool) -> Self {
        self.is_staff = Some(is_staff);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = Some(is_superuser);
        self
    }

    pub fn with_birth_date(mut self, birth_date: Date) -> Self {
        self.birth_date = Some(birth_date);
        self
    }
}

/// Login bookkeeping: only `last_login` moves.
#[derive(Debug, Clone, Copy)]
pub struct LoginRecord {
    pub user_id: i64,
    pub at: OffsetDateTime,
}

impl LoginRecord {
    pub fn now(user_id: i64) -> Self {
        Self {
            user_id,
            at: OffsetDateTime::now_utc(),
        }
    }
}
