use super::{email::Email, password::Password};

/// A stored user. The password hash stays inside the user store and is never
/// carried on this type.
#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: Email,
    pub created_at: i64,
}

/// Input for creating a user; the store hashes the password before persisting.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password: Password,
}

impl NewUser {
    pub fn new(name: String, email: Email, password: Password) -> Self {
        NewUser {
            name,
            email,
            password,
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub password: Option<Password>,
}
