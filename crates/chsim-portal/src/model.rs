//! Records exchanged with the backend.

use serde::{Deserialize, Serialize};

/// Email/password pair submitted by the landing page form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// An authenticated operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Announcement submitted from the kernel page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// A row of the `news` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub image_url: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}
