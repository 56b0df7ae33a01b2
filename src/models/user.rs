//! User model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// User account stored in the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Generated user ID (also used as document ID)
    pub id: String,
    pub name: String,
    /// Normalized (trimmed, lowercase) email address
    pub email: String,
    /// bcrypt digest of the password
    pub password_hash: String,
    /// Profile image reference
    #[serde(default)]
    pub img: Option<String>,
    /// When the account was created (ISO 8601)
    pub created_at: String,
}

/// Public view of a user returned by the API. Never carries the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub img: Option<String>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            img: user.img,
            created_at: user.created_at,
        }
    }
}

/// Normalize an email address for lookup and storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
