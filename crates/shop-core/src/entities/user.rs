//! User entity - a registered account

use chrono::{DateTime, Utc};

/// User account.
///
/// Registration creates the account unverified; following the emailed
/// verification link flips `is_verified`. The password hash is not part
/// of the entity and never leaves the repository layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub date_joined: DateTime<Utc>,
}
