//! User account models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account
///
/// Accounts exist for demo purposes only; nothing hashes the password
/// and no endpoint authenticates against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// Input for creating a user account
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
