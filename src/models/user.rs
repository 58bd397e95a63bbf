use serde::{Deserialize, Serialize};

use super::role::Role;

/// User row as stored. The password hash never leaves the server,
/// so the row struct is not serialized directly; see [`UserResponse`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub address: String,
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub username: String,
    pub address: String,
    pub enabled: bool,
    pub roles: Vec<Role>,
}

impl UserResponse {
    pub fn from_row(user: User, roles: Vec<Role>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            phone_number: user.phone_number,
            email: user.email,
            username: user.username,
            address: user.address,
            enabled: user.enabled,
            roles,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub address: String,
    pub enabled: bool,
    pub role_ids: Vec<i64>,
}

/// Mutable user fields. The password is deliberately absent: changing it
/// goes through the hashed-credential path, never a plain field copy.
#[derive(Debug, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub username: String,
    pub address: String,
    pub enabled: bool,
    pub role_ids: Vec<i64>,
}
