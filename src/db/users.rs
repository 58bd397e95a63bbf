//! User database operations, including the user↔role join table

use sqlx::PgPool;

use crate::models::role::Role;
use crate::models::user::{User, UserCreate, UserUpdate};

/// Unique user columns checked by the service layer before a write.
#[derive(Debug, Clone, Copy)]
pub enum UniqueField {
    Email,
    Username,
    Address,
    Phone,
}

impl UniqueField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
            Self::Address => "address",
            Self::Phone => "phone_number",
        }
    }

    /// Name used in duplicate-field error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Username => "Username",
            Self::Address => "Address",
            Self::Phone => "Phone number",
        }
    }
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users ORDER BY id").fetch_all(pool).await
}

pub async fn list_by_role(pool: &PgPool, role_id: i64) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT u.* FROM users u
         JOIN user_roles ur ON ur.user_id = u.id
         WHERE ur.role_id = $1
         ORDER BY u.id",
    )
    .bind(role_id)
    .fetch_all(pool)
    .await
}

/// True when another row already holds `value` in the given unique column.
/// `exclude_id` lets an update keep the row's own value.
pub async fn field_taken(
    pool: &PgPool,
    field: UniqueField,
    value: &str,
    exclude_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM users WHERE {} = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        field.column()
    );
    sqlx::query_scalar(&sql)
        .bind(value)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
}

pub async fn roles_of(pool: &PgPool, user_id: i64) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as(
        "SELECT r.id, r.name FROM roles r
         JOIN user_roles ur ON ur.role_id = r.id
         WHERE ur.user_id = $1
         ORDER BY r.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Count of existing roles among the given ids (duplicates collapsed).
pub async fn count_existing_roles(pool: &PgPool, role_ids: &[i64]) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM roles WHERE id = ANY($1)")
        .bind(role_ids)
        .fetch_one(pool)
        .await
}

/// Insert the user row plus its role assignments in one transaction.
/// `hashed_password` is the argon2 hash, never the plaintext.
pub async fn insert(
    pool: &PgPool,
    data: &UserCreate,
    hashed_password: &str,
) -> Result<User, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (name, phone_number, email, username, password, address, enabled)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(data.name.trim())
    .bind(data.phone_number.trim())
    .bind(data.email.trim())
    .bind(data.username.trim())
    .bind(hashed_password)
    .bind(data.address.trim())
    .bind(data.enabled)
    .fetch_one(&mut *tx)
    .await?;

    for role_id in &data.role_ids {
        sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(user.id)
            .bind(role_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(user)
}

/// Apply the explicit mutable field list and replace role assignments
/// wholesale, in one transaction.
pub async fn update(pool: &PgPool, id: i64, data: &UserUpdate) -> Result<Option<User>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let user: Option<User> = sqlx::query_as(
        "UPDATE users SET
             name = $1, phone_number = $2, email = $3,
             username = $4, address = $5, enabled = $6
         WHERE id = $7
         RETURNING *",
    )
    .bind(data.name.trim())
    .bind(data.phone_number.trim())
    .bind(data.email.trim())
    .bind(data.username.trim())
    .bind(data.address.trim())
    .bind(data.enabled)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(user) = user else {
        tx.rollback().await?;
        return Ok(None);
    };

    sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
        .bind(user.id)
        .execute(&mut *tx)
        .await?;
    for role_id in &data.role_ids {
        sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(user.id)
            .bind(role_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(Some(user))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}
