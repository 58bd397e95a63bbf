//! Credential verification and token issuance

use sqlx::PgPool;

use crate::auth::jwt;
use crate::db;
use crate::error::{AppError, AppResult};
use crate::util::verify_password;

/// Verify username/password and issue an access token bound to the username.
/// Unknown users and bad passwords are indistinguishable to the caller.
pub async fn login(
    pool: &PgPool,
    jwt_secret: &str,
    ttl_minutes: i64,
    username: &str,
    password: &str,
) -> AppResult<String> {
    let user = db::users::find_by_username(pool, username)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

    if !verify_password(password, &user.password) {
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    jwt::create_token(&user.username, jwt_secret, ttl_minutes)
}
