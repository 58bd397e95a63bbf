//! User service: signup, admin-gated reads and mutations

use sqlx::PgPool;
use validator::ValidateEmail;

use crate::db;
use crate::db::users::UniqueField;
use crate::error::{AppError, AppResult};
use crate::models::user::{UserCreate, UserResponse, UserUpdate};
use crate::util::hash_password;

/// Phone pattern: optional leading `+`, then 10–15 digits/spaces/hyphens.
fn valid_phone(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let len = rest.chars().count();
    (10..=15).contains(&len) && rest.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

fn validate_fields(
    name: &str,
    phone_number: &str,
    email: &str,
    username: &str,
    address: &str,
) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if username.trim().is_empty() {
        return Err(AppError::validation("Username is required"));
    }
    if address.trim().is_empty() {
        return Err(AppError::validation("Address is required"));
    }
    if !valid_phone(phone_number.trim()) {
        return Err(AppError::validation("Invalid phone number"));
    }
    if !email.trim().validate_email() {
        return Err(AppError::validation("Invalid email address"));
    }
    Ok(())
}

/// All referenced roles must exist; duplicates in the id list are collapsed.
async fn check_roles_exist(pool: &PgPool, role_ids: &[i64]) -> AppResult<()> {
    if role_ids.is_empty() {
        return Err(AppError::validation(
            "User must have at least one role assigned",
        ));
    }
    let mut distinct = role_ids.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let existing = db::users::count_existing_roles(pool, &distinct).await?;
    if existing != distinct.len() as i64 {
        return Err(AppError::not_found(
            "One or more specified roles do not exist",
        ));
    }
    Ok(())
}

async fn check_unique_fields(
    pool: &PgPool,
    email: &str,
    username: &str,
    address: &str,
    phone_number: &str,
    exclude_id: Option<i64>,
) -> AppResult<()> {
    let checks = [
        (UniqueField::Email, email),
        (UniqueField::Username, username),
        (UniqueField::Address, address),
        (UniqueField::Phone, phone_number),
    ];
    for (field, value) in checks {
        if db::users::field_taken(pool, field, value.trim(), exclude_id).await? {
            return Err(AppError::validation(format!(
                "{} is already registered for another user",
                field.label()
            )));
        }
    }
    Ok(())
}

async fn with_roles(pool: &PgPool, user: crate::models::user::User) -> AppResult<UserResponse> {
    let roles = db::users::roles_of(pool, user.id).await?;
    Ok(UserResponse::from_row(user, roles))
}

pub async fn create(pool: &PgPool, input: UserCreate) -> AppResult<UserResponse> {
    validate_fields(
        &input.name,
        &input.phone_number,
        &input.email,
        &input.username,
        &input.address,
    )?;
    check_roles_exist(pool, &input.role_ids).await?;
    check_unique_fields(
        pool,
        &input.email,
        &input.username,
        &input.address,
        &input.phone_number,
        None,
    )
    .await?;

    let hashed = hash_password(&input.password).map_err(|e| {
        tracing::error!("password hashing failed: {e}");
        AppError::Internal
    })?;

    let user = db::users::insert(pool, &input, &hashed).await?;
    with_roles(pool, user).await
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<UserResponse> {
    let user = db::users::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    with_roles(pool, user).await
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<UserResponse>> {
    let users = db::users::list(pool).await?;
    let mut out = Vec::with_capacity(users.len());
    for user in users {
        out.push(with_roles(pool, user).await?);
    }
    Ok(out)
}

pub async fn list_by_role(pool: &PgPool, role_id: i64) -> AppResult<Vec<UserResponse>> {
    let users = db::users::list_by_role(pool, role_id).await?;
    let mut out = Vec::with_capacity(users.len());
    for user in users {
        out.push(with_roles(pool, user).await?);
    }
    Ok(out)
}

pub async fn update(pool: &PgPool, id: i64, input: UserUpdate) -> AppResult<UserResponse> {
    db::users::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    validate_fields(
        &input.name,
        &input.phone_number,
        &input.email,
        &input.username,
        &input.address,
    )?;
    check_roles_exist(pool, &input.role_ids).await?;
    check_unique_fields(
        pool,
        &input.email,
        &input.username,
        &input.address,
        &input.phone_number,
        Some(id),
    )
    .await?;

    let user = db::users::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    with_roles(pool, user).await
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::users::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("User not found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_plain_and_prefixed_numbers() {
        assert!(valid_phone("3001234567"));
        assert!(valid_phone("+57 300 123 4567"));
        assert!(valid_phone("300-123-4567"));
    }

    #[test]
    fn phone_rejects_bad_shapes() {
        assert!(!valid_phone("12345"));
        assert!(!valid_phone("1234567890123456"));
        assert!(!valid_phone("30012345ab"));
        assert!(!valid_phone(""));
    }

    #[test]
    fn blank_required_fields_are_rejected_in_order() {
        let err = validate_fields(" ", "3001234567", "a@b.com", "ana", "Calle 1").unwrap_err();
        assert_eq!(err.to_string(), "Name is required");

        let err = validate_fields("Ana", "3001234567", "a@b.com", "", "Calle 1").unwrap_err();
        assert_eq!(err.to_string(), "Username is required");

        let err = validate_fields("Ana", "3001234567", "a@b.com", "ana", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Address is required");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = validate_fields("Ana", "3001234567", "not-an-email", "ana", "Calle 1")
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email address");
        assert!(validate_fields("Ana", "3001234567", "ana@example.com", "ana", "Calle 1").is_ok());
    }
}
