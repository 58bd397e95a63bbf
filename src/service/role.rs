//! Role service

use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::role::{Role, RoleInput};

fn validate_fields(input: &RoleInput) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: RoleInput) -> AppResult<Role> {
    validate_fields(&input)?;
    if db::roles::name_taken(pool, input.name.trim(), None).await? {
        return Err(AppError::validation("Name Role already exists"));
    }
    Ok(db::roles::insert(pool, &input).await?)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Role> {
    db::roles::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Role not found"))
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Role>> {
    Ok(db::roles::list(pool).await?)
}

pub async fn update(pool: &PgPool, id: i64, input: RoleInput) -> AppResult<Role> {
    validate_fields(&input)?;
    if db::roles::name_taken(pool, input.name.trim(), Some(id)).await? {
        return Err(AppError::validation("Name Role already exists"));
    }
    db::roles::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Role not found"))
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::roles::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Role not found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let err = validate_fields(&RoleInput { name: "  ".into() }).unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
        assert!(validate_fields(&RoleInput {
            name: "ADMIN".into()
        })
        .is_ok());
    }
}
