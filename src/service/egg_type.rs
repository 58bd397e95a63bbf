//! Egg-type service

use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::egg_type::{EggType, EggTypeInput};

fn validate_fields(input: &EggTypeInput) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: EggTypeInput) -> AppResult<EggType> {
    validate_fields(&input)?;
    if db::egg_types::name_taken(pool, input.name.trim(), None).await? {
        return Err(AppError::validation("Name already exists"));
    }
    Ok(db::egg_types::insert(pool, &input).await?)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<EggType> {
    db::egg_types::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("TypeEgg not found"))
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<EggType>> {
    Ok(db::egg_types::list(pool).await?)
}

pub async fn update(pool: &PgPool, id: i64, input: EggTypeInput) -> AppResult<EggType> {
    validate_fields(&input)?;
    if db::egg_types::name_taken(pool, input.name.trim(), Some(id)).await? {
        return Err(AppError::validation("Name already exists"));
    }
    db::egg_types::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("TypeEgg not found"))
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::egg_types::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("TypeEgg not found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let err = validate_fields(&EggTypeInput { name: "\t".into() }).unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }
}
