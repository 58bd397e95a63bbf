//! Egg service

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::egg::{Egg, EggInput};

fn validate_fields(input: &EggInput, today: NaiveDate) -> AppResult<()> {
    if input.color.trim().is_empty() {
        return Err(AppError::validation("Color is required"));
    }
    if input.sell_price <= 0.0 {
        return Err(AppError::validation("Sell price must be greater than 0"));
    }
    if input.available_quantity <= 0 {
        return Err(AppError::validation("Quantity must be greater than 0"));
    }
    if input.expiration_date <= today {
        return Err(AppError::validation(
            "Expiration date must be in the future",
        ));
    }
    Ok(())
}

async fn check_references(pool: &PgPool, input: &EggInput) -> AppResult<()> {
    if db::suppliers::find_by_id(pool, input.supplier_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Supplier not found"));
    }
    if db::egg_types::find_by_id(pool, input.type_egg_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("TypeEgg not found"));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: EggInput) -> AppResult<Egg> {
    validate_fields(&input, Utc::now().date_naive())?;
    check_references(pool, &input).await?;
    Ok(db::eggs::insert(pool, &input).await?)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Egg> {
    db::eggs::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Egg not found"))
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Egg>> {
    Ok(db::eggs::list(pool).await?)
}

pub async fn list_by_type(pool: &PgPool, type_egg_id: i64) -> AppResult<Vec<Egg>> {
    Ok(db::eggs::list_by_type(pool, type_egg_id).await?)
}

/// Count of egg rows, not a sum of quantities. Historical behavior of the
/// "total quantity" endpoint; kept until business intent says otherwise.
pub async fn total_count(pool: &PgPool) -> AppResult<i64> {
    let count = db::eggs::count(pool).await?;
    if count == 0 {
        return Err(AppError::not_found("No eggs found"));
    }
    Ok(count)
}

pub async fn update(pool: &PgPool, id: i64, input: EggInput) -> AppResult<Egg> {
    db::eggs::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Egg not found"))?;
    validate_fields(&input, Utc::now().date_naive())?;
    check_references(pool, &input).await?;
    db::eggs::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Egg not found"))
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::eggs::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Egg not found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(expiration: NaiveDate) -> EggInput {
        EggInput {
            available_quantity: 30,
            entry_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            expiration_date: expiration,
            entry_price: 0.3,
            sell_price: 0.5,
            color: "white".into(),
            type_egg_id: 1,
            supplier_id: 1,
        }
    }

    const TODAY: fn() -> NaiveDate = || NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();

    #[test]
    fn future_expiration_is_required() {
        // same day counts as expired
        let err = validate_fields(&input(TODAY()), TODAY()).unwrap_err();
        assert_eq!(err.to_string(), "Expiration date must be in the future");

        let tomorrow = TODAY().succ_opt().unwrap();
        assert!(validate_fields(&input(tomorrow), TODAY()).is_ok());
    }

    #[test]
    fn non_positive_numbers_are_rejected() {
        let mut bad = input(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        bad.sell_price = 0.0;
        let err = validate_fields(&bad, TODAY()).unwrap_err();
        assert_eq!(err.to_string(), "Sell price must be greater than 0");

        let mut bad = input(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        bad.available_quantity = -3;
        let err = validate_fields(&bad, TODAY()).unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than 0");
    }

    #[test]
    fn blank_color_is_rejected() {
        let mut bad = input(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        bad.color = "  ".into();
        let err = validate_fields(&bad, TODAY()).unwrap_err();
        assert_eq!(err.to_string(), "Color is required");
    }
}
