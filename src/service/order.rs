//! Order service

use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::order::{Order, OrderInput};
use crate::util::month_window;

fn validate_fields(input: &OrderInput) -> AppResult<()> {
    if input.total_price <= 0.0 {
        return Err(AppError::validation(
            "The total price has to be greater than 0",
        ));
    }
    if input.state.trim().is_empty() {
        return Err(AppError::validation("State is required"));
    }
    Ok(())
}

async fn check_user_exists(pool: &PgPool, user_id: i64) -> AppResult<()> {
    if db::users::find_by_id(pool, user_id).await?.is_none() {
        return Err(AppError::not_found("User not found"));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: OrderInput) -> AppResult<Order> {
    validate_fields(&input)?;
    check_user_exists(pool, input.user_id).await?;
    Ok(db::orders::insert(pool, &input).await?)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Order> {
    db::orders::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Order>> {
    Ok(db::orders::list(pool).await?)
}

/// Orders placed within the given calendar month,
/// `[first-of-month, first-of-next-month)`.
pub async fn list_by_month(pool: &PgPool, year: i32, month: u32) -> AppResult<Vec<Order>> {
    let (start, end) = month_window(year, month)?;
    Ok(db::orders::list_in_window(pool, start, end).await?)
}

pub async fn update(pool: &PgPool, id: i64, input: OrderInput) -> AppResult<Order> {
    db::orders::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;
    validate_fields(&input)?;
    check_user_exists(pool, input.user_id).await?;
    db::orders::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::orders::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Order not found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_total_is_rejected() {
        let err = validate_fields(&OrderInput {
            total_price: 0.0,
            state: "pending".into(),
            user_id: 1,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "The total price has to be greater than 0");
    }

    #[test]
    fn blank_state_is_rejected() {
        let err = validate_fields(&OrderInput {
            total_price: 120.0,
            state: "   ".into(),
            user_id: 1,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "State is required");
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate_fields(&OrderInput {
            total_price: 120.0,
            state: "pending".into(),
            user_id: 1,
        })
        .is_ok());
    }
}
