//! Payment service

use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::payment::{Payment, PaymentInput};
use crate::util::month_window;

fn validate_fields(input: &PaymentInput) -> AppResult<()> {
    if input.amount_paid <= 0.0 {
        return Err(AppError::validation(
            "The amount paid must be greater than 0",
        ));
    }
    if input.payment_method.trim().is_empty() {
        return Err(AppError::validation("Payment method is required"));
    }
    Ok(())
}

async fn check_references(pool: &PgPool, input: &PaymentInput) -> AppResult<()> {
    if db::users::find_by_id(pool, input.user_id).await?.is_none() {
        return Err(AppError::not_found("User not found"));
    }
    if db::bills::find_by_id(pool, input.bill_id).await?.is_none() {
        return Err(AppError::not_found("Bill not found"));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: PaymentInput) -> AppResult<Payment> {
    validate_fields(&input)?;
    check_references(pool, &input).await?;
    Ok(db::payments::insert(pool, &input).await?)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Payment> {
    db::payments::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Payment not found"))
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Payment>> {
    Ok(db::payments::list(pool).await?)
}

pub async fn update(pool: &PgPool, id: i64, input: PaymentInput) -> AppResult<Payment> {
    db::payments::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Payment not found"))?;
    validate_fields(&input)?;
    check_references(pool, &input).await?;
    db::payments::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Payment not found"))
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::payments::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Payment not found"));
    }
    Ok(())
}

pub async fn total_earnings(pool: &PgPool) -> AppResult<f64> {
    Ok(db::payments::total_earnings(pool).await?)
}

/// Earnings within the given calendar month,
/// `[first-of-month, first-of-next-month)`.
pub async fn total_earnings_by_month(pool: &PgPool, year: i32, month: u32) -> AppResult<f64> {
    let (start, end) = month_window(year, month)?;
    Ok(db::payments::total_earnings_in_window(pool, start, end).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_amount_is_rejected() {
        let err = validate_fields(&PaymentInput {
            amount_paid: 0.0,
            payment_method: "cash".into(),
            user_id: 1,
            bill_id: 1,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "The amount paid must be greater than 0");
    }

    #[test]
    fn blank_method_is_rejected() {
        let err = validate_fields(&PaymentInput {
            amount_paid: 50.0,
            payment_method: "  ".into(),
            user_id: 1,
            bill_id: 1,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Payment method is required");
    }
}
