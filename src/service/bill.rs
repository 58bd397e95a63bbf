//! Bill service, including the role-filtered monthly aggregates

use chrono::Utc;
use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::bill::{Bill, BillInput};
use crate::util::{current_month_full_span, current_month_to_date_span};

pub const CUSTOMER_ROLE: &str = "CUSTOMER";
pub const COMPANY_ROLES: &[&str] = &["EMPLOYEE", "ADMIN"];

fn validate_fields(input: &BillInput) -> AppResult<()> {
    if input.total_price <= 0.0 {
        return Err(AppError::validation(
            "Total price must be greater than zero",
        ));
    }
    Ok(())
}

async fn check_order_exists(pool: &PgPool, order_id: i64) -> AppResult<()> {
    if db::orders::find_by_id(pool, order_id).await?.is_none() {
        return Err(AppError::not_found(
            "Order with the given ID does not exist",
        ));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: BillInput) -> AppResult<Bill> {
    validate_fields(&input)?;
    check_order_exists(pool, input.order_id).await?;
    Ok(db::bills::insert(pool, &input).await?)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Bill> {
    db::bills::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Bill not found"))
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Bill>> {
    let bills = db::bills::list(pool).await?;
    if bills.is_empty() {
        return Err(AppError::not_found("No bills found"));
    }
    Ok(bills)
}

pub async fn update(pool: &PgPool, id: i64, input: BillInput) -> AppResult<Bill> {
    db::bills::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Bill not found"))?;
    validate_fields(&input)?;
    check_order_exists(pool, input.order_id).await?;
    db::bills::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Bill not found"))
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::bills::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Bill not found"));
    }
    Ok(())
}

/// Customer bills issued during the current month, over the whole-month
/// window `[day-1 00:00:00, last-day 23:59:59.999999]`.
pub async fn customer_bills_this_month(pool: &PgPool) -> AppResult<Vec<Bill>> {
    let (start, end) = current_month_full_span(Utc::now())?;
    Ok(db::bills::list_for_role_in_range(pool, CUSTOMER_ROLE, start, end).await?)
}

/// Customer with the most bills month-to-date; `None` when there are none.
pub async fn best_customer_of_month(pool: &PgPool) -> AppResult<Option<String>> {
    let (start, end) = current_month_to_date_span(Utc::now())?;
    Ok(db::bills::best_customer_in_range(pool, CUSTOMER_ROLE, start, end).await?)
}

/// All bills belonging to company users (EMPLOYEE or ADMIN).
pub async fn company_bills(pool: &PgPool) -> AppResult<Vec<Bill>> {
    let bills = db::bills::list_for_roles(pool, COMPANY_ROLES).await?;
    if bills.is_empty() {
        return Err(AppError::not_found("No bills found"));
    }
    Ok(bills)
}

/// All bills belonging to customers.
pub async fn customer_bills(pool: &PgPool) -> AppResult<Vec<Bill>> {
    let bills = db::bills::list_for_roles(pool, &[CUSTOMER_ROLE]).await?;
    if bills.is_empty() {
        return Err(AppError::not_found("No customer bills found"));
    }
    Ok(bills)
}

/// Month-to-date customer sales total; 0.0 when there are no bills.
pub async fn monthly_sales_total(pool: &PgPool) -> AppResult<f64> {
    let (start, end) = current_month_to_date_span(Utc::now())?;
    Ok(db::bills::sales_total_in_range(pool, CUSTOMER_ROLE, start, end).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_total_is_rejected() {
        let err = validate_fields(&BillInput {
            total_price: -5.0,
            paid: false,
            order_id: 1,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Total price must be greater than zero");

        assert!(validate_fields(&BillInput {
            total_price: 1000.0,
            paid: true,
            order_id: 1,
        })
        .is_ok());
    }
}
