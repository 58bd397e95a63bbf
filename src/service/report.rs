//! Report service: report CRUD plus read-only cross-entity bill queries

use chrono::{Datelike, NaiveDate, Utc};
use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::bill::Bill;
use crate::models::report::{Report, ReportInput};
use crate::service::bill::{COMPANY_ROLES, CUSTOMER_ROLE};
use crate::util::first_of_month;

fn validate_fields(input: &ReportInput, today: NaiveDate) -> AppResult<()> {
    if input.date_report > today {
        return Err(AppError::validation("Report date cannot be in the future"));
    }
    if input.report_type.trim().is_empty() {
        return Err(AppError::validation("Type is required"));
    }
    if input.content.trim().is_empty() {
        return Err(AppError::validation("Content is required"));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: ReportInput) -> AppResult<Report> {
    validate_fields(&input, Utc::now().date_naive())?;
    Ok(db::reports::insert(pool, &input).await?)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Report> {
    db::reports::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Report not found"))
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Report>> {
    Ok(db::reports::list(pool).await?)
}

pub async fn update(pool: &PgPool, id: i64, input: ReportInput) -> AppResult<Report> {
    validate_fields(&input, Utc::now().date_naive())?;
    db::reports::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Report not found"))
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::reports::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Report not found"));
    }
    Ok(())
}

/// Bills whose order's user holds a staff role (EMPLOYEE or ADMIN).
pub async fn staff_bills(pool: &PgPool) -> AppResult<Vec<Bill>> {
    Ok(db::bills::list_for_roles(pool, COMPANY_ROLES).await?)
}

/// Bills whose order's user holds CUSTOMER.
pub async fn client_bills(pool: &PgPool) -> AppResult<Vec<Bill>> {
    Ok(db::bills::list_for_roles(pool, &[CUSTOMER_ROLE]).await?)
}

/// Total of client bills issued since the first instant of the current
/// month (open-ended, unlike the bill service's closed windows).
pub async fn client_bills_month_total(pool: &PgPool) -> AppResult<f64> {
    let now = Utc::now();
    let start = first_of_month(now.year(), now.month())?;
    Ok(db::bills::sales_total_since(pool, CUSTOMER_ROLE, start).await?)
}

/// Name of the client with the highest bill total this month.
pub async fn top_client_spender(pool: &PgPool) -> AppResult<String> {
    let now = Utc::now();
    let start = first_of_month(now.year(), now.month())?;
    db::bills::top_spender_since(pool, CUSTOMER_ROLE, start)
        .await?
        .ok_or_else(|| AppError::not_found("No client bills found this month"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date_report: NaiveDate) -> ReportInput {
        ReportInput {
            report_type: "sales".into(),
            date_report,
            content: "monthly summary".into(),
        }
    }

    const TODAY: fn() -> NaiveDate = || NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();

    #[test]
    fn future_report_date_is_rejected() {
        let tomorrow = TODAY().succ_opt().unwrap();
        let err = validate_fields(&input(tomorrow), TODAY()).unwrap_err();
        assert_eq!(err.to_string(), "Report date cannot be in the future");

        // today itself is allowed
        assert!(validate_fields(&input(TODAY()), TODAY()).is_ok());
    }

    #[test]
    fn blank_type_and_content_are_rejected() {
        let mut bad = input(TODAY());
        bad.report_type = " ".into();
        assert_eq!(
            validate_fields(&bad, TODAY()).unwrap_err().to_string(),
            "Type is required"
        );

        let mut bad = input(TODAY());
        bad.content = "".into();
        assert_eq!(
            validate_fields(&bad, TODAY()).unwrap_err().to_string(),
            "Content is required"
        );
    }
}
