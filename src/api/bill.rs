//! Bill routes, including the customer/company aggregate endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::bill::{Bill, BillInput};
use crate::service;
use crate::state::AppState;

use super::ApiResult;

pub async fn create_bill(
    State(state): State<AppState>,
    Json(input): Json<BillInput>,
) -> Result<(StatusCode, Json<Bill>), AppError> {
    let bill = service::bill::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(bill)))
}

pub async fn get_bill(
    State(state): State<AppState>,
    Path(bill_id): Path<i64>,
) -> ApiResult<Bill> {
    Ok(Json(service::bill::get(&state.pool, bill_id).await?))
}

pub async fn list_bills(State(state): State<AppState>) -> ApiResult<Vec<Bill>> {
    Ok(Json(service::bill::list(&state.pool).await?))
}

pub async fn update_bill(
    State(state): State<AppState>,
    Path(bill_id): Path<i64>,
    Json(input): Json<BillInput>,
) -> ApiResult<Bill> {
    Ok(Json(service::bill::update(&state.pool, bill_id, input).await?))
}

pub async fn delete_bill(
    State(state): State<AppState>,
    Path(bill_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::bill::delete(&state.pool, bill_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Bill deleted successfully"
    })))
}

/// Customer bills issued within the current calendar month
pub async fn customer_bills_this_month(State(state): State<AppState>) -> ApiResult<Vec<Bill>> {
    Ok(Json(service::bill::customer_bills_this_month(&state.pool).await?))
}

/// Name of the customer with the most bills so far this month, null when none
pub async fn best_customer(State(state): State<AppState>) -> ApiResult<Option<String>> {
    Ok(Json(service::bill::best_customer_of_month(&state.pool).await?))
}

pub async fn customer_bills(State(state): State<AppState>) -> ApiResult<Vec<Bill>> {
    Ok(Json(service::bill::customer_bills(&state.pool).await?))
}

pub async fn company_bills(State(state): State<AppState>) -> ApiResult<Vec<Bill>> {
    Ok(Json(service::bill::company_bills(&state.pool).await?))
}

/// Sum of customer bill totals issued so far this month, 0.0 when none
pub async fn monthly_sales_total(State(state): State<AppState>) -> ApiResult<f64> {
    Ok(Json(service::bill::monthly_sales_total(&state.pool).await?))
}
