//! Payment routes and earnings aggregates

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::payment::{Payment, PaymentInput};
use crate::service;
use crate::state::AppState;

use super::order::MonthQuery;
use super::ApiResult;

pub async fn create_payment(
    State(state): State<AppState>,
    Json(input): Json<PaymentInput>,
) -> Result<(StatusCode, Json<Payment>), AppError> {
    let payment = service::payment::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(pay_id): Path<i64>,
) -> ApiResult<Payment> {
    Ok(Json(service::payment::get(&state.pool, pay_id).await?))
}

pub async fn list_payments(State(state): State<AppState>) -> ApiResult<Vec<Payment>> {
    Ok(Json(service::payment::list(&state.pool).await?))
}

pub async fn update_payment(
    State(state): State<AppState>,
    Path(pay_id): Path<i64>,
    Json(input): Json<PaymentInput>,
) -> ApiResult<Payment> {
    Ok(Json(service::payment::update(&state.pool, pay_id, input).await?))
}

pub async fn delete_payment(
    State(state): State<AppState>,
    Path(pay_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::payment::delete(&state.pool, pay_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Payment deleted successfully"
    })))
}

/// Sum of all payments ever recorded, 0.0 when none
pub async fn total_earnings(State(state): State<AppState>) -> ApiResult<f64> {
    Ok(Json(service::payment::total_earnings(&state.pool).await?))
}

/// Sum of payments made within the given calendar month
pub async fn total_earnings_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> ApiResult<f64> {
    Ok(Json(
        service::payment::total_earnings_by_month(&state.pool, query.year, query.month).await?,
    ))
}
