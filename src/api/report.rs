//! Report routes and cross-entity bill summaries

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::bill::Bill;
use crate::models::report::{Report, ReportInput};
use crate::service;
use crate::state::AppState;

use super::ApiResult;

pub async fn create_report(
    State(state): State<AppState>,
    Json(input): Json<ReportInput>,
) -> Result<(StatusCode, Json<Report>), AppError> {
    let report = service::report::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
) -> ApiResult<Report> {
    Ok(Json(service::report::get(&state.pool, report_id).await?))
}

pub async fn list_reports(State(state): State<AppState>) -> ApiResult<Vec<Report>> {
    Ok(Json(service::report::list(&state.pool).await?))
}

pub async fn update_report(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
    Json(input): Json<ReportInput>,
) -> ApiResult<Report> {
    Ok(Json(service::report::update(&state.pool, report_id, input).await?))
}

pub async fn delete_report(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::report::delete(&state.pool, report_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Report deleted successfully"
    })))
}

/// Bills belonging to staff users (EMPLOYEE or ADMIN)
pub async fn staff_bills(State(state): State<AppState>) -> ApiResult<Vec<Bill>> {
    Ok(Json(service::report::staff_bills(&state.pool).await?))
}

/// Bills belonging to customer users
pub async fn client_bills(State(state): State<AppState>) -> ApiResult<Vec<Bill>> {
    Ok(Json(service::report::client_bills(&state.pool).await?))
}

/// Sum of customer bill totals issued since the first of the month
pub async fn client_bills_month_total(State(state): State<AppState>) -> ApiResult<f64> {
    Ok(Json(service::report::client_bills_month_total(&state.pool).await?))
}

/// Name of the customer who spent the most this month
pub async fn top_client_spender(State(state): State<AppState>) -> ApiResult<String> {
    Ok(Json(service::report::top_client_spender(&state.pool).await?))
}
