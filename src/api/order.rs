//! Order routes

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::order::{Order, OrderInput};
use crate::service;
use crate::state::AppState;

use super::ApiResult;

#[derive(Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<OrderInput>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let order = service::order::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> ApiResult<Order> {
    Ok(Json(service::order::get(&state.pool, order_id).await?))
}

pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Vec<Order>> {
    Ok(Json(service::order::list(&state.pool).await?))
}

/// Orders placed in the given calendar month
pub async fn list_orders_by_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> ApiResult<Vec<Order>> {
    Ok(Json(
        service::order::list_by_month(&state.pool, query.year, query.month).await?,
    ))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(input): Json<OrderInput>,
) -> ApiResult<Order> {
    Ok(Json(service::order::update(&state.pool, order_id, input).await?))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::order::delete(&state.pool, order_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Order deleted successfully"
    })))
}
