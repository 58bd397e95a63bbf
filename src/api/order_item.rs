//! Order line item routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::order_item::{OrderItem, OrderItemInput};
use crate::service;
use crate::state::AppState;

use super::ApiResult;

pub async fn create_order_item(
    State(state): State<AppState>,
    Json(input): Json<OrderItemInput>,
) -> Result<(StatusCode, Json<OrderItem>), AppError> {
    let item = service::order_item::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn get_order_item(
    State(state): State<AppState>,
    Path(order_egg_id): Path<i64>,
) -> ApiResult<OrderItem> {
    Ok(Json(service::order_item::get(&state.pool, order_egg_id).await?))
}

pub async fn list_order_items(State(state): State<AppState>) -> ApiResult<Vec<OrderItem>> {
    Ok(Json(service::order_item::list(&state.pool).await?))
}

pub async fn update_order_item(
    State(state): State<AppState>,
    Path(order_egg_id): Path<i64>,
    Json(input): Json<OrderItemInput>,
) -> ApiResult<OrderItem> {
    Ok(Json(
        service::order_item::update(&state.pool, order_egg_id, input).await?,
    ))
}

pub async fn delete_order_item(
    State(state): State<AppState>,
    Path(order_egg_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::order_item::delete(&state.pool, order_egg_id).await?;
    Ok(Json(serde_json::json!({
        "message": "OrderEgg deleted successfully"
    })))
}
