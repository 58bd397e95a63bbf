//! Supplier routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::supplier::{Supplier, SupplierInput};
use crate::service;
use crate::state::AppState;

use super::ApiResult;

pub async fn create_supplier(
    State(state): State<AppState>,
    Json(input): Json<SupplierInput>,
) -> Result<(StatusCode, Json<Supplier>), AppError> {
    let supplier = service::supplier::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

pub async fn get_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<i64>,
) -> ApiResult<Supplier> {
    Ok(Json(service::supplier::get(&state.pool, supplier_id).await?))
}

pub async fn list_suppliers(State(state): State<AppState>) -> ApiResult<Vec<Supplier>> {
    Ok(Json(service::supplier::list(&state.pool).await?))
}

pub async fn update_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<i64>,
    Json(input): Json<SupplierInput>,
) -> ApiResult<Supplier> {
    Ok(Json(
        service::supplier::update(&state.pool, supplier_id, input).await?,
    ))
}

pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(supplier_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::supplier::delete(&state.pool, supplier_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Supplier deleted successfully"
    })))
}
