//! Egg routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::egg::{Egg, EggInput};
use crate::service;
use crate::state::AppState;

use super::ApiResult;

pub async fn create_egg(
    State(state): State<AppState>,
    Json(input): Json<EggInput>,
) -> Result<(StatusCode, Json<Egg>), AppError> {
    let egg = service::egg::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(egg)))
}

pub async fn get_egg(State(state): State<AppState>, Path(egg_id): Path<i64>) -> ApiResult<Egg> {
    Ok(Json(service::egg::get(&state.pool, egg_id).await?))
}

pub async fn list_eggs(State(state): State<AppState>) -> ApiResult<Vec<Egg>> {
    Ok(Json(service::egg::list(&state.pool).await?))
}

/// Eggs in stock for one egg type
pub async fn list_eggs_by_type(
    State(state): State<AppState>,
    Path(type_egg_id): Path<i64>,
) -> ApiResult<Vec<Egg>> {
    Ok(Json(service::egg::list_by_type(&state.pool, type_egg_id).await?))
}

/// Count of egg rows (historical "total quantity" endpoint)
pub async fn total_egg_count(State(state): State<AppState>) -> ApiResult<i64> {
    Ok(Json(service::egg::total_count(&state.pool).await?))
}

pub async fn update_egg(
    State(state): State<AppState>,
    Path(egg_id): Path<i64>,
    Json(input): Json<EggInput>,
) -> ApiResult<Egg> {
    Ok(Json(service::egg::update(&state.pool, egg_id, input).await?))
}

pub async fn delete_egg(
    State(state): State<AppState>,
    Path(egg_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::egg::delete(&state.pool, egg_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Egg deleted successfully"
    })))
}
