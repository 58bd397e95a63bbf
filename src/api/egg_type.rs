//! Egg-type routes (mounted at /typeeggs)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::egg_type::{EggType, EggTypeInput};
use crate::service;
use crate::state::AppState;

use super::ApiResult;

pub async fn create_egg_type(
    State(state): State<AppState>,
    Json(input): Json<EggTypeInput>,
) -> Result<(StatusCode, Json<EggType>), AppError> {
    let egg_type = service::egg_type::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(egg_type)))
}

pub async fn get_egg_type(
    State(state): State<AppState>,
    Path(typeegg_id): Path<i64>,
) -> ApiResult<EggType> {
    Ok(Json(service::egg_type::get(&state.pool, typeegg_id).await?))
}

pub async fn list_egg_types(State(state): State<AppState>) -> ApiResult<Vec<EggType>> {
    Ok(Json(service::egg_type::list(&state.pool).await?))
}

pub async fn update_egg_type(
    State(state): State<AppState>,
    Path(typeegg_id): Path<i64>,
    Json(input): Json<EggTypeInput>,
) -> ApiResult<EggType> {
    Ok(Json(
        service::egg_type::update(&state.pool, typeegg_id, input).await?,
    ))
}

pub async fn delete_egg_type(
    State(state): State<AppState>,
    Path(typeegg_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::egg_type::delete(&state.pool, typeegg_id).await?;
    Ok(Json(serde_json::json!({
        "message": "TypeEgg deleted successfully"
    })))
}
