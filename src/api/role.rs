//! Role routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::role::{Role, RoleInput};
use crate::service;
use crate::state::AppState;

use super::ApiResult;

pub async fn create_role(
    State(state): State<AppState>,
    Json(input): Json<RoleInput>,
) -> Result<(StatusCode, Json<Role>), AppError> {
    let role = service::role::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

pub async fn get_role(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> ApiResult<Role> {
    Ok(Json(service::role::get(&state.pool, role_id).await?))
}

pub async fn list_roles(State(state): State<AppState>) -> ApiResult<Vec<Role>> {
    Ok(Json(service::role::list(&state.pool).await?))
}

pub async fn update_role(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
    Json(input): Json<RoleInput>,
) -> ApiResult<Role> {
    Ok(Json(service::role::update(&state.pool, role_id, input).await?))
}

pub async fn delete_role(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::role::delete(&state.pool, role_id).await?;
    Ok(Json(serde_json::json!({
        "message": "Role deleted successfully"
    })))
}
