//! User routes. Signup is open; everything else is admin-gated except
//! `/search/me`, which any authenticated caller can use.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::auth::{AdminUser, CurrentUser};
use crate::error::AppError;
use crate::models::user::{UserCreate, UserResponse, UserUpdate};
use crate::service;
use crate::state::AppState;

use super::ApiResult;

pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = service::user::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Echo of the authenticated caller
pub async fn me(caller: CurrentUser) -> ApiResult<UserResponse> {
    Ok(Json(UserResponse::from_row(caller.user, caller.roles)))
}

pub async fn get_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<UserResponse> {
    Ok(Json(service::user::get(&state.pool, user_id).await?))
}

pub async fn list_users(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Vec<UserResponse>> {
    Ok(Json(service::user::list(&state.pool).await?))
}

pub async fn list_users_by_role(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> ApiResult<Vec<UserResponse>> {
    Ok(Json(service::user::list_by_role(&state.pool, role_id).await?))
}

pub async fn update_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(input): Json<UserUpdate>,
) -> ApiResult<UserResponse> {
    Ok(Json(service::user::update(&state.pool, user_id, input).await?))
}

pub async fn delete_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    service::user::delete(&state.pool, user_id).await?;
    Ok(Json(serde_json::json!({
        "message": "User deleted successfully"
    })))
}
