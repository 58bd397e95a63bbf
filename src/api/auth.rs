//! Login endpoint

use axum::extract::{Form, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::service;
use crate::state::AppState;

use super::ApiResult;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /login — form-encoded credentials, bearer token on success
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<TokenResponse> {
    let access_token = service::auth::login(
        &state.pool,
        &state.jwt_secret,
        state.token_ttl_minutes,
        &form.username,
        &form.password,
    )
    .await?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
